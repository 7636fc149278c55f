//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! stepping the simulation, steering the player, or streaming events from
//! specific topics.

use tokio::sync::{broadcast, mpsc, oneshot};

use sim_core::{
    Actor, ActorView, Entities, EntityId, Interaction, StepReport, StrikeOutcome,
};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Advance the world by `dt` seconds.
    ///
    /// The held player input (see [`set_player_input`](Self::set_player_input))
    /// drives the player during the step.
    pub async fn step(&self, dt: f32) -> Result<StepReport> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(RuntimeError::InvalidDelta(dt));
        }
        self.request(|reply| Command::Step { dt, reply }).await
    }

    /// Hold a movement direction until replaced; `None` stops the player.
    pub async fn set_player_input(&self, input: Option<(f32, f32)>) -> Result<()> {
        self.request(|reply| Command::SetPlayerInput { input, reply })
            .await
    }

    /// Player strikes `target` immediately and engages it in combat.
    ///
    /// Returns `None` if the strike could not happen (no live player, or the
    /// target is missing or dead).
    pub async fn player_attack(&self, target: EntityId) -> Result<Option<StrikeOutcome>> {
        self.request(|reply| Command::PlayerAttack { target, reply })
            .await
    }

    /// Retire the combat exchange between `a` and `b`, in either order.
    pub async fn disengage(&self, a: EntityId, b: EntityId) -> Result<bool> {
        self.request(|reply| Command::Disengage { a, b, reply }).await
    }

    /// Player talks to `npc`.
    pub async fn interact(&self, npc: EntityId) -> Result<Option<Interaction>> {
        self.request(|reply| Command::Interact { npc, reply }).await
    }

    /// Player talks to the first NPC in range.
    pub async fn interact_nearby(&self) -> Result<Option<(EntityId, Interaction)>> {
        self.request(|reply| Command::InteractNearby { reply }).await
    }

    /// Add an actor to the running world.
    pub async fn spawn(&self, actor: Actor) -> Result<EntityId> {
        let result = self
            .request(|reply| Command::Spawn {
                actor: Box::new(actor),
                reply,
            })
            .await?;
        Ok(result?)
    }

    /// Render views of every live actor, in spawn order.
    pub async fn views(&self) -> Result<Vec<ActorView>> {
        self.request(|reply| Command::QueryViews { reply }).await
    }

    /// Query the live set (read-only snapshot)
    pub async fn snapshot(&self) -> Result<Entities> {
        self.request(|reply| Command::QueryEntities { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Simulation` - Damage, deaths, rewards, exchange lifecycle
    /// - `Topic::Tick` - One summary per step
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use sim_runtime::{Event, Topic};
    ///
    /// let mut rx = handle.subscribe(Topic::Simulation);
    /// while let Ok(Event::Simulation(event)) = rx.recv().await {
    ///     // Handle simulation events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Ask the worker to stop. Succeeds if it already has.
    pub(crate) async fn request_shutdown(&self) {
        if self.command_tx.send(Command::Shutdown).await.is_err() {
            tracing::debug!("simulation worker already stopped");
        }
    }
}
