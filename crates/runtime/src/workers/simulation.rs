//! Simulation worker - owns the engine and processes commands.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use sim_core::{
    Actor, ActorView, Entities, EntityId, Interaction, SimEngine, SpawnError, StepReport,
    StrikeOutcome,
};

use crate::events::{Event, EventBus, SimulationEvent, TickEvent};

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Advance the world by `dt` seconds using the held player input.
    Step {
        dt: f32,
        reply: oneshot::Sender<StepReport>,
    },
    /// Replace the held player input. `None` releases it.
    SetPlayerInput {
        input: Option<(f32, f32)>,
        reply: oneshot::Sender<()>,
    },
    PlayerAttack {
        target: EntityId,
        reply: oneshot::Sender<Option<StrikeOutcome>>,
    },
    Disengage {
        a: EntityId,
        b: EntityId,
        reply: oneshot::Sender<bool>,
    },
    Interact {
        npc: EntityId,
        reply: oneshot::Sender<Option<Interaction>>,
    },
    InteractNearby {
        reply: oneshot::Sender<Option<(EntityId, Interaction)>>,
    },
    Spawn {
        actor: Box<Actor>,
        reply: oneshot::Sender<Result<EntityId, SpawnError>>,
    },
    QueryViews {
        reply: oneshot::Sender<Vec<ActorView>>,
    },
    QueryEntities {
        reply: oneshot::Sender<Entities>,
    },
    /// Stop the worker loop even if other handles are still alive.
    Shutdown,
}

/// Background task that owns the [`SimEngine`].
///
/// Steps happen either on request or, with auto-tick enabled, on a fixed
/// interval. Both paths publish the same events.
pub struct SimulationWorker {
    engine: SimEngine,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    /// Held movement direction; zero means standing still.
    player_input: (f32, f32),
    fixed_dt: f32,
    auto_tick: bool,
}

impl SimulationWorker {
    pub fn new(
        engine: SimEngine,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        fixed_dt: f32,
        auto_tick: bool,
    ) -> Self {
        Self {
            engine,
            command_rx,
            event_bus,
            player_input: (0.0, 0.0),
            fixed_dt,
            auto_tick,
        }
    }

    /// Main worker loop
    pub async fn run(mut self) {
        info!(
            actors = self.engine.entities().len(),
            auto_tick = self.auto_tick,
            "simulation worker started"
        );

        let mut ticker = time::interval(Duration::from_secs_f32(self.fixed_dt));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(Command::Shutdown) | None => break,
                    Some(command) => self.handle_command(command),
                },
                _ = ticker.tick(), if self.auto_tick => {
                    self.advance(self.fixed_dt);
                }
            }
        }

        info!(tick = self.engine.tick(), "simulation worker stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Step { dt, reply } => {
                let report = self.advance(dt);
                if reply.send(report).is_err() {
                    debug!("Step reply channel closed (caller dropped)");
                }
            }
            Command::SetPlayerInput { input, reply } => {
                self.player_input = input.unwrap_or((0.0, 0.0));
                let _ = reply.send(());
            }
            Command::PlayerAttack { target, reply } => {
                let outcome = self.engine.player_attack(target);
                if reply.send(outcome).is_err() {
                    debug!("PlayerAttack reply channel closed (caller dropped)");
                }
            }
            Command::Disengage { a, b, reply } => {
                let _ = reply.send(self.engine.disengage(a, b));
            }
            Command::Interact { npc, reply } => {
                let _ = reply.send(self.engine.interact(npc));
            }
            Command::InteractNearby { reply } => {
                let _ = reply.send(self.engine.interact_nearby());
            }
            Command::Spawn { actor, reply } => {
                let result = self.engine.spawn(*actor);
                if reply.send(result).is_err() {
                    debug!("Spawn reply channel closed (caller dropped)");
                }
            }
            Command::QueryViews { reply } => {
                let _ = reply.send(self.engine.views());
            }
            Command::QueryEntities { reply } => {
                let _ = reply.send(self.engine.entities().clone());
            }
            // Intercepted by the run loop.
            Command::Shutdown => {}
        }
    }

    /// Steps the engine once and publishes what happened.
    fn advance(&mut self, dt: f32) -> StepReport {
        let report = self.engine.step(dt, Some(self.player_input));

        for event in &report.events {
            self.event_bus.publish(Event::Simulation(SimulationEvent {
                tick: report.tick,
                event: event.clone(),
            }));
        }
        self.event_bus.publish(Event::Tick(TickEvent::from_report(
            &report,
            self.engine.entities().len(),
            self.engine.combat().len(),
        )));

        if !report.player_alive && self.player_input != (0.0, 0.0) {
            debug!(tick = report.tick, "released input of a dead player");
            self.player_input = (0.0, 0.0);
        }
        report
    }
}
