//! Headless client driving the simulation runtime.
//!
//! # Architecture
//!
//! ```text
//! Client
//!   ├─→ ContentFactory (tunables, templates, scenario)
//!   ├─→ Runtime (simulation worker and event bus)
//!   └─→ Autopilot (scripted player input)
//! ```
//!
//! The client steps the runtime explicitly, one fixed delta per tick, so a
//! seeded run replays identically.

pub mod autopilot;
pub mod config;

pub use autopilot::{Autopilot, Decision};
pub use config::ClientConfig;

use anyhow::{Context, Result};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use sim_content::ContentFactory;
use sim_core::{ActorTag, SimEvent};
use sim_runtime::{Event, Runtime, RuntimeConfig, Topic};

/// Outcome of a finished session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub kills: u32,
    pub player_alive: bool,
    pub level: u32,
    pub experience: u32,
    pub gold: u32,
}

/// Top-level client container.
pub struct Client {
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Loads the scenario, runs it for the configured number of ticks and
    /// shuts the runtime down.
    ///
    /// Stops early once the player is dead.
    pub async fn run(self) -> Result<RunSummary> {
        let factory = ContentFactory::new(self.config.data_dir.clone());
        let sim = factory.load_config()?;
        let actors = factory.build_scenario(&self.config.scenario)?;
        tracing::info!(
            scenario = %self.config.scenario,
            actors = actors.len(),
            "scenario loaded"
        );

        let runtime_config = RuntimeConfig {
            sim,
            tick_rate_hz: self.config.tick_rate_hz,
            seed: self.config.seed,
            ..RuntimeConfig::default()
        };
        let runtime = Runtime::builder()
            .config(runtime_config)
            .actors(actors)
            .build()
            .await
            .context("failed to start runtime")?;

        let logger = spawn_event_logger(runtime.subscribe(Topic::Simulation));
        let handle = runtime.handle();
        let dt = self.config.fixed_dt();
        let mut pilot = Autopilot::default();
        let mut ticks = 0;
        let mut player_alive = true;

        while ticks < self.config.ticks && player_alive {
            let snapshot = handle.snapshot().await?;
            let decision = pilot.decide(&snapshot, dt);
            if let Some(target) = decision.attack {
                handle.player_attack(target).await?;
            }
            handle.set_player_input(decision.input).await?;

            let report = handle.step(dt).await?;
            ticks = report.tick;
            player_alive = report.player_alive;
        }

        let snapshot = handle.snapshot().await?;
        drop(handle);
        runtime.shutdown().await?;
        let kills = logger.await.context("event logger panicked")?;

        let mut summary = RunSummary {
            ticks,
            kills,
            player_alive,
            ..RunSummary::default()
        };
        if let Some(player) = snapshot.player() {
            summary.level = player.level();
            if let Some(data) = player.as_player() {
                summary.experience = data.experience;
                summary.gold = data.gold;
            }
        }
        tracing::info!(?summary, "session finished");
        Ok(summary)
    }
}

/// Logs simulation events until the bus closes. Returns the number of monsters killed.
fn spawn_event_logger(mut events: tokio::sync::broadcast::Receiver<Event>) -> JoinHandle<u32> {
    tokio::spawn(async move {
        let mut kills = 0;
        loop {
            match events.recv().await {
                Ok(Event::Simulation(published)) => {
                    let tick = published.tick;
                    match published.event {
                        SimEvent::Died {
                            id, tag, name, killer, ..
                        } => {
                            if tag == ActorTag::Monster {
                                kills += 1;
                            }
                            tracing::info!(tick, %id, %tag, %name, ?killer, "died");
                        }
                        SimEvent::LeveledUp { level, .. } => {
                            tracing::info!(tick, level, "player leveled up");
                        }
                        SimEvent::RewardGranted {
                            experience, gold, ..
                        } => {
                            tracing::info!(tick, experience, gold, "reward");
                        }
                        other => tracing::debug!(tick, event = ?other),
                    }
                }
                Ok(Event::Tick(_)) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event logger lagging");
                }
                Err(RecvError::Closed) => break,
            }
        }
        kills
    })
}
