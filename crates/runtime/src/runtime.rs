//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive the simulation.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use sim_core::{Actor, PcgRng, SimConfig, SimEngine};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub sim: SimConfig,
    /// Fixed steps per second when auto-ticking.
    pub tick_rate_hz: u32,
    /// Advance on an interval instead of waiting for `step` requests.
    pub auto_tick: bool,
    /// Seed of the simulation random source.
    pub seed: u64,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_RATE_HZ: u32 = 60;

    /// Seconds covered by one fixed step.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz.max(1) as f32
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate_hz: Self::DEFAULT_TICK_RATE_HZ,
            auto_tick: false,
            seed: 0,
            event_buffer_size: 256,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that hosts the simulation
///
/// Runtime owns the worker task. [`RuntimeHandle`] provides a cloneable
/// façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// Stops the worker even if cloned handles are still alive; their
    /// further requests fail with [`RuntimeError::CommandChannelClosed`].
    pub async fn shutdown(self) -> Result<()> {
        self.handle.request_shutdown().await;
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        tracing::info!("runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    actors: Vec<Actor>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            actors: Vec::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the simulation tunables
    pub fn sim_config(mut self, sim: SimConfig) -> Self {
        self.config.sim = sim;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Step on a fixed interval of `1 / tick_rate_hz` seconds
    pub fn auto_tick(mut self, enable: bool) -> Self {
        self.config.auto_tick = enable;
        self
    }

    /// Actor spawned before the worker starts
    pub fn actor(mut self, actor: Actor) -> Self {
        self.actors.push(actor);
        self
    }

    /// Actors spawned before the worker starts, in order
    pub fn actors(mut self, actors: impl IntoIterator<Item = Actor>) -> Self {
        self.actors.extend(actors);
        self
    }

    /// Build the runtime and spawn its worker
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let config = self.config;
        if config.tick_rate_hz == 0 {
            return Err(RuntimeError::InvalidTickRate);
        }

        let mut engine = SimEngine::new(config.sim.clone(), PcgRng::seeded(config.seed))?;
        for actor in self.actors {
            engine.spawn(actor)?;
        }

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let worker = SimulationWorker::new(
            engine,
            command_rx,
            event_bus.clone(),
            config.fixed_dt(),
            config.auto_tick,
        );
        let sim_worker_handle = tokio::spawn(worker.run());

        tracing::info!(
            seed = config.seed,
            tick_rate_hz = config.tick_rate_hz,
            "runtime started"
        );

        Ok(Runtime {
            handle: RuntimeHandle::new(command_tx, event_bus),
            sim_worker_handle,
        })
    }
}
