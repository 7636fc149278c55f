//! Async host for the entity simulation.
//!
//! This crate runs a [`sim_core::SimEngine`] inside a background worker task
//! and exposes it through a cloneable [`RuntimeHandle`]. Consumers embed
//! [`Runtime`] to step the world, feed player input, and subscribe to the
//! events each step produces.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, SimulationEvent, TickEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
