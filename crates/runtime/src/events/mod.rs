//! Topic-based event bus for runtime events.
//!
//! Every step of the simulation publishes its individual events to
//! [`Topic::Simulation`] and a one-line summary to [`Topic::Tick`]. Consumers
//! subscribe only to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{SimulationEvent, TickEvent};
