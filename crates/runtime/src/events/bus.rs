//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{SimulationEvent, TickEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Damage, deaths, rewards and exchange lifecycle
    Simulation,
    /// One summary per completed step
    Tick,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Simulation(SimulationEvent),
    Tick(TickEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Simulation(_) => Topic::Simulation,
            Event::Tick(_) => Topic::Tick,
        }
    }
}

/// Topic-based event bus
///
/// Each topic owns a broadcast channel created up front, so publishing and
/// subscribing never contend on a lock. Publishing is best-effort: events sent
/// while nobody listens are dropped, and slow subscribers observe
/// `RecvError::Lagged` once they fall `capacity` events behind.
#[derive(Clone)]
pub struct EventBus {
    simulation: broadcast::Sender<Event>,
    tick: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            simulation: broadcast::channel(capacity).0,
            tick: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Simulation => &self.simulation,
            Topic::Tick => &self.tick,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Number of live receivers on `topic`.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.sender(topic).receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
