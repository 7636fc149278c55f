//! Event payloads for each topic.

use serde::{Deserialize, Serialize};
use sim_core::{SimEvent, StepReport};

/// A single simulation event, stamped with the step that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    pub tick: u64,
    pub event: SimEvent,
}

/// Summary of a completed step (lightweight)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    pub tick: u64,
    /// Number of simulation events the step produced.
    pub events: usize,
    /// Live actors left after dead ones were removed.
    pub actors: usize,
    /// Combat exchanges still running.
    pub exchanges: usize,
    pub player_alive: bool,
}

impl TickEvent {
    pub(crate) fn from_report(report: &StepReport, actors: usize, exchanges: usize) -> Self {
        Self {
            tick: report.tick,
            events: report.events.len(),
            actors,
            exchanges,
            player_alive: report.player_alive,
        }
    }
}
