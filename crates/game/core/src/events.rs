//! Simulation events.
//!
//! Everything observable that happens during a step is recorded as a
//! [`SimEvent`]. Hosts drain the log after each step to drive sound, UI and
//! network updates.

use crate::combat::ExchangeId;
use crate::state::{ActorTag, EntityId};

/// Something that happened during a step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    /// A strike landed. `amount` is the mitigated damage dealt.
    Damaged {
        attacker: EntityId,
        defender: EntityId,
        amount: u32,
    },
    /// An actor was removed from the live set after dying.
    ///
    /// Quest trackers count kills from these.
    Died {
        id: EntityId,
        tag: ActorTag,
        name: String,
        killer: Option<EntityId>,
    },
    /// A breakable obstacle was destroyed and removed.
    ObstacleBroken { id: EntityId },
    /// The player collected a kill reward.
    RewardGranted {
        player: EntityId,
        victim: EntityId,
        experience: u32,
        gold: u32,
    },
    /// The player reached a new level.
    LeveledUp { player: EntityId, level: u32 },
    ExchangeStarted {
        exchange: ExchangeId,
        attacker: EntityId,
        defender: EntityId,
    },
    ExchangeFinished {
        exchange: ExchangeId,
        turns: u32,
    },
}

/// Append-only buffer of events for the current step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    events: Vec<SimEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Takes every recorded event, leaving the log empty.
    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
