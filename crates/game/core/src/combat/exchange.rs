use std::fmt;

use crate::state::{Entities, EntityId};

/// Stable identifier of a combat exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeId(pub u32);

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// Two actors trading blows, one turn at a time.
///
/// Roles swap after every resolved turn, so after `n` turns the original
/// attacker strikes again exactly when `n` is even.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatExchange {
    id: ExchangeId,
    attacker: EntityId,
    defender: EntityId,
    turn_timer: f32,
    turn_duration: f32,
    turns_resolved: u32,
    finished: bool,
}

impl CombatExchange {
    pub(crate) fn new(
        id: ExchangeId,
        attacker: EntityId,
        defender: EntityId,
        turn_duration: f32,
    ) -> Self {
        Self {
            id,
            attacker,
            defender,
            turn_timer: 0.0,
            turn_duration,
            turns_resolved: 0,
            finished: false,
        }
    }

    pub fn id(&self) -> ExchangeId {
        self.id
    }

    /// Actor striking on the next turn.
    pub fn attacker(&self) -> EntityId {
        self.attacker
    }

    pub fn defender(&self) -> EntityId {
        self.defender
    }

    pub fn turn_timer(&self) -> f32 {
        self.turn_timer
    }

    pub fn turn_duration(&self) -> f32 {
        self.turn_duration
    }

    pub fn turns_resolved(&self) -> u32 {
        self.turns_resolved
    }

    /// The finished flag, set when a participant died during a turn.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Returns true if the exchange pairs `a` and `b`, in either role.
    pub fn involves(&self, a: EntityId, b: EntityId) -> bool {
        (self.attacker == a && self.defender == b) || (self.attacker == b && self.defender == a)
    }

    /// Returns true if the exchange can no longer resolve turns.
    pub fn is_finished(&self, entities: &Entities) -> bool {
        self.finished || !entities.is_alive(self.attacker) || !entities.is_alive(self.defender)
    }

    /// Adds `dt` to the turn timer. Returns true (and resets the timer) when a
    /// turn is due. Surplus time beyond the turn duration is dropped.
    pub(crate) fn accumulate(&mut self, dt: f32) -> bool {
        self.turn_timer += dt;
        if self.turn_timer >= self.turn_duration {
            self.turn_timer = 0.0;
            true
        } else {
            false
        }
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }

    pub(crate) fn swap_roles(&mut self) {
        std::mem::swap(&mut self.attacker, &mut self.defender);
        self.turns_resolved += 1;
    }
}
