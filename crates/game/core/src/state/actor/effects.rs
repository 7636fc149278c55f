//! Timed stat effects.
//!
//! An effect shifts one stat for a fixed duration. The shift is applied when
//! the effect is added and reversed when it expires; expiry is the only way an
//! effect leaves the set.

use arrayvec::ArrayVec;

use super::StatKind;
use crate::config::SimConfig;

/// A single timed modification to one stat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatEffect {
    pub stat: StatKind,
    /// Requested shift.
    pub delta: i32,
    /// Shift actually applied after clamping; this is what expiry reverses.
    pub applied: i32,
    /// Seconds until expiry.
    pub remaining: f32,
}

/// Ordered set of active effects on an actor.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatEffect, { SimConfig::MAX_ACTIVE_EFFECTS }>,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.effects.is_full()
    }

    /// Appends an effect. Returns false when the set is full.
    pub(crate) fn push(&mut self, effect: StatEffect) -> bool {
        self.effects.try_push(effect).is_ok()
    }

    /// Counts every effect down by `dt` and removes the ones that ran out.
    ///
    /// Expired effects are returned in the order they were added.
    pub(crate) fn advance(
        &mut self,
        dt: f32,
    ) -> ArrayVec<StatEffect, { SimConfig::MAX_ACTIVE_EFFECTS }> {
        let mut expired = ArrayVec::new();
        for effect in self.effects.iter_mut() {
            effect.remaining -= dt;
        }
        self.effects.retain(|effect| {
            if effect.remaining <= 0.0 {
                expired.push(*effect);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(stat: StatKind, remaining: f32) -> StatEffect {
        StatEffect {
            stat,
            delta: 3,
            applied: 3,
            remaining,
        }
    }

    #[test]
    fn expires_at_or_below_zero() {
        let mut effects = StatusEffects::empty();
        assert!(effects.push(effect(StatKind::Strength, 1.0)));
        assert!(effects.push(effect(StatKind::Defense, 2.0)));

        assert!(effects.advance(0.5).is_empty());
        let expired = effects.advance(0.5);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].stat, StatKind::Strength);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn refuses_when_full() {
        let mut effects = StatusEffects::empty();
        for _ in 0..SimConfig::MAX_ACTIVE_EFFECTS {
            assert!(effects.push(effect(StatKind::Magic, 5.0)));
        }
        assert!(effects.is_full());
        assert!(!effects.push(effect(StatKind::Magic, 5.0)));
    }
}
