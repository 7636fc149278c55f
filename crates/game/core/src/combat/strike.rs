//! A single hit between two actors.

use super::{roll_damage, roll_reward};
use crate::config::SimConfig;
use crate::events::{EventLog, SimEvent};
use crate::rng::SimRng;
use crate::state::{ActorKind, Entities, EntityId};

/// Result of a strike that actually happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrikeOutcome {
    /// Raw roll before defense.
    pub roll: u32,
    /// Damage dealt after mitigation (0 if the target absorbed the hit).
    pub dealt: u32,
    /// True if this hit killed the defender.
    pub killed: bool,
}

/// Rolls damage for `attacker` and applies it to `defender`.
///
/// If the hit kills a monster and the attacker is the player, the player
/// collects the monster's randomized experience and gold reward. Kills by
/// anyone else grant nothing.
///
/// Returns `None` without touching anything if either actor is missing or
/// dead, or if both ids are the same.
pub fn strike(
    entities: &mut Entities,
    attacker: EntityId,
    defender: EntityId,
    rng: &mut (impl SimRng + ?Sized),
    config: &SimConfig,
    events: &mut EventLog,
) -> Option<StrikeOutcome> {
    let (striker, target) = entities.pair_mut(attacker, defender)?;
    if !striker.is_alive() || !target.is_alive() {
        return None;
    }

    let roll = roll_damage(striker.stats().strength, config.damage_variance_pct, rng);
    let dealt = target.take_damage(roll, Some(attacker));
    if dealt > 0 {
        events.push(SimEvent::Damaged {
            attacker,
            defender,
            amount: dealt,
        });
    }
    let killed = !target.is_alive();
    tracing::debug!(%attacker, %defender, roll, dealt, killed, "strike");

    if killed && striker.is_player() {
        if let ActorKind::Monster(monster) = target.kind() {
            let reward = roll_reward(
                monster.exp_reward,
                monster.gold_reward,
                config.reward_variance_pct,
                rng,
            );
            striker.add_gold(reward.gold);
            let levels = striker.gain_experience(reward.experience, &config.growth);
            events.push(SimEvent::RewardGranted {
                player: attacker,
                victim: defender,
                experience: reward.experience,
                gold: reward.gold,
            });
            if levels > 0 {
                events.push(SimEvent::LeveledUp {
                    player: attacker,
                    level: striker.level(),
                });
            }
        }
    }

    Some(StrikeOutcome {
        roll,
        dealt,
        killed,
    })
}
