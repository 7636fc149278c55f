//! Scripted player for headless runs.
//!
//! Walks the player toward the nearest monster and swings at it whenever it
//! is in reach and the swing timer allows.

use sim_core::{Actor, Entities, EntityId};

/// What the player does this step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Decision {
    /// Movement direction; `None` stands still.
    pub input: Option<(f32, f32)>,
    pub attack: Option<EntityId>,
}

#[derive(Clone, Debug)]
pub struct Autopilot {
    reach: f32,
    swing_interval: f32,
    swing_timer: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REACH, Self::DEFAULT_SWING_INTERVAL)
    }
}

impl Autopilot {
    pub const DEFAULT_REACH: f32 = 48.0;
    pub const DEFAULT_SWING_INTERVAL: f32 = 1.0;

    pub fn new(reach: f32, swing_interval: f32) -> Self {
        Self {
            reach,
            swing_interval,
            swing_timer: 0.0,
        }
    }

    /// Picks the next move from a snapshot of the live set.
    pub fn decide(&mut self, entities: &Entities, dt: f32) -> Decision {
        self.swing_timer = (self.swing_timer - dt).max(0.0);

        let Some(player) = entities.player() else {
            return Decision::default();
        };
        let Some(target) = nearest_monster(entities, player) else {
            return Decision::default();
        };

        if player.distance_to(target) > self.reach {
            let (from, to) = (player.position(), target.position());
            return Decision {
                input: Some((to.x - from.x, to.y - from.y)),
                attack: None,
            };
        }

        if self.swing_timer > 0.0 {
            return Decision::default();
        }
        self.swing_timer = self.swing_interval;
        Decision {
            input: None,
            attack: Some(target.id()),
        }
    }
}

fn nearest_monster<'a>(entities: &'a Entities, player: &Actor) -> Option<&'a Actor> {
    entities
        .iter()
        .filter(|actor| actor.as_monster().is_some() && actor.is_alive())
        .min_by(|a, b| player.distance_to(a).total_cmp(&player.distance_to(b)))
}
