//! Per-kind decision logic run once per step for every non-player actor.
//!
//! Controllers receive the whole live set through a [`TickContext`] and act
//! on it in place. Actors updated earlier in a step are seen at their new
//! positions by actors updated later.

pub mod monster;
pub mod npc;

use crate::combat::CombatResolver;
use crate::config::SimConfig;
use crate::events::EventLog;
use crate::rng::SimRng;
use crate::state::{ActorTag, Entities, EntityId};

/// Everything a controller may read or touch during one step.
pub struct TickContext<'a> {
    pub entities: &'a mut Entities,
    pub combat: &'a mut CombatResolver,
    pub rng: &'a mut dyn SimRng,
    pub config: &'a SimConfig,
    pub events: &'a mut EventLog,
}

/// Runs the controller matching the actor's kind.
///
/// Players are driven by input and obstacles never act, so both are skipped.
/// Dead or missing actors are ignored.
pub fn update_actor(ctx: &mut TickContext<'_>, id: EntityId, dt: f32) {
    let Some(actor) = ctx.entities.get(id) else {
        return;
    };
    if !actor.is_alive() {
        return;
    }
    match actor.tag() {
        ActorTag::Monster => monster::update(ctx, id, dt),
        ActorTag::Npc => npc::update(ctx, id, dt),
        ActorTag::Player | ActorTag::Obstacle => {}
    }
}
