//! Scripted NPC waypoint patrol.

use super::TickContext;
use crate::movement::move_actor;
use crate::state::{EntityId, MovementPattern};

/// Walks the NPC toward its current waypoint, pausing at each one.
///
/// A waypoint counts as reached when both axis distances are strictly below
/// the configured tolerance. The route loops back to the first waypoint.
pub fn update(ctx: &mut TickContext<'_>, id: EntityId, dt: f32) {
    let tolerance = ctx.config.waypoint_tolerance;
    let pause = ctx.config.waypoint_wait;

    let Some(actor) = ctx.entities.get_mut(id) else {
        return;
    };
    let position = actor.position();
    let Some(npc) = actor.as_npc_mut() else {
        return;
    };
    if npc.pattern == MovementPattern::Static {
        return;
    }
    if npc.wait_remaining > 0.0 {
        npc.wait_remaining = (npc.wait_remaining - dt).max(0.0);
        return;
    }
    if npc.waypoints.is_empty() {
        return;
    }

    let index = npc.current_waypoint % npc.waypoints.len();
    let waypoint = npc.waypoints[index];
    let dx = waypoint.x - position.x;
    let dy = waypoint.y - position.y;

    if dx.abs() < tolerance && dy.abs() < tolerance {
        npc.current_waypoint = (index + 1) % npc.waypoints.len();
        npc.wait_remaining = pause;
        actor.set_moving(false);
        tracing::debug!(npc = %id, waypoint = index, "waypoint reached");
        return;
    }

    move_actor(ctx.entities, id, dx, dy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::update_actor;
    use crate::combat::CombatResolver;
    use crate::config::SimConfig;
    use crate::events::EventLog;
    use crate::rng::PcgRng;
    use crate::state::{ActorBuilder, Entities, NpcData, NpcRole, Position};

    fn tick(entities: &mut Entities, id: EntityId, dt: f32) {
        let mut combat = CombatResolver::default();
        let mut rng = PcgRng::default();
        let config = SimConfig::default();
        let mut events = EventLog::new();
        let mut ctx = TickContext {
            entities,
            combat: &mut combat,
            rng: &mut rng,
            config: &config,
            events: &mut events,
        };
        update_actor(&mut ctx, id, dt);
    }

    fn patroller(waypoints: Vec<Position>) -> (Entities, EntityId) {
        let mut entities = Entities::new();
        let id = entities
            .spawn(ActorBuilder::npc(NpcData::patrol(waypoints)).build().unwrap())
            .unwrap();
        (entities, id)
    }

    #[test]
    fn walks_pauses_and_loops() {
        let (mut entities, id) =
            patroller(vec![Position::new(10.0, 0.0), Position::new(0.0, 0.0)]);

        // Speed 5: (0,0) -> (5,0) -> (10,0).
        tick(&mut entities, id, 0.1);
        tick(&mut entities, id, 0.1);
        assert_eq!(entities.get(id).unwrap().position(), Position::new(10.0, 0.0));

        tick(&mut entities, id, 0.1);
        let npc = entities.get(id).unwrap().as_npc().unwrap();
        assert_eq!(npc.current_waypoint, 1);
        assert_eq!(npc.wait_remaining, 2.0);

        tick(&mut entities, id, 1.5);
        tick(&mut entities, id, 1.0);
        assert_eq!(entities.get(id).unwrap().as_npc().unwrap().wait_remaining, 0.0);
        assert_eq!(entities.get(id).unwrap().position(), Position::new(10.0, 0.0));

        tick(&mut entities, id, 0.1);
        assert_eq!(entities.get(id).unwrap().position(), Position::new(5.0, 0.0));
    }

    #[test]
    fn arrival_tolerance_is_strict() {
        let (mut entities, id) = patroller(vec![Position::new(5.0, 0.0)]);
        tick(&mut entities, id, 0.1);
        // Exactly 5 units away is not "arrived": the NPC moves instead.
        assert_eq!(entities.get(id).unwrap().position(), Position::new(5.0, 0.0));
        assert_eq!(entities.get(id).unwrap().as_npc().unwrap().wait_remaining, 0.0);
    }

    #[test]
    fn static_and_empty_routes_stay_put() {
        let mut entities = Entities::new();
        let villager = entities
            .spawn(ActorBuilder::npc(NpcData::stationary(NpcRole::Merchant)).build().unwrap())
            .unwrap();
        tick(&mut entities, villager, 1.0);
        assert_eq!(entities.get(villager).unwrap().position(), Position::ORIGIN);

        let (mut entities, lost) = patroller(Vec::new());
        tick(&mut entities, lost, 1.0);
        assert_eq!(entities.get(lost).unwrap().position(), Position::ORIGIN);
    }
}
