//! Monster aggro, seek and attack.
//!
//! ```text
//!            distance <= aggro             distance <= attack
//!   Idle  ──────────────────────▶ Alert ──────────────────────▶ Attacking
//!    ▲                              │  ◀──────────────────────      │
//!    └──────────────────────────────┴──── distance > aggro ◀────────┘
//! ```
//!
//! Seeking is a straight line toward the player. There is no pathfinding, so
//! a monster can stall against an obstacle between it and the player.
//!
//! Once a monster has struck, the fight belongs to the combat resolver: the
//! cooldown strike is suppressed for as long as an exchange between the two
//! is open, and the player takes the first exchange turn.

use super::TickContext;
use crate::combat::strike;
use crate::movement::move_actor;
use crate::state::{EntityId, MonsterData, MonsterState};

pub fn update(ctx: &mut TickContext<'_>, id: EntityId, dt: f32) {
    let Some(actor) = ctx.entities.get_mut(id) else {
        return;
    };
    let position = actor.position();
    let Some(monster) = actor.as_monster_mut() else {
        return;
    };
    monster.cooldown_remaining = (monster.cooldown_remaining - dt).max(0.0);
    let aggro_range = monster.aggro_range;
    let attack_range = monster.attack_range;

    let Some((player, player_position)) = ctx
        .entities
        .player()
        .map(|player| (player.id(), player.position()))
    else {
        set_state(ctx, id, MonsterState::Idle, None);
        return;
    };

    let distance = position.distance_to(player_position);
    if distance > aggro_range {
        set_state(ctx, id, MonsterState::Idle, None);
    } else if distance > attack_range {
        set_state(ctx, id, MonsterState::Alert, Some(player));
        move_actor(
            ctx.entities,
            id,
            player_position.x - position.x,
            player_position.y - position.y,
        );
    } else {
        set_state(ctx, id, MonsterState::Attacking, Some(player));
        if let Some(actor) = ctx.entities.get_mut(id) {
            actor.set_moving(false);
        }
        if ctx.combat.find(id, player).is_none() && ready_to_attack(ctx, id) {
            attack(ctx, id, player);
        }
    }
}

fn monster_mut<'a>(ctx: &'a mut TickContext<'_>, id: EntityId) -> Option<&'a mut MonsterData> {
    ctx.entities.get_mut(id)?.as_monster_mut()
}

fn set_state(ctx: &mut TickContext<'_>, id: EntityId, state: MonsterState, target: Option<EntityId>) {
    let Some(monster) = monster_mut(ctx, id) else {
        return;
    };
    if monster.state != state {
        tracing::debug!(monster = %id, from = %monster.state, to = %state, "monster state");
    }
    monster.state = state;
    monster.target = target;
}

fn ready_to_attack(ctx: &mut TickContext<'_>, id: EntityId) -> bool {
    monster_mut(ctx, id).is_some_and(|monster| monster.cooldown_remaining == 0.0)
}

/// Strikes the player now, then opens the exchange with the player to move.
fn attack(ctx: &mut TickContext<'_>, id: EntityId, player: EntityId) {
    if let Some(monster) = monster_mut(ctx, id) {
        monster.cooldown_remaining = monster.attack_cooldown;
    }
    let Some(outcome) = strike(ctx.entities, id, player, &mut *ctx.rng, ctx.config, ctx.events)
    else {
        return;
    };
    if !outcome.killed {
        ctx.combat.start_exchange(ctx.entities, player, id, ctx.events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::update_actor;
    use crate::combat::CombatResolver;
    use crate::config::SimConfig;
    use crate::events::EventLog;
    use crate::rng::PcgRng;
    use crate::state::{ActorBuilder, Entities, Position};

    struct World {
        entities: Entities,
        combat: CombatResolver,
        rng: PcgRng,
        config: SimConfig,
        events: EventLog,
        player: EntityId,
        monster: EntityId,
    }

    impl World {
        fn with_player_at(distance: f32) -> Self {
            let mut entities = Entities::new();
            let monster = entities
                .spawn(
                    ActorBuilder::monster(MonsterData::new(200.0, 50.0, 1.0))
                        .build()
                        .unwrap(),
                )
                .unwrap();
            let player = entities
                .spawn(ActorBuilder::player().at(distance, 0.0).build().unwrap())
                .unwrap();
            Self {
                entities,
                combat: CombatResolver::default(),
                rng: PcgRng::seeded(21),
                config: SimConfig::default(),
                events: EventLog::new(),
                player,
                monster,
            }
        }

        fn tick(&mut self, dt: f32) {
            let mut ctx = TickContext {
                entities: &mut self.entities,
                combat: &mut self.combat,
                rng: &mut self.rng,
                config: &self.config,
                events: &mut self.events,
            };
            update_actor(&mut ctx, self.monster, dt);
        }

        fn monster(&self) -> &MonsterData {
            self.entities.get(self.monster).unwrap().as_monster().unwrap()
        }
    }

    #[test]
    fn seeks_inside_aggro_range() {
        let mut world = World::with_player_at(120.0);
        world.tick(0.1);

        assert_eq!(world.monster().state, MonsterState::Alert);
        assert_eq!(world.monster().target, Some(world.player));
        let position = world.entities.get(world.monster).unwrap().position();
        assert_eq!(position, Position::new(5.0, 0.0));
        assert_eq!(world.entities.get(world.player).unwrap().health(), 100);
        assert!(world.combat.is_empty());
    }

    #[test]
    fn attacks_inside_attack_range() {
        let mut world = World::with_player_at(40.0);
        world.tick(0.1);

        assert_eq!(world.monster().state, MonsterState::Attacking);
        assert_eq!(world.entities.get(world.monster).unwrap().position(), Position::ORIGIN);
        assert!(world.entities.get(world.player).unwrap().health() < 100);
        assert_eq!(world.monster().cooldown_remaining, 1.0);
        let exchange = world.combat.find(world.monster, world.player).unwrap();
        assert_eq!(exchange.attacker(), world.player);
    }

    #[test]
    fn open_exchange_suppresses_cooldown_strikes() {
        let mut world = World::with_player_at(40.0);
        world.tick(0.1);
        let health = world.entities.get(world.player).unwrap().health();

        for _ in 0..30 {
            world.tick(0.1);
        }
        assert_eq!(world.entities.get(world.player).unwrap().health(), health);
        assert_eq!(world.monster().state, MonsterState::Attacking);
        assert_eq!(world.monster().cooldown_remaining, 0.0);
    }

    #[test]
    fn waits_for_cooldown() {
        let mut world = World::with_player_at(40.0);
        world.tick(0.1);
        let health = world.entities.get(world.player).unwrap().health();
        assert!(world.combat.disengage(world.monster, world.player).is_some());

        world.tick(0.5);
        assert_eq!(world.entities.get(world.player).unwrap().health(), health);
        assert_eq!(world.monster().cooldown_remaining, 0.5);
        world.tick(0.5);
        assert!(world.entities.get(world.player).unwrap().health() < health);
    }

    #[test]
    fn idles_out_of_range_or_without_player() {
        let mut world = World::with_player_at(300.0);
        world.tick(0.1);
        assert_eq!(world.monster().state, MonsterState::Idle);
        assert_eq!(world.monster().target, None);

        let mut world = World::with_player_at(120.0);
        world.tick(0.1);
        world
            .entities
            .get_mut(world.player)
            .unwrap()
            .take_damage(10_000, None);
        world.tick(0.1);
        assert_eq!(world.monster().state, MonsterState::Idle);
        assert_eq!(world.monster().target, None);
    }
}
