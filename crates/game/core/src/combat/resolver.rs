//! Owner of every open combat exchange.

use super::{CombatExchange, ExchangeId, strike};
use crate::config::SimConfig;
use crate::events::{EventLog, SimEvent};
use crate::rng::SimRng;
use crate::state::{ActorTag, Entities, EntityId};

/// Pairs actors into exchanges and resolves their turns.
///
/// At most one exchange exists per unordered actor pair. Exchanges whose
/// participants died are purged at the start of the next [`advance`].
///
/// [`advance`]: CombatResolver::advance
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatResolver {
    exchanges: Vec<CombatExchange>,
    next_id: u32,
    turn_duration: f32,
}

impl Default for CombatResolver {
    fn default() -> Self {
        Self::new(SimConfig::DEFAULT_TURN_DURATION)
    }
}

impl CombatResolver {
    pub fn new(turn_duration: f32) -> Self {
        Self {
            exchanges: Vec::new(),
            next_id: 1,
            turn_duration,
        }
    }

    pub fn turn_duration(&self) -> f32 {
        self.turn_duration
    }

    /// Opens an exchange where `attacker` strikes first, or returns the one
    /// already open between the two actors.
    ///
    /// Returns `None` if either actor is missing or dead, if they are the same
    /// actor, or if either is an obstacle. Obstacles take hits but never
    /// fight back.
    pub fn start_exchange(
        &mut self,
        entities: &Entities,
        attacker: EntityId,
        defender: EntityId,
        events: &mut EventLog,
    ) -> Option<ExchangeId> {
        if attacker == defender {
            return None;
        }
        let fighter = |id| {
            entities
                .get(id)
                .filter(|actor| actor.is_alive() && actor.tag() != ActorTag::Obstacle)
        };
        fighter(attacker)?;
        fighter(defender)?;

        if let Some(existing) = self.find(attacker, defender) {
            return Some(existing.id());
        }

        let id = ExchangeId(self.next_id);
        self.next_id += 1;
        self.exchanges.push(CombatExchange::new(
            id,
            attacker,
            defender,
            self.turn_duration,
        ));
        events.push(SimEvent::ExchangeStarted {
            exchange: id,
            attacker,
            defender,
        });
        tracing::debug!(exchange = %id, %attacker, %defender, "exchange started");
        Some(id)
    }

    /// Advances every exchange by `dt`, resolving at most one turn each.
    ///
    /// Finished exchanges are purged first, so an exchange whose defender
    /// died during this call is still visible (flagged finished) until the
    /// next call.
    pub fn advance(
        &mut self,
        dt: f32,
        entities: &mut Entities,
        rng: &mut (impl SimRng + ?Sized),
        config: &SimConfig,
        events: &mut EventLog,
    ) {
        self.purge(entities, events);

        for exchange in &mut self.exchanges {
            if !exchange.accumulate(dt) {
                continue;
            }
            resolve_turn(exchange, entities, rng, config, events);
        }
    }

    fn purge(&mut self, entities: &Entities, events: &mut EventLog) {
        self.exchanges.retain(|exchange| {
            if exchange.is_finished(entities) {
                events.push(SimEvent::ExchangeFinished {
                    exchange: exchange.id(),
                    turns: exchange.turns_resolved(),
                });
                tracing::debug!(exchange = %exchange.id(), turns = exchange.turns_resolved(), "exchange finished");
                false
            } else {
                true
            }
        });
    }

    /// Closes the exchange between `a` and `b`, if any, and returns it.
    pub fn disengage(&mut self, a: EntityId, b: EntityId) -> Option<CombatExchange> {
        let index = self
            .exchanges
            .iter()
            .position(|exchange| exchange.involves(a, b))?;
        Some(self.exchanges.remove(index))
    }

    pub fn get(&self, id: ExchangeId) -> Option<&CombatExchange> {
        self.exchanges.iter().find(|exchange| exchange.id() == id)
    }

    /// The exchange between `a` and `b`, regardless of role order.
    pub fn find(&self, a: EntityId, b: EntityId) -> Option<&CombatExchange> {
        self.exchanges.iter().find(|exchange| exchange.involves(a, b))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatExchange> {
        self.exchanges.iter()
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}

fn resolve_turn(
    exchange: &mut CombatExchange,
    entities: &mut Entities,
    rng: &mut (impl SimRng + ?Sized),
    config: &SimConfig,
    events: &mut EventLog,
) {
    let Some(outcome) = strike(
        entities,
        exchange.attacker(),
        exchange.defender(),
        rng,
        config,
        events,
    ) else {
        exchange.finish();
        return;
    };
    if outcome.killed {
        exchange.finish();
    }
    exchange.swap_roles();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;
    use crate::state::{ActorBuilder, CombatStats, MonsterData, ObstacleMaterial};

    struct Arena {
        entities: Entities,
        resolver: CombatResolver,
        rng: PcgRng,
        config: SimConfig,
        events: EventLog,
        a: EntityId,
        b: EntityId,
    }

    impl Arena {
        fn new(b_health: u32) -> Self {
            let mut entities = Entities::new();
            let a = entities
                .spawn(ActorBuilder::player().max_health(500).build().unwrap())
                .unwrap();
            let b = entities
                .spawn(
                    ActorBuilder::monster(MonsterData::default())
                        .max_health(b_health)
                        .stats(CombatStats::new(4, 0, 0, 0))
                        .at(40.0, 0.0)
                        .build()
                        .unwrap(),
                )
                .unwrap();
            Self {
                entities,
                resolver: CombatResolver::default(),
                rng: PcgRng::seeded(9),
                config: SimConfig::default(),
                events: EventLog::new(),
                a,
                b,
            }
        }

        fn advance(&mut self, dt: f32) {
            self.resolver.advance(
                dt,
                &mut self.entities,
                &mut self.rng,
                &self.config,
                &mut self.events,
            );
        }
    }

    #[test]
    fn same_pair_same_exchange() {
        let mut arena = Arena::new(100);
        let first = arena
            .resolver
            .start_exchange(&arena.entities, arena.a, arena.b, &mut arena.events)
            .unwrap();
        let again = arena
            .resolver
            .start_exchange(&arena.entities, arena.a, arena.b, &mut arena.events);
        let reversed = arena
            .resolver
            .start_exchange(&arena.entities, arena.b, arena.a, &mut arena.events);
        assert_eq!(again, Some(first));
        assert_eq!(reversed, Some(first));
        assert_eq!(arena.resolver.len(), 1);
        assert_eq!(arena.events.len(), 1);
    }

    #[test]
    fn refuses_dead_self_and_obstacles() {
        let mut arena = Arena::new(100);
        let rock = arena
            .entities
            .spawn(ActorBuilder::obstacle(ObstacleMaterial::Rock).at(200.0, 0.0).build().unwrap())
            .unwrap();
        let events = &mut arena.events;
        assert!(arena.resolver.start_exchange(&arena.entities, arena.a, arena.a, events).is_none());
        assert!(arena.resolver.start_exchange(&arena.entities, arena.a, rock, events).is_none());

        arena.entities.get_mut(arena.b).unwrap().take_damage(10_000, None);
        assert!(arena.resolver.start_exchange(&arena.entities, arena.a, arena.b, events).is_none());
        assert!(arena.resolver.is_empty());
    }

    #[test]
    fn roles_alternate_every_turn() {
        let mut arena = Arena::new(1_000);
        let id = arena
            .resolver
            .start_exchange(&arena.entities, arena.a, arena.b, &mut arena.events)
            .unwrap();
        for turn in 1..=6u32 {
            arena.advance(1.0);
            let exchange = arena.resolver.get(id).unwrap();
            assert_eq!(exchange.turns_resolved(), turn);
            let expected = if turn % 2 == 0 { arena.a } else { arena.b };
            assert_eq!(exchange.attacker(), expected);
        }
    }

    #[test]
    fn no_turn_before_duration_elapses() {
        let mut arena = Arena::new(100);
        let id = arena
            .resolver
            .start_exchange(&arena.entities, arena.a, arena.b, &mut arena.events)
            .unwrap();
        arena.advance(0.4);
        arena.advance(0.4);
        assert_eq!(arena.resolver.get(id).unwrap().turns_resolved(), 0);
        arena.advance(0.4);
        assert_eq!(arena.resolver.get(id).unwrap().turns_resolved(), 1);
    }

    #[test]
    fn variable_ticks_drift_below_nominal_cadence() {
        // 0.6 s ticks: each turn needs two ticks (1.2 s) because the 0.2 s
        // surplus is dropped, so 6 s of play resolves 5 turns, not 6.
        let mut arena = Arena::new(10_000);
        let id = arena
            .resolver
            .start_exchange(&arena.entities, arena.a, arena.b, &mut arena.events)
            .unwrap();
        for _ in 0..10 {
            arena.advance(0.6);
        }
        assert_eq!(arena.resolver.get(id).unwrap().turns_resolved(), 5);
    }

    #[test]
    fn finished_exchange_purged_on_next_advance() {
        let mut arena = Arena::new(1);
        let id = arena
            .resolver
            .start_exchange(&arena.entities, arena.a, arena.b, &mut arena.events)
            .unwrap();
        arena.advance(1.0);
        let exchange = arena.resolver.get(id).unwrap();
        assert!(exchange.finished());
        assert!(!arena.entities.is_alive(arena.b));

        arena.advance(0.1);
        assert!(arena.resolver.get(id).is_none());
        assert!(arena.events.iter().any(|event| matches!(
            event,
            SimEvent::ExchangeFinished { exchange, turns: 1 } if *exchange == id
        )));
    }

    #[test]
    fn disengage_removes_pair() {
        let mut arena = Arena::new(100);
        arena
            .resolver
            .start_exchange(&arena.entities, arena.a, arena.b, &mut arena.events)
            .unwrap();
        assert!(arena.resolver.disengage(arena.b, arena.a).is_some());
        assert!(arena.resolver.find(arena.a, arena.b).is_none());
        assert!(arena.resolver.disengage(arena.a, arena.b).is_none());
    }
}
