//! Simulation step orchestration.
//!
//! The [`SimEngine`] owns the live set, the combat resolver and the random
//! source, and advances all of them together. Hosts call [`SimEngine::step`]
//! once per frame with the elapsed time and the player's movement input, then
//! consume the returned [`StepReport`].

mod interaction;

pub use interaction::Interaction;

use crate::behavior::{TickContext, update_actor};
use crate::combat::{CombatResolver, ExchangeId, StrikeOutcome, strike};
use crate::config::{ConfigError, SimConfig};
use crate::error::GameError;
use crate::events::{EventLog, SimEvent};
use crate::movement::move_actor;
use crate::rng::{PcgRng, SimRng};
use crate::state::{Actor, ActorKind, Entities, EntityId, SpawnError};
use crate::view::ActorView;

/// What happened during one step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// Number of the step just completed, starting at 1.
    pub tick: u64,
    pub events: Vec<SimEvent>,
    /// Last views of the actors removed this step, with their final markers.
    pub removed: Vec<ActorView>,
    pub player_alive: bool,
}

/// Single-threaded simulation of one world.
///
/// Step order:
/// 1. clear per-tick markers
/// 2. expire timed effects on every live actor
/// 3. move the player by the given input
/// 4. run monster and NPC controllers in spawn order
/// 5. advance combat exchanges
/// 6. remove dead actors and broken obstacles
pub struct SimEngine<R: SimRng = PcgRng> {
    entities: Entities,
    combat: CombatResolver,
    rng: R,
    config: SimConfig,
    events: EventLog,
    tick: u64,
}

impl<R: SimRng> SimEngine<R> {
    /// Creates an empty world after validating `config`.
    pub fn new(config: SimConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            entities: Entities::new(),
            combat: CombatResolver::new(config.turn_duration),
            rng,
            config,
            events: EventLog::new(),
            tick: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    /// Direct access to the live set, for hosts applying items or scripted
    /// changes between steps.
    pub fn entities_mut(&mut self) -> &mut Entities {
        &mut self.entities
    }

    pub fn combat(&self) -> &CombatResolver {
        &self.combat
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.entities.player_id()
    }

    /// Adds `actor` to the world. An NPC without its own interaction range
    /// gets the configured one.
    pub fn spawn(&mut self, mut actor: Actor) -> Result<EntityId, SpawnError> {
        if let Some(npc) = actor.as_npc_mut() {
            npc.interaction_range.get_or_insert(self.config.interaction_range);
        }
        self.entities.spawn(actor).inspect_err(|error| {
            tracing::warn!(
                %error,
                code = error.error_code(),
                severity = error.severity().as_str(),
                "spawn rejected"
            );
        })
    }

    /// Advances the world by `dt` seconds.
    ///
    /// `player_input` is the requested movement direction; `None` leaves the
    /// player untouched this step.
    pub fn step(&mut self, dt: f32, player_input: Option<(f32, f32)>) -> StepReport {
        for actor in self.entities.iter_mut() {
            actor.clear_markers();
        }
        for actor in self.entities.iter_mut().filter(|actor| actor.is_alive()) {
            actor.tick(dt);
        }

        if let (Some((dx, dy)), Some(player)) = (player_input, self.entities.player_id()) {
            move_actor(&mut self.entities, player, dx, dy);
        }

        let ids = self.entities.ids();
        let mut ctx = TickContext {
            entities: &mut self.entities,
            combat: &mut self.combat,
            rng: &mut self.rng,
            config: &self.config,
            events: &mut self.events,
        };
        for id in ids {
            update_actor(&mut ctx, id, dt);
        }

        self.combat.advance(
            dt,
            &mut self.entities,
            &mut self.rng,
            &self.config,
            &mut self.events,
        );

        let mut removed = Vec::new();
        for dead in self.entities.remove_dead() {
            removed.push(dead.view());
            let event = match dead.kind() {
                ActorKind::Obstacle(_) => SimEvent::ObstacleBroken { id: dead.id() },
                _ => SimEvent::Died {
                    id: dead.id(),
                    tag: dead.tag(),
                    name: dead.name().to_owned(),
                    killer: dead.last_attacker(),
                },
            };
            self.events.push(event);
        }

        self.tick += 1;
        let report = StepReport {
            tick: self.tick,
            events: self.events.drain(),
            removed,
            player_alive: self.entities.player().is_some(),
        };
        tracing::trace!(tick = report.tick, events = report.events.len(), "step");
        report
    }

    /// The player strikes `target` immediately and enters combat with it.
    ///
    /// The strike uses the same roll as a combat turn. Unless the target
    /// died or is an obstacle, the exchange between them is opened (or kept),
    /// so the fight carries on turn by turn. Events are reported with the
    /// next step. Returns `None` if there is no live player or target.
    pub fn player_attack(&mut self, target: EntityId) -> Option<StrikeOutcome> {
        let player = self.entities.player_id()?;
        let outcome = strike(
            &mut self.entities,
            player,
            target,
            &mut self.rng,
            &self.config,
            &mut self.events,
        )?;
        if !outcome.killed {
            self.combat
                .start_exchange(&self.entities, player, target, &mut self.events);
        }
        Some(outcome)
    }

    /// Opens (or returns) the exchange where `attacker` strikes first.
    pub fn start_exchange(&mut self, attacker: EntityId, defender: EntityId) -> Option<ExchangeId> {
        self.combat
            .start_exchange(&self.entities, attacker, defender, &mut self.events)
    }

    /// Ends the fight between `a` and `b`. Returns false if none was open.
    pub fn disengage(&mut self, a: EntityId, b: EntityId) -> bool {
        let Some(exchange) = self.combat.disengage(a, b) else {
            return false;
        };
        self.events.push(SimEvent::ExchangeFinished {
            exchange: exchange.id(),
            turns: exchange.turns_resolved(),
        });
        true
    }

    /// Render projections of every actor, in spawn order.
    pub fn views(&self) -> Vec<ActorView> {
        self.entities.iter().map(Actor::view).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use crate::state::{ActorBuilder, CombatStats, MonsterData, ObstacleMaterial, Position};
    use crate::view::TickMarkers;

    fn engine() -> SimEngine {
        SimEngine::new(SimConfig::default(), PcgRng::seeded(4)).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SimConfig::default().with_turn_duration(0.0);
        assert!(matches!(
            SimEngine::new(config, PcgRng::default()),
            Err(ConfigError::TurnDuration(_))
        ));
    }

    #[test]
    fn player_input_moves_player() {
        let mut engine = engine();
        let player = engine.spawn(ActorBuilder::player().build().unwrap()).unwrap();
        engine.step(0.016, Some((1.0, 0.0)));
        let actor = engine.entities().get(player).unwrap();
        assert_eq!(actor.position(), Position::new(8.0, 0.0));
        assert!(actor.is_moving());

        engine.step(0.016, Some((0.0, 0.0)));
        assert!(!engine.entities().get(player).unwrap().is_moving());
    }

    #[test]
    fn player_attack_opens_exchange() {
        let mut engine = engine();
        let player = engine.spawn(ActorBuilder::player().build().unwrap()).unwrap();
        let monster = engine
            .spawn(
                ActorBuilder::monster(MonsterData::new(0.0, 0.0, 1.0))
                    .max_health(200)
                    .at(40.0, 0.0)
                    .build()
                    .unwrap(),
            )
            .unwrap();

        let outcome = engine.player_attack(monster).unwrap();
        assert!(!outcome.killed);
        let exchange = engine.combat().find(player, monster).unwrap();
        assert_eq!(exchange.attacker(), player);

        let report = engine.step(0.5, None);
        assert!(report.events.iter().any(|event| matches!(event, SimEvent::Damaged { .. })));
        assert!(report
            .events
            .iter()
            .any(|event| matches!(event, SimEvent::ExchangeStarted { .. })));
    }

    #[test]
    fn kill_reports_reward_and_death_then_cleans_up() {
        // Every roll is the minimum: 8 damage, +0% rewards.
        let mut engine = SimEngine::new(SimConfig::default(), SequenceRng::new([0])).unwrap();
        let player = engine.spawn(ActorBuilder::player().build().unwrap()).unwrap();
        let monster = engine
            .spawn(
                ActorBuilder::monster(MonsterData::new(0.0, 0.0, 1.0).with_rewards(30, 4))
                    .max_health(5)
                    .stats(CombatStats::new(1, 0, 0, 0))
                    .at(100.0, 0.0)
                    .build()
                    .unwrap(),
            )
            .unwrap();

        assert!(engine.player_attack(monster).unwrap().killed);
        assert!(engine.combat().is_empty());
        let report = engine.step(0.1, None);

        assert!(report.player_alive);
        assert!(engine.entities().get(monster).is_none());
        assert!(report.events.contains(&SimEvent::RewardGranted {
            player,
            victim: monster,
            experience: 30,
            gold: 4,
        }));
        assert!(report.events.contains(&SimEvent::Died {
            id: monster,
            tag: crate::state::ActorTag::Monster,
            name: "Monster".to_owned(),
            killer: Some(player),
        }));
        assert_eq!(report.removed.len(), 1);
        assert_eq!(report.removed[0].id, monster);
        assert!(report.removed[0].markers.contains(TickMarkers::DIED));
        assert!(engine.views().iter().all(|view| view.id != monster));
    }

    #[test]
    fn monster_fight_runs_on_exchange_turns() {
        let mut engine = engine();
        let player = engine
            .spawn(ActorBuilder::player().max_health(1000).build().unwrap())
            .unwrap();
        let monster = engine
            .spawn(
                ActorBuilder::monster(MonsterData::new(200.0, 50.0, 1.0))
                    .max_health(1000)
                    .at(40.0, 0.0)
                    .build()
                    .unwrap(),
            )
            .unwrap();

        let mut hits = Vec::new();
        for _ in 0..40 {
            let report = engine.step(0.1, None);
            hits.extend(report.events.into_iter().filter_map(|event| match event {
                SimEvent::Damaged { attacker, .. } => Some(attacker),
                _ => None,
            }));
        }

        // Opening strike, then the exchange alternates starting with the player.
        assert_eq!(hits.first(), Some(&monster));
        assert_eq!(hits.get(1), Some(&player));
        let monster_hits = hits.iter().filter(|&&id| id == monster).count();
        assert!(monster_hits <= 3, "monster hit {monster_hits} times");
        assert!(hits.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn broken_obstacle_is_removed_and_stops_blocking() {
        let mut engine = engine();
        let player = engine
            .spawn(ActorBuilder::player().strength(50).build().unwrap())
            .unwrap();
        let fence = engine
            .spawn(ActorBuilder::obstacle(ObstacleMaterial::Fence).at(36.0, 0.0).build().unwrap())
            .unwrap();

        engine.step(0.1, Some((1.0, 0.0)));
        assert_eq!(engine.entities().get(player).unwrap().position(), Position::ORIGIN);

        assert!(engine.player_attack(fence).unwrap().killed);
        let report = engine.step(0.1, Some((1.0, 0.0)));
        assert!(report.events.contains(&SimEvent::ObstacleBroken { id: fence }));
        assert_eq!(engine.entities().get(player).unwrap().position(), Position::new(8.0, 0.0));
    }

    #[test]
    fn markers_last_one_step() {
        let mut engine = engine();
        let player = engine.spawn(ActorBuilder::player().build().unwrap()).unwrap();
        let monster = engine
            .spawn(
                ActorBuilder::monster(MonsterData::new(0.0, 0.0, 1.0))
                    .max_health(500)
                    .at(40.0, 0.0)
                    .build()
                    .unwrap(),
            )
            .unwrap();

        engine.player_attack(monster);
        let view = |engine: &SimEngine| {
            engine
                .views()
                .into_iter()
                .find(|view| view.id == monster)
                .unwrap()
        };
        assert!(view(&engine).markers.contains(TickMarkers::DAMAGED));
        engine.disengage(player, monster);
        engine.step(0.1, None);
        assert!(view(&engine).markers.is_empty());
    }
}
