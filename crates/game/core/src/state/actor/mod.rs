//! Actor-related state types.
//!
//! This module contains the common record shared by every simulated body:
//! - Actor: placement, vitals, combat attributes, kinematics, timed effects
//! - ActorKind: per-kind extension data (player, monster, NPC, obstacle)
//! - Effects: timed stat modifications reversed on expiry
//! - Builder: validated construction with per-kind defaults

mod builder;
pub mod effects;
pub mod monster;
pub mod npc;
pub mod obstacle;
pub mod player;
mod progression;
pub mod stats;

pub use builder::{ActorBuilder, ActorError};
pub use effects::{StatEffect, StatusEffects};
pub use monster::{MonsterData, MonsterState};
pub use npc::{MovementPattern, NpcData, NpcRole};
pub use obstacle::{ObstacleData, ObstacleMaterial};
pub use player::PlayerData;
pub use stats::{CombatStats, StatKind};

use super::common::shift_clamped;
use super::{Bounds, EntityId, Facing, Position, ResourceMeter};
use crate::view::TickMarkers;

/// Discriminant of [`ActorKind`], for matching and reporting without the payload.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActorTag {
    Player,
    Monster,
    Npc,
    Obstacle,
}

/// Kind of an actor together with the data only that kind carries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player(PlayerData),
    Monster(MonsterData),
    Npc(NpcData),
    Obstacle(ObstacleData),
}

impl ActorKind {
    pub const fn tag(&self) -> ActorTag {
        match self {
            ActorKind::Player(_) => ActorTag::Player,
            ActorKind::Monster(_) => ActorTag::Monster,
            ActorKind::Npc(_) => ActorTag::Npc,
            ActorKind::Obstacle(_) => ActorTag::Obstacle,
        }
    }
}

/// A simulated body in the world.
///
/// # Invariants
///
/// - `0 <= health <= max_health` and `0 <= mana <= max_mana` after every mutation
/// - `bounds` always equals `(position, width, height)`
/// - Links to other actors (`last_attacker`, monster targets) are ids, never ownership
///
/// Fields are private so that every mutation goes through a method that keeps
/// these invariants.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    id: EntityId,
    name: String,
    kind: ActorKind,

    // === Placement ===
    position: Position,
    width: f32,
    height: f32,
    bounds: Bounds,

    // === Vitals ===
    level: u32,
    health: ResourceMeter,
    mana: ResourceMeter,

    // === Combat attributes ===
    stats: CombatStats,

    // === Kinematics ===
    /// Distance covered by one movement step.
    movement_speed: f32,
    facing: Facing,
    moving: bool,
    effects: StatusEffects,

    // === Bookkeeping ===
    last_attacker: Option<EntityId>,
    markers: TickMarkers,
}

impl Actor {
    /// Starts building an actor of the given kind with that kind's defaults.
    pub fn builder(kind: ActorKind) -> ActorBuilder {
        ActorBuilder::new(kind)
    }

    // ========================================================================
    // Identity
    // ========================================================================

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ActorKind {
        &self.kind
    }

    /// Mutable access to the per-kind data (targets, waypoints, rewards).
    pub fn kind_mut(&mut self) -> &mut ActorKind {
        &mut self.kind
    }

    pub fn tag(&self) -> ActorTag {
        self.kind.tag()
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player(_))
    }

    pub fn as_player(&self) -> Option<&PlayerData> {
        match &self.kind {
            ActorKind::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_monster(&self) -> Option<&MonsterData> {
        match &self.kind {
            ActorKind::Monster(monster) => Some(monster),
            _ => None,
        }
    }

    pub fn as_monster_mut(&mut self) -> Option<&mut MonsterData> {
        match &mut self.kind {
            ActorKind::Monster(monster) => Some(monster),
            _ => None,
        }
    }

    pub fn as_npc(&self) -> Option<&NpcData> {
        match &self.kind {
            ActorKind::Npc(npc) => Some(npc),
            _ => None,
        }
    }

    pub fn as_npc_mut(&mut self) -> Option<&mut NpcData> {
        match &mut self.kind {
            ActorKind::Npc(npc) => Some(npc),
            _ => None,
        }
    }

    pub fn as_obstacle(&self) -> Option<&ObstacleData> {
        match &self.kind {
            ActorKind::Obstacle(obstacle) => Some(obstacle),
            _ => None,
        }
    }

    // ========================================================================
    // Placement & kinematics
    // ========================================================================

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the actor and keeps its collision box in sync.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
        self.bounds = Bounds::at(position, self.width, self.height);
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Collision box the actor would have at `position`.
    pub fn bounds_at(&self, position: Position) -> Bounds {
        Bounds::at(position, self.width, self.height)
    }

    pub fn distance_to(&self, other: &Actor) -> f32 {
        self.position.distance_to(other.position)
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub(crate) fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub(crate) fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    // ========================================================================
    // Vitals
    // ========================================================================

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> u32 {
        self.health.current()
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum()
    }

    pub fn mana(&self) -> u32 {
        self.mana.current()
    }

    pub fn max_mana(&self) -> u32 {
        self.mana.maximum()
    }

    pub fn health_fraction(&self) -> f32 {
        self.health.fraction()
    }

    pub fn stats(&self) -> CombatStats {
        self.stats
    }

    pub fn effects(&self) -> &StatusEffects {
        &self.effects
    }

    /// Last actor that landed a hit on this one.
    pub fn last_attacker(&self) -> Option<EntityId> {
        self.last_attacker
    }

    pub fn markers(&self) -> TickMarkers {
        self.markers
    }

    pub(crate) fn clear_markers(&mut self) {
        self.markers = TickMarkers::empty();
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    /// Applies a hit of raw strength `amount`, mitigated by defense.
    ///
    /// Returns the mitigated damage (at least 1), or 0 when the hit is
    /// absorbed: the actor is already dead, or it is an unbreakable or already
    /// broken obstacle. Health is clamped at 0 and death handling runs when it
    /// gets there. Kill rewards are not handled here.
    pub fn take_damage(&mut self, amount: u32, attacker: Option<EntityId>) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        if let ActorKind::Obstacle(obstacle) = &self.kind {
            if obstacle.absorbs_hits() {
                return 0;
            }
        }

        let damage = amount.saturating_sub(self.stats.defense).max(1);
        self.health.drain(damage);
        if attacker.is_some() {
            self.last_attacker = attacker;
        }
        self.markers.insert(TickMarkers::DAMAGED);

        if !self.is_alive() {
            self.on_death();
        }
        damage
    }

    fn on_death(&mut self) {
        self.markers.insert(TickMarkers::DIED);
        self.moving = false;
        match &mut self.kind {
            ActorKind::Obstacle(obstacle) => obstacle.broken = true,
            ActorKind::Monster(monster) => {
                monster.target = None;
                monster.state = MonsterState::Idle;
            }
            ActorKind::Player(_) | ActorKind::Npc(_) => {}
        }
        tracing::info!(
            actor = %self.id,
            name = %self.name,
            kind = %self.tag(),
            killer = ?self.last_attacker,
            "actor died"
        );
    }

    /// Restores up to `amount` health. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        self.health.fill(amount)
    }

    /// Spends `amount` mana if, and only if, enough is available.
    pub fn use_mana(&mut self, amount: u32) -> bool {
        if !self.is_alive() || self.mana.current() < amount {
            return false;
        }
        self.mana.drain(amount);
        true
    }

    /// Restores up to `amount` mana. Returns the amount actually restored.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        self.mana.fill(amount)
    }

    // ========================================================================
    // Stats & effects
    // ========================================================================

    /// Reads one stat by identifier.
    pub fn stat(&self, stat: StatKind) -> u32 {
        match stat {
            StatKind::Health => self.health.current(),
            StatKind::Mana => self.mana.current(),
            StatKind::MaxHealth => self.health.maximum(),
            StatKind::MaxMana => self.mana.maximum(),
            StatKind::Strength => self.stats.strength,
            StatKind::Defense => self.stats.defense,
            StatKind::Magic => self.stats.magic,
            StatKind::Speed => self.stats.speed,
        }
    }

    /// Shifts an attribute stat, returning the shift actually applied.
    ///
    /// Current pools are only touched through `heal`/`restore_mana`, so they
    /// are never shifted here. Max health never drops below 1.
    fn shift_stat(&mut self, stat: StatKind, delta: i32) -> i32 {
        match stat {
            StatKind::Health | StatKind::Mana => 0,
            StatKind::MaxHealth => self.health.shift_maximum(delta, 1),
            StatKind::MaxMana => self.mana.shift_maximum(delta, 0),
            StatKind::Strength => shift_clamped(&mut self.stats.strength, delta, 0),
            StatKind::Defense => shift_clamped(&mut self.stats.defense, delta, 0),
            StatKind::Magic => shift_clamped(&mut self.stats.magic, delta, 0),
            StatKind::Speed => shift_clamped(&mut self.stats.speed, delta, 0),
        }
    }

    /// Applies a timed effect now and schedules its reversal.
    ///
    /// Returns false (and changes nothing) if the actor is dead, the stat
    /// cannot carry a timed effect, the duration is not positive, or the
    /// effect set is full.
    pub fn add_effect(&mut self, stat: StatKind, delta: i32, duration: f32) -> bool {
        if !self.is_alive()
            || !stat.accepts_timed_effect()
            || !(duration > 0.0)
            || self.effects.is_full()
        {
            return false;
        }
        // The reversal negates the applied shift, so i32::MIN never goes in.
        let delta = delta.max(-i32::MAX);
        let applied = self.shift_stat(stat, delta);
        self.effects.push(StatEffect {
            stat,
            delta,
            applied,
            remaining: duration,
        })
    }

    /// Applies a one-shot change (potions, scrolls).
    ///
    /// Positive health/mana deltas heal/restore; negative ones are ignored.
    /// Any other stat is shifted permanently. Returns the change applied.
    pub fn apply_instant(&mut self, stat: StatKind, delta: i32) -> i32 {
        if !self.is_alive() {
            return 0;
        }
        match stat {
            StatKind::Health if delta > 0 => self.heal(delta.unsigned_abs()) as i32,
            StatKind::Mana if delta > 0 => self.restore_mana(delta.unsigned_abs()) as i32,
            StatKind::Health | StatKind::Mana => 0,
            _ => self.shift_stat(stat, delta),
        }
    }

    /// Advances timed effects by `dt`, reversing every effect that expired.
    pub fn tick(&mut self, dt: f32) {
        for effect in self.effects.advance(dt) {
            let reverted = self.shift_stat(effect.stat, effect.applied.saturating_neg());
            tracing::debug!(
                actor = %self.id,
                stat = %effect.stat,
                reverted,
                "effect expired"
            );
        }
    }
}
