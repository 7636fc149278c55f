//! Authoritative simulation state.
//!
//! This module owns the actor record, its per-kind data and the live set that
//! holds every actor for the lifetime of a session. Hosts read this state
//! freely but mutate it through the engine, the mover and the combat resolver.
pub mod actor;
mod common;
mod entities;

pub use actor::{
    Actor, ActorBuilder, ActorError, ActorKind, ActorTag, CombatStats, MonsterData, MonsterState,
    MovementPattern, NpcData, NpcRole, ObstacleData, ObstacleMaterial, PlayerData, StatEffect,
    StatKind, StatusEffects,
};
pub use common::{Bounds, EntityId, Facing, Position, ResourceMeter};
pub use entities::{Entities, SpawnError};
