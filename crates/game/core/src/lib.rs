//! Entity simulation core shared by every host.
//!
//! `sim-core` defines the actor model, axis-separated movement, monster and
//! NPC behavior, and the turn-based combat resolver. It performs no I/O and
//! reads no clock: hosts feed elapsed time into [`engine::SimEngine`] and
//! inject randomness through [`rng::SimRng`], so a seeded run replays
//! exactly.
pub mod behavior;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod movement;
pub mod rng;
pub mod state;
pub mod view;

pub use combat::{CombatExchange, CombatResolver, ExchangeId, Reward, StrikeOutcome};
pub use config::{ConfigError, LevelGrowth, SimConfig};
pub use engine::{Interaction, SimEngine, StepReport};
pub use error::{ErrorSeverity, GameError};
pub use events::{EventLog, SimEvent};
pub use movement::move_actor;
pub use rng::{PcgRng, SequenceRng, SimRng};
pub use state::{
    Actor, ActorBuilder, ActorError, ActorKind, ActorTag, Bounds, CombatStats, Entities, EntityId,
    Facing, MonsterData, MonsterState, MovementPattern, NpcData, NpcRole, ObstacleData,
    ObstacleMaterial, PlayerData, Position, ResourceMeter, SpawnError, StatEffect, StatKind,
    StatusEffects,
};
pub use view::{ActorView, TickMarkers};
