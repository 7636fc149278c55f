use super::{
    Actor, ActorKind, CombatStats, MonsterData, NpcData, ObstacleData, ObstacleMaterial,
    PlayerData, StatusEffects,
};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Bounds, EntityId, Facing, Position, ResourceMeter};
use crate::view::TickMarkers;

/// Errors raised while building an actor.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActorError {
    #[error("actor size must be positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    #[error("actor level must be at least 1")]
    ZeroLevel,

    #[error("max health must be positive")]
    ZeroMaxHealth,

    #[error("movement speed must be finite and non-negative, got {0}")]
    InvalidMovementSpeed(f32),

    #[error("monster ranges must be finite and non-negative, got aggro {aggro} attack {attack}")]
    InvalidMonsterRange { aggro: f32, attack: f32 },

    #[error("attack cooldown must be finite and non-negative, got {0}")]
    InvalidCooldown(f32),

    #[error("interaction range must be finite and non-negative, got {0}")]
    InvalidInteractionRange(f32),
}

impl GameError for ActorError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSize { .. } => "ACTOR_INVALID_SIZE",
            Self::ZeroLevel => "ACTOR_ZERO_LEVEL",
            Self::ZeroMaxHealth => "ACTOR_ZERO_MAX_HEALTH",
            Self::InvalidMovementSpeed(_) => "ACTOR_INVALID_MOVEMENT_SPEED",
            Self::InvalidMonsterRange { .. } => "ACTOR_INVALID_MONSTER_RANGE",
            Self::InvalidCooldown(_) => "ACTOR_INVALID_COOLDOWN",
            Self::InvalidInteractionRange(_) => "ACTOR_INVALID_INTERACTION_RANGE",
        }
    }
}

/// Builder for [`Actor`] with per-kind defaults.
///
/// Ids are assigned when the actor is spawned into the live set.
#[derive(Clone, Debug)]
pub struct ActorBuilder {
    kind: ActorKind,
    name: String,
    position: Position,
    width: f32,
    height: f32,
    level: u32,
    max_health: u32,
    max_mana: u32,
    stats: CombatStats,
    movement_speed: f32,
}

impl ActorBuilder {
    pub const DEFAULT_SIZE: f32 = 32.0;
    pub const DEFAULT_MOVEMENT_SPEED: f32 = 5.0;
    pub const PLAYER_MOVEMENT_SPEED: f32 = 8.0;
    /// Obstacles shrug off the first points of every hit.
    pub const OBSTACLE_DEFENSE: u32 = 5;

    pub fn new(kind: ActorKind) -> Self {
        let mut builder = Self {
            name: kind.tag().to_string(),
            kind,
            position: Position::ORIGIN,
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            level: 1,
            max_health: 100,
            max_mana: 50,
            stats: CombatStats::default(),
            movement_speed: Self::DEFAULT_MOVEMENT_SPEED,
        };

        match &builder.kind {
            ActorKind::Player(_) => {
                builder.name = "Player".to_owned();
                builder.movement_speed = Self::PLAYER_MOVEMENT_SPEED;
            }
            ActorKind::Monster(_) => {
                builder.name = "Monster".to_owned();
                builder.max_health = 50;
                builder.stats = CombatStats::new(5, 3, 2, 3);
            }
            ActorKind::Npc(_) => {
                builder.name = "Villager".to_owned();
            }
            ActorKind::Obstacle(obstacle) => {
                let (width, height, health, _) = obstacle.material.stock();
                builder.name = obstacle.material.to_string();
                builder.width = width;
                builder.height = height;
                builder.max_health = health;
                builder.max_mana = 0;
                builder.stats = CombatStats::new(0, Self::OBSTACLE_DEFENSE, 0, 0);
                builder.movement_speed = 0.0;
            }
        }
        builder
    }

    pub fn player() -> Self {
        Self::new(ActorKind::Player(PlayerData::default()))
    }

    pub fn monster(data: MonsterData) -> Self {
        Self::new(ActorKind::Monster(data))
    }

    pub fn npc(data: NpcData) -> Self {
        Self::new(ActorKind::Npc(data))
    }

    pub fn obstacle(material: ObstacleMaterial) -> Self {
        Self::new(ActorKind::Obstacle(ObstacleData::new(material)))
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    pub fn max_mana(mut self, max_mana: u32) -> Self {
        self.max_mana = max_mana;
        self
    }

    pub fn stats(mut self, stats: CombatStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn strength(mut self, strength: u32) -> Self {
        self.stats.strength = strength;
        self
    }

    pub fn defense(mut self, defense: u32) -> Self {
        self.stats.defense = defense;
        self
    }

    pub fn movement_speed(mut self, movement_speed: f32) -> Self {
        self.movement_speed = movement_speed;
        self
    }

    /// Validates the configuration and produces an actor at full health and mana.
    pub fn build(self) -> Result<Actor, ActorError> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0)
        {
            return Err(ActorError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.level == 0 {
            return Err(ActorError::ZeroLevel);
        }
        if self.max_health == 0 {
            return Err(ActorError::ZeroMaxHealth);
        }
        if !(self.movement_speed.is_finite() && self.movement_speed >= 0.0) {
            return Err(ActorError::InvalidMovementSpeed(self.movement_speed));
        }
        match &self.kind {
            ActorKind::Monster(monster) => {
                let valid = |range: f32| range.is_finite() && range >= 0.0;
                if !valid(monster.aggro_range) || !valid(monster.attack_range) {
                    return Err(ActorError::InvalidMonsterRange {
                        aggro: monster.aggro_range,
                        attack: monster.attack_range,
                    });
                }
                if !valid(monster.attack_cooldown) {
                    return Err(ActorError::InvalidCooldown(monster.attack_cooldown));
                }
            }
            ActorKind::Npc(npc) => {
                if let Some(range) = npc.interaction_range
                    && !(range.is_finite() && range >= 0.0)
                {
                    return Err(ActorError::InvalidInteractionRange(range));
                }
            }
            ActorKind::Player(_) | ActorKind::Obstacle(_) => {}
        }

        Ok(Actor {
            id: EntityId::default(),
            name: self.name,
            kind: self.kind,
            position: self.position,
            width: self.width,
            height: self.height,
            bounds: Bounds::at(self.position, self.width, self.height),
            level: self.level,
            health: ResourceMeter::full(self.max_health),
            mana: ResourceMeter::full(self.max_mana),
            stats: self.stats,
            movement_speed: self.movement_speed,
            facing: Facing::default(),
            moving: false,
            effects: StatusEffects::empty(),
            last_attacker: None,
            markers: TickMarkers::empty(),
        })
    }
}
