/// Simulation configuration constants and tunable parameters.
///
/// Time values are seconds, distances are world units. Variances are whole
/// percentages: a damage variance of 20 rolls damage in `[0.8 s, 1.2 s]` for an
/// attacker of strength `s`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Time between two resolved turns of a combat exchange.
    pub turn_duration: f32,
    /// Per-axis distance under which an NPC counts as arrived at a waypoint.
    pub waypoint_tolerance: f32,
    /// Pause after an NPC reaches a waypoint.
    pub waypoint_wait: f32,
    /// Spread of a damage roll around the attacker's strength.
    pub damage_variance_pct: u32,
    /// Upper bound of the random bonus applied to kill rewards.
    pub reward_variance_pct: u32,
    /// Default distance within which the player can talk to an NPC.
    pub interaction_range: f32,
    /// Stat growth applied on every level-up.
    pub growth: LevelGrowth,
}

impl SimConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of live actors (player + monsters + NPCs + obstacles).
    pub const MAX_ACTORS: usize = 512;
    /// Maximum number of timed effects active on one actor.
    pub const MAX_ACTIVE_EFFECTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_DURATION: f32 = 1.0;
    pub const DEFAULT_WAYPOINT_TOLERANCE: f32 = 5.0;
    pub const DEFAULT_WAYPOINT_WAIT: f32 = 2.0;
    pub const DEFAULT_DAMAGE_VARIANCE_PCT: u32 = 20;
    pub const DEFAULT_REWARD_VARIANCE_PCT: u32 = 20;
    pub const DEFAULT_INTERACTION_RANGE: f32 = 50.0;

    pub fn new() -> Self {
        Self {
            turn_duration: Self::DEFAULT_TURN_DURATION,
            waypoint_tolerance: Self::DEFAULT_WAYPOINT_TOLERANCE,
            waypoint_wait: Self::DEFAULT_WAYPOINT_WAIT,
            damage_variance_pct: Self::DEFAULT_DAMAGE_VARIANCE_PCT,
            reward_variance_pct: Self::DEFAULT_REWARD_VARIANCE_PCT,
            interaction_range: Self::DEFAULT_INTERACTION_RANGE,
            growth: LevelGrowth::default(),
        }
    }

    pub fn with_turn_duration(mut self, turn_duration: f32) -> Self {
        self.turn_duration = turn_duration;
        self
    }

    /// Checks that every tunable is inside its meaningful range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.turn_duration.is_finite() && self.turn_duration > 0.0) {
            return Err(ConfigError::TurnDuration(self.turn_duration));
        }
        if !(self.waypoint_tolerance.is_finite() && self.waypoint_tolerance >= 0.0) {
            return Err(ConfigError::WaypointTolerance(self.waypoint_tolerance));
        }
        if !(self.waypoint_wait.is_finite() && self.waypoint_wait >= 0.0) {
            return Err(ConfigError::WaypointWait(self.waypoint_wait));
        }
        if self.damage_variance_pct > 100 {
            return Err(ConfigError::Variance {
                field: "damage_variance_pct",
                value: self.damage_variance_pct,
            });
        }
        if self.reward_variance_pct > 100 {
            return Err(ConfigError::Variance {
                field: "reward_variance_pct",
                value: self.reward_variance_pct,
            });
        }
        if !(self.interaction_range.is_finite() && self.interaction_range >= 0.0) {
            return Err(ConfigError::InteractionRange(self.interaction_range));
        }
        if self.growth.threshold_growth_pct < 100 {
            return Err(ConfigError::ThresholdGrowth(self.growth.threshold_growth_pct));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat stat increases granted by a single level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelGrowth {
    pub max_health: u32,
    pub max_mana: u32,
    pub strength: u32,
    pub defense: u32,
    pub magic: u32,
    pub speed: u32,
    /// Next experience threshold as a percentage of the current one (truncated).
    pub threshold_growth_pct: u32,
}

impl Default for LevelGrowth {
    fn default() -> Self {
        Self {
            max_health: 20,
            max_mana: 10,
            strength: 2,
            defense: 2,
            magic: 2,
            speed: 1,
            threshold_growth_pct: 150,
        }
    }
}

/// Errors raised by [`SimConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("turn duration must be positive, got {0}")]
    TurnDuration(f32),

    #[error("waypoint tolerance must be non-negative, got {0}")]
    WaypointTolerance(f32),

    #[error("waypoint wait must be non-negative, got {0}")]
    WaypointWait(f32),

    #[error("{field} must be at most 100, got {value}")]
    Variance { field: &'static str, value: u32 },

    #[error("interaction range must be non-negative, got {0}")]
    InteractionRange(f32),

    #[error("level threshold growth must be at least 100%, got {0}%")]
    ThresholdGrowth(u32),
}

impl crate::error::GameError for ConfigError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TurnDuration(_) => "CONFIG_TURN_DURATION",
            Self::WaypointTolerance(_) => "CONFIG_WAYPOINT_TOLERANCE",
            Self::WaypointWait(_) => "CONFIG_WAYPOINT_WAIT",
            Self::Variance { .. } => "CONFIG_VARIANCE",
            Self::InteractionRange(_) => "CONFIG_INTERACTION_RANGE",
            Self::ThresholdGrowth(_) => "CONFIG_THRESHOLD_GROWTH",
        }
    }
}
