use crate::state::EntityId;

/// Behavior state of a monster, re-evaluated every tick.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MonsterState {
    /// Player out of aggro range (or absent).
    #[default]
    Idle,
    /// Player inside aggro range; closing in.
    Alert,
    /// Player inside attack range.
    Attacking,
}

/// Aggro, attack and reward parameters of a monster.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterData {
    pub aggro_range: f32,
    pub attack_range: f32,
    /// Seconds between two attacks.
    pub attack_cooldown: f32,
    /// Seconds left before the next attack is allowed.
    pub cooldown_remaining: f32,
    /// Current target, looked up by id in the live set.
    pub target: Option<EntityId>,
    pub exp_reward: u32,
    pub gold_reward: u32,
    pub state: MonsterState,
}

impl MonsterData {
    pub const DEFAULT_AGGRO_RANGE: f32 = 200.0;
    pub const DEFAULT_ATTACK_RANGE: f32 = 50.0;
    pub const DEFAULT_ATTACK_COOLDOWN: f32 = 1.0;
    pub const DEFAULT_EXP_REWARD: u32 = 10;
    pub const DEFAULT_GOLD_REWARD: u32 = 5;

    pub fn new(aggro_range: f32, attack_range: f32, attack_cooldown: f32) -> Self {
        Self {
            aggro_range,
            attack_range,
            attack_cooldown,
            ..Self::default()
        }
    }

    pub fn with_rewards(mut self, exp_reward: u32, gold_reward: u32) -> Self {
        self.exp_reward = exp_reward;
        self.gold_reward = gold_reward;
        self
    }
}

impl Default for MonsterData {
    fn default() -> Self {
        Self {
            aggro_range: Self::DEFAULT_AGGRO_RANGE,
            attack_range: Self::DEFAULT_ATTACK_RANGE,
            attack_cooldown: Self::DEFAULT_ATTACK_COOLDOWN,
            cooldown_remaining: 0.0,
            target: None,
            exp_reward: Self::DEFAULT_EXP_REWARD,
            gold_reward: Self::DEFAULT_GOLD_REWARD,
            state: MonsterState::Idle,
        }
    }
}
