use crate::state::Position;

/// What an NPC does when the player talks to it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum NpcRole {
    #[default]
    Villager,
    Merchant,
    QuestGiver,
}

/// How an NPC moves on its own.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum MovementPattern {
    #[default]
    Static,
    Patrol,
}

/// Scripted NPC data: role, dialog hook and waypoint patrol.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcData {
    pub role: NpcRole,
    /// Dialog tree started on interaction, owned by the dialog system.
    pub dialog_id: Option<String>,
    pub pattern: MovementPattern,
    pub waypoints: Vec<Position>,
    pub current_waypoint: usize,
    /// Seconds left before resuming the patrol.
    pub wait_remaining: f32,
    /// Talking distance. Unset NPCs take the world default when spawned
    /// through the engine.
    pub interaction_range: Option<f32>,
}

impl NpcData {
    pub fn stationary(role: NpcRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn patrol(waypoints: Vec<Position>) -> Self {
        Self {
            pattern: MovementPattern::Patrol,
            waypoints,
            ..Self::default()
        }
    }

    pub fn with_dialog(mut self, dialog_id: impl Into<String>) -> Self {
        self.dialog_id = Some(dialog_id.into());
        self
    }

    pub fn with_role(mut self, role: NpcRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_interaction_range(mut self, range: f32) -> Self {
        self.interaction_range = Some(range);
        self
    }
}

impl Default for NpcData {
    fn default() -> Self {
        Self {
            role: NpcRole::Villager,
            dialog_id: None,
            pattern: MovementPattern::Static,
            waypoints: Vec::new(),
            current_waypoint: 0,
            wait_remaining: 0.0,
            interaction_range: None,
        }
    }
}
