/// Progression data carried only by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerData {
    pub experience: u32,
    /// Experience needed for the next level-up.
    pub next_level_exp: u32,
    pub gold: u32,
}

impl PlayerData {
    pub const STARTING_THRESHOLD: u32 = 100;
}

impl Default for PlayerData {
    fn default() -> Self {
        Self {
            experience: 0,
            next_level_exp: Self::STARTING_THRESHOLD,
            gold: 0,
        }
    }
}
