/// Obstacle material, which fixes its footprint and toughness.
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
pub enum ObstacleMaterial {
    Tree,
    Rock,
    Fence,
    Wall,
}

impl ObstacleMaterial {
    /// Stock `(width, height, health, breakable)` for this material.
    pub const fn stock(self) -> (f32, f32, u32, bool) {
        match self {
            ObstacleMaterial::Tree => (48.0, 64.0, 3, true),
            ObstacleMaterial::Rock => (32.0, 32.0, 5, true),
            ObstacleMaterial::Fence => (32.0, 16.0, 2, true),
            ObstacleMaterial::Wall => (32.0, 32.0, 1, false),
        }
    }
}

/// Static body that blocks movement and may break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleData {
    pub material: ObstacleMaterial,
    pub breakable: bool,
    pub broken: bool,
}

impl ObstacleData {
    pub const fn new(material: ObstacleMaterial) -> Self {
        let (_, _, _, breakable) = material.stock();
        Self {
            material,
            breakable,
            broken: false,
        }
    }

    /// Returns true if hits glance off without any effect.
    pub const fn absorbs_hits(&self) -> bool {
        !self.breakable || self.broken
    }
}
