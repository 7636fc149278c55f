//! Combat attributes and the closed set of stat identifiers effects can target.

/// Already-aggregated combat attributes (equipment bonuses included by the caller).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub strength: u32,
    pub defense: u32,
    pub magic: u32,
    pub speed: u32,
}

impl CombatStats {
    pub const fn new(strength: u32, defense: u32, magic: u32, speed: u32) -> Self {
        Self {
            strength,
            defense,
            magic,
            speed,
        }
    }
}

impl Default for CombatStats {
    fn default() -> Self {
        Self::new(10, 5, 5, 5)
    }
}

/// Identifier of a single actor stat.
///
/// Each variant maps to one accessor/mutator pair on [`Actor`](super::Actor).
/// `Health` and `Mana` name the *current* pools and can only be targeted by
/// instant effects; every other stat can also carry a timed effect.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Health,
    Mana,
    MaxHealth,
    MaxMana,
    Strength,
    Defense,
    Magic,
    Speed,
}

impl StatKind {
    /// Returns true if a timed (auto-reversed) effect may target this stat.
    pub const fn accepts_timed_effect(self) -> bool {
        !matches!(self, StatKind::Health | StatKind::Mana)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_snake_case_names() {
        assert_eq!("max_health".parse::<StatKind>(), Ok(StatKind::MaxHealth));
        assert_eq!("Strength".parse::<StatKind>(), Ok(StatKind::Strength));
        assert!("charisma".parse::<StatKind>().is_err());
    }

    #[test]
    fn only_current_pools_reject_timed_effects() {
        let rejected: Vec<_> = StatKind::iter()
            .filter(|stat| !stat.accepts_timed_effect())
            .collect();
        assert_eq!(rejected, vec![StatKind::Health, StatKind::Mana]);
    }
}
