//! Damage rolls.

use crate::rng::SimRng;

/// Inclusive damage range for an attacker of `strength`.
///
/// # Formula
///
/// ```text
/// low  = ceil(strength * (100 - variance_pct) / 100)
/// high = floor(strength * (100 + variance_pct) / 100)
/// ```
///
/// Computed in integers so both ends stay inside the real-valued range.
pub fn damage_range(strength: u32, variance_pct: u32) -> (u32, u32) {
    let strength = u64::from(strength);
    let variance = u64::from(variance_pct.min(100));
    let low = (strength * (100 - variance)).div_ceil(100);
    let high = strength * (100 + variance) / 100;
    (clamp_u32(low), clamp_u32(high))
}

/// Rolls raw damage uniformly inside [`damage_range`].
///
/// Defense is not applied here; the defender mitigates on impact.
pub fn roll_damage(strength: u32, variance_pct: u32, rng: &mut (impl SimRng + ?Sized)) -> u32 {
    let (low, high) = damage_range(strength, variance_pct);
    rng.range(low, high)
}

fn clamp_u32(value: u64) -> u32 {
    value.min(u64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    #[test]
    fn range_matches_twenty_percent_spread() {
        assert_eq!(damage_range(10, 20), (8, 12));
        assert_eq!(damage_range(7, 20), (6, 8));
        assert_eq!(damage_range(1, 20), (1, 1));
        assert_eq!(damage_range(0, 20), (0, 0));
        assert_eq!(damage_range(10, 0), (10, 10));
    }

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = PcgRng::seeded(11);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let damage = roll_damage(10, 20, &mut rng);
            assert!((8..=12).contains(&damage));
            seen[(damage - 8) as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
