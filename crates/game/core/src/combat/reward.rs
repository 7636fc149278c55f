//! Kill rewards.

use crate::rng::SimRng;

/// Experience and gold granted to the player for a kill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub experience: u32,
    pub gold: u32,
}

/// Scales both base values by independent random multipliers.
///
/// Each multiplier is a whole percentage drawn uniformly from
/// `[100, 100 + variance_pct]`; the scaled value is truncated and never
/// leaves `[base, floor(base * (100 + variance_pct) / 100)]`.
pub fn roll_reward(
    base_experience: u32,
    base_gold: u32,
    variance_pct: u32,
    rng: &mut (impl SimRng + ?Sized),
) -> Reward {
    Reward {
        experience: scale(base_experience, variance_pct, rng),
        gold: scale(base_gold, variance_pct, rng),
    }
}

fn scale(base: u32, variance_pct: u32, rng: &mut (impl SimRng + ?Sized)) -> u32 {
    let bonus = rng.range(0, variance_pct.min(100));
    let scaled = u64::from(base) * u64::from(100 + bonus) / 100;
    scaled.min(u64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PcgRng, SequenceRng};

    #[test]
    fn multiplier_bounds() {
        // range(0, 20) maps raw 0 to +0% and raw 20 to +20%.
        let mut rng = SequenceRng::new([0, 20]);
        let reward = roll_reward(50, 10, 20, &mut rng);
        assert_eq!(reward, Reward { experience: 50, gold: 12 });
    }

    #[test]
    fn rewards_stay_clamped() {
        let mut rng = PcgRng::seeded(3);
        for _ in 0..200 {
            let reward = roll_reward(10, 5, 20, &mut rng);
            assert!((10..=12).contains(&reward.experience));
            assert!((5..=6).contains(&reward.gold));
        }
    }
}
