//! Experience, gold and level-ups.

use super::{Actor, ActorKind};
use crate::config::LevelGrowth;

impl Actor {
    /// Adds experience and applies every level-up it pays for.
    ///
    /// Each level-up consumes the current threshold, raises the level, grows
    /// stats by `growth`, refills health and mana, and multiplies the threshold
    /// by `growth.threshold_growth_pct` (truncated). Returns the number of
    /// levels gained. Only the player accumulates experience.
    pub fn gain_experience(&mut self, amount: u32, growth: &LevelGrowth) -> u32 {
        let ActorKind::Player(player) = &mut self.kind else {
            return 0;
        };
        player.experience = player.experience.saturating_add(amount);

        let mut gained = 0;
        while self.try_level_up(growth) {
            gained += 1;
        }
        gained
    }

    fn try_level_up(&mut self, growth: &LevelGrowth) -> bool {
        let ActorKind::Player(player) = &mut self.kind else {
            return false;
        };
        let threshold = player.next_level_exp.max(1);
        if player.experience < threshold {
            return false;
        }
        player.experience -= threshold;
        let next = u64::from(threshold) * u64::from(growth.threshold_growth_pct) / 100;
        player.next_level_exp = next.clamp(1, u64::from(u32::MAX)) as u32;

        self.level = self.level.saturating_add(1);
        self.health.grow(growth.max_health);
        self.mana.grow(growth.max_mana);
        self.stats.strength = self.stats.strength.saturating_add(growth.strength);
        self.stats.defense = self.stats.defense.saturating_add(growth.defense);
        self.stats.magic = self.stats.magic.saturating_add(growth.magic);
        self.stats.speed = self.stats.speed.saturating_add(growth.speed);

        tracing::info!(actor = %self.id, level = self.level, "level up");
        true
    }

    /// Adds gold to the player's purse. Returns false for non-player actors.
    pub fn add_gold(&mut self, amount: u32) -> bool {
        match &mut self.kind {
            ActorKind::Player(player) => {
                player.gold = player.gold.saturating_add(amount);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LevelGrowth;
    use crate::state::{ActorBuilder, MonsterData};

    #[test]
    fn single_level_up_carries_remainder() {
        let growth = LevelGrowth::default();
        let mut player = ActorBuilder::player().max_health(100).build().unwrap();
        assert_eq!(player.gain_experience(90, &growth), 0);
        player.take_damage(40, None);

        assert_eq!(player.gain_experience(30, &growth), 1);
        let data = player.as_player().unwrap();
        assert_eq!(player.level(), 2);
        assert_eq!(data.experience, 20);
        assert_eq!(data.next_level_exp, 150);
        assert_eq!(player.max_health(), 120);
        assert_eq!(player.health(), 120);
        assert_eq!(player.stats().strength, 12);
    }

    #[test]
    fn large_grant_levels_repeatedly() {
        let growth = LevelGrowth::default();
        let mut player = ActorBuilder::player().build().unwrap();
        // 100 + 150 + 225 = 475
        assert_eq!(player.gain_experience(500, &growth), 3);
        let data = player.as_player().unwrap();
        assert_eq!(player.level(), 4);
        assert_eq!(data.experience, 25);
        assert_eq!(data.next_level_exp, 337);
    }

    #[test]
    fn only_players_progress() {
        let growth = LevelGrowth::default();
        let mut monster = ActorBuilder::monster(MonsterData::default()).build().unwrap();
        assert_eq!(monster.gain_experience(1000, &growth), 0);
        assert_eq!(monster.level(), 1);
        assert!(!monster.add_gold(5));

        let mut player = ActorBuilder::player().build().unwrap();
        assert!(player.add_gold(7));
        assert_eq!(player.as_player().unwrap().gold, 7);
    }
}
