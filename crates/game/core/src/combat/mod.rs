//! Turn-based combat.
//!
//! Two actors that fight each other are paired into a [`CombatExchange`]. The
//! [`CombatResolver`] owns every open exchange, advances their turn timers
//! and resolves one strike per elapsed turn, alternating attacker and
//! defender.
//!
//! # Core Functions
//!
//! - `damage_range` / `roll_damage`: strength-based damage roll
//! - `roll_reward`: randomized kill reward
//! - `strike`: one hit, with kill rewards for the player

pub mod damage;
pub mod exchange;
pub mod resolver;
pub mod reward;
pub mod strike;

pub use damage::{damage_range, roll_damage};
pub use exchange::{CombatExchange, ExchangeId};
pub use resolver::CombatResolver;
pub use reward::{Reward, roll_reward};
pub use strike::{StrikeOutcome, strike};
