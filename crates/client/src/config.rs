//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to run a headless session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `actors.ron` and `scenarios/`.
    pub data_dir: PathBuf,
    pub scenario: String,
    /// Steps to run before shutting down.
    pub ticks: u64,
    pub tick_rate_hz: u32,
    pub seed: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            scenario: "meadow".to_owned(),
            ticks: 600,
            tick_rate_hz: 60,
            seed: 0,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIM_DATA_DIR` - Content directory (default: `data`)
    /// - `SIM_SCENARIO` - Scenario name under `scenarios/` (default: `meadow`)
    /// - `SIM_TICKS` - Number of steps to run (default: 600)
    /// - `SIM_TICK_RATE` - Steps per simulated second (default: 60)
    /// - `SIM_SEED` - Random seed (default: 0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SIM_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(scenario) = env::var("SIM_SCENARIO") {
            config.scenario = scenario;
        }
        if let Some(ticks) = read_env::<u64>("SIM_TICKS") {
            config.ticks = ticks;
        }
        if let Some(rate) = read_env::<u32>("SIM_TICK_RATE") {
            config.tick_rate_hz = rate.max(1);
        }
        if let Some(seed) = read_env::<u64>("SIM_SEED") {
            config.seed = seed;
        }

        config
    }

    /// Seconds covered by one step.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz.max(1) as f32
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
