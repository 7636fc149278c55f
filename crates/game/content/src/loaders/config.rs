//! Simulation configuration loader.

use std::path::Path;

use sim_core::SimConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for simulation tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults. The result is validated before it
    /// is returned.
    pub fn load(path: &Path) -> LoadResult<SimConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and validate config from TOML text.
    pub fn parse(content: &str) -> LoadResult<SimConfig> {
        let config: SimConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "turn_duration = 0.5\n\n[growth]\nmax_health = 25"
        )
        .unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.turn_duration, 0.5);
        assert_eq!(config.waypoint_tolerance, SimConfig::DEFAULT_WAYPOINT_TOLERANCE);
        assert_eq!(config.growth.max_health, 25);
        assert_eq!(config.growth.threshold_growth_pct, 150);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let error = ConfigLoader::parse("damage_variance_pct = 150").unwrap_err();
        assert!(error.to_string().contains("damage_variance_pct"));
        assert!(ConfigLoader::load(Path::new("/nonexistent/config.toml")).is_err());
    }
}
