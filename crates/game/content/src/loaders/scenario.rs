//! Scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario: Scenario = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON {}: {}", path.display(), e))?;
        tracing::debug!(name = %scenario.name, spawns = scenario.spawns.len(), "loaded scenario");
        Ok(scenario)
    }
}
