//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use sim_core::{Actor, SimConfig};

use crate::loaders::{ActorLoader, ConfigLoader, LoadResult, ScenarioLoader};
use crate::scenario::Scenario;
use crate::templates::ActorCatalog;

/// Content factory that loads all simulation content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actors.ron
/// └── scenarios/
///     ├── meadow.ron
///     └── ambush.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load simulation tunables from `config.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<SimConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(SimConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the actor catalog from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<ActorCatalog> {
        let path = self.data_dir.join("actors.ron");
        ActorLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Loads the catalog and a scenario, and builds the scenario's actors.
    pub fn build_scenario(&self, name: &str) -> LoadResult<Vec<Actor>> {
        let catalog = self.load_actors()?;
        let scenario = self.load_scenario(name)?;
        Ok(scenario.build_actors(&catalog)?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn builds_scenario_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("actors.ron"),
            r#"[("hero", (kind: player)), ("wolf", (kind: monster((aggro_range: 150.0))))]"#,
        )
        .unwrap();
        fs::create_dir(dir.path().join("scenarios")).unwrap();
        fs::write(
            dir.path().join("scenarios").join("den.ron"),
            r#"(spawns: [(template: "hero", position: (0.0, 0.0)), (template: "wolf", position: (90.0, 0.0), name: Some("Alpha"))])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), SimConfig::default());
        let actors = factory.build_scenario("den").unwrap();
        assert_eq!(actors.len(), 2);
        assert_eq!(actors[1].name(), "Alpha");
        assert!(factory.build_scenario("missing").is_err());
    }
}
