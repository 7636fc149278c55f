//! Actor catalog loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::templates::{ActorCatalog, ActorTemplate};

/// Loader for actor templates from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load an actor catalog from a RON file.
    ///
    /// RON format: `Vec<(String, ActorTemplate)>`. Template ids must be unique.
    pub fn load(path: &Path) -> LoadResult<ActorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid actor catalog {}: {}", path.display(), e))
    }

    /// Parse an actor catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ActorCatalog> {
        let raw_data: Vec<(String, ActorTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        let mut catalog = ActorCatalog::new();
        for (template_id, template) in raw_data {
            if catalog.get(&template_id).is_some() {
                anyhow::bail!("Duplicate actor template '{}'", template_id);
            }
            catalog.insert(template_id, template);
        }
        tracing::debug!(templates = catalog.len(), "loaded actor catalog");
        Ok(catalog)
    }
}
