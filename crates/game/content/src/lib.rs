//! Data-driven content definitions and loaders.
//!
//! This crate turns data files into simulation inputs:
//! - Actor templates (data-driven via RON)
//! - Scenarios placing templates in the world (data-driven via RON)
//! - Simulation tunables (data-driven via TOML)
//!
//! Content is consumed when a world is populated and never appears in
//! simulation state. All loaders use sim-core types directly with serde.

pub mod scenario;
pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{Scenario, ScenarioError, SpawnSpec};
pub use templates::{ActorCatalog, ActorTemplate, MonsterSpec, NpcSpec, TemplateKind};

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, ConfigLoader, ContentFactory, LoadResult, ScenarioLoader};
