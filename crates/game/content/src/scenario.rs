//! Scenarios: which templates to spawn, and where.

use sim_core::{Actor, ActorError, Position};

use crate::templates::ActorCatalog;

/// One actor placement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnSpec {
    /// Template id in the actor catalog.
    pub template: String,
    pub position: (f32, f32),
    /// Overrides the template name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Patrol route for NPCs with the patrol pattern.
    #[cfg_attr(feature = "serde", serde(default))]
    pub waypoints: Vec<(f32, f32)>,
}

/// A starting world layout.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub spawns: Vec<SpawnSpec>,
}

/// Errors raised while turning a scenario into actors.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("spawn #{index} references unknown template '{template}'")]
    UnknownTemplate { index: usize, template: String },

    #[error("spawn #{index} ('{template}') is invalid: {source}")]
    InvalidActor {
        index: usize,
        template: String,
        source: ActorError,
    },
}

impl Scenario {
    /// Instantiates every placement, in file order.
    pub fn build_actors(&self, catalog: &ActorCatalog) -> Result<Vec<Actor>, ScenarioError> {
        self.spawns
            .iter()
            .enumerate()
            .map(|(index, spawn)| {
                let template =
                    catalog
                        .get(&spawn.template)
                        .ok_or_else(|| ScenarioError::UnknownTemplate {
                            index,
                            template: spawn.template.clone(),
                        })?;
                let waypoints = spawn
                    .waypoints
                    .iter()
                    .map(|&(x, y)| Position::new(x, y))
                    .collect();
                let mut builder = template
                    .builder(waypoints)
                    .at(spawn.position.0, spawn.position.1);
                if let Some(name) = &spawn.name {
                    builder = builder.name(name.clone());
                }
                builder.build().map_err(|source| ScenarioError::InvalidActor {
                    index,
                    template: spawn.template.clone(),
                    source,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{ActorTemplate, TemplateKind};
    use sim_core::ObstacleMaterial;

    fn catalog() -> ActorCatalog {
        let mut catalog = ActorCatalog::new();
        catalog.insert("hero", ActorTemplate::new(TemplateKind::Player));
        catalog.insert("rock", ActorTemplate::new(TemplateKind::Obstacle(ObstacleMaterial::Rock)));
        catalog
    }

    fn spawn(template: &str, x: f32, y: f32) -> SpawnSpec {
        SpawnSpec {
            template: template.to_owned(),
            position: (x, y),
            name: None,
            waypoints: Vec::new(),
        }
    }

    #[test]
    fn builds_in_file_order() {
        let scenario = Scenario {
            name: "yard".to_owned(),
            spawns: vec![spawn("hero", 0.0, 0.0), spawn("rock", 64.0, 0.0)],
        };
        let actors = scenario.build_actors(&catalog()).unwrap();
        assert_eq!(actors.len(), 2);
        assert!(actors[0].is_player());
        assert_eq!(actors[1].position(), Position::new(64.0, 0.0));
    }

    #[test]
    fn unknown_template_names_the_spawn() {
        let scenario = Scenario {
            name: String::new(),
            spawns: vec![spawn("hero", 0.0, 0.0), spawn("dragon", 1.0, 1.0)],
        };
        assert_eq!(
            scenario.build_actors(&catalog()),
            Err(ScenarioError::UnknownTemplate {
                index: 1,
                template: "dragon".to_owned()
            })
        );
    }
}
