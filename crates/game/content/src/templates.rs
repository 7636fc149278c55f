//! Actor templates: reusable, named blueprints for spawning actors.

use std::collections::BTreeMap;

use sim_core::{
    Actor, ActorBuilder, ActorError, CombatStats, MonsterData, MovementPattern, NpcData, NpcRole,
    ObstacleMaterial, Position,
};

/// Monster tuning; every field falls back to the stock monster value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonsterSpec {
    pub aggro_range: f32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub exp_reward: u32,
    pub gold_reward: u32,
}

impl Default for MonsterSpec {
    fn default() -> Self {
        Self {
            aggro_range: MonsterData::DEFAULT_AGGRO_RANGE,
            attack_range: MonsterData::DEFAULT_ATTACK_RANGE,
            attack_cooldown: MonsterData::DEFAULT_ATTACK_COOLDOWN,
            exp_reward: MonsterData::DEFAULT_EXP_REWARD,
            gold_reward: MonsterData::DEFAULT_GOLD_REWARD,
        }
    }
}

/// NPC role, dialog hook and movement pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NpcSpec {
    pub role: NpcRole,
    pub dialog_id: Option<String>,
    pub pattern: MovementPattern,
    /// Falls back to the world's configured range when omitted.
    pub interaction_range: Option<f32>,
}

impl Default for NpcSpec {
    fn default() -> Self {
        Self {
            role: NpcRole::default(),
            dialog_id: None,
            pattern: MovementPattern::default(),
            interaction_range: None,
        }
    }
}

/// Kind-specific part of a template.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemplateKind {
    Player,
    Monster(MonsterSpec),
    Npc(NpcSpec),
    Obstacle(ObstacleMaterial),
}

/// Blueprint for one kind of actor.
///
/// Unset fields keep the per-kind defaults of [`ActorBuilder`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub kind: TemplateKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub size: Option<(f32, f32)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_health: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_mana: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Option<CombatStats>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub movement_speed: Option<f32>,
}

impl ActorTemplate {
    pub fn new(kind: TemplateKind) -> Self {
        Self {
            kind,
            name: None,
            size: None,
            level: None,
            max_health: None,
            max_mana: None,
            stats: None,
            movement_speed: None,
        }
    }

    /// Builder preloaded with this template. `waypoints` only matter for NPCs.
    pub fn builder(&self, waypoints: Vec<Position>) -> ActorBuilder {
        let mut builder = match &self.kind {
            TemplateKind::Player => ActorBuilder::player(),
            TemplateKind::Monster(spec) => ActorBuilder::monster(
                MonsterData::new(spec.aggro_range, spec.attack_range, spec.attack_cooldown)
                    .with_rewards(spec.exp_reward, spec.gold_reward),
            ),
            TemplateKind::Npc(spec) => {
                let mut data = NpcData {
                    role: spec.role,
                    dialog_id: spec.dialog_id.clone(),
                    pattern: spec.pattern,
                    interaction_range: spec.interaction_range,
                    ..NpcData::default()
                };
                if spec.pattern == MovementPattern::Patrol {
                    data.waypoints = waypoints;
                }
                ActorBuilder::npc(data)
            }
            TemplateKind::Obstacle(material) => ActorBuilder::obstacle(*material),
        };

        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some((width, height)) = self.size {
            builder = builder.size(width, height);
        }
        if let Some(level) = self.level {
            builder = builder.level(level);
        }
        if let Some(max_health) = self.max_health {
            builder = builder.max_health(max_health);
        }
        if let Some(max_mana) = self.max_mana {
            builder = builder.max_mana(max_mana);
        }
        if let Some(stats) = self.stats {
            builder = builder.stats(stats);
        }
        if let Some(speed) = self.movement_speed {
            builder = builder.movement_speed(speed);
        }
        builder
    }

    /// Builds a validated actor at `position`.
    pub fn instantiate(
        &self,
        position: Position,
        waypoints: Vec<Position>,
    ) -> Result<Actor, ActorError> {
        self.builder(waypoints).position(position).build()
    }
}

/// Templates indexed by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActorCatalog {
    templates: BTreeMap<String, ActorTemplate>,
}

impl ActorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template. Returns the template previously stored under `id`.
    pub fn insert(&mut self, id: impl Into<String>, template: ActorTemplate) -> Option<ActorTemplate> {
        self.templates.insert(id.into(), template)
    }

    pub fn get(&self, id: &str) -> Option<&ActorTemplate> {
        self.templates.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
