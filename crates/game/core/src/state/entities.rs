use super::{Actor, Bounds, EntityId};
use crate::config::SimConfig;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised when adding an actor to the live set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("live set is full ({max} actors)")]
    CapacityExceeded { max: usize },

    #[error("a live player already exists ({existing})")]
    DuplicatePlayer { existing: EntityId },
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "SPAWN_CAPACITY_EXCEEDED",
            Self::DuplicatePlayer { .. } => "SPAWN_DUPLICATE_PLAYER",
        }
    }
}

/// The live set: every actor taking part in the simulation, in spawn order.
///
/// Iteration order is insertion order and survives removals, so behavior
/// updates run in a stable, reproducible sequence. Ids are never reused.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entities {
    actors: Vec<Actor>,
    next_id: u32,
}

impl Default for Entities {
    fn default() -> Self {
        Self::new()
    }
}

impl Entities {
    pub fn new() -> Self {
        Self {
            actors: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds an actor, assigning it a fresh id.
    ///
    /// At most one live player may exist at a time.
    pub fn spawn(&mut self, mut actor: Actor) -> Result<EntityId, SpawnError> {
        if self.actors.len() >= SimConfig::MAX_ACTORS {
            return Err(SpawnError::CapacityExceeded {
                max: SimConfig::MAX_ACTORS,
            });
        }
        if actor.is_player() {
            if let Some(existing) = self.player_id() {
                return Err(SpawnError::DuplicatePlayer { existing });
            }
        }

        let id = EntityId(self.next_id);
        self.next_id += 1;
        actor.assign_id(id);
        tracing::debug!(actor = %id, name = actor.name(), kind = %actor.tag(), "spawned");
        self.actors.push(actor);
        Ok(id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Actor> {
        self.actors.iter().find(|actor| actor.id() == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|actor| actor.id() == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Returns true if the actor is in the set and has health left.
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.get(id).is_some_and(Actor::is_alive)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.iter_mut()
    }

    /// Snapshot of all ids in insertion order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.actors.iter().map(Actor::id).collect()
    }

    /// The living player, if any.
    pub fn player(&self) -> Option<&Actor> {
        self.actors
            .iter()
            .find(|actor| actor.is_player() && actor.is_alive())
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player().map(Actor::id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Returns true if `bounds` overlaps any live actor other than `id`.
    pub fn collides(&self, id: EntityId, bounds: &Bounds) -> bool {
        self.actors
            .iter()
            .filter(|other| other.id() != id && other.is_alive())
            .any(|other| other.bounds().overlaps(bounds))
    }

    /// Two distinct actors borrowed mutably at once.
    pub fn pair_mut(&mut self, a: EntityId, b: EntityId) -> Option<(&mut Actor, &mut Actor)> {
        if a == b {
            return None;
        }
        let ia = self.actors.iter().position(|actor| actor.id() == a)?;
        let ib = self.actors.iter().position(|actor| actor.id() == b)?;
        if ia < ib {
            let (head, tail) = self.actors.split_at_mut(ib);
            Some((&mut head[ia], &mut tail[0]))
        } else {
            let (head, tail) = self.actors.split_at_mut(ia);
            Some((&mut tail[0], &mut head[ib]))
        }
    }

    /// Removes every dead actor, preserving the order of the survivors.
    ///
    /// Returns the removed actors in their former order.
    pub fn remove_dead(&mut self) -> Vec<Actor> {
        let (alive, dead): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.actors)
                .into_iter()
                .partition(Actor::is_alive);
        self.actors = alive;
        dead
    }
}
