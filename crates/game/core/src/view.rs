//! Read-only projections handed to renderers and remote clients.

use bitflags::bitflags;

use crate::state::{Actor, ActorTag, EntityId, Facing, Position};

bitflags! {
    /// One-tick markers for presentation effects (flash on hit, death animation).
    ///
    /// Set by the simulation as things happen and cleared at the start of the
    /// next step.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TickMarkers: u8 {
        const DAMAGED = 1 << 0;
        const DIED    = 1 << 1;
    }
}

/// What a renderer needs to draw one actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorView {
    pub id: EntityId,
    pub tag: ActorTag,
    pub name: String,
    pub position: Position,
    pub width: f32,
    pub height: f32,
    pub facing: Facing,
    pub moving: bool,
    pub health_fraction: f32,
    pub markers: TickMarkers,
}

impl Actor {
    pub fn view(&self) -> ActorView {
        let (width, height) = self.size();
        ActorView {
            id: self.id(),
            tag: self.tag(),
            name: self.name().to_owned(),
            position: self.position(),
            width,
            height,
            facing: self.facing(),
            moving: self.is_moving(),
            health_fraction: self.health_fraction(),
            markers: self.markers(),
        }
    }
}
