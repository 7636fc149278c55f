//! Axis-separated, collision-aware movement.
//!
//! The horizontal and vertical components of a step are resolved one after
//! the other, each against the live set. An actor blocked on one axis keeps
//! sliding along the other.

use crate::state::{Bounds, Entities, EntityId, Facing, Position};

/// Moves an actor one step in direction `(dx, dy)`.
///
/// The direction is normalized and scaled by the actor's movement speed. The
/// X component is tried first against every other live actor, then the Y
/// component from wherever X ended up. Facing follows the requested
/// direction even when both axes are blocked.
///
/// Returns whether the actor changed position. A missing or dead actor, a
/// non-finite direction, or a step blocked on both axes yields false. A zero
/// direction only clears the moving flag and returns true.
pub fn move_actor(entities: &mut Entities, id: EntityId, dx: f32, dy: f32) -> bool {
    let Some(actor) = entities.get_mut(id) else {
        return false;
    };
    if !actor.is_alive() {
        return false;
    }
    if dx == 0.0 && dy == 0.0 {
        actor.set_moving(false);
        return true;
    }
    let length = (dx * dx + dy * dy).sqrt();
    if !length.is_finite() || length == 0.0 {
        return false;
    }

    let (ux, uy) = (dx / length, dy / length);
    let speed = actor.movement_speed();
    let start = actor.position();
    let (width, height) = actor.size();
    actor.set_facing(Facing::from_direction(dx, dy));

    let mut next = start;
    if ux != 0.0 {
        let candidate = Position::new(start.x + ux * speed, start.y);
        if !entities.collides(id, &Bounds::at(candidate, width, height)) {
            next.x = candidate.x;
        }
    }
    if uy != 0.0 {
        let candidate = Position::new(next.x, start.y + uy * speed);
        if !entities.collides(id, &Bounds::at(candidate, width, height)) {
            next.y = candidate.y;
        }
    }

    let Some(actor) = entities.get_mut(id) else {
        return false;
    };
    let moved = next != start;
    actor.set_moving(moved);
    actor.set_position(next);
    moved
}
