//! Revert-then-search orchestration

use glam::Vec2;

use super::capability::{CollisionCheck, Motion};
use super::search::{farther_candidate, search_free_position};
use super::{X_AXIS, Y_AXIS};
use crate::Entity;

/// Resolves collisions by reverting the offending move and searching for
/// the farthest reachable free position.
///
/// `C` answers "would this entity collide at that position" and `M` moves
/// positions along headings. Both are trusted to be pure, deterministic,
/// and synchronous; the caller must not run two resolutions against the
/// same entity concurrently.
pub struct CollisionResolver<C, M> {
    checker: C,
    motion: M,
}

impl<C, M> CollisionResolver<C, M>
where
    C: CollisionCheck,
    M: Motion,
{
    pub fn new(checker: C, motion: M) -> Self {
        Self { checker, motion }
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    pub fn motion(&self) -> &M {
        &self.motion
    }

    /// Leave `entity` at a non-colliding position, preserving as much of
    /// its last move as the geometry allows.
    ///
    /// Safe to call every tick: a non-colliding entity is left untouched.
    /// Only `pos` is written, once, when resolution finishes. The caller
    /// guarantees the pre-move position was free; if the whole search
    /// comes up empty the entity ends back there.
    pub fn resolve_collision(&self, entity: &mut Entity) {
        if !self.checker.collides(entity) {
            return;
        }

        // The last move put the entity inside geometry; walk it back out.
        let reverted =
            self.motion
                .shift_from(entity.pos, -entity.forward_speed, entity.direction);

        let resolved = self.find_free_position(entity, reverted);
        log::trace!(
            "collision at {:?} resolved to {:?} (heading {:.3}, speed {:.3})",
            entity.pos,
            resolved,
            entity.direction,
            entity.forward_speed
        );
        entity.pos = resolved;
    }

    /// Farthest reachable free position consistent with the entity's
    /// speed and heading, starting from the known-free `start`.
    fn find_free_position(&self, entity: &Entity, start: Vec2) -> Vec2 {
        let speed = entity.forward_speed;
        let direction = entity.direction;

        // How far does the original heading get us on its own?
        let free = self.search(entity, start, speed, direction);

        // Whatever the straight advance did not consume gets split across
        // the two world axes and spent in both orders.
        let residue = speed - start.distance(free);
        let x_speed = direction.sin() * residue;
        let y_speed = direction.cos() * residue;

        let x_first = {
            let p = self.search(entity, free, x_speed, X_AXIS);
            self.search(entity, p, y_speed, Y_AXIS)
        };
        let y_first = {
            let p = self.search(entity, free, y_speed, Y_AXIS);
            self.search(entity, p, x_speed, X_AXIS)
        };

        farther_candidate(free, x_first, y_first)
    }

    fn search(&self, entity: &Entity, start: Vec2, speed: f32, direction: f32) -> Vec2 {
        search_free_position(&self.checker, &self.motion, entity, start, speed, direction)
    }
}
