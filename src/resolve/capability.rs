//! Collaborator seams for the resolver
//!
//! The resolver does not know what tiles look like or how positions move;
//! it consumes two capabilities. Both accept an explicit position so the
//! search can probe candidate positions without touching the live entity,
//! committing to it only once at the end of a resolution.

use glam::Vec2;

use crate::Entity;
use crate::step_from;

/// Collision test against world geometry.
///
/// Must be pure with respect to world state: evaluating it moves nothing.
pub trait CollisionCheck {
    /// Would `entity` collide if its footprint were centered at `pos`?
    fn collides_at(&self, entity: &Entity, pos: Vec2) -> bool;

    /// Collision test at the entity's current position.
    fn collides(&self, entity: &Entity) -> bool {
        self.collides_at(entity, entity.pos)
    }
}

/// Test stubs pass closures straight through.
impl<F> CollisionCheck for F
where
    F: Fn(&Entity, Vec2) -> bool,
{
    fn collides_at(&self, entity: &Entity, pos: Vec2) -> bool {
        self(entity, pos)
    }
}

/// Position displacement along a heading.
///
/// Must be deterministic and reversible: shifting by `d` then `-d` along
/// the same heading restores the original position up to float rounding.
/// The search relies on this when it walks probes back toward known-free
/// ground.
pub trait Motion {
    /// Position reached from `pos` after a signed `distance` along
    /// `direction`.
    fn shift_from(&self, pos: Vec2, distance: f32, direction: f32) -> Vec2;

    /// Shift the entity itself.
    fn shift(&self, entity: &mut Entity, distance: f32, direction: f32) {
        entity.pos = self.shift_from(entity.pos, distance, direction);
    }
}

/// Straight-line motion in the 0-is-up polar convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightMotion;

impl Motion for StraightMotion {
    fn shift_from(&self, pos: Vec2, distance: f32, direction: f32) -> Vec2 {
        step_from(pos, distance, direction)
    }
}
