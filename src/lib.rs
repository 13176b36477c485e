//! Wallslide - collision resolution for tile-based 2D worlds
//!
//! Given an entity that has just moved into solid geometry, compute its
//! final non-colliding position for the tick while preserving as much of
//! the original motion as possible (sliding along walls instead of
//! stopping dead).
//!
//! Core modules:
//! - `entity`: the moving entity (position, heading, forward speed)
//! - `resolve`: revert-then-search resolution (the interesting part)
//! - `world`: tile grid geometry implementing the collision capability
//!
//! The resolver is generic over two capabilities: a collision test
//! ([`resolve::CollisionCheck`]) and a position shift
//! ([`resolve::Motion`]), so it never needs to know what the world
//! geometry actually looks like. [`world::TileGrid`] is the shipped
//! geometry; tests stub the capabilities with closures.

pub mod entity;
pub mod resolve;
pub mod world;

pub use entity::Entity;
pub use resolve::{CollisionCheck, CollisionResolver, Motion, StraightMotion};
pub use world::TileGrid;

use glam::Vec2;

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Displace a position by a signed distance along a heading.
///
/// Heading convention: 0 points along +Y ("up"), π/2 along +X, so a step
/// of `distance` decomposes as `(distance * sin θ, distance * cos θ)`.
#[inline]
pub fn step_from(pos: Vec2, distance: f32, direction: f32) -> Vec2 {
    pos + distance * Vec2::new(direction.sin(), direction.cos())
}
