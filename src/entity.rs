//! The moving entity as seen by the resolver
//!
//! Everything else about an entity (sprite, inventory, AI) lives with the
//! caller; the resolver only needs position, heading, the magnitude of the
//! last attempted move, and a circular collision footprint.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::normalize_angle;

/// An entity moving on a forward-speed/heading basis.
///
/// The resolver reads every field but writes only `pos`; heading and speed
/// stay whatever the mover set them to this tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Continuous world-space position (center of the footprint)
    pub pos: Vec2,
    /// Heading in radians; 0 = +Y ("up"), π/2 = +X
    pub direction: f32,
    /// Signed magnitude of the last attempted move along `direction`
    pub forward_speed: f32,
    /// Radius of the circular collision footprint
    pub radius: f32,
}

impl Entity {
    pub fn new(pos: Vec2, direction: f32, forward_speed: f32, radius: f32) -> Self {
        Self {
            pos,
            direction: normalize_angle(direction),
            forward_speed,
            radius,
        }
    }
}
