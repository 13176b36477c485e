//! Revert-then-search collision resolution
//!
//! The resolver receives an entity known to currently collide, walks it
//! back to its pre-move position, then bisects along the original heading
//! for the farthest free point. Whatever speed the straight advance did
//! not consume is split across the two world axes and spent in both
//! orders (X-then-Y and Y-then-X); the ordering that ends farther from
//! the straight-line stop wins. Trying both orders is what produces
//! wall-sliding: one order can stall in a dead end that the other avoids.
//!
//! Everything here is pure and deterministic: fixed iteration budget,
//! no randomness, no shared state between calls.

pub mod capability;
pub mod resolver;
pub mod search;

pub use capability::{CollisionCheck, Motion, StraightMotion};
pub use resolver::CollisionResolver;
pub use search::SEARCH_ITERATIONS;

/// Heading of the world X axis under the 0-is-up convention.
pub const X_AXIS: f32 = std::f32::consts::FRAC_PI_2;

/// Heading of the world Y axis.
pub const Y_AXIS: f32 = 0.0;
