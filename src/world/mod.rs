//! Concrete world geometry
//!
//! The resolver only sees the `CollisionCheck` capability; this module
//! supplies the shipped implementation of it, a rectangular grid of
//! solid/free tiles.

pub mod grid;

pub use grid::{DEFAULT_TILE_SIZE, TileGrid};
