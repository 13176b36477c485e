//! Tile grid geometry
//!
//! A rectangular grid of solid/free tiles with a circle-vs-tile overlap
//! test. Everything outside the grid counts as solid, so a grid always
//! has walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Entity;
use crate::resolve::CollisionCheck;

/// Default tile edge length in world units.
pub const DEFAULT_TILE_SIZE: f32 = 1.0;

/// A rectangular grid of solid/free tiles.
///
/// Tile `(tx, ty)` covers the world-space square
/// `[tx * tile_size, (tx + 1) * tile_size) × [ty * tile_size, (ty + 1) * tile_size)`,
/// with `ty` growing upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tile_size: f32,
    solid: Vec<bool>,
}

impl TileGrid {
    /// An all-free grid of the given dimensions.
    pub fn new(width: usize, height: usize, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            solid: vec![false; width * height],
        }
    }

    /// Build a grid from ASCII art: `#` is solid, anything else is free.
    /// The first line is the top row of the world; tile size is
    /// [`DEFAULT_TILE_SIZE`].
    ///
    /// ```
    /// use wallslide::TileGrid;
    ///
    /// let grid = TileGrid::from_ascii(
    ///     "####
    ///      #..#
    ///      ####",
    /// );
    /// assert!(grid.is_solid(0, 0));
    /// assert!(!grid.is_solid(1, 1));
    /// ```
    pub fn from_ascii(art: &str) -> Self {
        let rows: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);

        let mut grid = Self::new(width, height, DEFAULT_TILE_SIZE);
        for (row_idx, row) in rows.iter().enumerate() {
            let ty = height - 1 - row_idx;
            for (tx, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.set_solid(tx, ty, true);
                }
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn set_solid(&mut self, tx: usize, ty: usize, solid: bool) {
        if tx < self.width && ty < self.height {
            self.solid[tx + ty * self.width] = solid;
        }
    }

    /// Whether the tile at `(tx, ty)` is solid. Out-of-bounds tiles are.
    pub fn is_solid(&self, tx: i32, ty: i32) -> bool {
        if tx < 0 || ty < 0 || tx >= self.width as i32 || ty >= self.height as i32 {
            return true;
        }
        self.solid[tx as usize + ty as usize * self.width]
    }

    /// Does a circle at `center` with `radius` overlap any solid tile?
    ///
    /// Grazing contact (distance exactly equal to the radius) does not
    /// count, so an entity can slide flush along a wall.
    pub fn circle_hits_solid(&self, center: Vec2, radius: f32) -> bool {
        let min_tx = ((center.x - radius) / self.tile_size).floor() as i32;
        let max_tx = ((center.x + radius) / self.tile_size).floor() as i32;
        let min_ty = ((center.y - radius) / self.tile_size).floor() as i32;
        let max_ty = ((center.y + radius) / self.tile_size).floor() as i32;

        for ty in min_ty..=max_ty {
            for tx in min_tx..=max_tx {
                if !self.is_solid(tx, ty) {
                    continue;
                }
                let min = Vec2::new(tx as f32, ty as f32) * self.tile_size;
                let max = min + Vec2::splat(self.tile_size);
                let closest = center.clamp(min, max);
                if center.distance_squared(closest) < radius * radius {
                    return true;
                }
            }
        }
        false
    }
}

impl CollisionCheck for TileGrid {
    fn collides_at(&self, entity: &Entity, pos: Vec2) -> bool {
        self.circle_hits_solid(pos, entity.radius)
    }
}
