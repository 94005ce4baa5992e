//! Level construction: the gameplay brick grid and the boundary walls
//!
//! The layout is a fixed lattice. Each row gets one material, weakest at the
//! bottom row, so hit counts depend only on the row index.

use std::ops::{Index, IndexMut};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::entity::{Brick, Material, TextureHandle, Transform};
use crate::consts::BRICK_SCALE;
use crate::error::LevelError;

/// Grid and wall constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub rows: usize,
    pub cols: usize,
    /// Centre-to-centre distance between neighbouring bricks
    pub spacing: f32,
    /// Centre of the brick at row 0, column 0
    pub origin: (f32, f32),
    pub brick_scale: f32,
    pub left_wall: usize,
    pub right_wall: usize,
    pub top_wall: usize,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 10,
            spacing: 2.0,
            origin: (-9.0, 0.0),
            brick_scale: BRICK_SCALE,
            left_wall: 20,
            right_wall: 20,
            top_wall: 25,
        }
    }
}

/// Wall placement: side walls run up from y = -10 at x = ±12, the top wall
/// runs right from x = -12 at y = 10, one unit per brick.
const WALL_X: f32 = 12.0;
const WALL_BOTTOM_Y: f32 = -10.0;
const WALL_TOP_Y: f32 = 10.0;

impl LevelLayout {
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LevelError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(self.spacing > 0.0) {
            return Err(LevelError::BadSpacing(self.spacing));
        }
        if !(self.brick_scale > 0.0) {
            return Err(LevelError::BadScale(self.brick_scale));
        }
        for (wall, count) in [
            ("left", self.left_wall),
            ("right", self.right_wall),
            ("top", self.top_wall),
        ] {
            if count == 0 {
                return Err(LevelError::EmptyWall { wall });
            }
        }
        Ok(())
    }
}

/// Texture handles the host loaded for each material
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialTextures {
    pub grass: TextureHandle,
    pub cobble: TextureHandle,
    pub iron: TextureHandle,
    pub gold: TextureHandle,
    pub diamond: TextureHandle,
    pub emerald: TextureHandle,
    pub wall: TextureHandle,
    /// Shared by every brick once hit
    pub cracked: TextureHandle,
}

impl MaterialTextures {
    pub fn for_material(&self, material: Material) -> TextureHandle {
        match material {
            Material::Grass => self.grass,
            Material::Cobble => self.cobble,
            Material::Iron => self.iron,
            Material::Gold => self.gold,
            Material::Diamond => self.diamond,
            Material::Emerald => self.emerald,
            Material::Wall => self.wall,
        }
    }
}

/// Dense row-major grid of gameplay bricks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "brick ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Panics if `(row, col)` is outside the grid
    pub fn get(&self, row: usize, col: usize) -> &Brick {
        &self.bricks[self.offset(row, col)]
    }

    /// Panics if `(row, col)` is outside the grid
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Brick {
        let i = self.offset(row, col);
        &mut self.bricks[i]
    }

    /// Bricks in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    /// Bricks in row-major order with their (row, col)
    pub fn indexed(&self) -> impl Iterator<Item = ((usize, usize), &Brick)> {
        let cols = self.cols;
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, b)| ((i / cols, i % cols), b))
    }

    /// Mutable bricks in row-major order with their (row, col)
    pub fn iter_mut(&mut self) -> impl Iterator<Item = ((usize, usize), &mut Brick)> {
        let cols = self.cols;
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, b)| ((i / cols, i % cols), b))
    }

    /// True once no gameplay brick is alive
    pub fn all_dead(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }
}

impl Index<(usize, usize)> for BrickGrid {
    type Output = Brick;

    fn index(&self, (row, col): (usize, usize)) -> &Brick {
        self.get(row, col)
    }
}

impl IndexMut<(usize, usize)> for BrickGrid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Brick {
        self.get_mut(row, col)
    }
}

/// Indestructible bricks framing the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Walls {
    pub left: Vec<Brick>,
    pub right: Vec<Brick>,
    pub top: Vec<Brick>,
}

impl Walls {
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.left.iter().chain(&self.right).chain(&self.top)
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len() + self.top.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fully built level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub grid: BrickGrid,
    pub walls: Walls,
}

/// Build the brick grid and walls for `layout`
pub fn build_level(layout: &LevelLayout, textures: &MaterialTextures) -> Result<Level, LevelError> {
    layout.validate()?;

    let scale = Vec3::splat(layout.brick_scale);
    let (ox, oy) = layout.origin;

    let mut bricks = Vec::with_capacity(layout.rows * layout.cols);
    for row in 0..layout.rows {
        let material = Material::for_row(row);
        for col in 0..layout.cols {
            let position = Vec3::new(
                ox + layout.spacing * col as f32,
                oy + layout.spacing * row as f32,
                0.0,
            );
            let transform = Transform::new(position, scale, textures.for_material(material));
            bricks.push(Brick::new(transform, material, textures.cracked));
        }
    }

    let wall_brick = |position: Vec3| {
        Brick::new(
            Transform::new(position, scale, textures.wall),
            Material::Wall,
            textures.wall,
        )
    };
    let walls = Walls {
        left: (0..layout.left_wall)
            .map(|i| wall_brick(Vec3::new(-WALL_X, WALL_BOTTOM_Y + i as f32, 0.0)))
            .collect(),
        right: (0..layout.right_wall)
            .map(|i| wall_brick(Vec3::new(WALL_X, WALL_BOTTOM_Y + i as f32, 0.0)))
            .collect(),
        top: (0..layout.top_wall)
            .map(|i| wall_brick(Vec3::new(-WALL_X + i as f32, WALL_TOP_Y, 0.0)))
            .collect(),
    };

    log::info!(
        "Built level: {}x{} bricks, {} wall bricks",
        layout.rows,
        layout.cols,
        walls.len()
    );

    Ok(Level {
        grid: BrickGrid {
            rows: layout.rows,
            cols: layout.cols,
            bricks,
        },
        walls,
    })
}
