//! Crank-driven falling sand simulation.
//!
//! The [`World`] owns the grid and advances it one tick at a time; the
//! [`Game`] wraps it with the spawner, crank input and renderer and runs
//! the fixed-rate frame loop against a [`Host`].

pub mod api;
pub mod cell;
pub mod config;
pub mod elements;
pub mod game;
pub mod input;
pub mod layout;
pub mod render;
pub mod spawner;
pub mod wasm;
pub mod world;

pub use cell::CellType;
pub use config::{ConfigError, SimConfig};
pub use game::{FrameClock, FrameReport, Game, Host};
pub use input::InputController;
pub use layout::WallLayout;
pub use render::{Framebuffer, Palette, Renderer};
pub use spawner::Spawner;
pub use world::World;

/// 2D grid of cells, row-major, `y` growing downward.
/// Out-of-bounds reads return Wall, writes are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellType>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellType::Empty; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major backing store.
    #[must_use]
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Row-major index of an in-bounds coordinate.
    #[must_use]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> CellType {
        match self.index(x, y) {
            Some(i) => self.cells[i],
            None => CellType::Wall,
        }
    }

    pub fn set(&mut self, x: i32, y: i32, kind: CellType) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = kind;
        }
    }

    /// Exchange two cells. No-op if either side is out of bounds or `a == b`.
    /// Returns whether anything was exchanged.
    pub fn swap(&mut self, a: (i32, i32), b: (i32, i32)) -> bool {
        if a == b {
            return false;
        }
        match (self.index(a.0, a.1), self.index(b.0, b.1)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    pub fn fill(&mut self, kind: CellType) {
        self.cells.fill(kind);
    }

    #[must_use]
    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Number of Sand and Water cells.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_particle()).count()
    }
}
