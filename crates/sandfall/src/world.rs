//! Simulation state and the per-tick update.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::api::CellApi;
use crate::cell::CellType;
use crate::elements;
use crate::layout::WallLayout;
use crate::Grid;

/// Per-tick record of cells that already took part in a swap.
///
/// Each cell carries the epoch of the tick that last touched it, so clearing
/// the mask is an epoch bump instead of a full wipe.
#[derive(Debug, Clone)]
pub struct MovedMask {
    stamps: Vec<u32>,
    epoch: u32,
}

impl MovedMask {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            stamps: vec![0; len],
            epoch: 1,
        }
    }

    pub fn clear(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            self.stamps.fill(0);
            self.epoch = 1;
        }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.stamps[index] == self.epoch
    }

    pub fn insert(&mut self, index: usize) {
        self.stamps[index] = self.epoch;
    }

    /// Number of cells marked since the last clear.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stamps.iter().filter(|&&s| s == self.epoch).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Grid, moved mask and seeded RNG. Created once and mutated in place.
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    moved: MovedMask,
    rng: Pcg32,
    layout: WallLayout,
    ticks: u64,
}

impl World {
    /// All-empty world with `layout` walls applied.
    #[must_use]
    pub fn new(width: usize, height: usize, seed: u64, layout: WallLayout) -> Self {
        let mut grid = Grid::new(width, height);
        layout.apply(&mut grid);
        debug!("world {width}x{height} seed={seed} layout={layout:?}");
        Self::with_layout(grid, seed, layout)
    }

    /// Wrap a pre-built grid. `clear` will leave it empty.
    #[must_use]
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self::with_layout(grid, seed, WallLayout::None)
    }

    fn with_layout(grid: Grid, seed: u64, layout: WallLayout) -> Self {
        Self {
            moved: MovedMask::new(grid.cells().len()),
            grid,
            rng: Pcg32::seed_from_u64(seed),
            layout,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Ticks completed since creation.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn layout(&self) -> WallLayout {
        self.layout
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> CellType {
        self.grid.get(x, y)
    }

    /// Overwrite a cell. Out of bounds is a no-op.
    pub fn place(&mut self, x: i32, y: i32, kind: CellType) {
        self.grid.set(x, y, kind);
    }

    /// Wipe every cell and put the wall layout back.
    pub fn clear(&mut self) {
        self.grid.fill(CellType::Empty);
        self.layout.apply(&mut self.grid);
        self.moved.clear();
        debug!("world cleared, layout={:?}", self.layout);
    }

    /// Whether `(x, y)` took part in a swap during the last tick.
    #[must_use]
    pub fn was_moved(&self, x: i32, y: i32) -> bool {
        self.grid.index(x, y).is_some_and(|i| self.moved.contains(i))
    }

    /// Advance every particle at most once.
    ///
    /// Rows go bottom to top so a cell is only evaluated after the row under
    /// it has settled. Even rows scan left to right, odd rows right to left.
    pub fn tick(&mut self) {
        self.moved.clear();
        let w = self.grid.width() as i32;
        let h = self.grid.height() as i32;

        for y in (0..h).rev() {
            let x_range: Box<dyn Iterator<Item = i32>> = if y % 2 == 0 {
                Box::new(0..w)
            } else {
                Box::new((0..w).rev())
            };
            for x in x_range {
                let i = y as usize * self.grid.width() + x as usize;
                if self.moved.contains(i) {
                    continue;
                }
                let kind = self.grid.cells[i];
                if !kind.is_particle() {
                    continue;
                }
                let mut api = CellApi::new(self, x, y);
                elements::update_cell(kind, &mut api);
            }
        }
        self.ticks += 1;
    }

    /// Move the particle at `from` into the Empty cell at `to`, marking both.
    ///
    /// The target may be a cell vacated earlier this tick, which is how a
    /// column of grains falls together.
    ///
    /// # Panics
    /// If either side is out of bounds, the mover already moved this tick, or
    /// the target is occupied. Each means the update rules are broken, and
    /// continuing would corrupt the grid.
    pub(crate) fn move_particle(&mut self, from: (i32, i32), to: (i32, i32)) {
        let (Some(src), Some(dst)) = (self.grid.index(from.0, from.1), self.grid.index(to.0, to.1))
        else {
            panic!("move outside grid: {from:?} -> {to:?}");
        };
        assert!(!self.moved.contains(src), "particle moved twice in one tick: {from:?}");
        assert_eq!(
            self.grid.cells[dst],
            CellType::Empty,
            "move into occupied cell: {from:?} -> {to:?}"
        );
        assert!(self.grid.swap(from, to), "move of a cell onto itself: {from:?}");
        self.moved.insert(src);
        self.moved.insert(dst);
    }

    /// Uniform tie-break between two options.
    pub(crate) fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
