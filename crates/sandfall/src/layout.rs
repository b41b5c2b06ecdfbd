//! Wall layouts stamped into the grid at startup and on clear.

use serde::{Deserialize, Serialize};

use crate::cell::CellType;
use crate::Grid;

/// Reference screen the ledge coordinates below were drawn on.
const REF_WIDTH: usize = 400;
const REF_HEIGHT: usize = 240;

/// Ledges as `(x_start, x_end, rows_above_bottom)` on the reference screen.
const LEDGES: [(usize, usize, usize); 4] = [
    (50, 350, 20),
    (80, 200, 60),
    (250, 370, 80),
    (150, 300, 120),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallLayout {
    /// No walls; the grid edge is the only boundary.
    None,
    /// Bottom row is Wall.
    #[default]
    Floor,
    /// Floor plus left and right columns. The top row stays open for spawning.
    Border,
    /// Floor plus four horizontal ledges, scaled to the grid size.
    Ledges,
}

impl WallLayout {
    /// Stamp this layout's walls into `grid`. Other cells are left alone.
    pub fn apply(self, grid: &mut Grid) {
        let w = grid.width() as i32;
        let h = grid.height() as i32;
        match self {
            Self::None => {}
            Self::Floor => floor(grid),
            Self::Border => {
                floor(grid);
                for y in 0..h {
                    grid.set(0, y, CellType::Wall);
                    grid.set(w - 1, y, CellType::Wall);
                }
            }
            Self::Ledges => {
                floor(grid);
                for (x0, x1, rise) in LEDGES {
                    let y = h - (rise * grid.height() / REF_HEIGHT) as i32;
                    let start = (x0 * grid.width() / REF_WIDTH) as i32;
                    let end = (x1 * grid.width() / REF_WIDTH) as i32;
                    for x in start..end {
                        grid.set(x, y, CellType::Wall);
                    }
                }
            }
        }
    }
}

fn floor(grid: &mut Grid) {
    let y = grid.height() as i32 - 1;
    for x in 0..grid.width() as i32 {
        grid.set(x, y, CellType::Wall);
    }
}
