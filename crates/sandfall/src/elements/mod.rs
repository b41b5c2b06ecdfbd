//! Per-element update functions dispatched from the tick loop.

mod sand;
mod water;


use crate::api::CellApi;
use crate::cell::CellType;

/// Dispatch to the appropriate element update function.
///
/// Wall and Empty are no-ops and are skipped before calling this.
pub fn update_cell(kind: CellType, api: &mut CellApi) {
    match kind {
        CellType::Sand => sand::update_sand(api),
        CellType::Water => water::update_water(api),
        CellType::Empty | CellType::Wall => {}
    }
}

/// Gravity shared by every particle: straight down, else one of the two
/// lower diagonals. Returns whether the particle moved.
fn fall(api: &mut CellApi) -> bool {
    if api.is_empty(0, 1) {
        api.move_to(0, 1);
        return true;
    }
    slide(api, 1)
}

/// Move one column sideways on row offset `dy`. When both sides are free
/// the world RNG picks one.
fn slide(api: &mut CellApi, dy: i32) -> bool {
    let left = api.is_empty(-1, dy);
    let right = api.is_empty(1, dy);
    let dx = match (left, right) {
        (true, true) => {
            if api.coin_flip() {
                -1
            } else {
                1
            }
        }
        (true, false) => -1,
        (false, true) => 1,
        (false, false) => return false,
    };
    api.move_to(dx, dy);
    true
}
