//! Sand element: falls down, then diagonally, never sideways.

use crate::api::CellApi;

pub fn update_sand(api: &mut CellApi) {
    super::fall(api);
}
