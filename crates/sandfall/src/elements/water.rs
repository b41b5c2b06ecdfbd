//! Water element: falls like sand, then spreads one cell sideways.
//!
//! The sideways step is what lets a pile of water flatten out over a
//! floor instead of holding its shape.

use crate::api::CellApi;

pub fn update_water(api: &mut CellApi) {
    if super::fall(api) {
        return;
    }
    super::slide(api, 0);
}
