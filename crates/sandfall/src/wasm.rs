//! Browser bindings.
//!
//! The page calls [`Sandbox::frame`] from `requestAnimationFrame` with the
//! current crank angle, then copies the RGBA buffer at [`Sandbox::pixels_ptr`]
//! into an `ImageData`.

use wasm_bindgen::prelude::*;

use crate::cell::CellType;
use crate::config::SimConfig;
use crate::game::Game;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Sandbox {
    game: Game,
}

#[wasm_bindgen]
impl Sandbox {
    /// # Errors
    /// Zero width or height.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, seed: u32) -> Result<Sandbox, JsError> {
        let config = SimConfig {
            width,
            height,
            seed: u64::from(seed),
            ..SimConfig::default()
        };
        Self::from_config(config).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Advance one frame. Returns the number of particles on screen.
    pub fn frame(&mut self, angle: f32) -> usize {
        self.game.frame(angle).particles
    }

    pub fn clear(&mut self) {
        self.game.clear();
    }

    /// Paint a cell by its byte value. Unknown values and out-of-bounds
    /// coordinates are ignored.
    pub fn place(&mut self, x: i32, y: i32, kind: u8) {
        if let Some(kind) = CellType::from_u8(kind) {
            self.game.world_mut().place(x, y, kind);
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.game.config().width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.game.config().height
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.game.world().grid().particle_count()
    }

    #[must_use]
    pub fn pixels_ptr(&self) -> *const u8 {
        self.game.framebuffer().pixels().as_ptr()
    }

    #[must_use]
    pub fn pixels_len(&self) -> usize {
        self.game.framebuffer().pixels().len()
    }

    /// One byte per cell, holding the `CellType` discriminant.
    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.game.world().grid().cells().as_ptr().cast::<u8>()
    }
}

impl Sandbox {
    /// # Errors
    /// Any value rejected by [`SimConfig::validate`].
    pub fn from_config(config: SimConfig) -> Result<Self, crate::ConfigError> {
        Ok(Self {
            game: Game::new(config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sandbox() -> Sandbox {
        Sandbox::from_config(SimConfig {
            width: 16,
            height: 8,
            ..SimConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn frame_reports_particles() {
        let mut sandbox = sandbox();
        assert_eq!(sandbox.frame(0.0), 1);
        assert_eq!(sandbox.frame(0.0), 2);
        assert_eq!(sandbox.particle_count(), 2);
    }

    #[test]
    fn buffers_cover_the_grid() {
        let sandbox = sandbox();
        assert_eq!(sandbox.pixels_len(), 16 * 8 * 4);
        assert!(!sandbox.pixels_ptr().is_null());
        // Floor layout: the last cell is a wall.
        assert!(!sandbox.cells_ptr().is_null());
        let cells = sandbox.game.world().grid().cells();
        assert_eq!(cells.len(), 16 * 8);
        assert_eq!(cells[16 * 8 - 1], CellType::Wall);
        assert_eq!(cells[0], CellType::Empty);
    }

    #[test]
    fn place_ignores_unknown_bytes() {
        let mut sandbox = sandbox();
        sandbox.place(3, 3, CellType::Water as u8);
        sandbox.place(4, 3, 200);
        assert_eq!(sandbox.particle_count(), 1);
        sandbox.clear();
        assert_eq!(sandbox.particle_count(), 0);
        assert_eq!((sandbox.width(), sandbox.height()), (16, 8));
    }
}
