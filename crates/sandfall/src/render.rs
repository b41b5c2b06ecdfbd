//! Grid to pixel buffer.
//!
//! One cell is one pixel. Every frame is a full redraw.

use crate::cell::CellType;
use crate::Grid;

pub type Rgba = [u8; 4];

/// Colour for each cell type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub empty: Rgba,
    pub sand: Rgba,
    pub water: Rgba,
    pub wall: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: [0x10, 0x10, 0x14, 0xff],
            sand: [0xe2, 0xc0, 0x6e, 0xff],
            water: [0x3a, 0x7b, 0xd5, 0xff],
            wall: [0x80, 0x80, 0x80, 0xff],
        }
    }
}

impl Palette {
    /// Black background with everything else lit, for 1-bit displays.
    #[must_use]
    pub fn mono() -> Self {
        let on = [0xff, 0xff, 0xff, 0xff];
        Self {
            empty: [0x00, 0x00, 0x00, 0xff],
            sand: on,
            water: on,
            wall: on,
        }
    }

    #[must_use]
    pub fn color(&self, kind: CellType) -> Rgba {
        match kind {
            CellType::Empty => self.empty,
            CellType::Sand => self.sand,
            CellType::Water => self.water,
            CellType::Wall => self.wall,
        }
    }
}

/// RGBA8 pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Framebuffer {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
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

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// # Panics
    /// If `(x, y)` lies outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of range");
        let i = (y * self.width + x) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// One bit per pixel, most significant bit first, rows padded to whole
    /// bytes. A bit is set when the pixel's luma is at least 128.
    #[must_use]
    pub fn pack_mono(&self) -> Vec<u8> {
        let stride = self.width.div_ceil(8);
        let mut packed = vec![0u8; stride * self.height];
        for (i, px) in self.pixels.chunks_exact(4).enumerate() {
            if luma(px) >= 128 {
                let (x, y) = (i % self.width, i / self.width);
                packed[y * stride + x / 8] |= 0x80 >> (x % 8);
            }
        }
        packed
    }
}

/// Rec. 601 integer luma.
fn luma(px: &[u8]) -> u32 {
    (299 * u32::from(px[0]) + 587 * u32::from(px[1]) + 114 * u32::from(px[2])) / 1000
}

/// Draws a grid into a framebuffer with a fixed palette.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Redraw every pixel from `grid`.
    ///
    /// # Panics
    /// If the framebuffer and grid sizes differ.
    pub fn render(&self, grid: &Grid, frame: &mut Framebuffer) {
        assert!(
            frame.width == grid.width() && frame.height == grid.height(),
            "framebuffer {}x{} does not match grid {}x{}",
            frame.width,
            frame.height,
            grid.width(),
            grid.height()
        );
        for (px, &kind) in frame.pixels.chunks_exact_mut(4).zip(grid.cells()) {
            px.copy_from_slice(&self.palette.color(kind));
        }
    }
}
