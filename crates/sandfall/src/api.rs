//! Relative-offset API for element update functions.

use crate::cell::CellType;
use crate::world::World;

/// View of the world centred on the particle being updated.
///
/// Out-of-bounds reads return Wall. Moves are recorded in the world's moved
/// mask so the particle is not evaluated again this tick.
#[derive(Debug)]
pub struct CellApi<'a> {
    world: &'a mut World,
    pub x: i32,
    pub y: i32,
}

impl<'a> CellApi<'a> {
    pub fn new(world: &'a mut World, x: i32, y: i32) -> Self {
        Self { world, x, y }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> CellType {
        self.world.get(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_empty(&self, dx: i32, dy: i32) -> bool {
        self.get(dx, dy) == CellType::Empty
    }

    /// Swap this particle with the cell at `(dx, dy)` and follow it there.
    pub fn move_to(&mut self, dx: i32, dy: i32) {
        let from = (self.x, self.y);
        let to = (self.x + dx, self.y + dy);
        self.world.move_particle(from, to);
        self.x = to.0;
        self.y = to.1;
    }

    /// Fair coin from the world's seeded RNG.
    pub fn coin_flip(&mut self) -> bool {
        self.world.coin_flip()
    }
}
