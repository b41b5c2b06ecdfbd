//! Drops new particles into the top of the grid.

use log::trace;

use crate::cell::CellType;
use crate::world::World;

/// Places `kind` at the top of a column every `interval` ticks.
///
/// Occupied cells are skipped, never overwritten and never queued: a full
/// spawn column simply stops producing particles.
#[derive(Debug, Clone)]
pub struct Spawner {
    interval: u32,
    brush: usize,
    kind: CellType,
    calls: u64,
}

impl Spawner {
    /// `interval` and `brush` are clamped to at least 1.
    #[must_use]
    pub fn new(interval: u32, brush: usize, kind: CellType) -> Self {
        Self {
            interval: interval.max(1),
            brush: brush.max(1),
            kind,
            calls: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> CellType {
        self.kind
    }

    /// Run once per tick. Returns how many particles were created.
    pub fn spawn(&mut self, world: &mut World, column: usize) -> usize {
        let due = self.calls % u64::from(self.interval) == 0;
        self.calls += 1;
        if !due {
            return 0;
        }

        let x = column as i32;
        let mut placed = 0;
        for y in 0..self.brush as i32 {
            if world.get(x, y) == CellType::Empty {
                world.place(x, y, self.kind);
                placed += 1;
            } else {
                trace!("spawn at ({x}, {y}) skipped: {}", world.get(x, y));
            }
        }
        placed
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(1, 1, CellType::Sand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::WallLayout;
    use proptest::prelude::*;

    #[test]
    fn places_sand_on_top_row() {
        let mut world = World::new(10, 10, 0, WallLayout::Floor);
        let mut spawner = Spawner::default();
        assert_eq!(spawner.spawn(&mut world, 5), 1);
        assert_eq!(world.get(5, 0), CellType::Sand);
    }

    #[test]
    fn occupied_cell_is_skipped_without_overwrite() {
        let mut world = World::new(10, 10, 0, WallLayout::Floor);
        world.place(5, 0, CellType::Water);
        let mut spawner = Spawner::default();
        assert_eq!(spawner.spawn(&mut world, 5), 0);
        assert_eq!(world.get(5, 0), CellType::Water);
        assert_eq!(world.grid().particle_count(), 1);
    }

    #[test]
    fn column_outside_grid_spawns_nothing() {
        let mut world = World::new(10, 10, 0, WallLayout::None);
        let mut spawner = Spawner::default();
        assert_eq!(spawner.spawn(&mut world, 10), 0);
        assert_eq!(world.grid().particle_count(), 0);
    }

    #[test]
    fn interval_spaces_out_spawns() {
        let mut world = World::new(10, 10, 0, WallLayout::Floor);
        let mut spawner = Spawner::new(3, 1, CellType::Sand);
        let mut created = Vec::new();
        for _ in 0..7 {
            created.push(spawner.spawn(&mut world, 2));
            world.tick();
        }
        assert_eq!(created, vec![1, 0, 0, 1, 0, 0, 1]);
    }

    #[test]
    fn brush_fills_a_column_segment() {
        let mut world = World::new(10, 10, 0, WallLayout::Floor);
        world.place(4, 2, CellType::Wall);
        let mut spawner = Spawner::new(1, 5, CellType::Water);
        assert_eq!(spawner.kind(), CellType::Water);
        assert_eq!(spawner.spawn(&mut world, 4), 4);
        for y in [0, 1, 3, 4] {
            assert_eq!(world.get(4, y), CellType::Water);
        }
        assert_eq!(world.get(4, 2), CellType::Wall);
        assert_eq!(world.get(4, 5), CellType::Empty);
    }

    #[test]
    fn zero_settings_are_clamped() {
        let mut world = World::new(4, 4, 0, WallLayout::None);
        let mut spawner = Spawner::new(0, 0, CellType::Sand);
        assert_eq!(spawner.spawn(&mut world, 1), 1);
        assert_eq!(spawner.spawn(&mut world, 2), 1);
    }

    proptest! {
        #[test]
        fn prop_mass_grows_only_by_spawns(
            columns in proptest::collection::vec(0usize..12, 1..80),
            seed in any::<u64>(),
        ) {
            let mut world = World::new(12, 12, seed, WallLayout::Border);
            let mut spawner = Spawner::new(1, 2, CellType::Sand);
            for column in columns {
                let before = world.grid().particle_count();
                let spawned = spawner.spawn(&mut world, column);
                world.tick();
                prop_assert_eq!(world.grid().particle_count(), before + spawned);
            }
        }
    }
}
