//! Cell types stored in the simulation grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant values are what the WASM host reads back as bytes — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Wall = 3,
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Sand => write!(f, "Sand"),
            Self::Water => write!(f, "Water"),
            Self::Wall => write!(f, "Wall"),
        }
    }
}

impl CellType {
    /// Every variant, in discriminant order.
    pub const ALL: [CellType; 4] = [Self::Empty, Self::Sand, Self::Water, Self::Wall];

    /// Sand and Water move; Empty and Wall never do.
    #[must_use]
    pub fn is_particle(self) -> bool {
        matches!(self, Self::Sand | Self::Water)
    }

    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Sand),
            2 => Some(Self::Water),
            3 => Some(Self::Wall),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cell_type_is_one_byte() {
        assert_eq!(std::mem::size_of::<CellType>(), 1);
    }

    #[test]
    fn discriminant_values() {
        assert_eq!(CellType::Empty as u8, 0);
        assert_eq!(CellType::Sand as u8, 1);
        assert_eq!(CellType::Water as u8, 2);
        assert_eq!(CellType::Wall as u8, 3);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(CellType::default(), CellType::Empty);
    }

    #[test]
    fn only_sand_and_water_are_particles() {
        assert!(CellType::Sand.is_particle());
        assert!(CellType::Water.is_particle());
        assert!(!CellType::Empty.is_particle());
        assert!(!CellType::Wall.is_particle());
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", CellType::Sand), "Sand");
        assert_eq!(format!("{}", CellType::Wall), "Wall");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&CellType::Water).unwrap();
        assert_eq!(json, "\"water\"");
        let back: CellType = serde_json::from_str("\"sand\"").unwrap();
        assert_eq!(back, CellType::Sand);
    }

    proptest! {
        #[test]
        fn prop_from_u8_inverts_discriminant(value in any::<u8>()) {
            match CellType::from_u8(value) {
                Some(kind) => prop_assert_eq!(kind as u8, value),
                None => prop_assert!(value > 3),
            }
        }
    }
}
