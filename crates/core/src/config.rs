use crate::{MapShape, Orientation};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a hex grid. A grid is created from one of these
/// via [HexGrid::new](crate::HexGrid::new), and once created its config never
/// changes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Distance from the center of a tile to any of its vertices, in world
    /// units. This is also the length of one side of a tile. Must be greater
    /// than zero.
    #[validate(range(exclusive_min = 0.0))]
    pub tile_size: f64,

    /// Which way the tiles point, and whether tiles are addressed with axial
    /// or offset coordinates
    pub orientation: Orientation,
}

/// Configuration for a complete map: a grid plus the shape of the region of
/// tiles that belong to it. See [HexMap::generate](crate::HexMap::generate).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// The shape of the generated region
    pub shape: MapShape,

    /// Size parameter for the shape. What exactly this means depends on the
    /// shape, see [MapShape] for details. For a hexagon it's the radius, so
    /// 0 means 1 tile, 1 means 7 tiles, 2 means 19, etc.
    #[validate(range(max = 10000))]
    pub size: u16,

    // Tables go last, so this can be written as TOML
    #[validate(nested)]
    pub grid: GridConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_size: 1.0,
            orientation: Orientation::Pointy,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            shape: MapShape::Hexagon,
            size: 5,
            grid: GridConfig::default(),
        }
    }
}
