//! A small toolkit for hexagonal tile grids: conversions between hex
//! coordinates and world (2D Cartesian) positions, neighbour lookup, and
//! generation of standard map shapes. Rendering is left to the consumer, this
//! crate only deals with the geometry.
//!
//! ```
//! use hexgrid::{GridConfig, HexGrid, HexMap, MapConfig, MapShape};
//!
//! let grid = HexGrid::new(GridConfig::default()).unwrap();
//! let hex = grid.to_hex(1.5, -0.2);
//! let center = grid.to_world(hex);
//! assert_eq!(grid.to_hex(center.x, center.y), hex);
//!
//! let map = HexMap::generate(MapConfig {
//!     shape: MapShape::Triangle,
//!     size: 4,
//!     ..Default::default()
//! })
//! .unwrap();
//! assert_eq!(map.tiles().len(), 10);
//! ```
//!
//! See [Orientation] for the supported tilings and [MapShape] for the
//! supported map shapes.

mod config;
mod error;
mod grid;
mod hex;
mod map;
mod util;

pub use crate::{
    config::{GridConfig, MapConfig},
    error::HexError,
    grid::{
        ColumnsLayout, FlatLayout, HexGrid, Layout, MapShape, Orientation,
        PointyLayout, RowsLayout,
    },
    hex::{
        Hex, HexSet, NeighbourRing, WorldPoint, AXIAL_NEIGHBOURS,
        COLUMN_NEIGHBOURS_EVEN, COLUMN_NEIGHBOURS_ODD, EXTENDED_NEIGHBOURS,
        ROW_NEIGHBOURS_EVEN, ROW_NEIGHBOURS_ODD,
    },
    map::{HexMap, TileRelation},
};
