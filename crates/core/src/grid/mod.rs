mod layout;
mod shape;

pub use self::{
    layout::{
        ColumnsLayout, FlatLayout, Layout, Orientation, PointyLayout,
        RowsLayout,
    },
    shape::MapShape,
};

use crate::{
    grid::layout::{
        axial_to_columns, axial_to_rows, columns_to_axial, round_axial,
        rows_to_axial,
    },
    hex::{Hex, WorldPoint},
    GridConfig, HexError,
};
use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The geometry engine. A grid is bound to a single [GridConfig] (tile size +
/// orientation), and from there can convert between hex and world space,
/// measure distances, enumerate neighbours, and generate map shapes.
///
/// A grid holds no mutable state, so it can be copied and shared freely.
/// Config can't be changed after creating a grid, but grids are very cheap to
/// create so if you need a different config, just create a new grid.
///
/// ```
/// use hexgrid::{Hex, HexGrid, Orientation};
///
/// let grid = HexGrid::with_size(1.0, Orientation::Pointy).unwrap();
/// let center = grid.to_world(Hex::new(1, 0));
/// assert_eq!(grid.to_hex(center.x, center.y), Hex::new(1, 0));
/// ```
///
/// A grid serializes as its [GridConfig]. Deserializing goes through
/// [HexGrid::new], so an invalid config is rejected there too.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridConfig", into = "GridConfig")]
pub struct HexGrid {
    config: GridConfig,
}

impl TryFrom<GridConfig> for HexGrid {
    type Error = HexError;

    fn try_from(config: GridConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<HexGrid> for GridConfig {
    fn from(grid: HexGrid) -> Self {
        grid.config
    }
}

impl HexGrid {
    /// Initialize a new grid with the given config. Returns an error if the
    /// config is invalid, i.e. the tile size isn't a finite, positive number.
    pub fn new(config: GridConfig) -> Result<Self, HexError> {
        config.validate()?;
        if !config.tile_size.is_finite() {
            return Err(HexError::NonFiniteTileSize(config.tile_size));
        }

        debug!("Created hex grid with config {:?}", config);
        Ok(Self { config })
    }

    /// Shorthand for [HexGrid::new]
    pub fn with_size(
        tile_size: f64,
        orientation: Orientation,
    ) -> Result<Self, HexError> {
        Self::new(GridConfig {
            tile_size,
            orientation,
        })
    }

    /// Get a reference to the config that this grid uses
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn tile_size(&self) -> f64 {
        self.config.tile_size
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    fn layout(&self) -> &'static dyn Layout {
        self.config.orientation.layout()
    }

    /// Find the tile that contains a world position. For offset orientations,
    /// the returned hex is in offset coordinates.
    pub fn to_hex(self, x: f64, y: f64) -> Hex {
        let layout = self.layout();
        let (col, row) = layout.world_to_axial(x, y, self.tile_size());
        layout.axial_to_layout(round_axial(col, row))
    }

    /// Same as [Self::to_hex], but for a [WorldPoint]
    pub fn point_to_hex(&self, point: WorldPoint) -> Hex {
        self.to_hex(point.x, point.y)
    }

    /// Get the world position of a tile's center. This is exact, no rounding
    /// is involved.
    pub fn to_world(self, hex: Hex) -> WorldPoint {
        self.layout().hex_to_world(hex, self.tile_size())
    }

    /// Squared straight-line distance between two tile centers, in world
    /// units. This depends on the orientation, since the same hex lands in a
    /// different spot for each one.
    pub fn distance_sqr(&self, a: Hex, b: Hex) -> f64 {
        self.to_world(a).distance_sqr(self.to_world(b))
    }

    /// Straight-line distance between two tile centers, in world units. For
    /// the number of tile steps between two hexes, see [Hex::hex_distance].
    pub fn distance(&self, a: Hex, b: Hex) -> f64 {
        self.distance_sqr(a, b).sqrt()
    }

    /// The fixed table of 6 neighbour deltas for this grid's orientation. The
    /// order never changes, so it's safe to index into positionally. For
    /// offset orientations this is the table for even rows/columns; use
    /// [Self::adjacents] to get the neighbours of a specific tile.
    pub fn neighbours(&self) -> &'static [Hex; 6] {
        self.layout().neighbours()
    }

    /// Get an iterator of all the tiles directly adjacent to this one, in the
    /// same order as [Self::neighbours]. The iterator will always contain
    /// exactly 6 values.
    pub fn adjacents(&self, hex: Hex) -> impl Iterator<Item = Hex> {
        self.layout()
            .neighbours_of(hex)
            .iter()
            .map(move |delta| hex + *delta)
    }

    /// Get one of the 12 extended neighbours of a tile. Indices 0-5 are the
    /// adjacent tiles, 6-11 are the second ring. See
    /// [EXTENDED_NEIGHBOURS](crate::EXTENDED_NEIGHBOURS) for the order.
    ///
    /// **Any index outside `0..12` returns the input hex unchanged.** Use
    /// [Self::try_get_neighbour] if you'd rather get an error.
    pub fn get_neighbour(hex: Hex, index: usize) -> Hex {
        hex.extended_neighbour(index).unwrap_or(hex)
    }

    /// Same as [Self::get_neighbour], but returns an error for an out of
    /// range index instead of the input hex
    pub fn try_get_neighbour(hex: Hex, index: usize) -> Result<Hex, HexError> {
        hex.extended_neighbour(index)
            .ok_or(HexError::NeighbourIndexOutOfRange(index))
    }

    /// Find where `other` sits in the extended neighbourhood of `center`.
    /// Returns the index that [Self::get_neighbour] would need to reach it,
    /// or `None` if it's not one of the 12 surrounding tiles. Offset
    /// coordinates are converted to axial before comparing, so this works
    /// for every orientation.
    pub fn neighbour_index(&self, center: Hex, other: Hex) -> Option<usize> {
        let layout = self.layout();
        layout
            .layout_to_axial(center)
            .neighbour_index(layout.layout_to_axial(other))
    }

    /// Convert pointy axial coordinates to odd-r offset coordinates. Only
    /// valid for pointy-topped grids ([Orientation::Pointy] or
    /// [Orientation::Rows]).
    pub fn axial_to_rows(&self, axial: Hex) -> Result<Hex, HexError> {
        self.require_pointy("row offset conversion")?;
        Ok(axial_to_rows(axial))
    }

    /// Convert odd-r offset coordinates back to pointy axial coordinates.
    /// Only valid for pointy-topped grids.
    pub fn rows_to_axial(&self, offset: Hex) -> Result<Hex, HexError> {
        self.require_pointy("row offset conversion")?;
        Ok(rows_to_axial(offset))
    }

    /// Convert flat axial coordinates to odd-q offset coordinates. Only valid
    /// for flat-topped grids ([Orientation::Flat] or [Orientation::Columns]).
    pub fn axial_to_columns(&self, axial: Hex) -> Result<Hex, HexError> {
        self.require_flat("column offset conversion")?;
        Ok(axial_to_columns(axial))
    }

    /// Convert odd-q offset coordinates back to flat axial coordinates. Only
    /// valid for flat-topped grids.
    pub fn columns_to_axial(&self, offset: Hex) -> Result<Hex, HexError> {
        self.require_flat("column offset conversion")?;
        Ok(columns_to_axial(offset))
    }

    fn require_pointy(&self, operation: &'static str) -> Result<(), HexError> {
        if self.orientation().is_flat_topped() {
            Err(HexError::IncompatibleOrientation {
                operation,
                expected: "pointy-topped",
                actual: self.orientation(),
            })
        } else {
            Ok(())
        }
    }

    fn require_flat(&self, operation: &'static str) -> Result<(), HexError> {
        if self.orientation().is_flat_topped() {
            Ok(())
        } else {
            Err(HexError::IncompatibleOrientation {
                operation,
                expected: "flat-topped",
                actual: self.orientation(),
            })
        }
    }
}
