use crate::{
    hex::{Hex, HexSet, NeighbourRing},
    HexError, HexGrid, MapConfig, MapShape,
};
use log::debug;
use validator::Validate;

/// A generated map: a grid plus the set of tiles that belong to it. This is
/// the usual entry point for consumers that want a whole region of tiles
/// rather than individual conversions.
///
/// ```
/// use hexgrid::{HexMap, MapConfig};
///
/// let map = HexMap::generate(MapConfig::default()).unwrap();
/// println!("{}", map.tiles().len());
/// ```
#[derive(Clone, Debug)]
pub struct HexMap {
    /// The config used to generate this map. Shape and size can be changed
    /// later via [HexMap::regenerate], but the grid never changes.
    config: MapConfig,
    grid: HexGrid,
    tiles: HexSet,
}

/// How a tile relates to some selected tile. See [HexMap::relation].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileRelation {
    /// It's the selected tile itself
    Selected,
    /// It's one of the 12 extended neighbours of the selected tile
    Neighbour(NeighbourRing),
    Unrelated,
}

impl HexMap {
    /// Generate a new map with the given config. Returns an error if the
    /// config is invalid.
    pub fn generate(config: MapConfig) -> Result<Self, HexError> {
        debug!("Generating map with config {:#?}", config);

        config.validate()?;
        let grid = HexGrid::new(config.grid)?;
        let mut tiles = HexSet::default();
        grid.create_layout(config.shape, config.size, &mut tiles);

        Ok(Self {
            config,
            grid,
            tiles,
        })
    }

    /// Replace the tiles in this map with a new shape. The existing tile set
    /// is cleared and refilled in place. If the new size is invalid, returns
    /// an error and leaves the map untouched.
    pub fn regenerate(
        &mut self,
        shape: MapShape,
        size: u16,
    ) -> Result<(), HexError> {
        let config = MapConfig {
            shape,
            size,
            ..self.config
        };
        config.validate()?;

        self.grid.create_layout(shape, size, &mut self.tiles);
        self.config = config;
        Ok(())
    }

    /// Get a reference to the config that defines this map
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// Get a reference to the set of tiles that make up this map
    pub fn tiles(&self) -> &HexSet {
        &self.tiles
    }

    /// Get the owned tile set for this map
    pub fn into_tiles(self) -> HexSet {
        self.tiles
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.tiles.contains(&hex)
    }

    /// Find the tile under a world position. Returns `None` if the position
    /// falls outside the map.
    pub fn pick(&self, x: f64, y: f64) -> Option<Hex> {
        let hex = self.grid.to_hex(x, y);
        if self.contains(hex) {
            Some(hex)
        } else {
            None
        }
    }

    /// Get the tiles adjacent to the given one that are also in this map
    pub fn adjacents_in_map(
        &self,
        hex: Hex,
    ) -> impl Iterator<Item = Hex> + '_ {
        self.grid
            .adjacents(hex)
            .filter(move |adjacent| self.contains(*adjacent))
    }

    /// Figure out how `tile` relates to `selected`: the same tile, a close
    /// neighbour, a second ring neighbour, or nothing at all
    pub fn relation(&self, selected: Hex, tile: Hex) -> TileRelation {
        if selected == tile {
            return TileRelation::Selected;
        }

        self.grid
            .neighbour_index(selected, tile)
            .and_then(NeighbourRing::of_index)
            .map_or(TileRelation::Unrelated, TileRelation::Neighbour)
    }
}
