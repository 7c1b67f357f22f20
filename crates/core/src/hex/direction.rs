//! Fixed neighbour tables. Every table here is static data: the order of the
//! entries is part of the public contract, since callers index into them
//! positionally.

use crate::hex::Hex;

/// The 6 deltas that move an axial hex one step to a neighbouring tile. In
/// pointy-topped terms the order is: north, northeast, southeast, south,
/// southwest, northwest.
pub const AXIAL_NEIGHBOURS: [Hex; 6] = [
    Hex::new(0, 1),
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
];

/// Neighbour deltas for a tile on an even row of an odd-r offset grid. Entry
/// `i` reaches the same neighbour as [AXIAL_NEIGHBOURS]`[i]` does in axial
/// space.
pub const ROW_NEIGHBOURS_EVEN: [Hex; 6] = [
    Hex::new(0, 1),
    Hex::new(1, 0),
    Hex::new(0, -1),
    Hex::new(-1, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
];

/// Neighbour deltas for a tile on an odd row of an odd-r offset grid
pub const ROW_NEIGHBOURS_ODD: [Hex; 6] = [
    Hex::new(1, 1),
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(0, 1),
];

/// Neighbour deltas for a tile on an even column of an odd-q offset grid.
/// Entry `i` reaches the same neighbour as [AXIAL_NEIGHBOURS]`[i]` does in
/// axial space.
pub const COLUMN_NEIGHBOURS_EVEN: [Hex; 6] = [
    Hex::new(0, 1),
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, -1),
    Hex::new(-1, 0),
];

/// Neighbour deltas for a tile on an odd column of an odd-q offset grid
pub const COLUMN_NEIGHBOURS_ODD: [Hex; 6] = [
    Hex::new(0, 1),
    Hex::new(1, 1),
    Hex::new(1, 0),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
];

/// The extended neighbour table, in axial space. The first 6 entries are the
/// same as [AXIAL_NEIGHBOURS]. The last 6 are the "second ring" tiles that
/// sit diagonally across a vertex: north-northeast, east, south-southeast,
/// south-southwest, west, north-northwest.
pub const EXTENDED_NEIGHBOURS: [Hex; 12] = [
    // Primary
    Hex::new(0, 1),
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
    // Secondary
    Hex::new(1, 1),
    Hex::new(2, -1),
    Hex::new(1, -2),
    Hex::new(-1, -1),
    Hex::new(-2, 1),
    Hex::new(-1, 2),
];

/// Which ring of the extended neighbour table an index falls into
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NeighbourRing {
    /// Shares a side with the center tile (indices 0-5)
    Primary,
    /// Two steps away, straight out from one of the center tile's vertices
    /// (indices 6-11)
    Secondary,
}

impl NeighbourRing {
    /// Classify an index into [EXTENDED_NEIGHBOURS]. `None` if the index is
    /// out of range.
    pub fn of_index(index: usize) -> Option<Self> {
        match index {
            0..=5 => Some(Self::Primary),
            6..=11 => Some(Self::Secondary),
            _ => None,
        }
    }
}

impl Hex {
    /// Look up one of the 12 extended neighbours of this tile. See
    /// [EXTENDED_NEIGHBOURS] for the index order. `None` if the index isn't in
    /// `0..12`.
    pub fn extended_neighbour(self, index: usize) -> Option<Hex> {
        EXTENDED_NEIGHBOURS.get(index).map(|delta| self + *delta)
    }

    /// Find where `other` sits in this tile's extended neighbourhood. Returns
    /// the index into [EXTENDED_NEIGHBOURS], or `None` if `other` isn't within
    /// the 12 surrounding tiles (a tile is not its own neighbour).
    pub fn neighbour_index(self, other: Hex) -> Option<usize> {
        let delta = other - self;
        EXTENDED_NEIGHBOURS.iter().position(|d| *d == delta)
    }
}
