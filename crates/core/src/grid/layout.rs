//! Orientation-specific math. Each [Orientation] is backed by a [Layout]
//! implementation, and [Orientation::layout] acts as the dispatch table
//! between the two. Adding an orientation means adding a variant and a
//! layout, nothing in [HexGrid](crate::HexGrid) needs to change.

use crate::hex::{
    Hex, WorldPoint, AXIAL_NEIGHBOURS, COLUMN_NEIGHBOURS_EVEN,
    COLUMN_NEIGHBOURS_ODD, ROW_NEIGHBOURS_EVEN, ROW_NEIGHBOURS_ODD,
};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::{Display, EnumIter, EnumString};

/// sqrt(3). The std constant for this is still unstable.
pub(crate) const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// How tiles are laid out in world space, and how they are addressed.
///
/// There are two families here. The simple family ([Self::Pointy] and
/// [Self::Flat]) addresses tiles with plain axial coordinates. The offset
/// family ([Self::Rows] and [Self::Columns]) addresses tiles with offset
/// coordinates, which are derived from the pointy and flat axial systems
/// respectively.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Pointy-topped tiles, axial coordinates
    #[default]
    Pointy,
    /// Flat-topped tiles, axial coordinates
    Flat,
    /// Pointy-topped tiles, odd-r offset coordinates. Every odd row is shoved
    /// half a tile to the right.
    Rows,
    /// Flat-topped tiles, odd-q offset coordinates. Every odd column is
    /// shoved half a tile down (towards +y).
    Columns,
}

impl Orientation {
    /// Get the layout that implements the math for this orientation
    pub fn layout(self) -> &'static dyn Layout {
        match self {
            Self::Pointy => &PointyLayout,
            Self::Flat => &FlatLayout,
            Self::Rows => &RowsLayout,
            Self::Columns => &ColumnsLayout,
        }
    }

    /// Is this orientation a member of the simple (axial-only) family?
    pub fn is_axial(self) -> bool {
        matches!(self, Self::Pointy | Self::Flat)
    }

    /// Do tiles in this orientation have a flat top? This is the "flipped"
    /// member of each pair, which affects shape generation.
    pub fn is_flat_topped(self) -> bool {
        self.layout().is_flat_topped()
    }
}

/// The math behind a single [Orientation]. Implementations are stateless;
/// everything that varies between grids (i.e. the tile size) is passed in.
pub trait Layout: Debug + Send + Sync {
    /// Does this layout produce flat-topped tiles?
    fn is_flat_topped(&self) -> bool;

    /// Convert a world position to a fractional **axial** position. For
    /// offset layouts this is still axial, the offset conversion happens after
    /// rounding, via [Layout::axial_to_layout].
    fn world_to_axial(&self, x: f64, y: f64, tile_size: f64) -> (f64, f64);

    /// Convert a tile (in this layout's own coordinates) to the world
    /// position of its center
    fn hex_to_world(&self, hex: Hex, tile_size: f64) -> WorldPoint;

    /// Convert an axial hex (pointy axial for pointy-topped layouts, flat
    /// axial for flat-topped ones) into this layout's coordinates
    fn axial_to_layout(&self, axial: Hex) -> Hex;

    /// Inverse of [Layout::axial_to_layout]
    fn layout_to_axial(&self, hex: Hex) -> Hex;

    /// The fixed neighbour table for this layout. For offset layouts this is
    /// the table for even rows/columns, see [Layout::neighbours_of] for one
    /// that's correct for any tile.
    fn neighbours(&self) -> &'static [Hex; 6];

    /// The neighbour table that applies to a particular tile. Only differs
    /// from [Layout::neighbours] for offset layouts, where odd rows/columns
    /// have their own table.
    fn neighbours_of(&self, _hex: Hex) -> &'static [Hex; 6] {
        self.neighbours()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct PointyLayout;

impl Layout for PointyLayout {
    fn is_flat_topped(&self) -> bool {
        false
    }

    fn world_to_axial(&self, x: f64, y: f64, tile_size: f64) -> (f64, f64) {
        let inverse = Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0);
        let axial = inverse * Vector2::new(x, y) / tile_size;
        (axial.x, axial.y)
    }

    fn hex_to_world(&self, hex: Hex, tile_size: f64) -> WorldPoint {
        let forward = Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 1.5);
        (forward * hex_vector(hex) * tile_size).into()
    }

    fn axial_to_layout(&self, axial: Hex) -> Hex {
        axial
    }

    fn layout_to_axial(&self, hex: Hex) -> Hex {
        hex
    }

    fn neighbours(&self) -> &'static [Hex; 6] {
        &AXIAL_NEIGHBOURS
    }
}

#[derive(Copy, Clone, Debug)]
pub struct FlatLayout;

impl Layout for FlatLayout {
    fn is_flat_topped(&self) -> bool {
        true
    }

    fn world_to_axial(&self, x: f64, y: f64, tile_size: f64) -> (f64, f64) {
        let inverse = Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0);
        let axial = inverse * Vector2::new(x, y) / tile_size;
        (axial.x, axial.y)
    }

    fn hex_to_world(&self, hex: Hex, tile_size: f64) -> WorldPoint {
        let forward = Matrix2::new(1.5, 0.0, SQRT_3 / 2.0, SQRT_3);
        (forward * hex_vector(hex) * tile_size).into()
    }

    fn axial_to_layout(&self, axial: Hex) -> Hex {
        axial
    }

    fn layout_to_axial(&self, hex: Hex) -> Hex {
        hex
    }

    fn neighbours(&self) -> &'static [Hex; 6] {
        &AXIAL_NEIGHBOURS
    }
}

/// Odd-r offset layout, built on top of [PointyLayout]
#[derive(Copy, Clone, Debug)]
pub struct RowsLayout;

impl Layout for RowsLayout {
    fn is_flat_topped(&self) -> bool {
        false
    }

    fn world_to_axial(&self, x: f64, y: f64, tile_size: f64) -> (f64, f64) {
        PointyLayout.world_to_axial(x, y, tile_size)
    }

    fn hex_to_world(&self, hex: Hex, tile_size: f64) -> WorldPoint {
        let shift = 0.5 * f64::from(parity(hex.r()));
        WorldPoint::new(
            tile_size * SQRT_3 * (f64::from(hex.q()) + shift),
            tile_size * (1.5 * f64::from(hex.r())),
        )
    }

    fn axial_to_layout(&self, axial: Hex) -> Hex {
        axial_to_rows(axial)
    }

    fn layout_to_axial(&self, hex: Hex) -> Hex {
        rows_to_axial(hex)
    }

    fn neighbours(&self) -> &'static [Hex; 6] {
        &ROW_NEIGHBOURS_EVEN
    }

    fn neighbours_of(&self, hex: Hex) -> &'static [Hex; 6] {
        if parity(hex.r()) == 0 {
            &ROW_NEIGHBOURS_EVEN
        } else {
            &ROW_NEIGHBOURS_ODD
        }
    }
}

/// Odd-q offset layout, built on top of [FlatLayout]
#[derive(Copy, Clone, Debug)]
pub struct ColumnsLayout;

impl Layout for ColumnsLayout {
    fn is_flat_topped(&self) -> bool {
        true
    }

    fn world_to_axial(&self, x: f64, y: f64, tile_size: f64) -> (f64, f64) {
        FlatLayout.world_to_axial(x, y, tile_size)
    }

    fn hex_to_world(&self, hex: Hex, tile_size: f64) -> WorldPoint {
        let shift = 0.5 * f64::from(parity(hex.q()));
        WorldPoint::new(
            tile_size * (1.5 * f64::from(hex.q())),
            tile_size * SQRT_3 * (f64::from(hex.r()) + shift),
        )
    }

    fn axial_to_layout(&self, axial: Hex) -> Hex {
        axial_to_columns(axial)
    }

    fn layout_to_axial(&self, hex: Hex) -> Hex {
        columns_to_axial(hex)
    }

    fn neighbours(&self) -> &'static [Hex; 6] {
        &COLUMN_NEIGHBOURS_EVEN
    }

    fn neighbours_of(&self, hex: Hex) -> &'static [Hex; 6] {
        if parity(hex.q()) == 0 {
            &COLUMN_NEIGHBOURS_EVEN
        } else {
            &COLUMN_NEIGHBOURS_ODD
        }
    }
}

fn hex_vector(hex: Hex) -> Vector2<f64> {
    Vector2::new(f64::from(hex.q()), f64::from(hex.r()))
}

/// 0 for even numbers, 1 for odd. This is a bitwise and on the two's
/// complement representation, so `parity(-1) == 1`. `%` would give -1 there.
pub(crate) fn parity(value: i32) -> i32 {
    value & 1
}

/// Pointy axial -> odd-r offset
pub(crate) fn axial_to_rows(axial: Hex) -> Hex {
    let r = axial.r();
    Hex::new(axial.q() + (r - parity(r)) / 2, r)
}

/// Odd-r offset -> pointy axial
pub(crate) fn rows_to_axial(offset: Hex) -> Hex {
    let r = offset.r();
    Hex::new(offset.q() - (r - parity(r)) / 2, r)
}

/// Flat axial -> odd-q offset
pub(crate) fn axial_to_columns(axial: Hex) -> Hex {
    let q = axial.q();
    Hex::new(q, axial.r() + (q - parity(q)) / 2)
}

/// Odd-q offset -> flat axial
pub(crate) fn columns_to_axial(offset: Hex) -> Hex {
    let q = offset.q();
    Hex::new(q, offset.r() - (q - parity(q)) / 2)
}

/// Round a fractional axial position to the tile that contains it. This
/// rounds in cube space: all three cube components are rounded
/// independently, then whichever one moved the furthest gets recomputed from
/// the other two so that `q + r + s = 0` holds again. Rounding only `q` and
/// `r` would sometimes land on a neighbour of the correct tile.
///
/// Ties are checked in a fixed order: `q` is only recomputed if its deviation
/// is strictly the largest, then `r` if it beats `s`, otherwise `s` is the
/// one that gets discarded (which is implicit, since we don't return it).
/// Individual components round half to even.
///
/// https://www.redblobgames.com/grids/hexagons/#rounding
pub(crate) fn round_axial(col: f64, row: f64) -> Hex {
    let frac_s = -col - row;

    let mut q = col.round_ties_even();
    let mut r = row.round_ties_even();
    let s = frac_s.round_ties_even();

    let q_diff = (q - col).abs();
    let r_diff = (r - row).abs();
    let s_diff = (s - frac_s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        q = -r - s;
    } else if r_diff > s_diff {
        r = -q - s;
    }

    Hex::new(q as i32, r as i32)
}
