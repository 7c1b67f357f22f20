//! This module holds basic types related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems in play, and every conversion in this
//! crate goes between them.
//!
//! ### Hex Coordinates
//!
//! Hex coordinates identify a single tile. We use the [axial coordinate
//! system described by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial):
//! each tile has two integer components, `q` and `r`. There is an implicit
//! third component `s = -q - r`, which turns an axial coordinate into a cube
//! coordinate (`q + r + s = 0` for every tile). We never store `s`, but it
//! shows up whenever the math is easier in three dimensions, most notably
//! when rounding a fractional position to a tile.
//!
//! Grids with an offset orientation ([Orientation::Rows] or
//! [Orientation::Columns]) use offset coordinates instead of axial ones. Those
//! are still stored in a [Hex], but every other row (or column) is shifted by
//! half a tile so the grid lines up with a rectangle. See
//! [crate::HexGrid::axial_to_rows] and friends for the conversions.
//!
//! ### World Coordinates
//!
//! World coordinates are continuous 2D positions, i.e. whatever space the
//! consumer renders into. The tile `[0,0]` is always centered on the origin.
//! The distance between the center of a tile and any of its vertices is the
//! grid's tile size. Which way the tiles point (pointy top or flat top)
//! depends on the grid's [Orientation].
//!
//! [Orientation]: crate::Orientation
//! [Orientation::Rows]: crate::Orientation::Rows
//! [Orientation::Columns]: crate::Orientation::Columns

mod direction;
mod unit;

pub use self::{direction::*, unit::*};
