//! This sub-module contains the basic units of the coordinate systems. See the
//! parent module documentation for more info on the coordinate systems.

use crate::HexError;
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use fnv::FnvBuildHasher;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    hash::{Hash, Hasher},
    ops,
};

/// A set of hexes. This is the usual output type for
/// [HexGrid::create_layout](crate::HexGrid::create_layout), although any
/// `HashSet<Hex, _>` will do.
pub type HexSet = HashSet<Hex, FnvBuildHasher>;

/// A single tile in the hex coordinate system, identified by its axial
/// coordinates `(q, r)`. See module-level documentation for a description of
/// the coordinate system.
///
/// Any pair of integers is a valid hex, including `[0,0]`, which is just the
/// tile in the middle. There is no "invalid" sentinel value.
///
/// ## Arithmetic
///
/// All arithmetic operators work component-wise. Addition and subtraction are
/// the useful ones (e.g. adding a neighbour delta to a tile). Multiplication
/// and division are provided for convenience and carry no geometric meaning.
/// Division truncates towards zero, like integer division in Rust. Dividing by
/// a hex with a zero component panics, see [Hex::checked_div] for the
/// non-panicking version.
///
/// The operators use plain `i32` math, so overflow follows the usual Rust
/// rules: a panic in debug builds, wrapping in release builds. Only
/// [Hex::checked_div] reports overflow as an error. [Hex::hex_distance] works
/// in `i64` and never overflows.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Display,
    From,
    Into,
    Neg,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{},{}]", q, r)]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    /// The implicit third cube coordinate. Since `q + r + s = 0` for all
    /// tiles, we can always derive it from the other two.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The value fed into the hasher. Neighbouring rows are spread 3 apart so
    /// tiles in a compact shape rarely collide.
    pub const fn hash_code(&self) -> i32 {
        self.q.wrapping_add(self.r.wrapping_mul(3))
    }

    /// Number of single-tile steps it takes to get from this hex to the
    /// other. 0 if they're equal, 1 if they're adjacent, etc. This is **not**
    /// the same as [HexGrid::distance](crate::HexGrid::distance), which
    /// measures straight-line distance in world space.
    pub fn hex_distance(self, other: Hex) -> u64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let ds = -dq - dr;
        (dq.unsigned_abs() + dr.unsigned_abs() + ds.unsigned_abs()) / 2
    }

    /// Component-wise integer division. Returns an error if either component
    /// of the divisor is zero, or if the division overflows (`i32::MIN / -1`).
    pub fn checked_div(self, divisor: Hex) -> Result<Hex, HexError> {
        if divisor.q == 0 || divisor.r == 0 {
            return Err(HexError::DivisionByZero {
                dividend: self,
                divisor,
            });
        }

        match (self.q.checked_div(divisor.q), self.r.checked_div(divisor.r)) {
            (Some(q), Some(r)) => Ok(Hex::new(q, r)),
            _ => Err(HexError::DivisionOverflow {
                dividend: self,
                divisor,
            }),
        }
    }
}

// Hashing has to agree with the derived Eq, which it does because equal hexes
// always have equal hash codes
impl Hash for Hex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl ops::Mul for Hex {
    type Output = Hex;

    fn mul(self, rhs: Hex) -> Self::Output {
        Hex::new(self.q * rhs.q, self.r * rhs.r)
    }
}

impl ops::Div for Hex {
    type Output = Hex;

    /// Panics if either component of `rhs` is zero. Use [Hex::checked_div] if
    /// the divisor isn't known to be safe.
    fn div(self, rhs: Hex) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

/// A point in 2D world space. See module-level docs for a description of what
/// world space means. This is what tile centers get projected onto, and what
/// consumers pass back in when they want to know which tile is under a point.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared straight-line distance to another point
    pub fn distance_sqr(self, other: WorldPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl From<nalgebra::Vector2<f64>> for WorldPoint {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}
