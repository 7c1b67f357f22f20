use crate::{timed, Hex, HexGrid};
use serde::{Deserialize, Serialize};
use std::{cmp, collections::HashSet, hash::BuildHasher};
use strum::{Display, EnumIter, EnumString};

/// The shape of a generated map region. Every shape is centered near the
/// origin, and is controlled by a single size parameter `n`. Division here is
/// integer division.
#[derive(
    Copy,
    Clone,
    Debug,
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
pub enum MapShape {
    /// A large hexagon with radius `n`: every tile at most `n` steps from the
    /// origin.
    Hexagon,
    /// A rhombus, with `q` and `r` both in `[-n/2, n/2)`
    Rhombus,
    /// Same ranges as [Self::Rhombus], but each tile is stored as
    /// `(q, -q-r)`, which shears it into a diamond
    Diamond,
    /// A right triangle with `n` tiles along each leg, anchored at the origin
    Triangle,
    /// A visually rectangular region, `n` tiles tall with every row shifted
    /// back by half its index so the rows line up
    Rectangle,
}

impl MapShape {
    /// The number of tiles that [HexGrid::create_layout] will produce for
    /// this shape with size `n`. Doesn't depend on the orientation.
    pub fn tile_count(self, size: u16) -> usize {
        let n = size as usize;
        match self {
            // We'll always have 3n^2+3n+1 tiles (a reduction of a geometric
            // sum). f(0) = 1, and we add 6n tiles for every step after that:
            // 1, (+6) 7, (+12) 19, (+18) 37, ...
            Self::Hexagon => 3 * n * n + 3 * n + 1,
            Self::Rhombus | Self::Diamond | Self::Rectangle => {
                let side = 2 * (n / 2);
                side * side
            }
            Self::Triangle => n * (n + 1) / 2,
        }
    }
}

impl HexGrid {
    /// Fill `result` with every tile that belongs to the given shape. The set
    /// is cleared first, so calling this repeatedly with the same arguments
    /// always produces the same set. The caller keeps ownership of the set,
    /// so its allocation can be reused across regenerations.
    ///
    /// For flat-topped grids, the `q` and `r` of each tile are swapped, which
    /// rotates the shape to match the tiling. For offset grids, tiles are
    /// then converted to offset coordinates so that [Self::to_world] puts
    /// them in the right spot.
    pub fn create_layout<S: BuildHasher>(
        &self,
        shape: MapShape,
        size: u16,
        result: &mut HashSet<Hex, S>,
    ) {
        result.clear();
        result.reserve(shape.tile_count(size));

        let orientation = self.orientation();
        let layout = orientation.layout();
        let flip = orientation.is_flat_topped();
        let mut insert = |q: i32, r: i32| {
            let axial = if flip { Hex::new(r, q) } else { Hex::new(q, r) };
            result.insert(layout.axial_to_layout(axial));
        };

        let n = i32::from(size);
        let half = n / 2;
        timed!(
            format!("{} layout of size {}", shape, size),
            log::Level::Trace,
            match shape {
                MapShape::Hexagon => {
                    for q in -n..=n {
                        // If we just do [-n,n] for r as well, then we end up
                        // with a rhombus instead of a hexagon
                        // https://www.redblobgames.com/grids/hexagons/#range
                        let r_min = cmp::max(-n, -q - n);
                        let r_max = cmp::min(n, -q + n);
                        for r in r_min..=r_max {
                            insert(q, r);
                        }
                    }
                }
                MapShape::Rhombus => {
                    for r in -half..half {
                        for q in -half..half {
                            insert(q, r);
                        }
                    }
                }
                MapShape::Diamond => {
                    for r in -half..half {
                        for q in -half..half {
                            insert(q, -q - r);
                        }
                    }
                }
                MapShape::Triangle => {
                    for q in 0..n {
                        for r in 0..(n - q) {
                            insert(q, r);
                        }
                    }
                }
                MapShape::Rectangle => {
                    for r in -half..half {
                        // Arithmetic shift, so negative rows round down
                        let offset = r >> 1;
                        for q in (-half - offset)..(half - offset) {
                            insert(q, r);
                        }
                    }
                }
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HexSet, Orientation};
    use strum::IntoEnumIterator;

    fn layout(orientation: Orientation, shape: MapShape, size: u16) -> HexSet {
        let grid = HexGrid::with_size(1.0, orientation).unwrap();
        let mut tiles = HexSet::default();
        grid.create_layout(shape, size, &mut tiles);
        tiles
    }

    fn sorted(tiles: &HexSet) -> Vec<Hex> {
        let mut tiles: Vec<Hex> = tiles.iter().copied().collect();
        tiles.sort();
        tiles
    }

    #[test]
    fn test_tile_count() {
        assert_eq!(MapShape::Hexagon.tile_count(0), 1);
        assert_eq!(MapShape::Hexagon.tile_count(1), 7);
        assert_eq!(MapShape::Hexagon.tile_count(2), 19);
        assert_eq!(MapShape::Hexagon.tile_count(3), 37);
        assert_eq!(MapShape::Rhombus.tile_count(1), 0);
        assert_eq!(MapShape::Rhombus.tile_count(5), 16);
        assert_eq!(MapShape::Triangle.tile_count(4), 10);
    }

    #[test]
    fn test_layout_sizes_match_tile_count() {
        for orientation in Orientation::iter() {
            for shape in MapShape::iter() {
                for size in 0..8 {
                    assert_eq!(
                        layout(orientation, shape, size).len(),
                        shape.tile_count(size),
                        "{} {} of size {}",
                        orientation,
                        shape,
                        size
                    );
                }
            }
        }
    }

    #[test]
    fn test_hexagon() {
        let tiles = layout(Orientation::Pointy, MapShape::Hexagon, 1);
        // Radius 1 is the origin plus its 6 neighbours
        let mut expected: Vec<Hex> = crate::AXIAL_NEIGHBOURS.to_vec();
        expected.push(Hex::ORIGIN);
        expected.sort();
        assert_eq!(sorted(&tiles), expected);

        for hex in layout(Orientation::Pointy, MapShape::Hexagon, 4) {
            assert!(hex.hex_distance(Hex::ORIGIN) <= 4);
        }
    }

    #[test]
    fn test_rhombus_and_diamond() {
        assert_eq!(
            sorted(&layout(Orientation::Pointy, MapShape::Rhombus, 2)),
            vec![
                Hex::new(-1, -1),
                Hex::new(-1, 0),
                Hex::new(0, -1),
                Hex::new(0, 0)
            ]
        );
        // (q, r) -> (q, -q-r)
        assert_eq!(
            sorted(&layout(Orientation::Pointy, MapShape::Diamond, 2)),
            vec![
                Hex::new(-1, 1),
                Hex::new(-1, 2),
                Hex::new(0, 0),
                Hex::new(0, 1)
            ]
        );
    }

    #[test]
    fn test_triangle() {
        assert_eq!(
            sorted(&layout(Orientation::Pointy, MapShape::Triangle, 3)),
            vec![
                Hex::new(0, 0),
                Hex::new(0, 1),
                Hex::new(0, 2),
                Hex::new(1, 0),
                Hex::new(1, 1),
                Hex::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_triangle_flat_is_swapped() {
        let pointy = layout(Orientation::Pointy, MapShape::Triangle, 5);
        let flat = layout(Orientation::Flat, MapShape::Triangle, 5);
        let swapped: HexSet =
            pointy.iter().map(|hex| Hex::new(hex.r(), hex.q())).collect();
        assert_eq!(flat, swapped);
        // This one isn't symmetric, so the swap actually changes something
        let pointy = layout(Orientation::Pointy, MapShape::Rectangle, 4);
        let flat = layout(Orientation::Flat, MapShape::Rectangle, 4);
        assert_ne!(pointy, flat);
    }

    #[test]
    fn test_rectangle_rows() {
        // Size 4: rows -2..2, each row is 4 tiles wide and shifted back by
        // floor(r / 2)
        let tiles = layout(Orientation::Pointy, MapShape::Rectangle, 4);
        for r in -2..2 {
            let mut row: Vec<i32> = tiles
                .iter()
                .filter(|hex| hex.r() == r)
                .map(|hex| hex.q())
                .collect();
            row.sort_unstable();
            let offset = (r as f64 / 2.0).floor() as i32;
            let expected: Vec<i32> = (-2 - offset..2 - offset).collect();
            assert_eq!(row, expected, "row {}", r);
        }
    }

    #[test]
    fn test_rectangle_offset_is_rectangular() {
        // In offset coordinates, a rectangle should be a (nearly) plain grid:
        // every row covers the same set of columns
        let tiles = layout(Orientation::Rows, MapShape::Rectangle, 6);
        let row_columns = |r: i32| {
            let mut columns: Vec<i32> = tiles
                .iter()
                .filter(|hex| hex.r() == r)
                .map(|hex| hex.q())
                .collect();
            columns.sort_unstable();
            columns
        };
        let first = row_columns(-3);
        for r in -2..3 {
            assert_eq!(row_columns(r), first, "row {}", r);
        }
    }

    #[test]
    fn test_regenerate_clears() {
        let grid = HexGrid::with_size(1.0, Orientation::Pointy).unwrap();
        let mut tiles = HexSet::default();
        tiles.insert(Hex::new(100, 100));

        grid.create_layout(MapShape::Hexagon, 2, &mut tiles);
        let first = tiles.clone();
        assert!(!first.contains(&Hex::new(100, 100)));

        grid.create_layout(MapShape::Hexagon, 2, &mut tiles);
        assert_eq!(tiles, first);

        grid.create_layout(MapShape::Triangle, 2, &mut tiles);
        assert_eq!(tiles.len(), 3);
    }

    #[test]
    fn test_shape_strings() {
        assert_eq!(MapShape::Rectangle.to_string(), "rectangle");
        assert_eq!("diamond".parse::<MapShape>().unwrap(), MapShape::Diamond);
        assert!("circle".parse::<MapShape>().is_err());
    }
}
