//! Randomized checks of the grid geometry. Every test uses a fixed seed, so
//! failures are reproducible.

use assert_approx_eq::assert_approx_eq;
use hexgrid::{Hex, HexGrid, HexMap, HexSet, MapConfig, MapShape, Orientation};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use strum::IntoEnumIterator;

const SEED: u64 = 0x4845_5847;
const SAMPLES: usize = 500;

fn random_hex(rng: &mut impl Rng) -> Hex {
    Hex::new(rng.gen_range(-1000..=1000), rng.gen_range(-1000..=1000))
}

/// All four orientations, each with a few different tile sizes
fn grids() -> Vec<HexGrid> {
    let mut grids = Vec::new();
    for orientation in Orientation::iter() {
        for tile_size in [0.25, 1.0, 1.3, 40.0] {
            grids.push(HexGrid::with_size(tile_size, orientation).unwrap());
        }
    }
    grids
}

#[test]
fn test_world_round_trip() {
    let mut rng = Pcg64::seed_from_u64(SEED);
    for grid in grids() {
        for _ in 0..SAMPLES {
            let hex = random_hex(&mut rng);
            let center = grid.to_world(hex);
            assert_eq!(
                grid.to_hex(center.x, center.y),
                hex,
                "round trip failed on {:?}",
                grid
            );
        }
    }
}

#[test]
fn test_to_hex_picks_nearest_center() {
    // Every tile is the Voronoi cell of its center, so the picked tile must be
    // at least as close as any of its neighbours
    let mut rng = Pcg64::seed_from_u64(SEED);
    for grid in grids() {
        let extent = 50.0 * grid.tile_size();
        for _ in 0..SAMPLES {
            let x = rng.gen_range(-extent..extent);
            let y = rng.gen_range(-extent..extent);
            let point = hexgrid::WorldPoint::new(x, y);
            let hex = grid.to_hex(x, y);
            let picked = grid.to_world(hex).distance_sqr(point);
            for adjacent in grid.adjacents(hex) {
                let other = grid.to_world(adjacent).distance_sqr(point);
                assert!(
                    picked <= other + 1e-9,
                    "{} picked for {} on {:?}, but {} is closer",
                    hex,
                    point,
                    grid,
                    adjacent
                );
            }
        }
    }
}

#[test]
fn test_adjacents_are_symmetric() {
    let mut rng = Pcg64::seed_from_u64(SEED);
    for grid in grids() {
        let step = 3.0_f64.sqrt() * grid.tile_size();
        for _ in 0..SAMPLES {
            let hex = random_hex(&mut rng);
            let adjacents: HexSet = grid.adjacents(hex).collect();
            assert_eq!(adjacents.len(), 6);
            for adjacent in adjacents {
                assert!(grid.adjacents(adjacent).any(|other| other == hex));
                assert_approx_eq!(grid.distance(hex, adjacent), step, 1e-6);
                let index = grid.neighbour_index(hex, adjacent).unwrap();
                assert!(index < 6, "{} -> {} has index {}", hex, adjacent, index);
            }
        }
    }
}

#[test]
fn test_hex_distance_is_a_metric() {
    let mut rng = Pcg64::seed_from_u64(SEED);
    for _ in 0..SAMPLES {
        let a = random_hex(&mut rng);
        let b = random_hex(&mut rng);
        let c = random_hex(&mut rng);
        assert_eq!(a.hex_distance(a), 0);
        assert_eq!(a.hex_distance(b), b.hex_distance(a));
        assert!(a.hex_distance(c) <= a.hex_distance(b) + b.hex_distance(c));
    }
}

#[test]
fn test_extended_neighbours_round_trip() {
    let mut rng = Pcg64::seed_from_u64(SEED);
    let grid = HexGrid::with_size(1.0, Orientation::Pointy).unwrap();
    for _ in 0..SAMPLES {
        let hex = random_hex(&mut rng);
        for index in 0..12 {
            let neighbour = HexGrid::get_neighbour(hex, index);
            assert_eq!(grid.neighbour_index(hex, neighbour), Some(index));
        }
        assert_eq!(HexGrid::get_neighbour(hex, 12), hex);
    }
}

#[test]
fn test_hexagon_cardinality() {
    for orientation in Orientation::iter() {
        for size in [0, 1, 2, 10, 50] {
            let map = HexMap::generate(MapConfig {
                grid: hexgrid::GridConfig {
                    tile_size: 1.0,
                    orientation,
                },
                shape: MapShape::Hexagon,
                size,
            })
            .unwrap();
            let n = usize::from(size);
            assert_eq!(map.tiles().len(), 3 * n * n + 3 * n + 1);
        }
    }
}

#[test]
fn test_regeneration_is_idempotent() {
    for orientation in Orientation::iter() {
        let grid = HexGrid::with_size(2.0, orientation).unwrap();
        for shape in MapShape::iter() {
            let mut first = HexSet::default();
            let mut second = HexSet::default();
            grid.create_layout(shape, 9, &mut first);
            grid.create_layout(MapShape::Hexagon, 3, &mut second);
            grid.create_layout(shape, 9, &mut second);
            assert_eq!(first, second, "{} {}", orientation, shape);
        }
    }
}

#[test]
fn test_flat_shapes_are_swapped() {
    let pointy = HexGrid::with_size(1.0, Orientation::Pointy).unwrap();
    let flat = HexGrid::with_size(1.0, Orientation::Flat).unwrap();
    for shape in MapShape::iter() {
        let mut pointy_tiles = HexSet::default();
        let mut flat_tiles = HexSet::default();
        pointy.create_layout(shape, 7, &mut pointy_tiles);
        flat.create_layout(shape, 7, &mut flat_tiles);
        let swapped: HexSet = pointy_tiles
            .iter()
            .map(|hex| Hex::new(hex.r(), hex.q()))
            .collect();
        assert_eq!(flat_tiles, swapped, "{}", shape);
    }
}

#[test]
fn test_first_neighbour_scenario() {
    // Two tiles side by side on a pointy grid, one tile width apart
    let grid = HexGrid::with_size(1.0, Orientation::Pointy).unwrap();
    let a = Hex::new(0, 0);
    let b = Hex::new(1, 0);
    let center = grid.to_world(b);
    assert_approx_eq!(center.x, 3.0_f64.sqrt());
    assert_approx_eq!(center.y, 0.0);
    assert_eq!(grid.to_hex(center.x, center.y), b);
    assert_eq!(a.hex_distance(b), 1);
    assert_approx_eq!(grid.distance(a, b), 3.0_f64.sqrt());
    assert!(grid.adjacents(a).any(|hex| hex == b));
    // Halfway between is on the shared edge, and still resolves to a tile
    let middle = grid.to_hex(center.x / 2.0 - 0.01, 0.0);
    assert_eq!(middle, a);
}
