use hexgrid::{
    GridConfig, HexError, HexGrid, HexMap, MapConfig, MapShape, Orientation,
};
use validator::ValidationErrors;

/// Get a sorted list of the names of every invalid field
fn error_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields = errors
        .errors()
        .keys()
        .map(|key| key.to_string())
        .collect::<Vec<String>>();
    fields.sort_unstable();
    fields
}

#[test]
fn test_grid_config_validation() {
    for tile_size in [0.0, -1.0, -0.0001] {
        let err = HexGrid::new(GridConfig {
            tile_size,
            orientation: Orientation::Pointy,
        })
        .unwrap_err();
        match err {
            HexError::InvalidConfig(errors) => {
                assert_eq!(
                    error_fields(&errors),
                    vec!["tile_size"],
                    "incorrect validation errors in {:#?}",
                    errors
                );
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}

#[test]
fn test_grid_config_non_finite() {
    // Infinity passes the range check, so it needs its own error
    let err = HexGrid::with_size(f64::INFINITY, Orientation::Flat).unwrap_err();
    assert!(matches!(err, HexError::NonFiniteTileSize(_)));
    let err = HexGrid::with_size(f64::NAN, Orientation::Flat).unwrap_err();
    assert!(err.is_configuration_error());
}

#[test]
fn test_map_config_validation() {
    let config = MapConfig {
        grid: GridConfig {
            tile_size: 0.0, // invalid
            orientation: Orientation::Columns,
        },
        shape: MapShape::Hexagon,
        size: 10001, // invalid (too big)
    };

    let err = HexMap::generate(config).unwrap_err();
    match err {
        HexError::InvalidConfig(errors) => {
            assert_eq!(
                error_fields(&errors),
                vec!["grid", "size"],
                "incorrect validation errors in {:#?}",
                errors
            );
        }
        other => panic!("unexpected error: {}", other),
    }
}
