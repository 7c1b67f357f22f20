use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{timed, Hex, HexMap, MapConfig, MapShape, Orientation, WorldPoint};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for generating hex maps and picking tiles out of them.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the map to be generated. Supported
    /// formats: JSON, TOML. Any of the individual flags below will override
    /// the corresponding value from the file.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Distance from the center of a tile to any of its corners
    #[structopt(long)]
    tile_size: Option<f64>,

    /// Tile orientation. Supported values: pointy, flat, rows, columns
    #[structopt(long)]
    orientation: Option<Orientation>,

    /// Map shape. Supported values: hexagon, rhombus, diamond, triangle,
    /// rectangle
    #[structopt(long)]
    shape: Option<MapShape>,

    /// Size parameter for the map shape (radius for hexagons)
    #[structopt(long)]
    size: Option<u16>,

    /// A world position, as `x,y`. The tile under this point will be
    /// included in the output, along with its neighbours
    #[structopt(short, long, allow_hyphen_values = true)]
    pick: Option<PickPoint>,

    /// If given, output will be written to this file instead of stdout
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format to output in. Supported formats:
    ///
    /// json - Every tile in the map with its world position, plus the picked
    ///   tile (if any)
    ///
    /// cfg - The full config object used for the map, in TOML format
    #[structopt(short, long, default_value = "json")]
    format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for `--format`!
    /// Export the generated tiles as JSON
    Json,
    /// Export the map's full config in a human-readable file
    Cfg,
}

/// A world position given on the command line
#[derive(Copy, Clone, Debug)]
struct PickPoint(WorldPoint);

impl FromStr for PickPoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected a point as x,y, got {:?}", s))?;
        let x = x.trim().parse().context("invalid x coordinate")?;
        let y = y.trim().parse().context("invalid y coordinate")?;
        Ok(Self(WorldPoint::new(x, y)))
    }
}

#[derive(Debug, Serialize)]
struct MapOutput<'a> {
    config: &'a MapConfig,
    tiles: Vec<TileOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pick: Option<PickOutput>,
}

#[derive(Debug, Serialize)]
struct TileOutput {
    hex: Hex,
    center: WorldPoint,
}

#[derive(Debug, Serialize)]
struct PickOutput {
    point: WorldPoint,
    hex: Hex,
    /// Is the picked tile part of the generated map?
    in_map: bool,
    adjacents: Vec<Hex>,
}

fn load_config(config_path: &Path) -> anyhow::Result<MapConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Build the map config from the config file (if any), then apply the
/// individual overrides on top
fn build_config(opt: &Opt) -> anyhow::Result<MapConfig> {
    let mut config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => MapConfig::default(),
    };

    if let Some(tile_size) = opt.tile_size {
        config.grid.tile_size = tile_size;
    }
    if let Some(orientation) = opt.orientation {
        config.grid.orientation = orientation;
    }
    if let Some(shape) = opt.shape {
        config.shape = shape;
    }
    if let Some(size) = opt.size {
        config.size = size;
    }
    Ok(config)
}

fn pick_output(map: &HexMap, PickPoint(point): PickPoint) -> PickOutput {
    let hex = map.grid().point_to_hex(point);
    info!("Picked {} at {}", hex, point);
    PickOutput {
        point,
        hex,
        in_map: map.contains(hex),
        adjacents: map.grid().adjacents(hex).collect(),
    }
}

/// Generate the output bytes for the map in the given format
fn gen_output(
    output_format: OutputFormat,
    map: &HexMap,
    pick: Option<PickPoint>,
) -> anyhow::Result<Vec<u8>> {
    match output_format {
        OutputFormat::Json => {
            let mut hexes: Vec<Hex> = map.tiles().iter().copied().collect();
            hexes.sort_unstable();
            let output = MapOutput {
                config: map.config(),
                tiles: hexes
                    .into_iter()
                    .map(|hex| TileOutput {
                        hex,
                        center: map.grid().to_world(hex),
                    })
                    .collect(),
                pick: pick.map(|point| pick_output(map, point)),
            };
            serde_json::to_vec_pretty(&output)
                .context("error serializing map")
        }
        OutputFormat::Cfg => Ok(toml::to_string_pretty(map.config())
            .context("error serializing config")?
            .into_bytes()),
    }
}

fn write_output(output_path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match output_path {
        Some(output_path) => {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(output_path)
                .with_context(|| {
                    format!("error opening output file {:?}", output_path)
                })?;
            file.write_all(bytes).with_context(|| {
                format!("error writing to file {:?}", output_path)
            })?;
            info!("Wrote output to {:?}", output_path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("error writing to stdout")?;
            stdout.write_all(b"\n").context("error writing to stdout")?;
        }
    }
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = build_config(&opt)?;
    let map = timed!("Map generation", log::Level::Info, {
        HexMap::generate(config).context("invalid map config")?
    });
    info!("Generated map with {} tiles", map.tiles().len());

    let bytes = gen_output(opt.format, &map, opt.pick)?;
    write_output(opt.output.as_deref(), &bytes)
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
