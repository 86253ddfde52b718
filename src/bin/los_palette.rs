//! LOS Palette Tool
//!
//! Computes line-of-sight vectors and colors for a satellite look geometry
//! and prints the diagram coordinates, gradient legend or color globe derived
//! from them.
//!
//! Usage:
//!   cargo run --bin los_palette -- vector --heading 348 --angle 34 --look left
//!   cargo run --bin los_palette -- preset s1d --json
//!   cargo run --bin los_palette -- globe --output los_colorglobe.json

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, LevelFilter};
use los_palette::color::gradient::DivergingGradient;
use los_palette::constants::{
    DEFAULT_VERTICAL_OFFSET, GLOBE_ANGLE_SAMPLES, GLOBE_HEADING_SAMPLES, GRADIENT_SAMPLES,
    UNIT_CIRCLE_SAMPLES,
};
use los_palette::diagrams::{
    azimuth_line, compass_marker_angle, heading_line, incidence_line, side_view_marker_angle,
    unit_circle,
};
use los_palette::{
    ChannelOrder, ColorGlobeConfig, LookDirection, LosParameters, LosSolution, Preset,
};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// LOS Palette Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Line-of-sight vectors, colors and diagram geometry for radar satellites",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print away/towards vectors and colors for a look geometry
    Vector {
        #[command(flatten)]
        geometry: GeometryArgs,

        /// Print JSON instead of text
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Print vectors and colors for a named preset
    Preset {
        /// Preset key or label (s1a, s1d, vert, we, sn)
        name: String,

        /// Channel order of the colors (direct or swapped)
        #[arg(long, default_value = "direct")]
        order: ChannelOrder,

        /// Print JSON instead of text
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// List the preset table
    Presets,
    /// Print compass and side-view diagram coordinates
    Lines {
        #[command(flatten)]
        geometry: GeometryArgs,

        /// Height of the side view above its reference line
        #[arg(long, default_value_t = DEFAULT_VERTICAL_OFFSET)]
        offset: f64,

        /// Number of points on the compass outline
        #[arg(long, default_value_t = UNIT_CIRCLE_SAMPLES)]
        circle_samples: usize,
    },
    /// Print the diverging gradient legend
    Gradient {
        #[command(flatten)]
        geometry: GeometryArgs,

        /// Number of entries in the gradient table
        #[arg(long, default_value_t = GRADIENT_SAMPLES)]
        samples: usize,
    },
    /// Sample the color globe and emit it as JSON
    Globe {
        /// Number of sampled headings over [0, 360]
        #[arg(long, default_value_t = GLOBE_HEADING_SAMPLES)]
        headings: usize,

        /// Number of sampled angles over [0, 180]
        #[arg(long, default_value_t = GLOBE_ANGLE_SAMPLES)]
        angles: usize,

        /// Look direction (left or right)
        #[arg(long, default_value = "left")]
        look: LookDirection,

        /// Channel order of the colors (direct or swapped)
        #[arg(long, default_value = "direct")]
        order: ChannelOrder,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Look geometry shared by several subcommands
#[derive(Args, Debug)]
struct GeometryArgs {
    /// Satellite heading, degrees clockwise from north (0-360)
    #[arg(long, default_value_t = 348.0)]
    heading: f64,

    /// Incidence angle, degrees from vertical (0-90)
    #[arg(long, default_value_t = 34.0)]
    angle: f64,

    /// Look direction (left or right)
    #[arg(long, default_value = "left")]
    look: LookDirection,

    /// Channel order of the colors (direct or swapped)
    #[arg(long, default_value = "direct")]
    order: ChannelOrder,
}

impl GeometryArgs {
    /// Validated parameters and their solution
    fn solve(&self) -> Result<LosSolution> {
        let params = LosParameters::new(self.heading, self.angle, self.look);
        params.validate()?;
        debug!("Solving {:?} with {:?} channel order", params, self.order);
        Ok(params.solve_with(self.order)?)
    }
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{:<20} {}", format!("{}:", name), value);
}

fn format_vector(v: &los_palette::Cartesian3) -> String {
    format!("({:.5}, {:.5}, {:.5})", v.x, v.y, v.z)
}

fn format_pair(x: &[f64], y: &[f64]) -> String {
    format!("x={:?} y={:?}", x, y)
}

/// Displays a solution as text or JSON
fn display_solution(solution: &LosSolution, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(solution)?);
        return Ok(());
    }

    let params = &solution.parameters;
    print_section_header("Look Geometry");
    print_named_value("Heading", format!("{}°", params.heading));
    print_named_value("Incidence angle", format!("{}°", params.angle));
    print_named_value("Look direction", params.look);

    print_section_header("Line of Sight");
    print_named_value("Away vector", format_vector(&solution.away_vector));
    print_named_value("Away color", solution.away_color);
    print_named_value("Towards vector", format_vector(&solution.towards_vector));
    print_named_value("Towards color", solution.towards_color);
    Ok(())
}

fn display_presets() {
    print_section_header("Presets");
    println!(
        "{:<6} {:<24} {:>8} {:>8} {:<14}",
        "Key", "Label", "Heading", "Angle", "Look"
    );
    for preset in Preset::ALL {
        let params = preset.parameters();
        println!(
            "{:<6} {:<24} {:>8} {:>8} {:<14}",
            preset.key(),
            preset.label(),
            params.heading,
            params.angle,
            params.look.to_string()
        );
    }
}

fn display_lines(solution: &LosSolution, offset: f64, circle_samples: usize) {
    let away = &solution.away_vector;
    let left = solution.left_looking();

    print_section_header("Look Direction (compass view)");
    let heading = heading_line(away);
    print_named_value("Look line", format_pair(&heading.x, &heading.y));
    let azimuth = azimuth_line(away, left);
    print_named_value("Azimuth line", format_pair(&azimuth.x, &azimuth.y));
    print_named_value("Marker angle", format!("{:.3}°", compass_marker_angle(away)));
    let (cx, _) = unit_circle(circle_samples);
    print_named_value("Outline points", cx.len());

    print_section_header("Incidence Angle (side view)");
    let side = incidence_line(away, left, offset);
    let (ax, ay) = side.away_segment();
    let (tx, ty) = side.towards_segment();
    print_named_value(
        &format!("Away {}", solution.away_color),
        format_pair(&ax, &ay),
    );
    print_named_value(
        &format!("Towards {}", solution.towards_color),
        format_pair(&tx, &ty),
    );
    print_named_value(
        "Marker angle",
        format!("{:.3}°", side_view_marker_angle(away, left)),
    );
}

fn display_gradient(solution: &LosSolution, samples: usize) {
    let gradient = DivergingGradient::from_solution(solution).with_samples(samples);
    let labels = gradient.legend_labels();

    print_section_header("Color Gradient");
    print_named_value("Left", labels.towards.replace('\n', " "));
    print_named_value("Centre", labels.midpoint);
    print_named_value("Right", labels.away.replace('\n', " "));

    let colors: Vec<String> = gradient.colors().iter().map(|c| c.to_string()).collect();
    print_section_header(&format!("Gradient Table ({} entries)", colors.len()));
    for row in colors.chunks(8) {
        println!("{}", row.join(" "));
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Vector { geometry, json } => {
            let solution = geometry.solve()?;
            display_solution(&solution, json)?;
        }
        Command::Preset { name, order, json } => {
            let preset: Preset = name.parse()?;
            let solution = preset.parameters().solve_with(order)?;
            if !json {
                println!("Preset: {}", preset);
            }
            display_solution(&solution, json)?;
        }
        Command::Presets => display_presets(),
        Command::Lines {
            geometry,
            offset,
            circle_samples,
        } => {
            let solution = geometry.solve()?;
            display_solution(&solution, false)?;
            display_lines(&solution, offset, circle_samples);
        }
        Command::Gradient { geometry, samples } => {
            let solution = geometry.solve()?;
            display_gradient(&solution, samples);
        }
        Command::Globe {
            headings,
            angles,
            look,
            order,
            output,
        } => {
            let globe = ColorGlobeConfig::new()
                .with_heading_samples(headings)
                .with_angle_samples(angles)
                .with_look(look)
                .with_channel_order(order)
                .generate()?;
            match output {
                Some(path) => {
                    globe.save_json(&path)?;
                    println!("Wrote {} points to {}", globe.len(), path.display());
                }
                None => globe.write_json(io::stdout().lock())?,
            }
        }
    }

    Ok(())
}
