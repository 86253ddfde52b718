//! LOS palette: line-of-sight vectors and colors for radar satellites
//!
//! This crate turns a satellite heading, an incidence angle and a look
//! direction into a line-of-sight unit vector, encodes that vector as a
//! deterministic display color, and produces the coordinates needed to draw
//! look-direction, incidence-angle, gradient-legend and color-globe diagrams.
//!
//! All operations are pure functions of their inputs. Callers keep the
//! current heading, angle and look direction themselves and pass them in
//! explicitly, usually bundled as [`LosParameters`].
//!
//! ```rust
//! use los_palette::Preset;
//!
//! let solution = Preset::SentinelAscending.parameters().solve().unwrap();
//! assert_eq!(solution.away_color.to_string(), "#3A7116");
//! assert_eq!(solution.towards_color.to_string(), "#C58EE9");
//! ```

pub mod color;
pub mod colorglobe;
pub mod constants;
pub mod coordinates;
pub mod diagrams;
pub mod errors;
pub mod geometry;
pub mod presets;

// Re-export commonly used types
pub use color::{
    angles_to_hex, hex_to_unit_vector, unit_vector_to_hex, unit_vector_to_hex_with, ChannelOrder,
    DivergingGradient, HexColor,
};
pub use colorglobe::{ColorGlobe, ColorGlobeConfig, GlobePoint};
pub use coordinates::{Angle, Cartesian3};
pub use diagrams::{
    azimuth_line, grazing_line, heading_line, incidence_line, ProjectionLine, SideViewLine,
};
pub use errors::{LosError, Result};
pub use geometry::{
    angles_to_unit_vector, towards_unit_vector, LookDirection, LosParameters, LosSolution,
};
pub use presets::Preset;
