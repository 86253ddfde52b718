//! Constants module for line-of-sight geometry and color encoding

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a full turn
pub const FULL_TURN_DEG: f64 = 360.0;
/// Compass north expressed in the counter-clockwise-from-east convention
pub const NORTH_FROM_EAST_DEG: f64 = 90.0;
/// Azimuth offset between the flight track and the look direction
pub const LOOK_OFFSET_DEG: f64 = 90.0;
/// Angle added to the incidence angle to obtain the "towards" color vector
pub const TOWARDS_OFFSET_DEG: f64 = 180.0;

// Rounding
/// Decimal places kept on every vector component
pub const VECTOR_DECIMALS: i32 = 5;

// Color encoding
/// Scale and offset of the [-1, 1] -> [0, 255] affine channel map
pub const CHANNEL_HALF_RANGE: f64 = 127.5;
/// Largest 8-bit channel value
pub const CHANNEL_MAX: f64 = 255.0;

// Diagrams
/// Half-length applied to the azimuth line in the compass view
pub const AZIMUTH_LINE_SCALE: f64 = 0.5;
/// Horizontal extent of the side-view line when the look is horizontal
pub const HORIZON_EXTENT: f64 = 100.0;
/// Default height of the side-view diagram above its reference line
pub const DEFAULT_VERTICAL_OFFSET: f64 = 1.0;
/// Default number of points on the compass outline
pub const UNIT_CIRCLE_SAMPLES: usize = 500;

// Gradient legend
/// Default number of entries in the diverging gradient table
pub const GRADIENT_SAMPLES: usize = 256;

// Color globe
/// Default number of headings sampled on the color globe
pub const GLOBE_HEADING_SAMPLES: usize = 72;
/// Default number of angles sampled on the color globe
pub const GLOBE_ANGLE_SAMPLES: usize = 36;
/// Upper bound of the angle axis on the color globe
pub const GLOBE_MAX_ANGLE_DEG: f64 = 180.0;

// Input ranges enforced by interactive callers
/// Largest heading accepted by [`crate::geometry::LosParameters::validate`]
pub const MAX_HEADING_DEG: f64 = 360.0;
/// Largest incidence angle accepted by [`crate::geometry::LosParameters::validate`]
pub const MAX_INCIDENCE_DEG: f64 = 90.0;
