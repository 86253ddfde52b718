//! Line-of-sight geometry
//!
//! Converts a satellite heading, an incidence angle and a look direction into
//! a unit vector in the local east-north-up frame. The same function, fed
//! with `incidence + 180`, produces the "towards satellite" vector that pairs
//! with the "away" vector on the diverging color scale. That second vector is
//! a coloring convention and not a physical direction.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::color::{unit_vector_to_hex_with, ChannelOrder, HexColor};
use crate::constants::{
    LOOK_OFFSET_DEG, MAX_HEADING_DEG, MAX_INCIDENCE_DEG, TOWARDS_OFFSET_DEG, VECTOR_DECIMALS,
};
use crate::coordinates::{Angle, Cartesian3};
use crate::errors::{LosError, Result};

/// Side of the flight track the sensor looks towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookDirection {
    /// Sensor looks left of the flight track
    #[default]
    Left,
    /// Sensor looks right of the flight track
    Right,
}

impl LookDirection {
    /// Builds a look direction from the boolean flag used by plotting code
    pub fn from_left_looking(left_looking: bool) -> Self {
        if left_looking {
            LookDirection::Left
        } else {
            LookDirection::Right
        }
    }

    /// True for [`LookDirection::Left`]
    pub fn is_left(&self) -> bool {
        matches!(self, LookDirection::Left)
    }

    /// Azimuth offset from the flight track in degrees, counter-clockwise
    /// positive: +90 for left-looking, -90 for right-looking
    pub fn offset_degrees(&self) -> f64 {
        match self {
            LookDirection::Left => LOOK_OFFSET_DEG,
            LookDirection::Right => -LOOK_OFFSET_DEG,
        }
    }
}

impl fmt::Display for LookDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookDirection::Left => write!(f, "Left Looking"),
            LookDirection::Right => write!(f, "Right Looking"),
        }
    }
}

impl FromStr for LookDirection {
    type Err = LosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" | "left looking" => Ok(LookDirection::Left),
            "right" | "r" | "right looking" => Ok(LookDirection::Right),
            other => Err(LosError::UnknownLookDirection(other.to_string())),
        }
    }
}

/// Computes the line-of-sight unit vector for a look geometry
///
/// # Arguments
///
/// * `heading_degrees` - Flight direction, clockwise from north
/// * `incidence_degrees` - Angle between line of sight and local vertical
/// * `left_looking` - Whether the sensor looks left of the flight track
///
/// # Returns
///
/// The normalized vector with every component rounded to five decimals, or
/// [`LosError::DegenerateVector`] when the raw vector cannot be normalized
/// (only reachable with non-finite inputs).
///
/// # Examples
///
/// ```rust
/// use los_palette::geometry::angles_to_unit_vector;
///
/// let v = angles_to_unit_vector(348.0, 34.0, true).unwrap();
/// assert_eq!((v.x, v.y, v.z), (-0.54697, -0.11626, -0.82904));
/// ```
pub fn angles_to_unit_vector(
    heading_degrees: f64,
    incidence_degrees: f64,
    left_looking: bool,
) -> Result<Cartesian3> {
    let look = LookDirection::from_left_looking(left_looking);
    let azimuth = Angle::from_degrees(heading_degrees)
        .compass_to_math()
        .offset_degrees(look.offset_degrees());
    let elevation = Angle::from_degrees(incidence_degrees).incidence_to_elevation();

    let raw = Cartesian3::from_azimuth_elevation(azimuth.to_radians(), elevation.to_radians());
    let unit = raw.normalize().ok_or_else(|| {
        debug!(
            "Cannot normalize LOS vector for heading={} incidence={}",
            heading_degrees, incidence_degrees
        );
        LosError::DegenerateVector {
            x: raw.x,
            y: raw.y,
            z: raw.z,
        }
    })?;

    Ok(unit.rounded(VECTOR_DECIMALS))
}

/// Vector used for the "towards satellite" end of the color scale
///
/// Equivalent to `angles_to_unit_vector(heading, incidence + 180, ..)`,
/// which lands on the antipode of the "away" vector.
pub fn towards_unit_vector(
    heading_degrees: f64,
    incidence_degrees: f64,
    left_looking: bool,
) -> Result<Cartesian3> {
    angles_to_unit_vector(
        heading_degrees,
        incidence_degrees + TOWARDS_OFFSET_DEG,
        left_looking,
    )
}

/// The inputs of one recomputation, passed explicitly by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LosParameters {
    /// Flight direction, clockwise degrees from north
    pub heading: f64,
    /// Incidence angle in degrees from local vertical
    pub angle: f64,
    /// Look direction relative to the flight track
    pub look: LookDirection,
}

impl Default for LosParameters {
    /// Sentinel-1 ascending geometry
    fn default() -> Self {
        Self {
            heading: 348.0,
            angle: 34.0,
            look: LookDirection::Left,
        }
    }
}

impl LosParameters {
    /// Creates a new parameter set
    pub fn new(heading: f64, angle: f64, look: LookDirection) -> Self {
        Self {
            heading,
            angle,
            look,
        }
    }

    /// Set the heading in degrees
    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    /// Set the incidence angle in degrees
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Set the look direction
    pub fn with_look(mut self, look: LookDirection) -> Self {
        self.look = look;
        self
    }

    /// Checks the ranges an interactive front end accepts: heading in
    /// [0, 360] and incidence in [0, 90]
    ///
    /// The geometry functions themselves accept any finite value.
    pub fn validate(&self) -> Result<()> {
        check_range("heading", self.heading, 0.0, MAX_HEADING_DEG)?;
        check_range("incidence angle", self.angle, 0.0, MAX_INCIDENCE_DEG)?;
        Ok(())
    }

    /// The "away from satellite" unit vector
    pub fn away_vector(&self) -> Result<Cartesian3> {
        angles_to_unit_vector(self.heading, self.angle, self.look.is_left())
    }

    /// The "towards satellite" unit vector
    pub fn towards_vector(&self) -> Result<Cartesian3> {
        towards_unit_vector(self.heading, self.angle, self.look.is_left())
    }

    /// Computes both vectors and their colors with the canonical channel order
    pub fn solve(&self) -> Result<LosSolution> {
        self.solve_with(ChannelOrder::Direct)
    }

    /// Computes both vectors and their colors with an explicit channel order
    pub fn solve_with(&self, order: ChannelOrder) -> Result<LosSolution> {
        let away_vector = self.away_vector()?;
        let towards_vector = self.towards_vector()?;
        let solution = LosSolution {
            parameters: *self,
            away_vector,
            towards_vector,
            away_color: unit_vector_to_hex_with(&away_vector, order),
            towards_color: unit_vector_to_hex_with(&towards_vector, order),
        };
        trace!("Solved {:?}", solution);
        Ok(solution)
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(LosError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

/// Vectors and colors derived from one [`LosParameters`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LosSolution {
    /// Inputs the solution was computed from
    pub parameters: LosParameters,
    /// Line of sight from sensor to ground
    pub away_vector: Cartesian3,
    /// Antipodal companion used for the opposite end of the color scale
    pub towards_vector: Cartesian3,
    /// Color of `away_vector`
    pub away_color: HexColor,
    /// Color of `towards_vector`
    pub towards_color: HexColor,
}

impl LosSolution {
    /// Whether the solution was computed for a left-looking sensor
    pub fn left_looking(&self) -> bool {
        self.parameters.look.is_left()
    }
}
