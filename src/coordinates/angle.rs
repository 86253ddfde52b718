//! # Angle Representation Module
//!
//! Satellite geometry mixes two angular conventions: headings are measured
//! clockwise from north, while trigonometry works counter-clockwise from
//! east. The `Angle` type keeps the value in the unit it was supplied in and
//! offers the conversions between those conventions.
//!
//! ## Internal Storage
//!
//! - Values provided in degrees are stored exactly as degrees
//! - Values provided in radians are stored exactly as radians
//! - Conversion only occurs when explicitly requested
//!
//! ## Examples
//!
//! ```rust
//! use los_palette::coordinates::angle::Angle;
//!
//! // A heading due east is 0 degrees in the math convention
//! let heading = Angle::from_degrees(90.0);
//! assert_eq!(heading.compass_to_math().to_degrees(), 0.0);
//!
//! // Incidence angle 30 degrees looks 60 degrees below the horizon
//! let incidence = Angle::from_degrees(30.0);
//! assert_eq!(incidence.incidence_to_elevation().to_degrees(), -60.0);
//! ```

use crate::constants::{DEG2RAD, FULL_TURN_DEG, NORTH_FROM_EAST_DEG, RAD2DEG};

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement stored in its original unit
///
/// Equality compares the stored representation, so an angle built from
/// degrees never equals one built from radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use los_palette::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in degrees
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle value in radians
    ///
    /// Degrees are multiplied by `PI / 180`; reference color tables depend
    /// on this exact factor.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the internal format of this angle
    pub fn format(&self) -> AngleFormat {
        self.angle
    }

    /// Returns a new angle offset by `degrees`, keeping degree storage
    pub fn offset_degrees(&self, degrees: f64) -> Angle {
        Angle::from_degrees(self.to_degrees() + degrees)
    }

    /// Wraps the angle into [0, 360) degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use los_palette::coordinates::angle::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(-12.0).wrapped().to_degrees(), 348.0);
    /// assert_eq!(Angle::from_degrees(360.0).wrapped().to_degrees(), 0.0);
    /// ```
    pub fn wrapped(&self) -> Angle {
        Angle::from_degrees(self.to_degrees().rem_euclid(FULL_TURN_DEG))
    }

    /// Converts a compass bearing (clockwise from north) into the
    /// counter-clockwise-from-east convention used by `sin`/`cos`
    ///
    /// The conversion is its own inverse.
    pub fn compass_to_math(&self) -> Angle {
        Angle::from_degrees(NORTH_FROM_EAST_DEG - self.to_degrees())
    }

    /// Converts an incidence angle (from local vertical, sensor to ground)
    /// into an elevation above the horizontal plane
    ///
    /// Incidence angles in (0, 90) give negative elevations: the sensor looks
    /// down at the ground.
    pub fn incidence_to_elevation(&self) -> Angle {
        Angle::from_degrees(-(NORTH_FROM_EAST_DEG - self.to_degrees()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_angle_exact_storage() {
        let angle = Angle::from_degrees(34.0);
        assert_eq!(angle.to_degrees(), 34.0);
        match angle.format() {
            AngleFormat::Degrees(val) => assert_eq!(val, 34.0),
            AngleFormat::Radians(_) => panic!("Expected degrees format"),
        }

        let angle = Angle::from_radians(PI / 4.0);
        assert_eq!(angle.to_radians(), PI / 4.0);
        assert!((angle.to_degrees() - 45.0).abs() < 1e-13);
    }

    #[test]
    fn test_degree_to_radian_matches_reference_factor() {
        let angle = Angle::from_degrees(348.0);
        assert_eq!(angle.to_radians(), 348.0 * (PI / 180.0));
    }

    #[test]
    fn test_compass_to_math() {
        let cases = vec![(0.0, 90.0), (90.0, 0.0), (180.0, -90.0), (348.0, -258.0)];
        for (compass, math) in cases {
            let converted = Angle::from_degrees(compass).compass_to_math();
            assert_eq!(converted.to_degrees(), math, "Failed for {} degrees", compass);
            assert_eq!(converted.compass_to_math().to_degrees(), compass);
        }
    }

    #[test]
    fn test_incidence_to_elevation() {
        assert_eq!(Angle::from_degrees(0.0).incidence_to_elevation().to_degrees(), -90.0);
        assert_eq!(Angle::from_degrees(34.0).incidence_to_elevation().to_degrees(), -56.0);
        assert_eq!(Angle::from_degrees(90.0).incidence_to_elevation().to_degrees(), 0.0);
        // The towards convention pushes the elevation above the horizon
        assert_eq!(Angle::from_degrees(214.0).incidence_to_elevation().to_degrees(), 124.0);
    }

    #[test]
    fn test_wrapped_and_offset() {
        assert_eq!(Angle::from_degrees(720.5).wrapped().to_degrees(), 0.5);
        assert_eq!(Angle::from_degrees(-90.0).wrapped().to_degrees(), 270.0);
        assert_eq!(Angle::from_degrees(34.0).offset_degrees(180.0).to_degrees(), 214.0);

        let from_rad = Angle::from_radians(PI).offset_degrees(90.0);
        assert!((from_rad.to_degrees() - 270.0).abs() < 1e-12);
    }
}
