//! # Cartesian Coordinate System Module
//!
//! A 3D Cartesian vector in the local horizontal frame of a ground point.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: East
//! - **Y-axis**: North
//! - **Z-axis**: Up (local vertical)
//!
//! A line-of-sight vector from the sensor to the ground therefore has a
//! negative z-component for ordinary incidence angles.
//!
//! ## Examples
//!
//! ```rust
//! use los_palette::coordinates::cartesian::Cartesian3;
//!
//! let east = Cartesian3::new(1.0, 0.0, 0.0);
//! let north = Cartesian3::new(0.0, 1.0, 0.0);
//! assert_eq!(east.dot(&north), 0.0);
//! ```

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Three-dimensional Cartesian vector (east, north, up)
///
/// Used both for line-of-sight unit vectors and for their projections onto
/// the horizontal plane. No normalization happens on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// East component
    pub x: f64,
    /// North component
    pub y: f64,
    /// Up component
    pub z: f64,
}

/// Rounds to `decimals` places: scale, round half to even, unscale.
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

impl Cartesian3 {
    /// Creates a new Cartesian vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Builds a vector from an azimuth and an elevation, both in radians
    ///
    /// The azimuth is counter-clockwise from east, the elevation is measured
    /// from the horizontal plane:
    ///
    /// - `x = cos(az) * cos(el)`
    /// - `y = sin(az) * cos(el)`
    /// - `z = sin(el)`
    pub fn from_azimuth_elevation(azimuth: f64, elevation: f64) -> Self {
        let cos_el = elevation.cos();
        Cartesian3 {
            x: azimuth.cos() * cos_el,
            y: azimuth.sin() * cos_el,
            z: elevation.sin(),
        }
    }

    /// Euclidean length of the vector
    ///
    /// ```rust
    /// use los_palette::coordinates::cartesian::Cartesian3;
    ///
    /// assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Length of the horizontal (x, y) part of the vector
    pub fn horizontal_magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// Returns `None` when the magnitude is zero or not finite.
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Rounds every component to `decimals` places
    pub fn rounded(&self, decimals: i32) -> Cartesian3 {
        Cartesian3 {
            x: round_decimals(self.x, decimals),
            y: round_decimals(self.y, decimals),
            z: round_decimals(self.z, decimals),
        }
    }

    /// True when both horizontal components are exactly zero
    ///
    /// Such a vector points straight up or down and has no defined azimuth.
    pub fn is_vertical(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Projection onto the horizontal plane (z set to zero)
    pub fn horizontal_projection(&self) -> Cartesian3 {
        Cartesian3 {
            x: self.x,
            y: self.y,
            z: 0.0,
        }
    }

    /// Rotates the vector about the z-axis by `angle` radians
    /// (counter-clockwise when viewed from above)
    pub fn rotate_about_z(&self, angle: f64) -> Cartesian3 {
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
        Cartesian3::from_vector3(rotation * self.to_vector3())
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Components as an `[x, y, z]` array
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from(components: [f64; 3]) -> Self {
        Cartesian3::new(components[0], components[1], components[2])
    }
}

impl std::ops::Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}
