//! Plot coordinates for the look-direction and incidence diagrams
//!
//! The compass view shows the line of sight projected onto the ground plane
//! together with the flight track; the side view shows the incidence angle as
//! a line through the satellite, split into an "away" and a "towards" half.
//! Everything here returns plain coordinates; drawing is left to the caller.
//!
//! Degenerate geometries never divide by zero. A vertical line of sight has
//! no ground projection and yields zero-length compass lines, and the side
//! view switches to fixed horizontal or vertical lines when the slope is
//! undefined.

use std::f64::consts::TAU;

use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::constants::{
    AZIMUTH_LINE_SCALE, DEFAULT_VERTICAL_OFFSET, FULL_TURN_DEG, HORIZON_EXTENT, RAD2DEG,
    VECTOR_DECIMALS,
};
use crate::coordinates::{Angle, Cartesian3};
use crate::geometry::LookDirection;

/// A two-point segment starting at the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionLine {
    /// X coordinates of the start and end point
    pub x: [f64; 2],
    /// Y coordinates of the start and end point
    pub y: [f64; 2],
}

impl ProjectionLine {
    /// Zero-length line at the origin
    pub const ZERO: ProjectionLine = ProjectionLine {
        x: [0.0, 0.0],
        y: [0.0, 0.0],
    };

    fn to_point(end: &Cartesian3) -> Self {
        ProjectionLine {
            x: [0.0, end.x],
            y: [0.0, end.y],
        }
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        (self.x[1] - self.x[0]).hypot(self.y[1] - self.y[0])
    }
}

/// A three-point polyline for the side view
///
/// Points 0..=1 form the "away" half and points 1..=2 the "towards" half;
/// the middle point sits at the satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideViewLine {
    /// X coordinates
    pub x: [f64; 3],
    /// Y coordinates
    pub y: [f64; 3],
}

impl SideViewLine {
    /// The "away" half as a segment
    pub fn away_segment(&self) -> ([f64; 2], [f64; 2]) {
        ([self.x[0], self.x[1]], [self.y[0], self.y[1]])
    }

    /// The "towards" half as a segment
    pub fn towards_segment(&self) -> ([f64; 2], [f64; 2]) {
        ([self.x[1], self.x[2]], [self.y[1], self.y[2]])
    }
}

/// Unit-length ground projection of the line of sight
///
/// Returns [`ProjectionLine::ZERO`] when the vector has no horizontal
/// component.
pub fn heading_line(vector: &Cartesian3) -> ProjectionLine {
    if vector.is_vertical() {
        debug!("Vertical line of sight, heading line collapses to the origin");
        return ProjectionLine::ZERO;
    }

    let projected = vector.horizontal_projection();
    let unit = projected.normalize().unwrap_or(projected).rounded(VECTOR_DECIMALS);
    ProjectionLine::to_point(&unit)
}

/// Half-length flight track direction recovered from the line of sight
///
/// The ground projection is rotated by the negated look offset, which undoes
/// the ±90 degree turn between flight track and look direction.
pub fn azimuth_line(vector: &Cartesian3, left_looking: bool) -> ProjectionLine {
    if vector.is_vertical() {
        debug!("Vertical line of sight, azimuth line collapses to the origin");
        return ProjectionLine::ZERO;
    }

    let look = LookDirection::from_left_looking(left_looking);
    let projected = vector.horizontal_projection();
    let angle = Angle::from_degrees(-look.offset_degrees());
    let rotated = projected.rotate_about_z(angle.to_radians());
    let unit = (rotated / projected.magnitude()).rounded(VECTOR_DECIMALS);
    ProjectionLine::to_point(&(unit * AZIMUTH_LINE_SCALE))
}

/// Side-view line through the satellite at the incidence angle
///
/// # Arguments
///
/// * `vector` - Line-of-sight unit vector
/// * `left_looking` - Mirrors the diagram horizontally when true
/// * `vertical_offset` - Height of the satellite above the reference line
pub fn incidence_line(vector: &Cartesian3, left_looking: bool, vertical_offset: f64) -> SideViewLine {
    let (mut x, mut y) = if vector.z == 0.0 {
        ([HORIZON_EXTENT, 0.0, -HORIZON_EXTENT], [0.0, 0.0, 0.0])
    } else if vector.is_vertical() {
        ([0.0, 0.0, 0.0], [-1.0, 0.0, 1.0])
    } else {
        let slope = vector.z / vector.horizontal_magnitude();
        let y = [-1.0, 0.0, 1.0];
        (y.map(|v| v / slope), y)
    };

    if left_looking {
        x.iter_mut().for_each(|v| *v *= -1.0);
    }
    y.iter_mut().for_each(|v| *v += vertical_offset);

    SideViewLine { x, y }
}

/// [`incidence_line`] with the default offset of 1
pub fn default_incidence_line(vector: &Cartesian3, left_looking: bool) -> SideViewLine {
    incidence_line(vector, left_looking, DEFAULT_VERTICAL_OFFSET)
}

/// Side-view line for callers that label the angle as a grazing angle
///
/// Identical geometry to [`incidence_line`].
pub fn grazing_line(vector: &Cartesian3, left_looking: bool, vertical_offset: f64) -> SideViewLine {
    incidence_line(vector, left_looking, vertical_offset)
}

/// Rotation in degrees of the satellite glyph on the compass view
pub fn compass_marker_angle(vector: &Cartesian3) -> f64 {
    vector.y.atan2(vector.x) * RAD2DEG
}

/// Rotation in degrees of the satellite glyph on the side view
///
/// Right-looking geometries are reflected: `a + 2 * (180 - a)`.
pub fn side_view_marker_angle(vector: &Cartesian3, left_looking: bool) -> f64 {
    let angle = vector.z.clamp(-1.0, 1.0).acos() * RAD2DEG;
    if left_looking {
        angle
    } else {
        angle + 2.0 * (FULL_TURN_DEG / 2.0 - angle)
    }
}

/// Points on the unit circle, the outline of the compass view
///
/// The first and last points coincide.
pub fn unit_circle(samples: usize) -> (Vec<f64>, Vec<f64>) {
    let theta = Array1::linspace(0.0, TAU, samples);
    (
        theta.iter().map(|t| t.cos()).collect(),
        theta.iter().map(|t| t.sin()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_line_vertical_guard() {
        assert_eq!(heading_line(&Cartesian3::new(0.0, 0.0, -1.0)), ProjectionLine::ZERO);
        assert_eq!(heading_line(&Cartesian3::new(0.0, 0.0, 1.0)), ProjectionLine::ZERO);
    }

    #[test]
    fn test_heading_line_projection() {
        let line = heading_line(&Cartesian3::new(0.3, 0.4, -0.866));
        assert_eq!(line.x, [0.0, 0.6]);
        assert_eq!(line.y, [0.0, 0.8]);
        assert!((line.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_azimuth_line_rotation() {
        // Looking west from a left-looking sensor means flying north
        let west = Cartesian3::new(-1.0, 0.0, 0.0);
        let line = azimuth_line(&west, true);
        assert_eq!(line.x, [0.0, 0.0]);
        assert_eq!(line.y, [0.0, 0.5]);

        // Looking east from a right-looking sensor also means flying north
        let east = Cartesian3::new(1.0, 0.0, 0.0);
        let line = azimuth_line(&east, false);
        assert_eq!(line.x, [0.0, 0.0]);
        assert_eq!(line.y, [0.0, 0.5]);

        assert_eq!(azimuth_line(&Cartesian3::new(0.0, 0.0, -1.0), false), ProjectionLine::ZERO);
    }

    #[test]
    fn test_incidence_line_branches() {
        let horizontal = incidence_line(&Cartesian3::new(-1.0, 0.0, 0.0), false, 1.0);
        assert_eq!(horizontal.x, [100.0, 0.0, -100.0]);
        assert_eq!(horizontal.y, [1.0, 1.0, 1.0]);

        let vertical = incidence_line(&Cartesian3::new(0.0, 0.0, -1.0), true, 1.0);
        assert_eq!(vertical.x, [0.0, 0.0, 0.0]);
        assert_eq!(vertical.y, [0.0, 1.0, 2.0]);

        // 45 degrees down: slope of -1
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let diagonal = incidence_line(&Cartesian3::new(h, 0.0, -h), false, 0.0);
        for (got, want) in diagonal.x.iter().zip([1.0, 0.0, -1.0]) {
            assert!((got - want).abs() < 1e-12);
        }
        assert_eq!(diagonal.y, [-1.0, 0.0, 1.0]);

        let mirrored = incidence_line(&Cartesian3::new(h, 0.0, -h), true, 0.0);
        for (a, b) in mirrored.x.iter().zip(diagonal.x.iter()) {
            assert_eq!(*a, -b);
        }
    }

    #[test]
    fn test_side_view_segments() {
        let line = default_incidence_line(&Cartesian3::new(-1.0, 0.0, 0.0), true);
        assert_eq!(line.x, [-100.0, 0.0, 100.0]);
        assert_eq!(line.away_segment(), ([-100.0, 0.0], [1.0, 1.0]));
        assert_eq!(line.towards_segment(), ([0.0, 100.0], [1.0, 1.0]));
        assert_eq!(grazing_line(&Cartesian3::new(-1.0, 0.0, 0.0), true, 1.0), line);
    }

    #[test]
    fn test_marker_angles() {
        assert_eq!(compass_marker_angle(&Cartesian3::new(0.0, 1.0, 0.0)), 90.0);
        assert_eq!(compass_marker_angle(&Cartesian3::new(-1.0, 0.0, 0.0)), 180.0);

        let down = Cartesian3::new(0.0, 0.0, -1.0);
        assert_eq!(side_view_marker_angle(&down, true), 180.0);
        assert_eq!(side_view_marker_angle(&down, false), 180.0);

        let horizontal = Cartesian3::new(1.0, 0.0, 0.0);
        assert_eq!(side_view_marker_angle(&horizontal, true), 90.0);
        assert_eq!(side_view_marker_angle(&horizontal, false), 270.0);
    }

    #[test]
    fn test_unit_circle() {
        let (x, y) = unit_circle(500);
        assert_eq!(x.len(), 500);
        assert_eq!(x[0], 1.0);
        assert_eq!(y[0], 0.0);
        assert!((x[499] - 1.0).abs() < 1e-12);
        assert!(y[499].abs() < 1e-12);
        for (a, b) in x.iter().zip(y.iter()) {
            assert!((a.hypot(*b) - 1.0).abs() < 1e-12);
        }
    }
}
