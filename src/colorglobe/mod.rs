//! Color globe: the LOS palette sampled over the whole sphere
//!
//! Headings and angles are sampled on an even grid and every combination is
//! turned into a unit vector and its color. The result is a point cloud that
//! an external 3D plotter can draw as a color-coded sphere, which makes the
//! palette's behavior visible at a glance.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::color::{unit_vector_to_hex_with, ChannelOrder, HexColor};
use crate::constants::{
    FULL_TURN_DEG, GLOBE_ANGLE_SAMPLES, GLOBE_HEADING_SAMPLES, GLOBE_MAX_ANGLE_DEG,
};
use crate::coordinates::Cartesian3;
use crate::errors::{io_err, Result};
use crate::geometry::{angles_to_unit_vector, LookDirection};

/// One sample of the globe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobePoint {
    /// Heading in degrees the point was sampled at
    pub heading: f64,
    /// Incidence angle in degrees the point was sampled at
    pub angle: f64,
    /// Line-of-sight unit vector
    pub vector: Cartesian3,
    /// Color of `vector`
    pub color: HexColor,
}

/// Configuration for color globe generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorGlobeConfig {
    /// Number of headings, spread evenly over [0, 360]
    pub heading_samples: usize,
    /// Number of incidence angles, spread evenly over [0, 180]
    pub angle_samples: usize,
    /// Look direction used for every sample
    pub look: LookDirection,
    /// Channel order of the colors
    pub order: ChannelOrder,
}

impl Default for ColorGlobeConfig {
    fn default() -> Self {
        Self {
            heading_samples: GLOBE_HEADING_SAMPLES,
            angle_samples: GLOBE_ANGLE_SAMPLES,
            look: LookDirection::Left,
            order: ChannelOrder::Direct,
        }
    }
}

impl ColorGlobeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of sampled headings
    pub fn with_heading_samples(mut self, samples: usize) -> Self {
        self.heading_samples = samples;
        self
    }

    /// Set the number of sampled incidence angles
    pub fn with_angle_samples(mut self, samples: usize) -> Self {
        self.angle_samples = samples;
        self
    }

    /// Set the look direction
    pub fn with_look(mut self, look: LookDirection) -> Self {
        self.look = look;
        self
    }

    /// Set the channel order
    pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }

    /// Sample the globe, heading-major
    pub fn generate(&self) -> Result<ColorGlobe> {
        let headings = Array1::linspace(0.0, FULL_TURN_DEG, self.heading_samples);
        let angles = Array1::linspace(0.0, GLOBE_MAX_ANGLE_DEG, self.angle_samples);

        let mut points = Vec::with_capacity(headings.len() * angles.len());
        for &heading in headings.iter() {
            for &angle in angles.iter() {
                let vector = angles_to_unit_vector(heading, angle, self.look.is_left())?;
                points.push(GlobePoint {
                    heading,
                    angle,
                    vector,
                    color: unit_vector_to_hex_with(&vector, self.order),
                });
            }
        }

        debug!(
            "Sampled color globe: {} headings x {} angles",
            self.heading_samples, self.angle_samples
        );
        Ok(ColorGlobe {
            config: *self,
            points,
        })
    }
}

/// A sampled color globe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorGlobe {
    /// Configuration the globe was generated with
    pub config: ColorGlobeConfig,
    /// Samples in heading-major order
    pub points: Vec<GlobePoint>,
}

impl ColorGlobe {
    /// Number of sampled points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the globe has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Component columns (x, y, z), the layout scatter plots expect
    pub fn columns(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let x = self.points.iter().map(|p| p.vector.x).collect();
        let y = self.points.iter().map(|p| p.vector.y).collect();
        let z = self.points.iter().map(|p| p.vector.z).collect();
        (x, y, z)
    }

    /// Colors in point order
    pub fn colors(&self) -> Vec<HexColor> {
        self.points.iter().map(|p| p.color).collect()
    }

    /// Serialize the globe as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the globe as JSON to `writer`
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Save the globe as a JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| io_err(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)?;
        writer.flush().map_err(|e| io_err(path, e))?;
        info!("Saved {} globe points to {}", self.len(), path.display());
        Ok(())
    }

    /// Load a globe previously written by [`ColorGlobe::save_json`]
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| io_err(path, e))?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_size() {
        let globe = ColorGlobeConfig::new().generate().unwrap();
        assert_eq!(globe.len(), 72 * 36);
        assert_eq!(globe.colors().len(), globe.len());
    }

    #[test]
    fn test_heading_major_order() {
        let globe = ColorGlobeConfig::new()
            .with_heading_samples(3)
            .with_angle_samples(2)
            .generate()
            .unwrap();
        let grid: Vec<(f64, f64)> = globe.points.iter().map(|p| (p.heading, p.angle)).collect();
        assert_eq!(
            grid,
            vec![
                (0.0, 0.0),
                (0.0, 180.0),
                (180.0, 0.0),
                (180.0, 180.0),
                (360.0, 0.0),
                (360.0, 180.0)
            ]
        );
    }

    #[test]
    fn test_points_are_unit_vectors_with_matching_colors() {
        let globe = ColorGlobeConfig::new()
            .with_channel_order(ChannelOrder::Swapped)
            .generate()
            .unwrap();
        for p in &globe.points {
            assert!((p.vector.magnitude() - 1.0).abs() < 1e-4);
            assert_eq!(p.color, unit_vector_to_hex_with(&p.vector, ChannelOrder::Swapped));
        }
    }

    #[test]
    fn test_columns() {
        let globe = ColorGlobeConfig::new()
            .with_heading_samples(2)
            .with_angle_samples(2)
            .generate()
            .unwrap();
        let (x, y, z) = globe.columns();
        assert_eq!(x.len(), 4);
        assert_eq!(y.len(), 4);
        // angle 0 is nadir, angle 180 is zenith
        assert_eq!(z, vec![-1.0, 1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_empty_grid() {
        let globe = ColorGlobeConfig::new().with_angle_samples(0).generate().unwrap();
        assert!(globe.is_empty());
    }
}
