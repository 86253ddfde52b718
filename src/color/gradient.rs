//! Diverging color scale between the "towards" and "away" colors
//!
//! The scale runs from the towards color at `t = 0`, through white at
//! `t = 0.5`, to the away color at `t = 1`, interpolating each channel
//! linearly in [0, 1] space before quantizing back to 8 bits.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::HexColor;
use crate::constants::GRADIENT_SAMPLES;
use crate::geometry::LosSolution;

/// Text annotations placed above the gradient bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendLabels {
    /// Left end of the bar
    pub towards: String,
    /// Centre of the bar
    pub midpoint: String,
    /// Right end of the bar
    pub away: String,
}

/// Three-stop diverging gradient: towards, white, away
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivergingGradient {
    /// Color at `t = 0`
    pub towards: HexColor,
    /// Color at `t = 1`
    pub away: HexColor,
    /// Number of entries produced by [`DivergingGradient::colors`]
    pub samples: usize,
}

impl DivergingGradient {
    /// Creates a gradient with the default table size of 256 entries
    pub fn new(towards: HexColor, away: HexColor) -> Self {
        Self {
            towards,
            away,
            samples: GRADIENT_SAMPLES,
        }
    }

    /// Creates the gradient for a solved look geometry
    pub fn from_solution(solution: &LosSolution) -> Self {
        Self::new(solution.towards_color, solution.away_color)
    }

    /// Set the number of entries in the sampled table
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Color at position `t`, clamped to [0, 1]
    pub fn sample(&self, t: f64) -> HexColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let white = HexColor::WHITE.to_unit_rgb();
        let (start, end, local) = if t <= 0.5 {
            (self.towards.to_unit_rgb(), white, t / 0.5)
        } else {
            (white, self.away.to_unit_rgb(), (t - 0.5) / 0.5)
        };

        let mut rgb = [0.0; 3];
        for (channel, (s, e)) in rgb.iter_mut().zip(start.iter().zip(end.iter())) {
            *channel = s + (e - s) * local;
        }
        HexColor::from_unit_rgb(rgb)
    }

    /// Evenly spaced table of `samples` colors from towards to away
    pub fn colors(&self) -> Vec<HexColor> {
        Array1::linspace(0.0, 1.0, self.samples)
            .iter()
            .map(|&t| self.sample(t))
            .collect()
    }

    /// Annotations for the two ends and the midpoint of the bar
    pub fn legend_labels(&self) -> LegendLabels {
        LegendLabels {
            towards: format!("Towards satellite\n{}", self.towards),
            midpoint: "#ffffff".to_string(),
            away: format!("Away from satellite\n{}", self.away),
        }
    }
}
