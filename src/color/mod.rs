//! Unit vector to display color encoding
//!
//! Each vector component in [-1, 1] is mapped affinely onto an 8-bit channel:
//! `channel = round(component * 127.5 + 127.5)`, rounding half to even. A
//! component of exactly zero lands on 127.5 and rounds to 128 (`0x80`).
//!
//! ## Channel order
//!
//! The canonical order is [`ChannelOrder::Direct`]: (x, y, z) -> (R, G, B).
//! An older palette assigned the north component to blue and the vertical
//! component to green; it is kept as [`ChannelOrder::Swapped`] for callers
//! that must reproduce those colors, and is never chosen implicitly.

pub mod gradient;

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{CHANNEL_HALF_RANGE, CHANNEL_MAX};
use crate::coordinates::Cartesian3;
use crate::errors::{LosError, Result};
use crate::geometry::angles_to_unit_vector;

pub use gradient::DivergingGradient;

lazy_static! {
    static ref HEX_PATTERN: Regex =
        Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").unwrap();
}

/// Assignment of vector components to color channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    /// (x, y, z) -> (R, G, B)
    #[default]
    Direct,
    /// (x, y, z) -> (R, B, G); reproduces the legacy palette
    Swapped,
}

impl FromStr for ChannelOrder {
    type Err = LosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" | "rgb" => Ok(ChannelOrder::Direct),
            "swapped" | "rbg" => Ok(ChannelOrder::Swapped),
            other => Err(LosError::InvalidChannelOrder(other.to_string())),
        }
    }
}

/// A 24-bit RGB color, displayed as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl HexColor {
    /// Pure white, the midpoint of the diverging scale
    pub const WHITE: HexColor = HexColor {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Creates a color from its channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        HexColor { r, g, b }
    }

    /// Channels as floating point values in [0, 1]
    pub fn to_unit_rgb(&self) -> [f64; 3] {
        [
            self.r as f64 / CHANNEL_MAX,
            self.g as f64 / CHANNEL_MAX,
            self.b as f64 / CHANNEL_MAX,
        ]
    }

    /// Builds a color from floating point channels in [0, 1]
    ///
    /// Values are scaled by 255, rounded half to even and clamped.
    pub fn from_unit_rgb(rgb: [f64; 3]) -> Self {
        HexColor {
            r: quantize(rgb[0] * CHANNEL_MAX),
            g: quantize(rgb[1] * CHANNEL_MAX),
            b: quantize(rgb[2] * CHANNEL_MAX),
        }
    }

    /// Uppercase `#RRGGBB` string
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

fn quantize(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, CHANNEL_MAX) as u8
}

/// Maps one vector component from [-1, 1] onto [0, 255]
pub fn component_to_channel(component: f64) -> u8 {
    quantize(component * CHANNEL_HALF_RANGE + CHANNEL_HALF_RANGE)
}

/// Inverse of [`component_to_channel`], exact to within one channel step
pub fn channel_to_component(channel: u8) -> f64 {
    (channel as f64 - CHANNEL_HALF_RANGE) / CHANNEL_HALF_RANGE
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = LosError;

    /// Parses `#RRGGBB`, accepting either letter case
    fn from_str(s: &str) -> Result<Self> {
        let caps = HEX_PATTERN
            .captures(s)
            .ok_or_else(|| LosError::InvalidHexColor(s.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16).map_err(|_| LosError::InvalidHexColor(s.to_string()))
        };
        Ok(HexColor {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
        })
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Encodes a unit vector as a color using the canonical channel order
///
/// # Examples
///
/// ```rust
/// use los_palette::color::unit_vector_to_hex;
/// use los_palette::coordinates::Cartesian3;
///
/// let gray = unit_vector_to_hex(&Cartesian3::new(0.0, 0.0, 0.0));
/// assert_eq!(gray.to_string(), "#808080");
/// ```
pub fn unit_vector_to_hex(vector: &Cartesian3) -> HexColor {
    unit_vector_to_hex_with(vector, ChannelOrder::Direct)
}

/// Encodes a unit vector as a color with an explicit channel order
pub fn unit_vector_to_hex_with(vector: &Cartesian3, order: ChannelOrder) -> HexColor {
    let x = component_to_channel(vector.x);
    let y = component_to_channel(vector.y);
    let z = component_to_channel(vector.z);
    match order {
        ChannelOrder::Direct => HexColor::new(x, y, z),
        ChannelOrder::Swapped => HexColor::new(x, z, y),
    }
}

/// Recovers the approximate vector a color was encoded from
///
/// The result is within 1/255 of the original components but is not
/// renormalized.
pub fn hex_to_unit_vector(color: &HexColor, order: ChannelOrder) -> Cartesian3 {
    let (x, y, z) = match order {
        ChannelOrder::Direct => (color.r, color.g, color.b),
        ChannelOrder::Swapped => (color.r, color.b, color.g),
    };
    Cartesian3::new(
        channel_to_component(x),
        channel_to_component(y),
        channel_to_component(z),
    )
}

/// Color of the line of sight for a look geometry, canonical channel order
pub fn angles_to_hex(
    heading_degrees: f64,
    incidence_degrees: f64,
    left_looking: bool,
) -> Result<HexColor> {
    let vector = angles_to_unit_vector(heading_degrees, incidence_degrees, left_looking)?;
    Ok(unit_vector_to_hex(&vector))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vector_is_mid_gray() {
        // 127.5 rounds half to even: 128
        let color = unit_vector_to_hex(&Cartesian3::new(0.0, 0.0, 0.0));
        assert_eq!(color, HexColor::new(0x80, 0x80, 0x80));
        assert_eq!(color.to_string(), "#808080");
    }

    #[test]
    fn test_axis_extremes() {
        assert_eq!(unit_vector_to_hex(&Cartesian3::new(1.0, 0.0, 0.0)).to_string(), "#FF8080");
        assert_eq!(unit_vector_to_hex(&Cartesian3::new(-1.0, 0.0, 0.0)).to_string(), "#008080");
        assert_eq!(unit_vector_to_hex(&Cartesian3::new(0.0, 0.0, -1.0)).to_string(), "#808000");
        assert_eq!(unit_vector_to_hex(&Cartesian3::new(-0.0, -0.0, 1.0)).to_string(), "#8080FF");
    }

    #[test]
    fn test_channel_orders() {
        let v = Cartesian3::new(-0.54697, -0.11626, -0.82904);
        assert_eq!(unit_vector_to_hex_with(&v, ChannelOrder::Direct).to_string(), "#3A7116");
        assert_eq!(unit_vector_to_hex_with(&v, ChannelOrder::Swapped).to_string(), "#3A1671");
        assert_eq!(unit_vector_to_hex(&v), unit_vector_to_hex_with(&v, ChannelOrder::Direct));
    }

    #[test]
    fn test_out_of_range_components_clamp() {
        assert_eq!(component_to_channel(1.5), 255);
        assert_eq!(component_to_channel(-3.0), 0);
    }

    #[test]
    fn test_parse_and_display() {
        let color: HexColor = "#3a7116".parse().unwrap();
        assert_eq!(color, HexColor::new(0x3A, 0x71, 0x16));
        assert_eq!(color.to_hex(), "#3A7116");

        for bad in ["3A7116", "#3A711", "#3A71166", "#GG0000", "", "# 3A711"] {
            assert!(
                matches!(bad.parse::<HexColor>(), Err(LosError::InvalidHexColor(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_hex_to_unit_vector() {
        let v = Cartesian3::new(-0.54697, -0.11626, -0.82904);
        for order in [ChannelOrder::Direct, ChannelOrder::Swapped] {
            let color = unit_vector_to_hex_with(&v, order);
            let back = hex_to_unit_vector(&color, order);
            assert!((back.x - v.x).abs() <= 1.0 / 255.0);
            assert!((back.y - v.y).abs() <= 1.0 / 255.0);
            assert!((back.z - v.z).abs() <= 1.0 / 255.0);
        }
    }

    #[test]
    fn test_unit_rgb_round_trip() {
        let color = HexColor::new(0x3A, 0x71, 0x16);
        assert_eq!(HexColor::from_unit_rgb(color.to_unit_rgb()), color);
        assert_eq!(HexColor::WHITE.to_unit_rgb(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_serde_as_string() {
        let color = HexColor::new(0xC5, 0x8E, 0xE9);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#C58EE9\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
        assert!(serde_json::from_str::<HexColor>("\"white\"").is_err());
    }

    #[test]
    fn test_angles_to_hex() {
        assert_eq!(angles_to_hex(348.0, 34.0, true).unwrap().to_string(), "#3A7116");
        assert_eq!(angles_to_hex(193.0, 34.0, true).unwrap().to_string(), "#C56F16");
        assert_eq!(angles_to_hex(348.0, 34.0, false).unwrap().to_string(), "#C58E16");
    }

    #[test]
    fn test_channel_order_parsing() {
        assert_eq!("direct".parse::<ChannelOrder>().unwrap(), ChannelOrder::Direct);
        assert_eq!("RBG".parse::<ChannelOrder>().unwrap(), ChannelOrder::Swapped);
        assert!("bgr".parse::<ChannelOrder>().is_err());
    }
}
