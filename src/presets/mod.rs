//! Named acquisition geometries
//!
//! Two Sentinel-1 passes plus three reference geometries that put the line of
//! sight straight down or along a cardinal axis. The tuples are fixed; front
//! ends rely on them reproducing the same colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{LosError, Result};
use crate::geometry::{LookDirection, LosParameters};

/// Preset look geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Sentinel-1 ascending pass
    SentinelAscending,
    /// Sentinel-1 descending pass
    SentinelDescending,
    /// Nadir looking
    Vertical,
    /// Horizontal look due west
    WestEast,
    /// Horizontal look due north
    SouthNorth,
}

impl Preset {
    /// Every preset, in menu order
    pub const ALL: [Preset; 5] = [
        Preset::SentinelAscending,
        Preset::SentinelDescending,
        Preset::Vertical,
        Preset::WestEast,
        Preset::SouthNorth,
    ];

    /// Short identifier
    pub fn key(&self) -> &'static str {
        match self {
            Preset::SentinelAscending => "s1a",
            Preset::SentinelDescending => "s1d",
            Preset::Vertical => "vert",
            Preset::WestEast => "we",
            Preset::SouthNorth => "sn",
        }
    }

    /// Human readable menu label
    pub fn label(&self) -> &'static str {
        match self {
            Preset::SentinelAscending => "Sentinel-1 Ascending",
            Preset::SentinelDescending => "Sentinel-1 Descending",
            Preset::Vertical => "Vertical",
            Preset::WestEast => "West-East",
            Preset::SouthNorth => "South-North",
        }
    }

    /// Heading, incidence angle and look direction of the preset
    pub fn parameters(&self) -> LosParameters {
        let (heading, angle) = match self {
            Preset::SentinelAscending => (348.0, 34.0),
            Preset::SentinelDescending => (193.0, 34.0),
            Preset::Vertical => (0.0, 0.0),
            Preset::WestEast => (0.0, 90.0),
            Preset::SouthNorth => (90.0, 90.0),
        };
        LosParameters::new(heading, angle, LookDirection::Left)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Preset {
    type Err = LosError;

    /// Accepts either the key or the label, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(wanted) || p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LosError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table() {
        let table: Vec<(f64, f64, LookDirection)> = Preset::ALL
            .iter()
            .map(|p| {
                let params = p.parameters();
                (params.heading, params.angle, params.look)
            })
            .collect();
        assert_eq!(
            table,
            vec![
                (348.0, 34.0, LookDirection::Left),
                (193.0, 34.0, LookDirection::Left),
                (0.0, 0.0, LookDirection::Left),
                (0.0, 90.0, LookDirection::Left),
                (90.0, 90.0, LookDirection::Left),
            ]
        );
    }

    #[test]
    fn test_default_parameters_are_ascending() {
        assert_eq!(Preset::SentinelAscending.parameters(), LosParameters::default());
    }

    #[test]
    fn test_presets_pass_validation() {
        for preset in Preset::ALL {
            assert!(preset.parameters().validate().is_ok(), "{} rejected", preset);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("s1d".parse::<Preset>().unwrap(), Preset::SentinelDescending);
        assert_eq!("WE".parse::<Preset>().unwrap(), Preset::WestEast);
        assert_eq!("south-north".parse::<Preset>().unwrap(), Preset::SouthNorth);
        assert_eq!("Sentinel-1 Ascending".parse::<Preset>().unwrap(), Preset::SentinelAscending);
        assert!(matches!("polar".parse::<Preset>(), Err(LosError::UnknownPreset(_))));
    }
}
