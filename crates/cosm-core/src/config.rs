//! Font-wide constants, fixed per build
//!
//! [`FontConfig`] gathers everything the pipeline treats as global: the
//! geometric unit sizes, vertical metrics, the side-bearing exception sets and
//! the file-stem escape table. The defaults reproduce the Cosm build; a JSON
//! file may override any subset of fields.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CosmError, Result};

/// Control point ratio of the four-arc cubic circle approximation
pub const KAPPA: f64 = 0.552_284_749_830_793_6;

/// Uniform squash applied to every viewbox height
pub const VERTICAL_COMPRESSION: f64 = 0.95;

/// Geometry and vertical metrics in font units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Metrics {
    /// Horizontal size of one pixel; also the stroke thickness of pills and dots
    pub unit_width: f64,
    /// Vertical pitch between pixel rows
    pub unit_height: f64,
    pub ascent: f64,
    pub descent: f64,
    /// Number of row pairs below the baseline
    pub baseline_row: u32,
    /// Bearing added on each side unless the character is exempt
    pub side_bearing: i32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            unit_width: 50.0,
            unit_height: 60.0,
            ascent: 700.0,
            descent: 200.0,
            baseline_row: 2,
            side_bearing: 50,
        }
    }
}

/// Characters that sit flush against their neighbours on one side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BearingPolicy {
    #[serde(with = "char_set")]
    pub no_left: BTreeSet<char>,
    #[serde(with = "char_set")]
    pub no_right: BTreeSet<char>,
}

impl BearingPolicy {
    pub fn left(&self, ch: char, side_bearing: i32) -> i32 {
        if self.no_left.contains(&ch) {
            0
        } else {
            side_bearing
        }
    }

    pub fn right(&self, ch: char, side_bearing: i32) -> i32 {
        if self.no_right.contains(&ch) {
            0
        } else {
            side_bearing
        }
    }
}

impl Default for BearingPolicy {
    fn default() -> Self {
        Self {
            no_left: " .,;:-!|ijst".chars().collect(),
            no_right: ".rf".chars().collect(),
        }
    }
}

/// File-stem escapes for characters a filename cannot carry verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EscapeTable {
    pub marker: char,
    pub substitutions: BTreeMap<char, char>,
}

impl EscapeTable {
    pub fn substitute(&self, ch: char) -> Option<char> {
        self.substitutions.get(&ch).copied()
    }
}

impl Default for EscapeTable {
    fn default() -> Self {
        Self {
            marker: '_',
            substitutions: BTreeMap::from([('\\', '/'), ('.', '.'), (';', ':')]),
        }
    }
}

/// Everything the pipeline reads but never writes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub metrics: Metrics,
    pub bearings: BearingPolicy,
    pub escapes: EscapeTable,
}

impl FontConfig {
    /// Load overrides from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded font configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.metrics;
        if !(m.unit_width.is_finite() && m.unit_width > 0.0) {
            return Err(CosmError::Config(format!(
                "unit_width must be positive, got {}",
                m.unit_width
            )));
        }
        if !(m.unit_height.is_finite() && m.unit_height > 0.0) {
            return Err(CosmError::Config(format!(
                "unit_height must be positive, got {}",
                m.unit_height
            )));
        }
        if !(m.ascent.is_finite() && m.ascent > 0.0) {
            return Err(CosmError::Config(format!(
                "ascent must be positive, got {}",
                m.ascent
            )));
        }
        if !(m.descent.is_finite() && m.descent >= 0.0) {
            return Err(CosmError::Config(format!(
                "descent must not be negative, got {}",
                m.descent
            )));
        }
        if m.side_bearing < 0 {
            return Err(CosmError::Config(format!(
                "side_bearing must not be negative, got {}",
                m.side_bearing
            )));
        }
        if self.escapes.marker.is_alphanumeric() {
            return Err(CosmError::Config(format!(
                "escape marker {:?} would shadow plain glyph names",
                self.escapes.marker
            )));
        }
        Ok(())
    }
}

/// Character sets as plain strings in JSON, e.g. `"no_right": "rf"`
mod char_set {
    use std::collections::BTreeSet;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(set: &BTreeSet<char>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&set.iter().collect::<String>())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeSet<char>, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(text.chars().collect())
    }
}
