//! Serializable shape profile.
//!
//! A [`ShapeProfile`] captures the full editor state (shape parameters and
//! paint colors) in a JSON-friendly format. It is the file format of the
//! command-line tool and the counterpart of the share URL for anything that
//! wants structured data instead of a query string.
//!
//! # Example
//!
//! ```
//! use corner_shaper::{ShapeParams, ShapeProfile};
//!
//! let profile = ShapeProfile::new(ShapeParams::default());
//!
//! let json = profile.to_json().unwrap();
//! let restored = ShapeProfile::from_json(&json).unwrap();
//! assert_eq!(restored, profile);
//! ```

use serde::{Deserialize, Serialize};

use crate::editor::{ShapeColors, hex, parse_color};
use crate::error::ShapeError;
use crate::geometry::ShapeParams;

// ============================================================================
// Colors
// ============================================================================

/// Paint colors as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ColorSettings {
    pub border: String,
    pub background: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self::from(&ShapeColors::default())
    }
}

impl From<&ShapeColors> for ColorSettings {
    fn from(colors: &ShapeColors) -> Self {
        Self {
            border: format!("#{}", hex(colors.border)),
            background: format!("#{}", hex(colors.background)),
        }
    }
}

impl TryFrom<&ColorSettings> for ShapeColors {
    type Error = ShapeError;

    fn try_from(settings: &ColorSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            border: parse_color(&settings.border)?,
            background: parse_color(&settings.background)?,
        })
    }
}

// ============================================================================
// ShapeProfile
// ============================================================================

/// Everything needed to recreate an editing session.
///
/// Shape values are stored as given. They are resolved when the profile is
/// applied, so a hand-edited file with oversized radii still loads.
///
/// # JSON Format
///
/// ```json
/// {
///   "shape": {
///     "canvas": { "width": 100.0, "height": 100.0 },
///     "cornerRadius": { "tl": 20.0, "tr": 0.0, "br": 10.0, "bl": 10.0 },
///     "invertedCorners": {
///       "tl": { "width": 20.0, "height": 30.0, "roundness": 10.0, "inverted": false },
///       "tr": { "width": 60.0, "height": 30.0, "roundness": 10.0, "inverted": true },
///       "br": { "width": 30.0, "height": 20.0, "roundness": 10.0, "inverted": false },
///       "bl": { "width": 20.0, "height": 20.0, "roundness": 10.0, "inverted": true }
///     },
///     "borderWidth": 0.0
///   },
///   "colors": { "border": "#FF2056", "background": "#513D34" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ShapeProfile {
    pub shape: ShapeParams,

    /// Missing colors fall back to the defaults.
    #[serde(default)]
    pub colors: ColorSettings,
}

impl Default for ShapeProfile {
    fn default() -> Self {
        Self::new(ShapeParams::default())
    }
}

impl ShapeProfile {
    /// A profile with the default colors.
    pub fn new(shape: ShapeParams) -> Self {
        Self {
            shape,
            colors: ColorSettings::default(),
        }
    }

    /// Sets the paint colors.
    pub fn with_colors(mut self, colors: &ShapeColors) -> Self {
        self.colors = colors.into();
        self
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// JSON schema of the profile format.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ShapeProfile)
    }
}

// ============================================================================
// Tests
// ============================================================================
