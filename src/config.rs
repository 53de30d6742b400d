//! TOML palette file support.
//!
//! A palette file is a name plus a list of `[[color]]` records, each giving
//! the slot color in exactly one representation:
//!
//! ```toml
//! name = "default"
//!
//! [[color]]
//! hsv = [20.0, 100.0, 100.0]
//!
//! [[color]]
//! rgb = [76, 76, 76]
//!
//! [[color]]
//! hex = "#1a1a2e"
//! ```

use std::path::Path;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::color::parse_color;

/// Error type for palette file operations.
#[derive(Debug)]
pub enum PaletteError {
    /// IO error reading/writing the file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// A color record failed validation; carries the slot index and reason
    InvalidColor { index: usize, reason: String },
}

impl std::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Parse(e) => write!(f, "TOML parse error: {e}"),
            Self::Serialize(e) => write!(f, "TOML serialize error: {e}"),
            Self::InvalidColor { index, reason } => write!(f, "[color{index}] {reason}"),
        }
    }
}

impl std::error::Error for PaletteError {}

impl From<std::io::Error> for PaletteError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for PaletteError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for PaletteError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Root structure of a palette file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteFile {
    /// Palette name shown in the header
    pub name: String,
    /// Per-slot color records
    #[serde(rename = "color")]
    pub colors: Vec<PaletteColor>,
}

/// One persisted color slot. Exactly one representation may be populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteColor {
    /// RGB triple, each component 0-255
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb: Option<Vec<i64>>,
    /// HSV triple: hue 0-359, saturation/value 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hsv: Option<Vec<f64>>,
    /// Hex string, e.g. `"#1a1a2e"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl PaletteColor {
    /// A record persisting picker-scale HSV components.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hsv: Some(vec![hue, saturation, value]),
            ..Self::default()
        }
    }

    /// Validate and resolve this record into HSV components.
    ///
    /// `index` is the slot position, used to name the offending record in
    /// error messages.
    pub fn resolve(&self, index: usize) -> Result<(f64, f64, f64), PaletteError> {
        let invalid = |reason: String| PaletteError::InvalidColor { index, reason };

        if let Some(rgb) = &self.rgb {
            if rgb.len() != 3 {
                return Err(invalid(format!(
                    "malformed RGB (expected 3 values, got {})",
                    rgb.len()
                )));
            }
            if rgb.iter().any(|&x| !(0..=255).contains(&x)) {
                return Err(invalid("malformed RGB (values must be 0-255)".into()));
            }
            let srgb = Srgb::new(rgb[0] as u8, rgb[1] as u8, rgb[2] as u8);
            return Ok(crate::color::rgb_to_hsv(srgb));
        }

        if let Some(hsv) = &self.hsv {
            if hsv.len() != 3 {
                return Err(invalid(format!(
                    "malformed HSV (expected 3 values, got {})",
                    hsv.len()
                )));
            }
            if !(0.0..=359.0).contains(&hsv[0]) {
                return Err(invalid("malformed HSV (hue out of 0-359 bounds)".into()));
            }
            if !(0.0..=100.0).contains(&hsv[1]) {
                return Err(invalid(
                    "malformed HSV (saturation out of 0-100 bounds)".into(),
                ));
            }
            if !(0.0..=100.0).contains(&hsv[2]) {
                return Err(invalid("malformed HSV (value out of 0-100 bounds)".into()));
            }
            return Ok((hsv[0], hsv[1], hsv[2]));
        }

        if let Some(hex) = &self.hex {
            let srgb = parse_color(hex).map_err(invalid)?;
            return Ok(crate::color::rgb_to_hsv(srgb));
        }

        Err(invalid("missing color definition".into()))
    }
}

impl PaletteFile {
    /// Load a palette file.
    ///
    /// Returns `Ok(None)` when the file does not exist (the first-run
    /// case); any other failure is an error.
    pub fn load(path: &Path) -> Result<Option<Self>, PaletteError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file: Self = toml::from_str(&content)?;
        Ok(Some(file))
    }

    /// Save the palette file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), PaletteError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Default palette path: `<config dir>/tintpick/default.toml`.
pub fn default_palette_path() -> std::path::PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("tintpick")
        .join("default.toml")
}
