//! Sheet configuration
//!
//! Stores display options in `~/.config/token-sheet/sheet.yaml`. The
//! configuration is built once per sheet and handed to the overlay
//! read-only; the container never looks inside it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// Monospace text metrics used for layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextMetrics {
    /// Body line height in pixels
    pub line_height: f32,
    /// Body character advance in pixels
    pub char_width: f32,
    /// Multiplier for title-scale text
    pub title_scale: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            line_height: 20.0,
            char_width: 10.0,
            title_scale: 1.5,
        }
    }
}

/// Display and behavior options for a bottom sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Draw the pill-shaped drag indicator above the header
    pub drag_indicator: bool,
    /// Tapping the drag indicator advances to the next switchable position
    pub indicator_switches_position: bool,
    /// Sheet background, `#RRGGBB` or `#RRGGBBAA`
    #[serde(with = "hex_color")]
    pub background: u32,
    #[serde(with = "hex_color")]
    pub border: u32,
    #[serde(with = "hex_color")]
    pub indicator_color: u32,
    #[serde(with = "hex_color")]
    pub text_color: u32,
    /// Space kept free above a fully expanded sheet
    pub top_inset: f32,
    /// Inner padding between the sheet edge and its content
    pub padding: f32,
    /// Cap on sheet width; wider viewports center the sheet
    pub max_width: Option<f32>,
    pub metrics: TextMetrics,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            drag_indicator: true,
            indicator_switches_position: true,
            background: 0xF0252526, // 94% alpha dark gray
            border: 0xFF3C3C3C,
            indicator_color: 0xFF6E6E6E,
            text_color: 0xFFD4D4D4,
            top_inset: 24.0,
            padding: 12.0,
            max_width: None,
            metrics: TextMetrics::default(),
        }
    }
}

/// Fixed geometry of the drag indicator pill
pub const INDICATOR_WIDTH: f32 = 36.0;
pub const INDICATOR_HEIGHT: f32 = 5.0;
pub const INDICATOR_MARGIN: f32 = 8.0;

impl SheetConfig {
    /// Vertical space reserved for the drag indicator (zero if disabled)
    pub fn indicator_space(&self) -> f32 {
        if self.drag_indicator {
            INDICATOR_HEIGHT + INDICATOR_MARGIN * 2.0
        } else {
            0.0
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, SheetError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String, SheetError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Sheet config not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, SheetError> {
        let content = std::fs::read_to_string(path).map_err(|e| SheetError::io(path, e))?;
        let config = Self::from_yaml(&content)?;
        tracing::info!("Loaded sheet config from {}", path.display());
        Ok(config)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), SheetError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SheetError::io(parent, e))?;
        }

        let content = self.to_yaml()?;
        std::fs::write(path, content).map_err(|e| SheetError::io(path, e))?;

        tracing::info!("Saved sheet config to {}", path.display());
        Ok(())
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into ARGB
pub fn parse_hex_color(s: &str) -> Result<u32, SheetError> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(SheetError::InvalidColor(s.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| SheetError::InvalidColor(s.to_string()))
    };
    let (r, g, b, a) = match hex.len() {
        6 => (channel(0..2)?, channel(2..4)?, channel(4..6)?, 0xFF),
        8 => (channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?),
        _ => return Err(SheetError::InvalidColor(s.to_string())),
    };
    Ok(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
}

/// Format ARGB as `#RRGGBBAA` (or `#RRGGBB` when opaque)
pub fn format_hex_color(argb: u32) -> String {
    let a = (argb >> 24) & 0xFF;
    let rgb = argb & 0x00FF_FFFF;
    if a == 0xFF {
        format!("#{:06X}", rgb)
    } else {
        format!("#{:06X}{:02X}", rgb, a)
    }
}

/// Serde adapter storing ARGB colors as hex strings
pub(crate) mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(argb: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hex_color(*argb))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex_color(&s).map_err(serde::de::Error::custom)
    }
}
