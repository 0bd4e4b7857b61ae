//! Canvas configuration.
//!
//! Hosts usually keep these values in their own settings file; this module
//! only parses and validates them. Every field has a default, so `{}` is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::concept::SizingPolicy;
use crate::constants::{CLICK_SLOP, OVERLAY_SIZE};
use crate::error::{CanvasError, CanvasResult};
use crate::types::Size;

/// Tunables for the interaction core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// How a concept label becomes a bounding region
    pub sizing: SizingPolicy,
    /// Frame size of the text-edit overlay while shown
    pub overlay_size: Size,
    /// Maximum pointer travel between down and up that still counts as a click
    pub click_slop: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            sizing: SizingPolicy::default(),
            overlay_size: OVERLAY_SIZE.into(),
            click_slop: CLICK_SLOP,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(click_slop = config.click_slop, "Loaded canvas config");
        Ok(config)
    }

    pub fn to_json(&self) -> CanvasResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every numeric field is finite and in range.
    pub fn validate(&self) -> CanvasResult<()> {
        let sizing = &self.sizing;
        positive("sizing.default_font_size", sizing.default_font_size)?;
        positive("sizing.char_width_ratio", sizing.char_width_ratio)?;
        positive("sizing.line_height_ratio", sizing.line_height_ratio)?;
        non_negative("sizing.padding", sizing.padding)?;
        positive("sizing.min_size.width", sizing.min_size.width)?;
        positive("sizing.min_size.height", sizing.min_size.height)?;
        positive("overlay_size.width", self.overlay_size.width)?;
        positive("overlay_size.height", self.overlay_size.height)?;
        non_negative("click_slop", self.click_slop)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> CanvasResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CanvasError::InvalidConfig {
            field,
            reason: format!("must be a positive number, got {value}"),
        });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f32) -> CanvasResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CanvasError::InvalidConfig {
            field,
            reason: format!("must be zero or greater, got {value}"),
        });
    }
    Ok(())
}
