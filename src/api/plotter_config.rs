use serde::{Deserialize, Serialize};

use crate::core::{DataRange, Viewport};

/// Public session configuration.
///
/// Holds what a plotting session needs besides its surface: the two
/// rectangles plus label font size, binding margin and base line width.
/// Serializable so hosts can persist chart setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotterConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub data_range: DataRange,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    #[serde(default)]
    pub margin_px: Option<f64>,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl PlotterConfig {
    #[must_use]
    pub fn new(viewport: Viewport, data_range: DataRange) -> Self {
        Self {
            viewport,
            data_range,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_margin_px(mut self, margin_px: f64) -> Self {
        self.margin_px = Some(margin_px);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            data_range: DataRange::default(),
            font_size_px: default_font_size_px(),
            margin_px: None,
            line_width: default_line_width(),
        }
    }
}

fn default_font_size_px() -> f64 {
    10.0
}

fn default_line_width() -> f64 {
    1.0
}
