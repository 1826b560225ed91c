use serde::{Deserialize, Serialize};

use crate::core::OutputPoint;
use crate::error::{PlotError, PlotResult};

/// Connected polyline in output space, stroked at `line_width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolylinePrimitive {
    pub points: Vec<OutputPoint>,
    pub line_width: f64,
}

impl PolylinePrimitive {
    #[must_use]
    pub fn new(points: impl Into<Vec<OutputPoint>>, line_width: f64) -> Self {
        Self {
            points: points.into(),
            line_width,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.points.len() < 2 {
            return Err(PlotError::InvalidData(
                "polyline needs at least two points".to_owned(),
            ));
        }
        if self
            .points
            .iter()
            .any(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(PlotError::InvalidData(
                "polyline coordinates must be finite".to_owned(),
            ));
        }
        validate_line_width(self.line_width)
    }
}

fn validate_line_width(line_width: f64) -> PlotResult<()> {
    if !line_width.is_finite() || line_width <= 0.0 {
        return Err(PlotError::InvalidData(
            "line width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Draw command for one label in output space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            h_align,
            v_align,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.text.is_empty() {
            return Err(PlotError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(PlotError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
