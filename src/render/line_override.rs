use serde::{Deserialize, Serialize};

use crate::core::OutputPoint;
use crate::error::PlotResult;
use crate::render::{DrawingSink, TextPrimitive, TextSink};

/// Stroke attributes handed to a line override hook.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineAttributes {
    pub line_width: f64,
}

/// Caller-supplied drawing sink.
///
/// Every polyline goes to `hook` instead of the wrapped surface; text and
/// line width still belong to the surface.
pub struct LineOverride<S, F> {
    surface: S,
    hook: F,
}

impl<S, F> LineOverride<S, F>
where
    S: DrawingSink + TextSink,
    F: FnMut(&LineAttributes, &[OutputPoint]) -> PlotResult<()>,
{
    #[must_use]
    pub fn new(surface: S, hook: F) -> Self {
        Self { surface, hook }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_parts(self) -> (S, F) {
        (self.surface, self.hook)
    }
}

impl<S, F> DrawingSink for LineOverride<S, F>
where
    S: DrawingSink + TextSink,
    F: FnMut(&LineAttributes, &[OutputPoint]) -> PlotResult<()>,
{
    fn line_width(&self) -> f64 {
        self.surface.line_width()
    }

    fn set_line_width(&mut self, line_width: f64) {
        self.surface.set_line_width(line_width);
    }

    fn draw_polyline(&mut self, points: &[OutputPoint]) -> PlotResult<()> {
        let attributes = LineAttributes {
            line_width: self.surface.line_width(),
        };
        (self.hook)(&attributes, points)
    }
}

impl<S, F> TextSink for LineOverride<S, F>
where
    S: DrawingSink + TextSink,
    F: FnMut(&LineAttributes, &[OutputPoint]) -> PlotResult<()>,
{
    fn draw_text(&mut self, text: &TextPrimitive) -> PlotResult<()> {
        self.surface.draw_text(text)
    }
}
