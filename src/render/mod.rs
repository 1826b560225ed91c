mod frame;
mod frame_recorder;
mod line_override;
mod primitives;

pub use frame::RenderFrame;
pub use frame_recorder::FrameRecorder;
pub use line_override::{LineAttributes, LineOverride};
pub use primitives::{PolylinePrimitive, TextHAlign, TextPrimitive, TextVAlign};

use crate::core::OutputPoint;
use crate::error::PlotResult;

/// Receives polylines in already-mapped output coordinates.
///
/// Equivalent to move-to the first point, line-to each following point,
/// then stroke at the current line width.
pub trait DrawingSink {
    fn line_width(&self) -> f64;
    fn set_line_width(&mut self, line_width: f64);
    fn draw_polyline(&mut self, points: &[OutputPoint]) -> PlotResult<()>;
}

/// Receives axis labels.
pub trait TextSink {
    fn draw_text(&mut self, text: &TextPrimitive) -> PlotResult<()>;
}

/// Everything a plotting session draws into.
pub trait PlotSurface: DrawingSink + TextSink {}

impl<T: DrawingSink + TextSink> PlotSurface for T {}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, CairoSurfaceStats};
