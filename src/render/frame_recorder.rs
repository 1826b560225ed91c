use crate::core::OutputPoint;
use crate::error::PlotResult;
use crate::render::{DrawingSink, PolylinePrimitive, RenderFrame, TextPrimitive, TextSink};

/// Headless surface that records primitives instead of painting them.
///
/// Used by tests and by hosts that rasterize the frame themselves. Every
/// primitive is validated on arrival so invalid geometry fails the draw call
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecorder {
    frame: RenderFrame,
    line_width: f64,
}

impl FrameRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: RenderFrame::new(),
            line_width: 1.0,
        }
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Hands out the recorded frame and starts a fresh one.
    pub fn take_frame(&mut self) -> RenderFrame {
        std::mem::take(&mut self.frame)
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }
}

impl Default for FrameRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSink for FrameRecorder {
    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn set_line_width(&mut self, line_width: f64) {
        self.line_width = line_width;
    }

    fn draw_polyline(&mut self, points: &[OutputPoint]) -> PlotResult<()> {
        let polyline = PolylinePrimitive::new(points, self.line_width);
        polyline.validate()?;
        self.frame.polylines.push(polyline);
        Ok(())
    }
}

impl TextSink for FrameRecorder {
    fn draw_text(&mut self, text: &TextPrimitive) -> PlotResult<()> {
        text.validate()?;
        self.frame.texts.push(text.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FrameRecorder;
    use crate::core::OutputPoint;
    use crate::render::{DrawingSink, TextHAlign, TextPrimitive, TextSink, TextVAlign};

    #[test]
    fn invalid_geometry_is_rejected_and_not_recorded() {
        let mut recorder = FrameRecorder::new();
        let segment = [OutputPoint::new(0.0, 0.0), OutputPoint::new(f64::NAN, 1.0)];

        assert!(recorder.draw_polyline(&segment).is_err());
        assert!(recorder.draw_polyline(&segment[..1]).is_err());
        recorder.set_line_width(0.0);
        assert!(recorder.draw_polyline(&[segment[0], segment[0]]).is_err());

        let empty = TextPrimitive::new("", 1.0, 1.0, 10.0, TextHAlign::Left, TextVAlign::Top);
        assert!(recorder.draw_text(&empty).is_err());
        assert!(recorder.frame().is_empty());
    }

    #[test]
    fn take_frame_starts_a_fresh_recording() {
        let mut recorder = FrameRecorder::new();
        let segment = [OutputPoint::new(0.0, 0.0), OutputPoint::new(3.0, 4.0)];
        recorder.draw_polyline(&segment).expect("draw");

        let taken = recorder.take_frame();

        assert_eq!(taken.polylines.len(), 1);
        assert_eq!(taken.polylines[0].line_width, 1.0);
        assert!(recorder.frame().is_empty());
    }
}
