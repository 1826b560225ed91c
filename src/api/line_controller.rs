use tracing::trace;

use crate::core::{DataPoint, SegmentClipper};
use crate::error::PlotResult;
use crate::render::PlotSurface;

use super::Plotter;

impl<S: PlotSurface> Plotter<S> {
    /// Draws the viewport outline at twice the current line width.
    pub fn frame(&mut self) -> PlotResult<()> {
        let outline = self.viewport.outline();
        self.with_scaled_line_width(2.0, |plotter| plotter.surface.draw_polyline(&outline))
    }

    /// Draws a data-space polyline, clipped to the current data range.
    ///
    /// Each visible stretch reaches the surface as its own polyline, with
    /// entry and exit points interpolated onto the range boundary. Fewer
    /// than two points is a no-op.
    pub fn line(&mut self, points: &[DataPoint]) -> PlotResult<()> {
        if points.len() < 2 {
            return Ok(());
        }

        let mapper = self.mapper()?;
        let runs = SegmentClipper::new(self.data_range).clip_polyline_to_output(points, mapper);
        trace!(
            input_points = points.len(),
            runs = runs.len(),
            "clip polyline"
        );
        for run in &runs {
            self.surface.draw_polyline(run)?;
        }
        Ok(())
    }
}
