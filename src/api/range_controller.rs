use tracing::debug;

use crate::core::{AxisSide, DataPoint, bounding_range, column_extent, reframe_axis};
use crate::error::PlotResult;
use crate::render::PlotSurface;

use super::Plotter;

impl<S: PlotSurface> Plotter<S> {
    /// Fits one axis of the data range to a column of tabular data.
    ///
    /// Each row contributes `row[column] ∓ |row[error_column]|`. With `reset`
    /// the axis is replaced by the column's extent, otherwise it only grows.
    /// Empty input changes nothing; a missing or non-finite cell is rejected
    /// before the range is touched.
    pub fn reframe<R: AsRef<[f64]>>(
        &mut self,
        reset: bool,
        side: AxisSide,
        rows: &[R],
        column: usize,
        error_column: Option<usize>,
    ) -> PlotResult<()> {
        let Some(extent) = column_extent(rows, column, error_column)? else {
            return Ok(());
        };

        let data_range = reframe_axis(self.data_range, side.orientation(), reset, extent)?;
        debug!(
            ?side,
            reset,
            rows = rows.len(),
            ?extent,
            ?data_range,
            "reframe data range"
        );
        self.data_range = data_range;
        Ok(())
    }

    /// Replaces both axes of the data range with the bounding box of `points`.
    pub fn bounds(&mut self, points: &[DataPoint]) -> PlotResult<()> {
        let Some(data_range) = bounding_range(points)? else {
            return Ok(());
        };

        debug!(points = points.len(), ?data_range, "fit data range to bounds");
        self.data_range = data_range;
        Ok(())
    }
}
