use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::DataPoint;
use crate::error::{PlotError, PlotResult};
use crate::render::PlotSurface;

use super::Plotter;

/// Half the size of a marker cross and error-bar cap, in output pixels.
const MARK_HALF_SIZE_PX: f64 = 5.0;
const MARK_LINE_WIDTH_FACTOR: f64 = 0.5;

type MarkSegments = SmallVec<[[DataPoint; 2]; 8]>;

impl<S: PlotSurface> Plotter<S> {
    /// Draws an `x` marker at `(x, y)` with optional error bars.
    ///
    /// `x_err`/`y_err` add an H-shaped bracket spanning `value ± err` along
    /// that axis. A marker whose centre is outside the data range is not
    /// drawn at all; bars of a visible marker are clipped like any line.
    pub fn mark(&mut self, x: f64, y: f64, x_err: Option<f64>, y_err: Option<f64>) -> PlotResult<()> {
        let center = DataPoint::new(x, y);
        if !self.data_range.contains(center, 0.0) {
            trace!(x, y, "suppress off-range mark");
            return Ok(());
        }

        for error in [x_err, y_err].into_iter().flatten() {
            if !error.is_finite() {
                return Err(PlotError::InvalidData(
                    "mark error magnitude must be finite".to_owned(),
                ));
            }
        }

        let (dx, dy) = self.mapper()?.output_to_data_extent(MARK_HALF_SIZE_PX);
        let segments = mark_segments(center, dx, dy, x_err, y_err);

        self.with_scaled_line_width(MARK_LINE_WIDTH_FACTOR, |plotter| {
            for segment in &segments {
                plotter.line(segment)?;
            }
            Ok(())
        })
    }

    /// Draws one marker per row of tabular data.
    ///
    /// Columns 0 and 1 hold x and y. Error columns are optional per row: a
    /// row without the cell gets no bar on that axis. Rows shorter than two
    /// columns are skipped.
    pub fn marks<R: AsRef<[f64]>>(
        &mut self,
        rows: &[R],
        x_err_column: Option<usize>,
        y_err_column: Option<usize>,
    ) -> PlotResult<()> {
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let &[x, y, ..] = row else {
                warn!(row = index, columns = row.len(), "skipping mark row without x/y");
                continue;
            };
            let x_err = x_err_column.and_then(|column| row.get(column).copied());
            let y_err = y_err_column.and_then(|column| row.get(column).copied());
            self.mark(x, y, x_err, y_err)?;
        }
        Ok(())
    }
}

fn mark_segments(
    center: DataPoint,
    dx: f64,
    dy: f64,
    x_err: Option<f64>,
    y_err: Option<f64>,
) -> MarkSegments {
    let DataPoint { x, y } = center;
    let mut segments = MarkSegments::new();
    segments.push([DataPoint::new(x - dx, y - dy), DataPoint::new(x + dx, y + dy)]);
    segments.push([DataPoint::new(x + dx, y - dy), DataPoint::new(x - dx, y + dy)]);

    if let Some(err) = x_err {
        segments.push([DataPoint::new(x - err, y - dy), DataPoint::new(x - err, y + dy)]);
        segments.push([DataPoint::new(x - err, y), DataPoint::new(x + err, y)]);
        segments.push([DataPoint::new(x + err, y - dy), DataPoint::new(x + err, y + dy)]);
    }
    if let Some(err) = y_err {
        segments.push([DataPoint::new(x - dx, y - err), DataPoint::new(x + dx, y - err)]);
        segments.push([DataPoint::new(x, y - err), DataPoint::new(x, y + err)]);
        segments.push([DataPoint::new(x - dx, y + err), DataPoint::new(x + dx, y + err)]);
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::mark_segments;
    use crate::core::DataPoint;

    #[test]
    fn bare_mark_is_two_crossing_diagonals() {
        let segments = mark_segments(DataPoint::new(1.0, 1.0), 0.5, 0.25, None, None);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], [DataPoint::new(0.5, 0.75), DataPoint::new(1.5, 1.25)]);
    }

    #[test]
    fn error_bars_add_three_segments_per_axis() {
        let segments = mark_segments(DataPoint::new(0.0, 0.0), 1.0, 1.0, Some(2.0), Some(3.0));
        assert_eq!(segments.len(), 8);
        assert_eq!(segments[3], [DataPoint::new(-2.0, 0.0), DataPoint::new(2.0, 0.0)]);
        assert_eq!(segments[6], [DataPoint::new(0.0, -3.0), DataPoint::new(0.0, 3.0)]);
    }
}
