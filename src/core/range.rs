use crate::core::types::{AxisOrientation, DataPoint, DataRange};
use crate::error::{PlotError, PlotResult};

/// Smallest and largest `value ∓ |error|` over one column of tabular rows.
///
/// Returns `Ok(None)` for an empty table.
pub fn column_extent<R: AsRef<[f64]>>(
    rows: &[R],
    column: usize,
    error_column: Option<usize>,
) -> PlotResult<Option<(f64, f64)>> {
    let mut extent: Option<(f64, f64)> = None;

    for (row_index, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let value = cell(row, row_index, column)?;
        let error = match error_column {
            Some(error_column) => cell(row, row_index, error_column)?.abs(),
            None => 0.0,
        };

        let (low, high) = (value - error, value + error);
        extent = Some(match extent {
            None => (low, high),
            Some((min, max)) => (min.min(low), max.max(high)),
        });
    }

    Ok(extent)
}

/// Applies an extent to one axis: replaces it on `reset`, otherwise only
/// widens it.
pub fn reframe_axis(
    range: DataRange,
    orientation: AxisOrientation,
    reset: bool,
    (low, high): (f64, f64),
) -> PlotResult<DataRange> {
    let (current_min, current_max) = range.axis_bounds(orientation);
    let min = if reset || low < current_min {
        low
    } else {
        current_min
    };
    let max = if reset || high > current_max {
        high
    } else {
        current_max
    };
    range.with_axis_bounds(orientation, min, max)
}

/// Bounding box of `points` on both axes, or `None` for no points.
pub fn bounding_range(points: &[DataPoint]) -> PlotResult<Option<DataRange>> {
    let Some(first) = points.first() else {
        return Ok(None);
    };

    let mut min = *first;
    let mut max = *first;
    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(PlotError::InvalidData(
                "bounding points must be finite".to_owned(),
            ));
        }
        min = DataPoint::new(min.x.min(point.x), min.y.min(point.y));
        max = DataPoint::new(max.x.max(point.x), max.y.max(point.y));
    }

    DataRange::new(min.x, max.x, min.y, max.y).map(Some)
}

fn cell(row: &[f64], row_index: usize, column: usize) -> PlotResult<f64> {
    let value = row.get(column).copied().ok_or_else(|| {
        PlotError::InvalidData(format!("row {row_index} has no column {column}"))
    })?;
    if !value.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "row {row_index} column {column} must be finite"
        )));
    }
    Ok(value)
}
