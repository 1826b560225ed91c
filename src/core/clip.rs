use crate::core::scale::CoordinateMapper;
use crate::core::types::{DataPoint, DataRange, OutputPoint};

/// Slack allowed when accepting a point that was moved onto the boundary,
/// relative to the smaller range span.
const CLIPPED_POINT_TOLERANCE_RATIO: f64 = 1e-9;

/// A maximal visible sub-polyline, in data space.
pub type ClipRun = Vec<DataPoint>;

/// Splits polylines into the runs that fall inside a data-space rectangle.
///
/// Boundary points are found with independent per-axis interpolation: X edges
/// first, then Y edges on the already X-clipped point. A segment leaving
/// through a corner can therefore land slightly off the true intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentClipper {
    range: DataRange,
    clipped_tolerance: f64,
}

impl SegmentClipper {
    #[must_use]
    pub fn new(range: DataRange) -> Self {
        let (min_x, max_x) = range.x_bounds();
        let (min_y, max_y) = range.y_bounds();
        let span = (max_x - min_x).min(max_y - min_y);
        Self {
            range,
            clipped_tolerance: span * CLIPPED_POINT_TOLERANCE_RATIO,
        }
    }

    #[must_use]
    pub fn range(self) -> DataRange {
        self.range
    }

    /// Moves `point` onto the rectangle boundary along a line of slope
    /// `dy / dx`. Points already inside on an axis are left alone on it.
    #[must_use]
    pub fn clip_point(self, point: DataPoint, dx: f64, dy: f64) -> DataPoint {
        let (min_x, max_x) = self.range.x_bounds();
        let (min_y, max_y) = self.range.y_bounds();
        let mut clipped = point;

        if clipped.x < min_x {
            clipped.y = solve(dx, dy, clipped.x, clipped.y, min_x);
            clipped.x = min_x;
        } else if clipped.x > max_x {
            clipped.y = solve(dx, dy, clipped.x, clipped.y, max_x);
            clipped.x = max_x;
        }

        if clipped.y < min_y {
            clipped.x = solve(dy, dx, clipped.y, clipped.x, min_y);
            clipped.y = min_y;
        } else if clipped.y > max_y {
            clipped.x = solve(dy, dx, clipped.y, clipped.x, max_y);
            clipped.y = max_y;
        }

        clipped
    }

    /// Clips a polyline against the rectangle.
    ///
    /// Point order is preserved. A polyline that leaves and re-enters yields
    /// one run per visible stretch; runs without any length are dropped.
    #[must_use]
    pub fn clip_polyline(self, points: &[DataPoint]) -> Vec<ClipRun> {
        let mut runs = Vec::new();
        let Some((first, rest)) = points.split_first() else {
            return runs;
        };

        let mut pending = ClipRun::new();
        let mut last = *first;
        let mut starts_run = true;

        for &point in rest {
            let dx = point.x - last.x;
            let dy = point.y - last.y;

            let start = if starts_run {
                self.accept_clipped(self.clip_point(last, dx, dy))
            } else {
                Some(last)
            };

            let ends_run = !self.range.contains(point, 0.0);
            let end = if ends_run {
                self.accept_clipped(self.clip_point(point, dx, dy))
            } else {
                Some(point)
            };

            if let Some(end) = end {
                if starts_run {
                    pending.extend(start);
                }
                pending.push(end);
            }

            if ends_run {
                flush_run(&mut runs, &mut pending);
            }
            starts_run = ends_run;
            last = point;
        }

        flush_run(&mut runs, &mut pending);
        runs
    }

    /// Clips a polyline and maps every surviving run to output space.
    #[must_use]
    pub fn clip_polyline_to_output(
        self,
        points: &[DataPoint],
        mapper: CoordinateMapper,
    ) -> Vec<Vec<OutputPoint>> {
        self.clip_polyline(points)
            .into_iter()
            .map(|run| run.into_iter().map(|point| mapper.to_output(point)).collect())
            .collect()
    }

    fn accept_clipped(self, point: DataPoint) -> Option<DataPoint> {
        if !self.range.contains(point, self.clipped_tolerance) {
            return None;
        }
        let (min_x, max_x) = self.range.x_bounds();
        let (min_y, max_y) = self.range.y_bounds();
        Some(DataPoint::new(
            point.x.clamp(min_x, max_x),
            point.y.clamp(min_y, max_y),
        ))
    }
}

/// Solves the line through `(from, at)` with slope `rise / run` at `target`.
fn solve(run: f64, rise: f64, from: f64, at: f64, target: f64) -> f64 {
    at + rise / run * (target - from)
}

fn flush_run(runs: &mut Vec<ClipRun>, pending: &mut ClipRun) {
    let run = std::mem::take(pending);
    if run.windows(2).any(|pair| pair[0] != pair[1]) {
        runs.push(run);
    }
}

#[cfg(test)]
mod tests {
    use super::{SegmentClipper, solve};
    use crate::core::{DataPoint, DataRange};

    #[test]
    fn solve_interpolates_along_slope() {
        assert_eq!(solve(2.0, 1.0, 0.0, 0.0, 4.0), 2.0);
        assert_eq!(solve(10.0, 0.0, -5.0, 3.0, 0.0), 3.0);
    }

    #[test]
    fn corner_exit_clips_x_before_y() {
        let range = DataRange::new(0.0, 10.0, 0.0, 10.0).expect("range");
        let clipper = SegmentClipper::new(range);

        // Line y = x + 6 leaves through the top edge at x = 4.
        let clipped = clipper.clip_point(DataPoint::new(12.0, 18.0), 6.0, 6.0);
        assert_eq!(clipped, DataPoint::new(4.0, 10.0));
    }

    #[test]
    fn zero_length_touch_is_not_a_run() {
        let range = DataRange::new(0.0, 10.0, 0.0, 10.0).expect("range");
        let clipper = SegmentClipper::new(range);

        let runs = clipper.clip_polyline(&[DataPoint::new(-5.0, 0.0), DataPoint::new(-3.0, 1.0)]);
        assert!(runs.is_empty());
    }
}
