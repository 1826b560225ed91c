use crate::core::types::{DataPoint, DataRange, OutputPoint, Viewport};
use crate::error::{PlotError, PlotResult};

/// Affine transform between a data range and an output viewport.
///
/// Each axis is scaled independently, so the mapping is a pure function of
/// the two rectangles it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    viewport: Viewport,
    range: DataRange,
    scale_x: f64,
    scale_y: f64,
}

impl CoordinateMapper {
    pub fn new(range: DataRange, viewport: Viewport) -> PlotResult<Self> {
        viewport.validate()?;
        range.validate()?;

        let (min_x, max_x) = range.x_bounds();
        let (min_y, max_y) = range.y_bounds();
        if min_x == max_x {
            return Err(PlotError::DegenerateRange { axis: 'x' });
        }
        if min_y == max_y {
            return Err(PlotError::DegenerateRange { axis: 'y' });
        }

        let scale_x = viewport.width() / (max_x - min_x);
        let scale_y = viewport.height() / (max_y - min_y);
        if !scale_x.is_finite() || !scale_y.is_finite() || scale_x == 0.0 || scale_y == 0.0 {
            return Err(PlotError::InvalidData(
                "data range span cannot be represented at this viewport size".to_owned(),
            ));
        }

        Ok(Self {
            viewport,
            range,
            scale_x,
            scale_y,
        })
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn range(self) -> DataRange {
        self.range
    }

    /// Output units per data unit, `(bx, by)`. `by` is negative for the usual
    /// inverted Y viewport.
    #[must_use]
    pub fn scale(self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    #[must_use]
    pub fn map_x(self, x: f64) -> f64 {
        self.viewport.min_x + self.scale_x * (x - self.range.x_bounds().0)
    }

    #[must_use]
    pub fn map_y(self, y: f64) -> f64 {
        self.viewport.min_y + self.scale_y * (y - self.range.y_bounds().0)
    }

    #[must_use]
    pub fn to_output(self, point: DataPoint) -> OutputPoint {
        OutputPoint::new(self.map_x(point.x), self.map_y(point.y))
    }

    #[must_use]
    pub fn to_data(self, point: OutputPoint) -> DataPoint {
        DataPoint::new(
            self.range.x_bounds().0 + (point.x - self.viewport.min_x) / self.scale_x,
            self.range.y_bounds().0 + (point.y - self.viewport.min_y) / self.scale_y,
        )
    }

    /// Converts an output-space length into data units on each axis.
    #[must_use]
    pub fn output_to_data_extent(self, pixels: f64) -> (f64, f64) {
        (pixels / self.scale_x, pixels / self.scale_y)
    }

    /// Half an output pixel in data units, on whichever axis is finer.
    #[must_use]
    pub fn half_pixel_tolerance(self) -> f64 {
        (1.0 / self.scale_x).abs().min((1.0 / self.scale_y).abs()) * 0.5
    }
}
