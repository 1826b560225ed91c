use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Output (device) rectangle that mapped geometry is drawn into.
///
/// `min_y` is normally numerically larger than `max_y` so that increasing
/// data-Y plots upward on a top-left-origin surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Computes the viewport for a surface of `width` x `height` pixels.
    ///
    /// The margin is honored on an axis only when three margins still fit
    /// into that dimension; otherwise that axis gets no margin.
    #[must_use]
    pub fn from_surface(width: f64, height: f64, margin: f64) -> Self {
        let margin_x = if 3.0 * margin > width { 0.0 } else { margin };
        let margin_y = if 3.0 * margin > height { 0.0 } else { margin };
        Self::new(margin_x, width - margin_x, height - margin_y, margin_y)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|value| value.is_finite())
            && self.width() != 0.0
            && self.height() != 0.0
    }

    pub fn validate(self) -> PlotResult<()> {
        if !self.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// Corners in drawing order, closed back onto the first one.
    #[must_use]
    pub fn outline(self) -> [OutputPoint; 5] {
        let origin = OutputPoint::new(self.min_x, self.min_y);
        [
            origin,
            OutputPoint::new(self.min_x, self.max_y),
            OutputPoint::new(self.max_x, self.max_y),
            OutputPoint::new(self.max_x, self.min_y),
            origin,
        ]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 100.0, 100.0, 0.0)
    }
}

/// Visible window in data space.
///
/// Bounds are ordered (`min <= max`) but may coincide; a degenerate axis is
/// valid state that only the mapper refuses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl DataRange {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> PlotResult<Self> {
        validate_bounds('x', min_x, max_x)?;
        validate_bounds('y', min_y, max_y)?;
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Re-checks bounds, for values that bypassed `new` (e.g. deserialized).
    pub fn validate(self) -> PlotResult<()> {
        validate_bounds('x', self.min_x, self.max_x)?;
        validate_bounds('y', self.min_y, self.max_y)
    }

    #[must_use]
    pub fn x_bounds(self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    #[must_use]
    pub fn y_bounds(self) -> (f64, f64) {
        (self.min_y, self.max_y)
    }

    #[must_use]
    pub fn axis_bounds(self, orientation: AxisOrientation) -> (f64, f64) {
        match orientation {
            AxisOrientation::Horizontal => self.x_bounds(),
            AxisOrientation::Vertical => self.y_bounds(),
        }
    }

    /// Returns a copy with one axis replaced.
    pub fn with_axis_bounds(
        self,
        orientation: AxisOrientation,
        min: f64,
        max: f64,
    ) -> PlotResult<Self> {
        match orientation {
            AxisOrientation::Horizontal => Self::new(min, max, self.min_y, self.max_y),
            AxisOrientation::Vertical => Self::new(self.min_x, self.max_x, min, max),
        }
    }

    /// Inclusive containment test, widened on both axes by `|tolerance|`.
    #[must_use]
    pub fn contains(self, point: DataPoint, tolerance: f64) -> bool {
        let tolerance = tolerance.abs();
        point.x >= self.min_x - tolerance
            && point.x <= self.max_x + tolerance
            && point.y >= self.min_y - tolerance
            && point.y <= self.max_y + tolerance
    }
}

impl Default for DataRange {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1000.0,
            min_y: 0.0,
            max_y: 1000.0,
        }
    }
}

fn validate_bounds(axis: char, min: f64, max: f64) -> PlotResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(PlotError::InvalidData(format!(
            "{axis} range bounds must be finite"
        )));
    }
    if min > max {
        return Err(PlotError::InvalidData(format!(
            "{axis} range min must be <= max (got {min} > {max})"
        )));
    }
    Ok(())
}

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A point in output (device) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputPoint {
    pub x: f64,
    pub y: f64,
}

impl OutputPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Which edge an axis is drawn along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSide {
    BottomX,
    TopX,
    LeftY,
    RightY,
}

impl AxisSide {
    #[must_use]
    pub const fn orientation(self) -> AxisOrientation {
        match self {
            Self::BottomX | Self::TopX => AxisOrientation::Horizontal,
            Self::LeftY | Self::RightY => AxisOrientation::Vertical,
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::BottomX => 1,
            Self::TopX => 2,
            Self::LeftY => 3,
            Self::RightY => 4,
        }
    }
}

impl TryFrom<u8> for AxisSide {
    type Error = PlotError;

    fn try_from(code: u8) -> PlotResult<Self> {
        match code {
            1 => Ok(Self::BottomX),
            2 => Ok(Self::TopX),
            3 => Ok(Self::LeftY),
            4 => Ok(Self::RightY),
            other => Err(PlotError::UnknownAxisDirection(other)),
        }
    }
}
