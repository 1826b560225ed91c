use tracing::{debug, trace, warn};

use crate::core::{
    AxisOrientation, AxisSide, DataPoint, OutputPoint, Tic, format_tic_label, generate_tics,
};
use crate::error::PlotResult;
use crate::render::{PlotSurface, TextHAlign, TextPrimitive, TextVAlign};

use super::Plotter;

const MAJOR_TIC_LENGTH_PX: f64 = 6.0;
const MINOR_TIC_LENGTH_PX: f64 = 3.0;
const VERTICAL_AXIS_LABEL_GAP_PX: f64 = 10.0;
const HORIZONTAL_AXIS_LABEL_GAP_PX: f64 = 3.0;
const LABEL_LINE_HEIGHT_RATIO: f64 = 1.1;

/// Output-space offsets and text placement for one axis side.
#[derive(Debug, Clone, Copy)]
struct AxisLayout {
    mark_dx: f64,
    mark_dy: f64,
    label_dx: f64,
    label_dy: f64,
    h_align: TextHAlign,
    v_align: TextVAlign,
}

impl AxisLayout {
    fn for_side(side: AxisSide, font_size_px: f64) -> Self {
        let label_drop = LABEL_LINE_HEIGHT_RATIO * font_size_px + HORIZONTAL_AXIS_LABEL_GAP_PX;
        match side {
            AxisSide::BottomX => Self {
                mark_dx: 0.0,
                mark_dy: 1.0,
                label_dx: 0.0,
                label_dy: label_drop,
                h_align: TextHAlign::Center,
                v_align: TextVAlign::Middle,
            },
            AxisSide::TopX => Self {
                mark_dx: 0.0,
                mark_dy: -1.0,
                label_dx: 0.0,
                label_dy: -label_drop,
                h_align: TextHAlign::Center,
                v_align: TextVAlign::Middle,
            },
            AxisSide::LeftY => Self {
                mark_dx: -1.0,
                mark_dy: 0.0,
                label_dx: -VERTICAL_AXIS_LABEL_GAP_PX,
                label_dy: 0.0,
                h_align: TextHAlign::Right,
                v_align: TextVAlign::Middle,
            },
            AxisSide::RightY => Self {
                mark_dx: 1.0,
                mark_dy: 0.0,
                label_dx: VERTICAL_AXIS_LABEL_GAP_PX,
                label_dy: 0.0,
                h_align: TextHAlign::Left,
                v_align: TextVAlign::Middle,
            },
        }
    }
}

impl<S: PlotSurface> Plotter<S> {
    /// Generates round-number tics for the axis `side` runs along.
    ///
    /// With `pad` the axis of the data range is snapped outward to the first
    /// and last major tic. `Ok(None)` means no tics are knowable for the
    /// current range; the range is left untouched in that case.
    pub fn auto_tics(&mut self, side: AxisSide, pad: bool) -> PlotResult<Option<Vec<Tic>>> {
        let orientation = side.orientation();
        let (lo, hi) = self.data_range.axis_bounds(orientation);
        let Some(layout) = generate_tics(lo, hi, pad) else {
            debug!(?side, lo, hi, pad, "axis tics not knowable");
            return Ok(None);
        };

        if pad {
            let (min, max) = layout.range;
            self.data_range = self.data_range.with_axis_bounds(orientation, min, max)?;
            debug!(
                ?side,
                lo,
                hi,
                min,
                max,
                major_interval = layout.major_interval,
                "pad axis range to major tics"
            );
        }

        Ok(Some(layout.tics))
    }

    /// Draws an axis line along `side` with its tic marks and labels.
    ///
    /// `at` is the data coordinate on the opposite axis the line sits on;
    /// it defaults to the range edge belonging to `side`. Tics outside the
    /// visible range (give or take half a pixel) are skipped. An empty tic
    /// list draws nothing.
    pub fn axis(&mut self, side: AxisSide, tics: &[Tic], at: Option<f64>) -> PlotResult<()> {
        if tics.is_empty() {
            return Ok(());
        }

        let mapper = self.mapper()?;
        let layout = AxisLayout::for_side(side, self.font_size_px);
        let tolerance = mapper.half_pixel_tolerance();
        let (min_x, max_x) = self.data_range.x_bounds();
        let (min_y, max_y) = self.data_range.y_bounds();
        let at = at.unwrap_or(match side {
            AxisSide::BottomX => min_y,
            AxisSide::TopX => max_y,
            AxisSide::LeftY => min_x,
            AxisSide::RightY => max_x,
        });

        let mut drawn = 0usize;
        for (index, tic) in tics.iter().enumerate() {
            let (data_point, origin) = match side.orientation() {
                AxisOrientation::Vertical => {
                    let x = mapper.map_x(at);
                    if index == 0 {
                        self.surface.draw_polyline(&[
                            OutputPoint::new(x, self.viewport.min_y),
                            OutputPoint::new(x, self.viewport.max_y),
                        ])?;
                    }
                    (
                        DataPoint::new(at, tic.position),
                        OutputPoint::new(x, mapper.map_y(tic.position)),
                    )
                }
                AxisOrientation::Horizontal => {
                    let y = mapper.map_y(at);
                    if index == 0 {
                        self.surface.draw_polyline(&[
                            OutputPoint::new(self.viewport.min_x, y),
                            OutputPoint::new(self.viewport.max_x, y),
                        ])?;
                    }
                    (
                        DataPoint::new(tic.position, at),
                        OutputPoint::new(mapper.map_x(tic.position), y),
                    )
                }
            };

            if !self.data_range.contains(data_point, tolerance) {
                continue;
            }

            let length = if tic.is_major {
                MAJOR_TIC_LENGTH_PX
            } else {
                MINOR_TIC_LENGTH_PX
            };
            self.surface.draw_polyline(&[
                origin,
                OutputPoint::new(
                    origin.x + length * layout.mark_dx,
                    origin.y + length * layout.mark_dy,
                ),
            ])?;

            if let Some(label) = tic.label {
                self.surface.draw_text(&TextPrimitive::new(
                    format_tic_label(label),
                    origin.x + layout.label_dx,
                    origin.y + layout.label_dy,
                    self.font_size_px,
                    layout.h_align,
                    layout.v_align,
                ))?;
            }
            drawn += 1;
        }

        trace!(?side, at, tics = tics.len(), drawn, "draw axis");
        Ok(())
    }

    /// Like [`Plotter::axis`], but takes one of the classic direction codes
    /// (1 bottom X, 2 top X, 3 left Y, 4 right Y).
    pub fn axis_by_code(&mut self, code: u8, tics: &[Tic], at: Option<f64>) -> PlotResult<()> {
        let side = AxisSide::try_from(code).inspect_err(|err| {
            warn!(code, error = %err, "rejecting axis draw");
        })?;
        self.axis(side, tics, at)
    }

    /// Generates tics for `side` and draws the axis with them.
    ///
    /// Returns `false` when no tics are knowable and the axis was skipped.
    /// A failed draw rolls back any padding applied to the range.
    pub fn auto_axis(&mut self, side: AxisSide, pad: bool, at: Option<f64>) -> PlotResult<bool> {
        let previous_range = self.data_range;
        let Some(tics) = self.auto_tics(side, pad)? else {
            return Ok(false);
        };
        if let Err(err) = self.axis(side, &tics, at) {
            self.data_range = previous_range;
            return Err(err);
        }
        Ok(true)
    }
}
