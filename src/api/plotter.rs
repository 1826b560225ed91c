use tracing::debug;

use crate::core::{CoordinateMapper, DataRange, OutputPoint, Viewport};
use crate::error::PlotResult;
use crate::render::{LineAttributes, LineOverride, PlotSurface};

use super::PlotterConfig;
use super::validation::{validate_margin, validate_plotter_config, validate_surface_size};

/// One plotting session: a surface plus the viewport/data-range pair it maps
/// between.
///
/// All drawing goes through `&mut self`, so a session is driven by one caller
/// at a time: bind, fit ranges, then draw. Independent charts own independent
/// sessions.
pub struct Plotter<S: PlotSurface> {
    pub(super) surface: S,
    pub(super) viewport: Viewport,
    pub(super) data_range: DataRange,
    pub(super) font_size_px: f64,
    pub(super) margin_px: Option<f64>,
}

impl<S: PlotSurface> Plotter<S> {
    pub fn new(mut surface: S, config: PlotterConfig) -> PlotResult<Self> {
        let config = validate_plotter_config(config)?;
        surface.set_line_width(config.line_width);
        Ok(Self {
            surface,
            viewport: config.viewport,
            data_range: config.data_range,
            font_size_px: config.font_size_px,
            margin_px: config.margin_px,
        })
    }

    #[must_use]
    pub fn config(&self) -> PlotterConfig {
        PlotterConfig {
            viewport: self.viewport,
            data_range: self.data_range,
            font_size_px: self.font_size_px,
            margin_px: self.margin_px,
            line_width: self.surface.line_width(),
        }
    }

    pub fn set_config(&mut self, config: PlotterConfig) -> PlotResult<()> {
        let config = validate_plotter_config(config)?;
        self.viewport = config.viewport;
        self.data_range = config.data_range;
        self.font_size_px = config.font_size_px;
        self.margin_px = config.margin_px;
        self.surface.set_line_width(config.line_width);
        debug!(?config, "apply plotter config");
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> PlotResult<()> {
        viewport.validate()?;
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn data_range(&self) -> DataRange {
        self.data_range
    }

    pub fn set_data_range(&mut self, data_range: DataRange) -> PlotResult<()> {
        data_range.validate()?;
        self.data_range = data_range;
        Ok(())
    }

    #[must_use]
    pub fn font_size_px(&self) -> f64 {
        self.font_size_px
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Mapper for the current range and viewport.
    ///
    /// Fails with `DegenerateRange` while either axis of the range is flat.
    pub fn mapper(&self) -> PlotResult<CoordinateMapper> {
        CoordinateMapper::new(self.data_range, self.viewport)
    }

    /// Fits the viewport to a `width` x `height` pixel surface.
    ///
    /// A given margin is remembered for later binds. It is applied on an axis
    /// only when three margins fit into that dimension.
    pub fn bind(&mut self, width: f64, height: f64, margin_px: Option<f64>) -> PlotResult<()> {
        validate_surface_size(width, height)?;
        let margin_px = match margin_px {
            Some(margin_px) => Some(validate_margin(margin_px)?),
            None => self.margin_px,
        };

        let viewport = Viewport::from_surface(width, height, margin_px.unwrap_or(0.0));
        viewport.validate()?;

        self.margin_px = margin_px;
        self.viewport = viewport;
        debug!(width, height, ?margin_px, ?viewport, "bind plotter to surface");
        Ok(())
    }

    /// Runs `draw` with the line width scaled by `factor`, restoring the
    /// original width afterwards whether or not `draw` succeeded.
    pub(super) fn with_scaled_line_width<T>(
        &mut self,
        factor: f64,
        draw: impl FnOnce(&mut Self) -> PlotResult<T>,
    ) -> PlotResult<T> {
        let original = self.surface.line_width();
        self.surface.set_line_width(original * factor);
        let result = draw(self);
        self.surface.set_line_width(original);
        result
    }
}

impl<S, F> Plotter<LineOverride<S, F>>
where
    S: PlotSurface,
    F: FnMut(&LineAttributes, &[OutputPoint]) -> PlotResult<()>,
{
    /// Builds a session whose polylines go to `hook` instead of `surface`.
    pub fn with_line_override(surface: S, config: PlotterConfig, hook: F) -> PlotResult<Self> {
        Self::new(LineOverride::new(surface, hook), config)
    }
}
