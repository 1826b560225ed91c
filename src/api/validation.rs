use crate::error::{PlotError, PlotResult};

use super::PlotterConfig;

pub(super) fn validate_plotter_config(config: PlotterConfig) -> PlotResult<PlotterConfig> {
    config.viewport.validate()?;
    config.data_range.validate()?;

    if !config.font_size_px.is_finite() || config.font_size_px <= 0.0 {
        return Err(PlotError::InvalidData(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    if !config.line_width.is_finite() || config.line_width <= 0.0 {
        return Err(PlotError::InvalidData(
            "line width must be finite and > 0".to_owned(),
        ));
    }
    if let Some(margin_px) = config.margin_px {
        validate_margin(margin_px)?;
    }

    Ok(config)
}

pub(super) fn validate_margin(margin_px: f64) -> PlotResult<f64> {
    if !margin_px.is_finite() || margin_px < 0.0 {
        return Err(PlotError::InvalidData(
            "margin must be finite and >= 0".to_owned(),
        ));
    }
    Ok(margin_px)
}

pub(super) fn validate_surface_size(width: f64, height: f64) -> PlotResult<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(PlotError::InvalidViewport { width, height });
    }
    Ok(())
}
