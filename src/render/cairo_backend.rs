use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::OutputPoint;
use crate::error::{PlotError, PlotResult};
use crate::render::{DrawingSink, TextHAlign, TextPrimitive, TextSink, TextVAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoSurfaceStats {
    pub polylines_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Works either on an owned offscreen image surface (`CairoSurface::new`) or
/// on an external context such as a GTK draw callback
/// (`CairoSurface::from_context`).
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    stats: CairoSurfaceStats,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        context.set_source_rgb(1.0, 1.0, 1.0);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_source_rgb(0.0, 0.0, 0.0);

        Ok(Self::from_context(context))
    }

    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            stats: CairoSurfaceStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn stats(&self) -> CairoSurfaceStats {
        self.stats
    }
}

impl DrawingSink for CairoSurface {
    fn line_width(&self) -> f64 {
        self.context.line_width()
    }

    fn set_line_width(&mut self, line_width: f64) {
        self.context.set_line_width(line_width);
    }

    fn draw_polyline(&mut self, points: &[OutputPoint]) -> PlotResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };

        self.context.new_path();
        self.context.move_to(first.x, first.y);
        for point in rest {
            self.context.line_to(point.x, point.y);
        }
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
        self.stats.polylines_drawn += 1;
        Ok(())
    }
}

impl TextSink for CairoSurface {
    fn draw_text(&mut self, text: &TextPrimitive) -> PlotResult<()> {
        text.validate()?;

        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let y = match text.v_align {
            TextVAlign::Top => text.y,
            TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
            TextVAlign::Bottom => text.y - f64::from(text_height),
        };

        self.context.move_to(x, y);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::InvalidData(format!("{prefix}: {err}"))
}
