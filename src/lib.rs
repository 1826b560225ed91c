//! canvas-plotter: maps a data coordinate space onto an output viewport and
//! draws clipped polylines, axis tics and error-barred markers into it.
//!
//! The math lives in [`core`] and is pure. [`api::Plotter`] owns the
//! viewport/data-range pair of one chart and drives a [`render::PlotSurface`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Plotter, PlotterConfig};
pub use error::{PlotError, PlotResult};
