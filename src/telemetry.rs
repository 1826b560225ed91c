//! Opt-in tracing setup for binaries and tests that embed `canvas-plotter`.
//!
//! The library only emits events; it never installs a subscriber on its own.
//! Session changes (bind, reframe, config) log at `debug`, per-call drawing
//! detail at `trace`, and skipped input rows at `warn`.

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "CANVAS_PLOTTER_LOG";

/// Installs a compact `fmt` subscriber filtered to `canvas_plotter=info`.
///
/// Returns `false` when the `telemetry` feature is off or the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter("canvas_plotter=info")
}

/// Like [`init_default_tracing`], with `directives` as the fallback filter
/// when neither [`LOG_ENV_VAR`] nor `RUST_LOG` is set.
#[must_use]
pub fn init_tracing_with_default_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(directives));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
