mod axis_controller;
mod json_contract;
mod line_controller;
mod mark_controller;
mod plotter;
mod plotter_config;
mod range_controller;
mod validation;

pub use json_contract::{PLOTTER_CONFIG_JSON_SCHEMA_V1, PlotterConfigJsonContractV1};
pub use plotter::Plotter;
pub use plotter_config::PlotterConfig;
