use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::PlotterConfig;
use super::validation::validate_plotter_config;

pub const PLOTTER_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotterConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: PlotterConfig,
}

impl PlotterConfig {
    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = PlotterConfigJsonContractV1 {
            schema_version: PLOTTER_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize plotter config contract v1: {e}"))
        })
    }

    /// Parses either a bare config or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(config) = serde_json::from_str::<PlotterConfig>(input) {
            return validate_plotter_config(config);
        }
        let payload: PlotterConfigJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse plotter config json payload: {e}"))
        })?;
        if payload.schema_version != PLOTTER_CONFIG_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported plotter config schema version: {}",
                payload.schema_version
            )));
        }
        validate_plotter_config(payload.config)
    }
}
