use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config::app_data_dir;
use crate::error::PlannerError;

/// Runtime settings for the layers around the planner.
/// Planner thresholds are constants and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Exam day, interpreted in `utc_offset_hours`.
    pub exam_date: NaiveDate,
    /// Europe/Istanbul is a fixed UTC+3 zone.
    pub utc_offset_hours: i32,
    /// Root for user snapshots; defaults to the app data directory.
    pub data_dir: PathBuf,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            exam_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default(),
            utc_offset_hours: 3,
            data_dir: app_data_dir(),
        }
    }
}

impl PlannerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, PlannerError> {
        let config: PlannerConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Offset used for all date arithmetic. Out-of-range hours fall back to UTC.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

fn get_config_path() -> PathBuf {
    app_data_dir().join("planner.toml")
}

fn load_planner_config_internal() -> PlannerConfig {
    let config_path = get_config_path();

    match fs::read_to_string(&config_path) {
        Ok(content) => match PlannerConfig::from_toml_str(&content) {
            Ok(config) => {
                tracing::info!(path = ?config_path, "Loaded planner config");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = ?config_path,
                    error = %e,
                    "Failed to parse planner.toml, using defaults"
                );
                PlannerConfig::default()
            }
        },
        Err(e) => {
            tracing::debug!(
                path = ?config_path,
                error = %e,
                "No planner.toml, using defaults"
            );
            PlannerConfig::default()
        }
    }
}

lazy_static! {
    static ref PLANNER_CONFIG: PlannerConfig = load_planner_config_internal();
}

/// Get the cached planner configuration (loaded once per process)
pub fn get_planner_config() -> &'static PlannerConfig {
    &PLANNER_CONFIG
}
