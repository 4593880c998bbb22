//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading projection
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::types::{InsightsSettings, ProjectionConfig, ProjectionSettings, Schedule};

/// Loads and provides access to projection configuration.
///
/// # Directory Structure
///
/// ```text
/// config/projection/
/// ├── projection.yaml      # Name, anchor date, post-contract rate, insights
/// └── schedules/
///     ├── alliance.yaml    # Alliance raise events
///     └── kp.yaml          # KP raise events
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_projection::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/projection").unwrap();
/// println!("Anchor month: {}", loader.config().anchor_month());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ProjectionConfig,
    insights: InsightsSettings,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A schedule contains an event the engine cannot apply
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("projection.yaml");
        let settings = Self::load_yaml::<ProjectionSettings>(&settings_path)?;

        let schedules_dir = path.join("schedules");
        let alliance = Self::load_yaml::<Schedule>(&schedules_dir.join("alliance.yaml"))?;
        let kp = Self::load_yaml::<Schedule>(&schedules_dir.join("kp.yaml"))?;

        let config = ProjectionConfig::new(
            settings.name,
            settings.anchor_date,
            settings.post_contract_rate,
            alliance,
            kp,
        );
        config.validate()?;

        for schedule in [&config.alliance, &config.kp] {
            for (year, month) in schedule.duplicate_periods() {
                warn!(
                    schedule = %schedule.name,
                    year,
                    month,
                    "Duplicate raise period; only the first event will apply"
                );
            }
        }

        debug!(
            path = %path.display(),
            anchor_date = %config.anchor_date,
            alliance_events = config.alliance.events.len(),
            kp_events = config.kp.events.len(),
            "Loaded projection configuration"
        );

        Ok(Self {
            config,
            insights: settings.insights,
        })
    }

    /// Wraps an in-memory configuration, e.g. [`ProjectionConfig::reference`].
    pub fn from_config(config: ProjectionConfig, insights: InsightsSettings) -> Self {
        Self { config, insights }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the projection configuration.
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Returns the narrative insights settings.
    pub fn insights(&self) -> &InsightsSettings {
        &self.insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/projection"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wage_projection_{}_{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(dir.join("schedules")).unwrap();
        dir
    }

    const SETTINGS: &str = "name: Test\nanchor_date: 2025-10-01\npost_contract_rate: 1.03\n";

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(
            loader.config().anchor_date,
            NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
        );
        assert_eq!(loader.config().post_contract_rate, 1.03);
        assert_eq!(loader.config().alliance.name, "Alliance");
        assert_eq!(loader.config().kp.name, "KP");
    }

    #[test]
    fn test_shipped_configuration_matches_reference() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let reference = ProjectionConfig::reference();

        assert_eq!(loader.config().alliance.events, reference.alliance.events);
        assert_eq!(loader.config().kp.events, reference.kp.events);
        assert_eq!(loader.config().anchor_date, reference.anchor_date);
        assert_eq!(
            loader.config().post_contract_rate,
            reference.post_contract_rate
        );
    }

    #[test]
    fn test_shipped_insights_settings() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.insights().max_output_tokens, 300);
        assert_eq!(loader.insights().temperature, 0.7);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("projection.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_schedule_returns_error() {
        let dir = scratch_dir("missing_schedule");
        fs::write(dir.join("projection.yaml"), SETTINGS).unwrap();
        fs::write(
            dir.join("schedules/alliance.yaml"),
            "name: Alliance\nevents: []\n",
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("kp.yaml")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("invalid_yaml");
        fs::write(dir.join("projection.yaml"), "name: [unterminated\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("projection.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_event_month_rejected() {
        let dir = scratch_dir("invalid_month");
        fs::write(dir.join("projection.yaml"), SETTINGS).unwrap();
        fs::write(
            dir.join("schedules/alliance.yaml"),
            "name: Alliance\nevents:\n  - month: 0\n    year: 2025\n    rate: 1.05\n    description: bad\n",
        )
        .unwrap();
        fs::write(dir.join("schedules/kp.yaml"), "name: KP\n").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidSchedule { schedule, .. }) => assert_eq!(schedule, "Alliance"),
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_empty_schedules_load() {
        let dir = scratch_dir("empty_schedules");
        fs::write(dir.join("projection.yaml"), SETTINGS).unwrap();
        fs::write(dir.join("schedules/alliance.yaml"), "name: Alliance\n").unwrap();
        fs::write(dir.join("schedules/kp.yaml"), "name: KP\n").unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert!(loader.config().alliance.events.is_empty());
        assert_eq!(loader.insights(), &InsightsSettings::default());

        fs::remove_dir_all(dir).ok();
    }
}
