//! Configuration loading and management for the Wage Projection Engine.
//!
//! Raise schedules are configuration data rather than engine logic: the
//! built-in reference tables live in [`ProjectionConfig::reference`], and
//! [`ConfigLoader`] reads alternative proposals from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use wage_projection::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/projection").unwrap();
//! println!("Loaded comparison: {}", loader.config().name);
//! ```

mod loader;
mod reference;
mod types;

pub use loader::ConfigLoader;
pub use reference::{REFERENCE_ANCHOR, REFERENCE_POST_CONTRACT_RATE};
pub use types::{
    InsightsSettings, ProjectionConfig, ProjectionSettings, RaiseEvent, Schedule,
};
