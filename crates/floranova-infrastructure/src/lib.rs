//! Infrastructure layer for FloraNova.
//!
//! Platform paths, configuration loading and logging setup.

pub mod config_service;
pub mod logging;
pub mod paths;

pub use config_service::ConfigService;
pub use paths::{FloraPaths, PathError};
