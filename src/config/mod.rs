//! Configuration loading and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and overrides in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use fetlaunch::config::{load_config, ConfigOverrides};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("launcher.yml"), "app_name: Probe Station").unwrap();
//!
//! let config = load_config(temp.path(), &ConfigOverrides::default()).unwrap();
//! assert_eq!(config.app_name, "Probe Station");
//! assert_eq!(config.packages.len(), 5);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_config_file, load_config, load_config_file, parse_config, ConfigOverrides};
pub use schema::{LauncherConfig, CONFIG_FILE_NAME};
pub use validator::{validate, validate_config, ValidationError};
