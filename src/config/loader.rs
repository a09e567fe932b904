//! Configuration file discovery and loading.
//!
//! Resolution order (later overrides earlier):
//! 1. Built-in defaults
//! 2. `launcher.yml` in the project root, or the file passed with `--config`
//! 3. Command-line flags and their environment variables

use crate::config::schema::{LauncherConfig, CONFIG_FILE_NAME};
use crate::config::validator::validate;
use crate::error::{LauncherError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file; must exist when given.
    pub config_file: Option<PathBuf>,
    /// Interpreter program.
    pub interpreter: Option<String>,
    /// Application script.
    pub script: Option<PathBuf>,
    /// Requirements manifest.
    pub requirements: Option<PathBuf>,
    /// Never wait for a key press.
    pub no_pause: bool,
}

/// Find the config file for a project root, if there is one.
pub fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
/// Any other read failure is returned with the path attached.
pub fn load_config_file(path: &Path) -> Result<LauncherConfig> {
    if !path.exists() {
        return Err(LauncherError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;

    parse_config(&content, path)
}

/// Parse YAML content into a LauncherConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LauncherConfig> {
    if content.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LauncherError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Build the effective configuration for a run.
pub fn load_config(project_root: &Path, overrides: &ConfigOverrides) -> Result<LauncherConfig> {
    let file = match &overrides.config_file {
        Some(explicit) => Some(explicit.clone()),
        None => find_config_file(project_root),
    };

    let mut config = match &file {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => {
            tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            LauncherConfig::default()
        }
    };

    config.interpreter = anchor_interpreter(&config.interpreter, project_root)?;
    apply_overrides(&mut config, overrides)?;
    config.project_root = project_root.to_path_buf();

    validate(&config)?;
    Ok(config)
}

/// Make an interpreter given as a relative path absolute against `base`.
///
/// Children run in the project root, so a relative program path would
/// otherwise be looked up from there. Bare names are left for the `PATH`
/// search.
fn anchor_interpreter(interpreter: &str, base: &Path) -> Result<String> {
    let path = Path::new(interpreter);
    if path.is_absolute() || path.components().count() < 2 {
        return Ok(interpreter.to_string());
    }
    let anchored = std::path::absolute(base.join(path))?;
    tracing::debug!("Interpreter '{}' resolved to {}", interpreter, anchored.display());
    Ok(anchored.to_string_lossy().into_owned())
}

fn apply_overrides(config: &mut LauncherConfig, overrides: &ConfigOverrides) -> Result<()> {
    if let Some(interpreter) = &overrides.interpreter {
        config.interpreter = anchor_interpreter(interpreter, &std::env::current_dir()?)?;
    }
    if let Some(script) = &overrides.script {
        config.script = script.clone();
    }
    if let Some(requirements) = &overrides.requirements {
        config.requirements = requirements.clone();
    }
    if overrides.no_pause {
        config.pause_on_error = false;
    }
    Ok(())
}
