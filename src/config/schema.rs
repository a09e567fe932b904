//! Configuration schema definitions.
//!
//! [`LauncherConfig`] maps to the optional `launcher.yml` file. Every key is
//! optional; anything left out keeps the built-in default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::shell::{default_interpreter, Invocation};

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "launcher.yml";

/// Root configuration structure for launcher.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Application name (for display purposes)
    pub app_name: String,

    /// Interpreter program, looked up on PATH unless it is a path
    pub interpreter: String,

    /// Oldest interpreter version the application supports
    pub min_version: String,

    /// Modules that must be importable before launching
    pub packages: Vec<String>,

    /// Requirements manifest passed to `pip install -r`
    pub requirements: PathBuf,

    /// Application entry-point script
    pub script: PathBuf,

    /// Wait for a key press after a failure so the console stays readable
    pub pause_on_error: bool,

    /// Directory the manifest and script resolve against (set by the loader)
    #[serde(skip)]
    pub project_root: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            app_name: "FET Measurement GUI".to_string(),
            interpreter: default_interpreter().to_string(),
            min_version: "3.7".to_string(),
            packages: default_packages(),
            requirements: PathBuf::from("requirements.txt"),
            script: PathBuf::from("FET_Measurement_GUI.py"),
            pause_on_error: true,
            project_root: PathBuf::new(),
        }
    }
}

fn default_packages() -> Vec<String> {
    ["numpy", "pandas", "matplotlib", "pyvisa", "tkinter"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl LauncherConfig {
    /// Manifest location on disk.
    pub fn requirements_path(&self) -> PathBuf {
        self.resolve(&self.requirements)
    }

    /// Script location on disk.
    pub fn script_path(&self) -> PathBuf {
        self.resolve(&self.script)
    }

    /// Start an interpreter invocation running in the project root.
    pub fn interpreter_command(&self) -> Invocation {
        let invocation = Invocation::new(&self.interpreter);
        if self.project_root.as_os_str().is_empty() {
            invocation
        } else {
            invocation.current_dir(&self.project_root)
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_measurement_stack() {
        let config = LauncherConfig::default();
        assert_eq!(
            config.packages,
            vec!["numpy", "pandas", "matplotlib", "pyvisa", "tkinter"]
        );
        assert_eq!(config.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(config.script, PathBuf::from("FET_Measurement_GUI.py"));
        assert_eq!(config.min_version, "3.7");
        assert!(config.pause_on_error);
    }

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: LauncherConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config: LauncherConfig =
            serde_yaml::from_str("interpreter: py\npackages: [numpy]").unwrap();
        assert_eq!(config.interpreter, "py");
        assert_eq!(config.packages, vec!["numpy"]);
        assert_eq!(config.script, PathBuf::from("FET_Measurement_GUI.py"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<LauncherConfig, _> = serde_yaml::from_str("interpeter: py");
        assert!(result.is_err());
    }

    #[test]
    fn relative_paths_resolve_against_project_root() {
        let config = LauncherConfig {
            project_root: PathBuf::from("/lab"),
            ..Default::default()
        };
        assert_eq!(
            config.requirements_path(),
            PathBuf::from("/lab/requirements.txt")
        );
        assert_eq!(
            config.script_path(),
            PathBuf::from("/lab/FET_Measurement_GUI.py")
        );
    }

    #[test]
    fn interpreter_command_runs_in_project_root() {
        let config = LauncherConfig {
            interpreter: "py".into(),
            project_root: PathBuf::from("/lab"),
            ..Default::default()
        };
        let inv = config.interpreter_command();
        assert_eq!(inv.program, "py");
        assert_eq!(inv.cwd, Some(PathBuf::from("/lab")));
    }

    #[test]
    fn interpreter_command_without_root_keeps_cwd() {
        let inv = LauncherConfig::default().interpreter_command();
        assert!(inv.cwd.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn absolute_paths_are_kept() {
        let config = LauncherConfig {
            project_root: PathBuf::from("/lab"),
            script: PathBuf::from("/opt/gui/main.py"),
            ..Default::default()
        };
        assert_eq!(config.script_path(), PathBuf::from("/opt/gui/main.py"));
    }
}
