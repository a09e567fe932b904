//! Launch command implementation.
//!
//! Running `fetlaunch` checks the interpreter and packages, installs what is
//! missing, and starts the application.

use std::path::{Path, PathBuf};

use crate::config::{load_config, ConfigOverrides};
use crate::error::{LauncherError, Result};
use crate::runner::{LaunchOptions, LaunchOutcome, Launcher};
use crate::shell::{ProcessRunner, SystemRunner};
use crate::ui::{hints, UserInterface};

use super::{Command, CommandResult};

/// The launch command implementation.
pub struct LaunchCommand {
    project_root: PathBuf,
    overrides: ConfigOverrides,
    options: LaunchOptions,
}

impl LaunchCommand {
    /// Create a new launch command.
    pub fn new(project_root: &Path, overrides: ConfigOverrides, options: LaunchOptions) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            overrides,
            options,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run the command, spawning processes through `runner`.
    ///
    /// Launch failures are reported here and turned into a failing
    /// [`CommandResult`]. Configuration and other errors are returned.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn ProcessRunner,
    ) -> Result<CommandResult> {
        let config = load_config(&self.project_root, &self.overrides)?;
        tracing::debug!("Effective config: {:?}", config);

        let launcher = Launcher::new(&config, runner).with_options(self.options);
        match launcher.run(ui) {
            Ok(LaunchOutcome::Checked) => Ok(CommandResult::success()),
            Ok(LaunchOutcome::Completed { duration }) => {
                tracing::debug!("{} exited cleanly after {:?}", config.app_name, duration);
                Ok(CommandResult::success())
            }
            Err(e) if e.is_launch_failure() => {
                report_failure(ui, &e);
                if config.pause_on_error && ui.is_interactive() {
                    ui.pause();
                }
                Ok(CommandResult::failure(e.exit_code()))
            }
            Err(e) => Err(e),
        }
    }
}

fn report_failure(ui: &mut dyn UserInterface, err: &LauncherError) {
    ui.error(&err.to_string());
    if let Some(hint) = hints::for_error(err) {
        ui.show_hint(&hint);
    }
}

impl Command for LaunchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &SystemRunner)
    }
}
