//! Launch sequence orchestration.
//!
//! A strictly linear sequence with early exits:
//!
//! 1. interpreter check (`--version`, output captured)
//! 2. aggregate import probe (output captured)
//! 3. manifest install, only when the probe failed (output shown)
//! 4. application launch (output shown)
//!
//! Every failure is terminal; nothing is retried.

use std::time::{Duration, Instant};

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::requirements::{
    diagnose_packages, install_from_manifest, probe_interpreter, probe_packages,
    InterpreterInfo, RequirementStatus,
};
use crate::shell::{Invocation, ProcessRunner};
use crate::ui::{hints, UserInterface};

/// Options for a launch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaunchOptions {
    /// Stop after the prerequisite checks instead of starting the application.
    pub check_only: bool,
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Prerequisites verified; the application was not started.
    Checked,
    /// The application ran and exited cleanly.
    Completed { duration: Duration },
}

/// Runs the prerequisite checks and starts the application.
pub struct Launcher<'a> {
    config: &'a LauncherConfig,
    runner: &'a dyn ProcessRunner,
    options: LaunchOptions,
}

impl<'a> Launcher<'a> {
    /// Create a launcher for `config` spawning processes through `runner`.
    pub fn new(config: &'a LauncherConfig, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            config,
            runner,
            options: LaunchOptions::default(),
        }
    }

    /// Replace the run options.
    pub fn with_options(mut self, options: LaunchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the whole sequence.
    ///
    /// # Errors
    ///
    /// The first failing step's error: `InterpreterMissing`,
    /// `InstallFailed`, `ApplicationFailed`, `ApplicationTerminated`, or
    /// `CommandFailed` when the application can't be spawned.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<LaunchOutcome> {
        ui.show_header(&format!("{} Launcher", self.config.app_name));

        self.check_interpreter(ui)?;

        if !self.check_dependencies(ui).is_satisfied() {
            self.install_dependencies(ui)?;
        }

        if self.options.check_only {
            ui.success("All prerequisites are in place");
            return Ok(LaunchOutcome::Checked);
        }

        self.launch_application(ui)
    }

    /// Step 1: make sure the interpreter runs.
    pub fn check_interpreter(&self, ui: &mut dyn UserInterface) -> Result<InterpreterInfo> {
        let mut spinner = ui.start_spinner("Checking Python installation...");

        let info = match probe_interpreter(self.runner, self.config) {
            Ok(info) => info,
            Err(e) => {
                spinner.finish_error("Python not found");
                return Err(e);
            }
        };

        spinner.finish_success(&format!("Found {}", info.describe()));
        if let RequirementStatus::Outdated { found, minimum } = &info.status {
            ui.warning(&format!(
                "Python {} is older than the supported minimum {}; the application may not start",
                found, minimum
            ));
        }
        Ok(info)
    }

    /// Step 2: try importing every required package at once.
    ///
    /// In verbose mode a failed probe is followed by one probe per package
    /// to name the missing ones. That is informational only; the aggregate
    /// result is what decides whether to install.
    pub fn check_dependencies(&self, ui: &mut dyn UserInterface) -> RequirementStatus {
        let mut spinner = ui.start_spinner("Checking dependencies...");
        let status = probe_packages(self.runner, self.config);

        if status.is_satisfied() {
            spinner.finish_success("All required packages are available");
            return status;
        }

        let missing = if ui.output_mode().is_verbose() {
            spinner.set_message("Finding missing packages...");
            diagnose_packages(self.runner, self.config)
        } else {
            Vec::new()
        };
        spinner.finish_error("Some required packages are missing");

        if !missing.is_empty() {
            ui.warning(&format!("Not importable: {}", missing.join(", ")));
        }
        status
    }

    /// Step 3: install from the manifest. Called only after a failed probe.
    pub fn install_dependencies(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let manifest = self.config.requirements_path();
        if !manifest.is_file() {
            ui.warning(&hints::missing_manifest(&manifest.display().to_string()));
        }

        ui.message("Installing required packages...");
        install_from_manifest(self.runner, self.config)?;
        ui.success("Required packages installed");
        Ok(())
    }

    /// Steps 4 and 5: start the application and mirror how it exits.
    pub fn launch_application(&self, ui: &mut dyn UserInterface) -> Result<LaunchOutcome> {
        let script = self.config.script_path();
        if !script.is_file() {
            ui.warning(&hints::missing_script(&script.display().to_string()));
        }

        ui.message(&format!("Starting {}...", self.config.app_name));
        let invocation = self.application_command();
        tracing::info!("Launching {}", invocation.display());

        let start = Instant::now();
        let result = self.runner.run(&invocation)?;
        let duration = start.elapsed();

        match result.exit_code {
            Some(0) => Ok(LaunchOutcome::Completed { duration }),
            Some(code) => Err(LauncherError::ApplicationFailed { code }),
            None => Err(LauncherError::ApplicationTerminated),
        }
    }

    /// `<interpreter> <script>`, with the application's console output shown.
    pub fn application_command(&self) -> Invocation {
        self.config
            .interpreter_command()
            .arg(self.config.script.to_string_lossy())
            .inherit_stdio()
    }
}
