//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::runner::LaunchOptions;
use crate::ui::OutputMode;

/// Check Python dependencies and start the FET Measurement GUI.
#[derive(Debug, Parser)]
#[command(name = "fetlaunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default launcher.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Python interpreter to use
    #[arg(long = "python", env = "FETLAUNCH_PYTHON", value_name = "INTERPRETER")]
    pub interpreter: Option<String>,

    /// Application script to launch
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Requirements file used when packages are missing
    #[arg(long)]
    pub requirements: Option<PathBuf>,

    /// Check and install prerequisites without starting the application
    #[arg(long)]
    pub check: bool,

    /// Never wait for a key press after a failure
    #[arg(long, env = "FETLAUNCH_NO_PAUSE", value_parser = FalseyValueParser::new())]
    pub no_pause: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output (-qq for errors only)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Config values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            interpreter: self.interpreter.clone(),
            script: self.script.clone(),
            requirements: self.requirements.clone(),
            no_pause: self.no_pause,
        }
    }

    /// Output mode selected by `-v` and `-q`.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.verbose, self.quiet)
    }

    /// Options for the launch run.
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            check_only: self.check,
        }
    }
}
