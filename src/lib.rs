//! fetlaunch - dependency-checking launcher for the FET Measurement GUI.
//!
//! Verifies that a Python interpreter is available, that the packages the
//! application imports are installed (installing them from the requirements
//! manifest if not), then starts the application and exits with its status.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Interpreter and package probes, manifest install
//! - [`runner`] - The launch sequence
//! - [`shell`] - Process execution
//! - [`ui`] - Spinners, status lines, hints and the failure pause
//!
//! # Example
//!
//! ```
//! use fetlaunch::config::LauncherConfig;
//! use fetlaunch::runner::Launcher;
//! use fetlaunch::shell::{MockResponse, MockRunner};
//! use fetlaunch::ui::MockUI;
//!
//! let config = LauncherConfig::default();
//! let runner = MockRunner::new();
//! runner.respond_to(&["--version"], MockResponse::stdout(0, "Python 3.12.1"));
//!
//! let mut ui = MockUI::new();
//! Launcher::new(&config, &runner).run(&mut ui).unwrap();
//! assert_eq!(runner.count_matching(&["FET_Measurement_GUI.py"]), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{LauncherError, ProcessEnd, Result};
