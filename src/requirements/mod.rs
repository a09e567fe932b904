//! Interpreter and package requirement checks.
//!
//! # Modules
//!
//! - [`probe`] - Interpreter version query and package import probes
//! - [`installer`] - Installing packages from the requirements manifest
//! - [`status`] - Requirement status types
//! - [`version`] - Interpreter version parsing

pub mod installer;
pub mod probe;
pub mod status;
pub mod version;

pub use installer::{install_command, install_from_manifest};
pub use probe::{diagnose_packages, probe_interpreter, probe_packages};
pub use status::{InterpreterInfo, RequirementStatus};
pub use version::PythonVersion;
