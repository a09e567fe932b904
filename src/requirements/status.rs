//! Requirement status types.
//!
//! Each check produces a `RequirementStatus` that describes whether the
//! interpreter or a package is usable.

use std::path::PathBuf;

use super::version::PythonVersion;

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementStatus {
    /// Present and usable.
    Satisfied,

    /// Present, but older than the supported minimum.
    /// The launch can proceed; the user should be warned.
    Outdated {
        found: PythonVersion,
        minimum: PythonVersion,
    },

    /// Not importable / not runnable.
    Missing,
}

impl RequirementStatus {
    /// Whether the requirement is fully satisfied.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, RequirementStatus::Satisfied)
    }
}

/// What the interpreter probe found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterInfo {
    /// Program as configured.
    pub program: String,
    /// Where the program resolves on PATH, when it could be located.
    pub path: Option<PathBuf>,
    /// Version parsed from `--version`, when the output was recognisable.
    pub version: Option<PythonVersion>,
    /// Version check outcome.
    pub status: RequirementStatus,
}

impl InterpreterInfo {
    /// Short description for status lines, e.g. `Python 3.11.4 (/usr/bin/python3)`.
    pub fn describe(&self) -> String {
        let name = match &self.version {
            Some(v) => format!("Python {}", v),
            None => self.program.clone(),
        };
        match &self.path {
            Some(path) => format!("{} ({})", name, path.display()),
            None => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfied_is_satisfied() {
        let status = RequirementStatus::Satisfied;
        assert!(status.is_satisfied());
    }

    #[test]
    fn outdated_is_not_satisfied() {
        let status = RequirementStatus::Outdated {
            found: PythonVersion::new(3, 6, Some(9)),
            minimum: PythonVersion::new(3, 7, None),
        };
        assert!(!status.is_satisfied());
    }

    #[test]
    fn missing_is_not_satisfied() {
        assert!(!RequirementStatus::Missing.is_satisfied());
    }

    #[test]
    fn describe_with_version_and_path() {
        let info = InterpreterInfo {
            program: "python3".into(),
            path: Some(PathBuf::from("/usr/bin/python3")),
            version: Some(PythonVersion::new(3, 11, Some(4))),
            status: RequirementStatus::Satisfied,
        };
        assert_eq!(info.describe(), "Python 3.11.4 (/usr/bin/python3)");
    }

    #[test]
    fn describe_falls_back_to_program() {
        let info = InterpreterInfo {
            program: "py".into(),
            path: None,
            version: None,
            status: RequirementStatus::Satisfied,
        };
        assert_eq!(info.describe(), "py");
    }
}
