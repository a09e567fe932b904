//! Interpreter and package probes.
//!
//! All probes run with captured output so nothing they print reaches the
//! console. Only the exit status (and, for the version query, the version
//! string) is used.
//!
//! # Example
//!
//! ```
//! use fetlaunch::config::LauncherConfig;
//! use fetlaunch::requirements::probe::{probe_interpreter, probe_packages};
//! use fetlaunch::shell::{MockResponse, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.respond_to(&["--version"], MockResponse::stdout(0, "Python 3.11.4"));
//! runner.respond_to(&["-c"], MockResponse::exit(1));
//!
//! let config = LauncherConfig::default();
//! let info = probe_interpreter(&runner, &config).unwrap();
//! assert_eq!(info.version.unwrap().to_string(), "3.11.4");
//! assert!(!probe_packages(&runner, &config).is_satisfied());
//! ```

use crate::config::LauncherConfig;
use crate::error::{LauncherError, Result};
use crate::shell::{find_on_path, Invocation, ProcessRunner};

use super::status::{InterpreterInfo, RequirementStatus};
use super::version::PythonVersion;

/// `<interpreter> --version`
pub fn version_query(config: &LauncherConfig) -> Invocation {
    config.interpreter_command().arg("--version")
}

/// Python statement importing every package in one go.
pub fn import_statement(packages: &[String]) -> String {
    format!("import {}", packages.join(", "))
}

/// `<interpreter> -c "import a, b, c"`
pub fn import_probe(config: &LauncherConfig) -> Invocation {
    config
        .interpreter_command()
        .arg("-c")
        .arg(import_statement(&config.packages))
}

/// Check that the interpreter runs and find out which version it is.
///
/// # Errors
///
/// `InterpreterMissing` if the interpreter can't be started or the
/// version query exits non-zero. A version below `min_version` is not
/// an error; it is reported through [`RequirementStatus::Outdated`].
pub fn probe_interpreter(
    runner: &dyn ProcessRunner,
    config: &LauncherConfig,
) -> Result<InterpreterInfo> {
    let missing = || LauncherError::InterpreterMissing {
        interpreter: config.interpreter.clone(),
        minimum: config.min_version.clone(),
    };

    let result = match runner.run(&version_query(config)) {
        Ok(result) if result.success => result,
        Ok(result) => {
            tracing::debug!(
                "Version query exited with {:?}: {}",
                result.exit_code,
                result.stderr.trim()
            );
            return Err(missing());
        }
        Err(e) => {
            tracing::debug!("Version query could not run: {}", e);
            return Err(missing());
        }
    };

    let version =
        PythonVersion::from_version_output(&format!("{}\n{}", result.stdout, result.stderr));
    if version.is_none() {
        tracing::debug!(
            "Could not parse interpreter version from {:?}",
            result.stdout.trim()
        );
    }

    let status = match (version, config.min_version.parse::<PythonVersion>()) {
        (Some(found), Ok(minimum)) if !found.at_least(&minimum) => {
            RequirementStatus::Outdated { found, minimum }
        }
        _ => RequirementStatus::Satisfied,
    };

    Ok(InterpreterInfo {
        program: config.interpreter.clone(),
        path: find_on_path(&config.interpreter),
        version,
        status,
    })
}

/// Try importing every configured package at once.
///
/// Returns `Missing` if any import fails; the probe can't tell which.
pub fn probe_packages(runner: &dyn ProcessRunner, config: &LauncherConfig) -> RequirementStatus {
    match runner.run(&import_probe(config)) {
        Ok(result) if result.success => RequirementStatus::Satisfied,
        Ok(result) => {
            tracing::debug!(
                "Import probe exited with {:?}: {}",
                result.exit_code,
                result.stderr.trim()
            );
            RequirementStatus::Missing
        }
        Err(e) => {
            tracing::debug!("Import probe could not run: {}", e);
            RequirementStatus::Missing
        }
    }
}

/// Import each package separately and return the ones that fail.
///
/// Costs one interpreter start per package, so it only runs on request.
pub fn diagnose_packages(runner: &dyn ProcessRunner, config: &LauncherConfig) -> Vec<String> {
    config
        .packages
        .iter()
        .filter_map(|package| {
            let probe = config
                .interpreter_command()
                .arg("-c")
                .arg(import_statement(std::slice::from_ref(package)));
            let importable = runner.run(&probe).map(|r| r.success).unwrap_or(false);
            (!importable).then(|| package.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{MockResponse, MockRunner};

    #[test]
    fn import_statement_joins_packages() {
        let packages = vec!["numpy".to_string(), "pandas".to_string()];
        assert_eq!(import_statement(&packages), "import numpy, pandas");
    }

    #[test]
    fn import_probe_covers_default_packages() {
        let inv = import_probe(&LauncherConfig::default());
        assert_eq!(
            inv.args,
            vec!["-c", "import numpy, pandas, matplotlib, pyvisa, tkinter"]
        );
    }

    #[test]
    fn interpreter_found_and_current() {
        let runner = MockRunner::new();
        runner.respond_to(&["--version"], MockResponse::stdout(0, "Python 3.11.4\n"));

        let info = probe_interpreter(&runner, &LauncherConfig::default()).unwrap();
        assert_eq!(info.version, Some(PythonVersion::new(3, 11, Some(4))));
        assert!(info.status.is_satisfied());
    }

    #[test]
    fn version_on_stderr_is_recognised() {
        let runner = MockRunner::new();
        runner.respond_to(&["--version"], MockResponse::stderr(0, "Python 2.7.18"));

        let info = probe_interpreter(&runner, &LauncherConfig::default()).unwrap();
        assert!(matches!(info.status, RequirementStatus::Outdated { .. }));
    }

    #[test]
    fn old_interpreter_is_outdated_not_missing() {
        let runner = MockRunner::new();
        runner.respond_to(&["--version"], MockResponse::stdout(0, "Python 3.6.9"));

        let info = probe_interpreter(&runner, &LauncherConfig::default()).unwrap();
        assert_eq!(
            info.status,
            RequirementStatus::Outdated {
                found: PythonVersion::new(3, 6, Some(9)),
                minimum: PythonVersion::new(3, 7, None),
            }
        );
        assert!(!info.status.is_satisfied());
    }

    #[test]
    fn unparseable_version_is_accepted() {
        let runner = MockRunner::new();
        runner.respond_to(&["--version"], MockResponse::stdout(0, "PyPy something"));

        let info = probe_interpreter(&runner, &LauncherConfig::default()).unwrap();
        assert!(info.version.is_none());
        assert!(info.status.is_satisfied());
    }

    #[test]
    fn spawn_failure_means_missing_interpreter() {
        let runner = MockRunner::new();
        runner.respond_to(&["--version"], MockResponse::SpawnError);

        let err = probe_interpreter(&runner, &LauncherConfig::default()).unwrap_err();
        match err {
            LauncherError::InterpreterMissing { minimum, .. } => assert_eq!(minimum, "3.7"),
            other => panic!("Expected InterpreterMissing, got {:?}", other),
        }
    }

    #[test]
    fn non_zero_version_query_means_missing_interpreter() {
        let runner = MockRunner::new();
        runner.respond_to(&["--version"], MockResponse::exit(9009));

        let result = probe_interpreter(&runner, &LauncherConfig::default());
        assert!(matches!(
            result,
            Err(LauncherError::InterpreterMissing { .. })
        ));
    }

    #[test]
    fn packages_satisfied_when_probe_succeeds() {
        let runner = MockRunner::new();
        let status = probe_packages(&runner, &LauncherConfig::default());
        assert!(status.is_satisfied());
        assert_eq!(runner.count_matching(&["-c"]), 1);
    }

    #[test]
    fn packages_missing_when_probe_fails() {
        let runner = MockRunner::new();
        runner.respond_to(&["-c"], MockResponse::stderr(1, "ModuleNotFoundError"));
        assert_eq!(
            probe_packages(&runner, &LauncherConfig::default()),
            RequirementStatus::Missing
        );
    }

    #[test]
    fn packages_missing_when_probe_cannot_start() {
        let runner = MockRunner::new();
        runner.respond_to(&["-c"], MockResponse::SpawnError);
        assert!(!probe_packages(&runner, &LauncherConfig::default()).is_satisfied());
    }

    #[test]
    fn diagnose_lists_only_failing_packages() {
        let runner = MockRunner::new();
        runner.respond_to(&["-c", "import pyvisa"], MockResponse::exit(1));
        runner.respond_to(&["-c", "import tkinter"], MockResponse::exit(1));

        let missing = diagnose_packages(&runner, &LauncherConfig::default());

        assert_eq!(missing, vec!["pyvisa", "tkinter"]);
        assert_eq!(runner.count_matching(&["-c"]), 5);
    }
}
