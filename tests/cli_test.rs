//! Integration tests for the launcher binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn launcher() -> Command {
    let mut cmd = Command::new(cargo_bin("fetlaunch"));
    cmd.env_remove("FETLAUNCH_PYTHON")
        .env_remove("RUST_LOG")
        .env("FETLAUNCH_NO_PAUSE", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    launcher()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("FET Measurement GUI"))
        .stdout(predicate::str::contains("--python"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    launcher()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_flag() -> Result<(), Box<dyn std::error::Error>> {
    launcher().arg("--frobnicate").assert().failure();
    Ok(())
}

#[test]
fn cli_missing_interpreter_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::TempDir::new()?;
    launcher()
        .current_dir(temp.path())
        .args(["--python", "fetlaunch-no-such-python"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Python is not installed or not in PATH",
        ))
        .stdout(predicate::str::contains("Python 3.7 or higher"));
    Ok(())
}

#[test]
fn cli_invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::TempDir::new()?;
    std::fs::write(temp.path().join("launcher.yml"), "packages: [\"numpy; rm\"]\n")?;
    launcher()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid configuration"));
    Ok(())
}

#[test]
fn cli_explicit_config_must_exist() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::TempDir::new()?;
    launcher()
        .current_dir(temp.path())
        .args(["--config", "missing.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

/// Scenarios driven through a fake interpreter script.
#[cfg(unix)]
mod fake_interpreter {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "$*" >> calls.log
case "$1" in
  --version) echo "Python 3.11.4"; exit 0 ;;
  -c) exit ${FAKE_PROBE_EXIT:-0} ;;
  -m) echo "Collecting numpy"; exit ${FAKE_INSTALL_EXIT:-0} ;;
  *) echo "gui running"; exit ${FAKE_APP_EXIT:-0} ;;
esac
"#;

    struct Project {
        dir: TempDir,
        python: PathBuf,
    }

    impl Project {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("requirements.txt"), "numpy\npyvisa\n").unwrap();
            fs::write(dir.path().join("FET_Measurement_GUI.py"), "print('hi')\n").unwrap();

            let python = dir.path().join("fake-python");
            fs::write(&python, FAKE_PYTHON).unwrap();
            fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

            Self { dir, python }
        }

        fn path(&self) -> &Path {
            self.dir.path()
        }

        fn command(&self) -> Command {
            let mut cmd = launcher();
            cmd.current_dir(self.path())
                .arg("--python")
                .arg(&self.python);
            cmd
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(self.path().join("calls.log"))
                .unwrap_or_default()
                .lines()
                .map(str::to_string)
                .collect()
        }

        fn count(&self, line: &str) -> usize {
            self.calls().iter().filter(|c| *c == line).count()
        }
    }

    const PROBE: &str = "-c import numpy, pandas, matplotlib, pyvisa, tkinter";
    const INSTALL: &str = "-m pip install -r requirements.txt";
    const APP: &str = "FET_Measurement_GUI.py";

    #[test]
    fn all_present_launches_without_install() {
        let project = Project::new();
        project
            .command()
            .assert()
            .success()
            .stdout(predicate::str::contains("Python 3.11.4"))
            .stdout(predicate::str::contains("gui running"));

        assert_eq!(project.calls(), vec!["--version", PROBE, APP]);
    }

    #[test]
    fn failed_probe_installs_then_launches() {
        let project = Project::new();
        project
            .command()
            .env("FAKE_PROBE_EXIT", "1")
            .assert()
            .success()
            .stdout(predicate::str::contains("Installing required packages"))
            .stdout(predicate::str::contains("Collecting numpy"));

        assert_eq!(project.count(INSTALL), 1);
        assert_eq!(project.count(APP), 1);
    }

    #[test]
    fn failed_install_prints_manual_command() {
        let project = Project::new();
        let expected = format!(
            "Please run manually: {} -m pip install -r requirements.txt",
            project.python.display()
        );
        project
            .command()
            .env("FAKE_PROBE_EXIT", "1")
            .env("FAKE_INSTALL_EXIT", "1")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to install required packages"))
            .stdout(predicate::str::contains(expected));

        assert_eq!(project.count(INSTALL), 1);
        assert_eq!(project.count(APP), 0);
    }

    #[test]
    fn application_failure_is_propagated() {
        let project = Project::new();
        project
            .command()
            .env("FAKE_APP_EXIT", "1")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Application exited with error code 1",
            ));

        assert_eq!(project.count(APP), 1);
    }

    #[test]
    fn application_exit_code_is_mirrored() {
        let project = Project::new();
        project.command().env("FAKE_APP_EXIT", "42").assert().code(42);
    }

    #[test]
    fn check_mode_skips_launch() {
        let project = Project::new();
        project
            .command()
            .arg("--check")
            .assert()
            .success()
            .stdout(predicate::str::contains("All prerequisites are in place"));

        assert_eq!(project.count(APP), 0);
    }

    #[test]
    fn config_file_changes_script() {
        let project = Project::new();
        fs::write(project.path().join("launcher.yml"), "script: gui/main.py\n").unwrap();

        project
            .command()
            .assert()
            .success()
            .stderr(predicate::str::contains("Application script not found"));

        assert_eq!(project.count("gui/main.py"), 1);
        assert_eq!(project.count(APP), 0);
    }

    #[test]
    fn project_flag_sets_working_directory() {
        let project = Project::new();
        let elsewhere = TempDir::new().unwrap();

        launcher()
            .current_dir(elsewhere.path())
            .arg("--project")
            .arg(project.path())
            .arg("--python")
            .arg(&project.python)
            .assert()
            .success();

        assert_eq!(project.count(APP), 1);
    }

    #[test]
    fn relative_interpreter_resolves_from_invoking_directory() {
        let project = Project::new();
        let invoking = TempDir::new().unwrap();
        fs::create_dir(invoking.path().join("venv")).unwrap();
        fs::copy(&project.python, invoking.path().join("venv/python")).unwrap();

        launcher()
            .current_dir(invoking.path())
            .args(["--python", "venv/python", "--project"])
            .arg(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Python 3.11.4"));

        assert_eq!(project.count("--version"), 1);
        assert_eq!(project.count(APP), 1);
    }

    #[test]
    fn python_from_environment() {
        let project = Project::new();
        launcher()
            .current_dir(project.path())
            .env("FETLAUNCH_PYTHON", &project.python)
            .assert()
            .success();

        assert_eq!(project.count("--version"), 1);
    }

    #[test]
    fn quiet_mode_hides_progress() {
        let project = Project::new();
        project
            .command()
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::contains("Starting FET Measurement GUI").not())
            .stdout(predicate::str::contains("gui running"));
    }
}
