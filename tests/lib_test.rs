//! Library integration tests.

use fetlaunch::config::{load_config, ConfigOverrides};
use fetlaunch::runner::{LaunchOptions, LaunchOutcome, Launcher};
use fetlaunch::shell::{MockResponse, MockRunner};
use fetlaunch::ui::MockUI;
use fetlaunch::LauncherError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = LauncherError::ApplicationFailed { code: 5 };
    assert!(err.to_string().contains('5'));
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> fetlaunch::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use fetlaunch::cli::Cli;

    let cli = Cli::parse_from(["fetlaunch", "--check", "--python", "py"]);
    assert!(cli.launch_options().check_only);
    assert_eq!(cli.overrides().interpreter.as_deref(), Some("py"));
}

#[test]
fn loaded_config_drives_launcher() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("launcher.yml"),
        "interpreter: py\npackages: [numpy, serial]\nrequirements: deps/requirements.txt\n",
    )
    .unwrap();
    let config = load_config(temp.path(), &ConfigOverrides::default()).unwrap();

    let runner = MockRunner::new();
    runner.respond_to(&["--version"], MockResponse::stdout(0, "Python 3.9.7"));
    runner.respond_to(&["-c"], MockResponse::exit(1));
    let mut ui = MockUI::new();

    let outcome = Launcher::new(&config, &runner)
        .with_options(LaunchOptions { check_only: true })
        .run(&mut ui)
        .unwrap();

    assert_eq!(outcome, LaunchOutcome::Checked);
    let calls = runner.calls();
    assert!(calls.iter().all(|c| c.program == "py"));
    assert_eq!(calls[1].args, vec!["-c", "import numpy, serial"]);
    assert_eq!(
        calls[2].args,
        vec!["-m", "pip", "install", "-r", "deps/requirements.txt"]
    );
}
