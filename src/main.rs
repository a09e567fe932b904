//! fetlaunch CLI entry point.

use clap::Parser;
use fetlaunch::cli::{Cli, Command, LaunchCommand};
use fetlaunch::shell::is_ci;
use fetlaunch::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("fetlaunch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fetlaunch=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let code = run();
    std::process::exit(code);
}

/// Run the launcher and return the raw process exit status.
///
/// Windows codes above 255 must survive, which `ExitCode` can't carry.
fn run() -> i32 {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("fetlaunch starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let is_interactive = !is_ci() && console::Term::stdout().is_term();
    let mut ui = create_ui(is_interactive, cli.output_mode());

    let command = LaunchCommand::new(&project_root, cli.overrides(), cli.launch_options());

    match command.execute(ui.as_mut()) {
        Ok(result) => result.exit_code,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            1
        }
    }
}
