//! Non-interactive UI for CI/headless environments.

use super::{LineKind, OutputMode, SpinnerHandle, Stream, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Plain text, no colors, no animation. Status goes to stdout, warnings and
/// errors to stderr. Pausing is a no-op since nobody is there to press a key.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

fn emit(kind: LineKind, line: &str) {
    match kind.stream() {
        Stream::Stdout => println!("{}", line),
        Stream::Stderr => eprintln!("{}", line),
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            emit(LineKind::Message, msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            emit(LineKind::Success, &format!("✓ {}", msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            emit(LineKind::Warning, &format!("⚠ {}", msg));
        }
    }

    fn error(&mut self, msg: &str) {
        emit(LineKind::Error, &format!("✗ {}", msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(LineSpinner { mode: self.mode })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            let rule = "=".repeat(title.chars().count());
            emit(LineKind::Header, &format!("{}\n{}\n", title, rule));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        emit(LineKind::Hint, &format!("  → {}", hint));
    }

    fn pause(&mut self) {
        tracing::debug!("Skipping pause in non-interactive mode");
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints its outcome as a single line.
struct LineSpinner {
    mode: OutputMode,
}

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_spinners() {
            println!("✓ {}", msg);
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.mode.shows_spinners() {
            println!("✗ {}", msg);
        }
    }
}
