//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, LauncherTheme, LineKind, NonInteractiveUI, OutputMode, ProgressSpinner,
    SpinnerHandle, Stream, UserInterface, PAUSE_PROMPT,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: LauncherTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            LauncherTheme::new()
        } else {
            LauncherTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl TerminalUI {
    fn term_for(&self, kind: LineKind) -> &Term {
        match kind.stream() {
            Stream::Stdout => &self.term,
            Stream::Stderr => &self.err_term,
        }
    }

    fn write(&self, kind: LineKind, line: &str) {
        self.term_for(kind).write_line(line).ok();
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            self.write(LineKind::Message, msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.write(LineKind::Success, &self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.write(LineKind::Warning, &self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        self.write(LineKind::Error, &self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_messages() {
            self.write(LineKind::Header, &format!("{}\n", self.theme.format_header(title)));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        self.write(LineKind::Hint, &self.theme.format_hint(hint));
    }

    fn pause(&mut self) {
        write!(self.term, "\n{}", self.theme.dim.apply_to(PAUSE_PROMPT)).ok();
        self.term.flush().ok();
        if let Err(e) = self.term.read_key() {
            tracing::debug!("Could not wait for a key press: {}", e);
        }
        writeln!(self.term).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
