//! Mock process runner for testing.
//!
//! `MockRunner` implements [`ProcessRunner`] without spawning anything. It
//! records every invocation and answers from scripted responses matched on
//! the leading arguments.
//!
//! # Example
//!
//! ```
//! use fetlaunch::shell::{Invocation, MockResponse, MockRunner, ProcessRunner};
//!
//! let runner = MockRunner::new();
//! runner.respond_to(&["--version"], MockResponse::stdout(0, "Python 3.11.4"));
//!
//! let result = runner.run(&Invocation::new("python").arg("--version")).unwrap();
//! assert!(result.stdout.contains("3.11"));
//! assert_eq!(runner.count_matching(&["--version"]), 1);
//! ```

use std::cell::RefCell;
use std::time::Duration;

use crate::error::{LauncherError, Result};

use super::command::{CommandResult, Invocation, ProcessRunner};

/// Scripted reply for a matched invocation.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The process ran and exited with this code and output.
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// The process was killed before exiting.
    Signal,
    /// The process could not be started.
    SpawnError,
}

impl MockResponse {
    /// Exit with `code` and no output.
    pub fn exit(code: i32) -> Self {
        Self::Exit {
            code,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Exit with `code`, printing `stdout`.
    pub fn stdout(code: i32, stdout: &str) -> Self {
        Self::Exit {
            code,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// Exit with `code`, printing `stderr`.
    pub fn stderr(code: i32, stderr: &str) -> Self {
        Self::Exit {
            code,
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

#[derive(Debug)]
struct Rule {
    prefix: Vec<String>,
    response: MockResponse,
}

/// Process runner that records invocations instead of running them.
///
/// Unmatched invocations exit 0.
#[derive(Debug, Default)]
pub struct MockRunner {
    rules: RefCell<Vec<Rule>>,
    calls: RefCell<Vec<Invocation>>,
}

impl MockRunner {
    /// Create a runner where every process exits 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every invocation whose arguments start with `prefix`.
    ///
    /// Rules are tried in the order they were added.
    pub fn respond_to(&self, prefix: &[&str], response: MockResponse) {
        self.rules.borrow_mut().push(Rule {
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            response,
        });
    }

    /// All invocations in the order they were run.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Number of invocations whose arguments start with `prefix`.
    pub fn count_matching(&self, prefix: &[&str]) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|inv| starts_with(inv, prefix))
            .count()
    }

    /// Whether any invocation's arguments start with `prefix`.
    pub fn was_called(&self, prefix: &[&str]) -> bool {
        self.count_matching(prefix) > 0
    }

    fn response_for(&self, invocation: &Invocation) -> MockResponse {
        self.rules
            .borrow()
            .iter()
            .find(|rule| {
                let prefix: Vec<&str> = rule.prefix.iter().map(String::as_str).collect();
                starts_with(invocation, &prefix)
            })
            .map(|rule| rule.response.clone())
            .unwrap_or_else(|| MockResponse::exit(0))
    }
}

fn starts_with(invocation: &Invocation, prefix: &[&str]) -> bool {
    invocation.args.len() >= prefix.len()
        && invocation.args.iter().zip(prefix).all(|(a, p)| a == p)
}

impl ProcessRunner for MockRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        self.calls.borrow_mut().push(invocation.clone());

        match self.response_for(invocation) {
            MockResponse::Exit {
                code: 0,
                stdout,
                stderr,
            } => Ok(CommandResult::success(stdout, stderr, Duration::ZERO)),
            MockResponse::Exit {
                code,
                stdout,
                stderr,
            } => Ok(CommandResult::failure(
                Some(code),
                stdout,
                stderr,
                Duration::ZERO,
            )),
            MockResponse::Signal => Ok(CommandResult::failure(
                None,
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
            MockResponse::SpawnError => Err(LauncherError::CommandFailed {
                command: invocation.display(),
                code: None,
            }),
        }
    }
}
