//! Child process execution and platform lookups.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{execute, CommandResult, Invocation, ProcessRunner, StdioMode, SystemRunner};
pub use mock::{MockResponse, MockRunner};
pub use platform::{default_interpreter, find_on_path, is_ci};
