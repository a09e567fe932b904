//! Interpreter version parsing and comparison.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static RE_VERSION_OUTPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").unwrap());
static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").unwrap());

/// A `major.minor[.patch]` interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl PythonVersion {
    pub fn new(major: u32, minor: u32, patch: Option<u32>) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract the version from `python --version` output.
    ///
    /// Python 3.4+ prints to stdout, older releases to stderr, so callers
    /// pass both streams. Pre-release suffixes (`3.13.0rc1`) are ignored.
    pub fn from_version_output(output: &str) -> Option<Self> {
        let caps = RE_VERSION_OUTPUT.captures(output)?;
        from_captures(&caps)
    }

    /// Whether this version satisfies `minimum`.
    ///
    /// A missing patch component counts as `0`.
    pub fn at_least(&self, minimum: &PythonVersion) -> bool {
        self.key() >= minimum.key()
    }

    fn key(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch.unwrap_or(0))
    }
}

fn from_captures(caps: &regex::Captures<'_>) -> Option<PythonVersion> {
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    Some(PythonVersion::new(number(1)?, number(2)?, number(3)))
}

impl FromStr for PythonVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RE_VERSION
            .captures(s.trim())
            .and_then(|caps| from_captures(&caps))
            .ok_or_else(|| format!("invalid version: {}", s))
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}
