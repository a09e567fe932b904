//! Platform-specific defaults and lookups.

use std::path::{Path, PathBuf};

/// Interpreter name used when nothing is configured.
///
/// Windows installs expose `python`; most Unix systems only ship `python3`.
pub fn default_interpreter() -> &'static str {
    if cfg!(target_os = "windows") {
        "python"
    } else {
        "python3"
    }
}

/// Locate `program` the way the OS would when spawning it.
///
/// Names containing a path separator are checked as-is. Bare names are
/// searched in each `PATH` entry, trying `PATHEXT` extensions on Windows.
pub fn find_on_path(program: &str) -> Option<PathBuf> {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return path.is_file().then(|| path.to_path_buf());
    }

    let search = std::env::var_os("PATH")?;
    let extensions = executable_extensions();

    std::env::split_paths(&search).find_map(|dir| {
        extensions.iter().find_map(|ext| {
            let candidate = dir.join(format!("{}{}", program, ext));
            candidate.is_file().then_some(candidate)
        })
    })
}

fn executable_extensions() -> Vec<String> {
    if cfg!(target_os = "windows") {
        let mut exts = vec![String::new()];
        let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| ".EXE;.BAT;.CMD".to_string());
        exts.extend(
            pathext
                .split(';')
                .filter(|e| !e.is_empty())
                .map(|e| e.to_lowercase()),
        );
        exts
    } else {
        vec![String::new()]
    }
}

/// Check if running in a CI environment.
///
/// Used in `main()` to force non-interactive mode, which also disables the
/// key-press pause on failure. Checks `CI`, `GITHUB_ACTIONS`, `GITLAB_CI`,
/// `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "CIRCLECI", "TRAVIS", "JENKINS_URL"]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}
