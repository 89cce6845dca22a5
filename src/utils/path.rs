//! Export target paths given on the command line.

use std::path::PathBuf;

/// Expand a leading `~` (alone or as `~/…`) to the home directory.
///
/// Export paths must be absolute, so `~/runs.csv` is the usual way to write
/// next to the operator's files.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
