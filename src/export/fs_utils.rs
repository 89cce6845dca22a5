use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Gate for writing an export over `path`.
///
/// A missing file or `force` passes straight through; otherwise the operator
/// is asked on stdin and anything but `y`/`yes` cancels the export.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    ensure_writable_with(path, force, io::stdin().lock())
}

fn ensure_writable_with(path: &Path, force: bool, mut input: impl BufRead) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("{} already exists.", path.display()));
    print!("Replace it? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(AppError::Export(format!(
            "cancelled, {} left unchanged",
            path.display()
        ))),
    }
}

