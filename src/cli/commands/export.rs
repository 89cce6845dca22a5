use crate::cli::commands::{audit, open_port};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        format,
        file,
        force,
    } = cmd
    {
        let port = open_port(cfg)?;
        let path = expand_tilde(file);

        let written = ExportLogic::export(&port, *kind, *format, &path, *force)?;

        if written > 0 {
            audit(
                &port,
                "export",
                kind.as_str(),
                &format!("{} records to {}", written, path.display()),
            );
        }
    }
    Ok(())
}
