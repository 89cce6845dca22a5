use crate::cli::commands::open_port;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// `logcalc log`: audit trail of material, run, shift and logbook changes.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Log { print } = cmd else {
        return Ok(());
    };

    if !*print {
        info("Use `logcalc log --print` to show the audit trail.");
        return Ok(());
    }

    let port = open_port(cfg)?;
    LogLogic::print_log(port.conn())
}
