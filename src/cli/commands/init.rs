use crate::cli::commands::audit;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::port::SqlitePort;
use crate::errors::AppResult;
use crate::store::MaterialRegistry;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
///  - reports the material set in use
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing LogCalc…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let port = SqlitePort::open(&db_path)?;

    let registry = MaterialRegistry::open(&port)?;
    println!("🧵 Materials  : {}", registry.list().len());

    println!("✅ Database initialized at {}", &db_path);

    audit(
        &port,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );

    println!("🎉 LogCalc initialization completed!");
    Ok(())
}
