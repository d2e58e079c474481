use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::WorkDal;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the database file and schema. A custom `--db` path is stored
/// in the config file so later commands use it without the flag.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let dal = WorkDal::new(&cfg.database)?;

    if let Some(custom) = &cli.db {
        let saved = Config {
            database: std::path::absolute(custom)?.to_string_lossy().to_string(),
        };
        let path = saved.save()?;
        info(format!("Config file : {}", path.display()));
    }

    success(format!("Database initialized at {}", dal.path().display()));
    dal.close()
}
