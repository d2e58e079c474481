pub mod init;
pub mod list;
pub mod shift;
pub mod status;
pub mod task;

use crate::config::Config;
use crate::db::WorkDal;
use crate::errors::AppResult;

/// Open the configured database (default data location when unset).
pub(crate) fn open_dal(cfg: &Config) -> AppResult<WorkDal> {
    WorkDal::new(&cfg.database)
}
