use crate::cli::commands::open_dal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TaskLogic;
use crate::db::timestamp;
use crate::errors::{AppError, AppResult};
use crate::models::TaskClassification;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::secs2readable;

/// Handle `task <description>`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Task { description, class } = cmd {
        let classification = TaskClassification::from_name(class)
            .ok_or_else(|| AppError::InvalidClassification(class.clone()))?;

        let dal = open_dal(cfg)?;
        let task = TaskLogic::start(&dal, description, classification, timestamp::now())?;

        success(format!(
            "Task #{} started: [{}] {}",
            task.id, task.classification, task.description
        ));
    }
    Ok(())
}

/// Handle `stop`.
pub fn handle_stop(cfg: &Config) -> AppResult<()> {
    let dal = open_dal(cfg)?;

    match TaskLogic::stop(&dal, timestamp::now())? {
        Some(task) => success(format!(
            "Task #{} stopped after {}: {}",
            task.id,
            secs2readable(task.duration().num_seconds()),
            task.description
        )),
        None => warning("No task is running."),
    }
    Ok(())
}
