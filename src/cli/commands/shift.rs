use crate::cli::commands::open_dal;
use crate::cli::parser::{Commands, ShiftAction};
use crate::config::Config;
use crate::core::ShiftLogic;
use crate::db::timestamp;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::{local_time, secs2readable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shift { action } = cmd {
        let dal = open_dal(cfg)?;
        let now = timestamp::now();

        match action {
            ShiftAction::Start => {
                let shift = ShiftLogic::start(&dal, now)?;
                success(format!(
                    "Shift #{} started at {}",
                    shift.id,
                    local_time(&shift.start)
                ));
            }
            ShiftAction::End => match ShiftLogic::end(&dal, now)? {
                Some(shift) => success(format!(
                    "Shift #{} ended at {} ({})",
                    shift.id,
                    local_time(&shift.end),
                    secs2readable(shift.duration().num_seconds())
                )),
                None => warning("No open shift."),
            },
        }
    }
    Ok(())
}
