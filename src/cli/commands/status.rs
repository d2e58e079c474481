use crate::cli::commands::open_dal;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::{local_time, secs2readable};
use ansi_term::Colour;
use chrono::Utc;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let dal = open_dal(cfg)?;
    let now = Utc::now();

    match dal.get_latest_shift()? {
        Some(s) if s.is_open() => println!(
            "Shift #{} {} since {} ({})",
            s.id,
            Colour::Green.bold().paint("open"),
            local_time(&s.start),
            secs2readable((now - s.start).num_seconds())
        ),
        Some(s) => println!(
            "Shift #{} closed: {} → {}",
            s.id,
            local_time(&s.start),
            local_time(&s.end)
        ),
        None => info("No shifts recorded yet."),
    }

    match dal.get_latest_task()? {
        Some(t) if t.is_open() => println!(
            "Task  #{} {} [{}] {} ({})",
            t.id,
            Colour::Green.bold().paint("running"),
            t.classification,
            t.description,
            secs2readable((now - t.start).num_seconds())
        ),
        Some(t) => println!(
            "Task  #{} done [{}] {} ({})",
            t.id,
            t.classification,
            t.description,
            secs2readable(t.duration().num_seconds())
        ),
        None => info("No tasks recorded yet."),
    }

    Ok(())
}
