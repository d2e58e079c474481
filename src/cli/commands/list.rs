use crate::cli::commands::open_dal;
use crate::cli::parser::{Commands, ListTarget};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Shift, Task};
use crate::ui::messages::info;
use crate::utils::formatting::{end_or_open, local_time, secs2readable, truncate};
use crate::utils::table::{Column, Table};

const TIME_WIDTH: usize = 16;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        target,
        limit,
        days,
        json,
    } = cmd
    {
        let dal = open_dal(cfg)?;

        match target {
            ListTarget::Tasks => {
                let tasks = dal.list_tasks(*limit, *days)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&tasks)?);
                } else if tasks.is_empty() {
                    info("No tasks found.");
                } else {
                    print!("{}", tasks_table(&tasks).render());
                }
            }
            ListTarget::Shifts => {
                let shifts = dal.list_shifts(*limit, *days)?;
                if *json {
                    println!("{}", serde_json::to_string_pretty(&shifts)?);
                } else if shifts.is_empty() {
                    info("No shifts found.");
                } else {
                    print!("{}", shifts_table(&shifts).render());
                }
            }
        }
    }
    Ok(())
}

fn tasks_table(tasks: &[Task]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("START", TIME_WIDTH),
        Column::new("END", TIME_WIDTH),
        Column::new("TIME", 7),
        Column::new("CLASS", 8),
        Column::new("DESCRIPTION", 40),
    ]);

    for t in tasks {
        table.add_row(vec![
            t.id.to_string(),
            local_time(&t.start),
            end_or_open(t.is_open(), &t.end, TIME_WIDTH),
            secs2readable(t.duration().num_seconds()),
            t.classification.to_string(),
            truncate(&t.description, 40),
        ]);
    }
    table
}

fn shifts_table(shifts: &[Shift]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("START", TIME_WIDTH),
        Column::new("END", TIME_WIDTH),
        Column::new("TIME", 7),
    ]);

    for s in shifts {
        table.add_row(vec![
            s.id.to_string(),
            local_time(&s.start),
            end_or_open(s.is_open(), &s.end, TIME_WIDTH),
            secs2readable(s.duration().num_seconds()),
        ]);
    }
    table
}
