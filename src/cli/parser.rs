use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for work
/// CLI application to track shifts and tasks with SQLite
#[derive(Parser)]
#[command(
    name = "work",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work shifts and the tasks done within them using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database (and remember a custom --db path)
    Init,

    /// Start or end a shift
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },

    /// Start a new task in the open shift, closing the current task
    Task {
        /// What you are working on
        description: String,

        #[arg(
            long = "class",
            short = 'c',
            default_value = "chore",
            help = "Task classification: chore, fix, feature, refactor, test, docs, review, meeting"
        )]
        class: String,
    },

    /// Close the current task without starting a new one
    Stop,

    /// Show the latest shift and task
    Status,

    /// List tasks or shifts, newest first
    List {
        #[arg(value_enum)]
        target: ListTarget,

        #[arg(long, short = 'n', default_value_t = 0, help = "Maximum rows (0 = all)")]
        limit: i64,

        #[arg(long, short = 'd', default_value_t = 0, help = "Only rows started in the last N days (0 = all)")]
        days: i64,

        #[arg(long, help = "Print rows as JSON")]
        json: bool,
    },
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
pub enum ShiftAction {
    /// Open a new shift now
    Start,
    /// Close the open shift (and its open task)
    End,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListTarget {
    Tasks,
    Shifts,
}
