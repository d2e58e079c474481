//! Data access layer: owns the SQLite connection for the work database.

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

pub struct WorkDal {
    conn: Connection,
    path: PathBuf,
}

impl WorkDal {
    /// Open (creating if needed) the database at `path` and make sure the
    /// schema exists. An empty `path` selects the default data location.
    pub fn new(path: &str) -> AppResult<Self> {
        let path = if path.is_empty() {
            Config::database_file()?
        } else {
            PathBuf::from(path)
        };

        make_file_all(&path)?;

        let conn = Connection::open(&path)?;
        init_db(&conn)?;

        Ok(Self { conn, path })
    }

    /// Private in-memory database with the same schema.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self {
            conn,
            path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}

/// Create parent directories and an empty file if they do not exist yet.
fn make_file_all(path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    Ok(())
}
