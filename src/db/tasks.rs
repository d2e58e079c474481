//! Task operations on the `task` table.

use crate::db::WorkDal;
use crate::db::query::{ListFilter, list_query};
use crate::db::timestamp;
use crate::errors::{AppError, AppResult};
use crate::models::{Task, TaskClassification};
use chrono::{DateTime, Utc};
use rusqlite::{Row, params, params_from_iter};

const COLUMNS: [&str; 5] = ["id", "description", "classification", "start", "end"];

/// A `task` row as stored, before the text columns are decoded.
struct TaskRow {
    id: i64,
    description: String,
    classification: i64,
    start: String,
    end: String,
}

fn map_row(row: &Row) -> rusqlite::Result<TaskRow> {
    Ok(TaskRow {
        id: row.get("id")?,
        description: row.get("description")?,
        classification: row.get("classification")?,
        start: row.get("start")?,
        end: row.get("end")?,
    })
}

impl TaskRow {
    fn decode(self) -> AppResult<Task> {
        let classification = TaskClassification::from_db_code(self.classification)
            .ok_or_else(|| AppError::InvalidClassification(self.classification.to_string()))?;

        Ok(Task {
            id: self.id,
            description: self.description,
            classification,
            start: timestamp::decode("start", &self.start)?,
            end: timestamp::decode("end", &self.end)?,
        })
    }
}

impl WorkDal {
    /// Insert a task with its caller-assigned id. A duplicate id fails.
    pub fn create_task(&self, task: &Task) -> AppResult<()> {
        self.conn().execute(
            "INSERT INTO task (id, description, classification, start, end)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                task.id,
                task.description,
                task.classification.to_db_code(),
                timestamp::encode(&task.start),
                timestamp::encode(&task.end),
            ],
        )?;
        Ok(())
    }

    /// Set `end` of task `id` to now. Succeeds even when no task has that id.
    pub fn end_task(&self, id: i64) -> AppResult<()> {
        self.end_task_at(id, Utc::now())
    }

    pub fn end_task_at(&self, id: i64, when: DateTime<Utc>) -> AppResult<()> {
        self.conn().execute(
            "UPDATE task SET end = ?1 WHERE id = ?2",
            params![timestamp::encode(&when), id],
        )?;
        Ok(())
    }

    /// Task with the highest id, `None` when the table is empty.
    pub fn get_latest_task(&self) -> AppResult<Option<Task>> {
        Ok(self.list_tasks(1, 0)?.into_iter().next())
    }

    /// Tasks by id descending. `limit <= 0` is unbounded; `days <= 0`
    /// disables the day window. A row that fails to decode fails the call.
    pub fn list_tasks(&self, limit: i64, days: i64) -> AppResult<Vec<Task>> {
        let q = list_query("task", &COLUMNS, &ListFilter::new(limit, days));

        let mut stmt = self.conn().prepare(&q.sql)?;
        let rows = stmt.query_map(params_from_iter(q.args.iter()), map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?.decode()?);
        }
        Ok(out)
    }
}
