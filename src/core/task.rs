use crate::core::shift::ShiftLogic;
use crate::db::WorkDal;
use crate::errors::{AppError, AppResult};
use crate::models::{Task, TaskClassification};
use chrono::{DateTime, Utc};

pub struct TaskLogic;

impl TaskLogic {
    pub fn open_task(dal: &WorkDal) -> AppResult<Option<Task>> {
        Ok(dal.get_latest_task()?.filter(Task::is_open))
    }

    /// Start task `latest + 1` at `now` inside the open shift, closing the
    /// task that was running.
    pub fn start(
        dal: &WorkDal,
        description: &str,
        classification: TaskClassification,
        now: DateTime<Utc>,
    ) -> AppResult<Task> {
        if description.trim().is_empty() {
            return Err(AppError::State("Task description cannot be empty.".into()));
        }

        if ShiftLogic::open_shift(dal)?.is_none() {
            return Err(AppError::State(
                "No open shift; start one with `work shift start`.".into(),
            ));
        }

        let latest = dal.get_latest_task()?;
        let id = next_id(latest.as_ref().map(|t| t.id), "task")?;

        if let Some(t) = &latest
            && t.is_open()
        {
            Self::close(dal, t, now)?;
        }

        let task = Task::started(id, description.trim(), classification, now);
        dal.create_task(&task)?;
        Ok(task)
    }

    /// Close the running task. `None` when no task was open.
    pub fn stop(dal: &WorkDal, now: DateTime<Utc>) -> AppResult<Option<Task>> {
        let Some(mut task) = Self::open_task(dal)? else {
            return Ok(None);
        };

        Self::close(dal, &task, now)?;
        task.end = now;
        Ok(Some(task))
    }

    /// `end == start` reads as "still open", so a close must land after start.
    fn close(dal: &WorkDal, task: &Task, now: DateTime<Utc>) -> AppResult<()> {
        if now <= task.start {
            return Err(AppError::State(format!(
                "Task #{} started less than a second ago; it is still running.",
                task.id
            )));
        }
        dal.end_task_at(task.id, now)
    }
}

/// Identifier following `latest` (1 for an empty table).
pub(crate) fn next_id(latest: Option<i64>, what: &str) -> AppResult<i64> {
    match latest {
        None => Ok(1),
        Some(id) => id
            .checked_add(1)
            .ok_or_else(|| AppError::State(format!("No {what} identifiers left after #{id}."))),
    }
}
