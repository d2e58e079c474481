use super::classification::TaskClassification;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: i64,                              // ⇔ task.id (caller-assigned)
    pub description: String,                  // ⇔ task.description
    pub classification: TaskClassification,   // ⇔ task.classification (INTEGER)
    pub start: DateTime<Utc>,                 // ⇔ task.start (TEXT, unix date layout)
    pub end: DateTime<Utc>,                   // ⇔ task.end   (TEXT, unix date layout)
}

impl Task {
    /// A task that has just been started: `end` equals `start` until closed.
    pub fn started(
        id: i64,
        description: impl Into<String>,
        classification: TaskClassification,
        start: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            classification,
            start,
            end: start,
        }
    }

    /// `end == start` is the "still open" sentinel.
    pub fn is_open(&self) -> bool {
        self.end == self.start
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}
