use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub id: i64,              // ⇔ shift.id (caller-assigned)
    pub start: DateTime<Utc>, // ⇔ shift.start (TEXT, unix date layout)
    pub end: DateTime<Utc>,   // ⇔ shift.end   (TEXT, unix date layout)
}

impl Shift {
    pub fn started(id: i64, start: DateTime<Utc>) -> Self {
        Self {
            id,
            start,
            end: start,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end == self.start
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}
