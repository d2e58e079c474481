//! Listing statements for the `task` and `shift` tables.
//!
//! Each listing is one of four fixed statement shapes, picked by which
//! filters are present. The builder is pure: it returns the SQL text and
//! the arguments in placeholder order, and never touches the connection.

use crate::db::timestamp::{sql_iso, sql_is_well_formed};

/// Longest day window SQLite date arithmetic can represent (years 0000-9999).
pub const MAX_WINDOW_DAYS: i64 = 3_652_425;

/// Normalized listing filters. Non-positive inputs mean "no filter"; a
/// window longer than [`MAX_WINDOW_DAYS`] covers every row and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListFilter {
    pub limit: Option<i64>,
    pub days: Option<i64>,
}

impl ListFilter {
    pub fn new(limit: i64, days: i64) -> Self {
        Self {
            limit: (limit > 0).then_some(limit),
            days: (days > 0 && days <= MAX_WINDOW_DAYS).then_some(days),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub sql: String,
    pub args: Vec<i64>,
}

/// Build the listing statement for `table`, selecting `columns` in order.
///
/// Rows are always ordered by `id DESC`. The day window keeps rows whose
/// `start` is strictly newer than `now - days` (SQLite `datetime('now')`, UTC).
/// A window reaching past SQLite's date range has no lower bound. Rows whose
/// `start` is not in the stored layout always pass the window, so decoding
/// rejects them instead of the filter hiding them.
pub fn list_query(table: &str, columns: &[&str], filter: &ListFilter) -> ListQuery {
    let select = format!("SELECT {} FROM {}", columns.join(", "), table);
    let window = format!(
        "WHERE ({} > COALESCE(datetime('now', '-' || ?1 || ' days'), '') \
         OR NOT COALESCE({}, 0))",
        sql_iso("start"),
        sql_is_well_formed("start")
    );

    match (filter.days, filter.limit) {
        (None, None) => ListQuery {
            sql: format!("{select} ORDER BY id DESC"),
            args: vec![],
        },
        (None, Some(limit)) => ListQuery {
            sql: format!("{select} ORDER BY id DESC LIMIT ?1"),
            args: vec![limit],
        },
        (Some(days), None) => ListQuery {
            sql: format!("{select} {window} ORDER BY id DESC"),
            args: vec![days],
        },
        (Some(days), Some(limit)) => ListQuery {
            sql: format!("{select} {window} ORDER BY id DESC LIMIT ?2"),
            args: vec![days, limit],
        },
    }
}
