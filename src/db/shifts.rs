//! Shift operations on the `shift` table.

use crate::db::WorkDal;
use crate::db::query::{ListFilter, list_query};
use crate::db::timestamp;
use crate::errors::AppResult;
use crate::models::Shift;
use chrono::{DateTime, Utc};
use rusqlite::{Row, params, params_from_iter};

const COLUMNS: [&str; 3] = ["id", "start", "end"];

fn map_row(row: &Row) -> rusqlite::Result<(i64, String, String)> {
    Ok((row.get("id")?, row.get("start")?, row.get("end")?))
}

fn decode((id, start, end): (i64, String, String)) -> AppResult<Shift> {
    Ok(Shift {
        id,
        start: timestamp::decode("start", &start)?,
        end: timestamp::decode("end", &end)?,
    })
}

impl WorkDal {
    pub fn create_shift(&self, shift: &Shift) -> AppResult<()> {
        self.conn().execute(
            "INSERT INTO shift (id, start, end) VALUES (?1, ?2, ?3)",
            params![
                shift.id,
                timestamp::encode(&shift.start),
                timestamp::encode(&shift.end),
            ],
        )?;
        Ok(())
    }

    /// Set `end` of shift `id` to now; no-op when the id is unknown.
    pub fn end_shift(&self, id: i64) -> AppResult<()> {
        self.end_shift_at(id, Utc::now())
    }

    pub fn end_shift_at(&self, id: i64, when: DateTime<Utc>) -> AppResult<()> {
        self.conn().execute(
            "UPDATE shift SET end = ?1 WHERE id = ?2",
            params![timestamp::encode(&when), id],
        )?;
        Ok(())
    }

    pub fn get_latest_shift(&self) -> AppResult<Option<Shift>> {
        Ok(self.list_shifts(1, 0)?.into_iter().next())
    }

    pub fn list_shifts(&self, limit: i64, days: i64) -> AppResult<Vec<Shift>> {
        let q = list_query("shift", &COLUMNS, &ListFilter::new(limit, days));

        let mut stmt = self.conn().prepare(&q.sql)?;
        let rows = stmt.query_map(params_from_iter(q.args.iter()), map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(decode(r?)?);
        }
        Ok(out)
    }
}
