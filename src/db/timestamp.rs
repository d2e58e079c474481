//! Text encoding of timestamps stored in the `start` / `end` columns.
//!
//! Rows carry the Unix `date` layout (`Mon Jan _2 15:04:05 MST 2006`),
//! e.g. `Fri Oct  9 14:03:27 UTC 2026`. This crate always writes `UTC`;
//! rows written with another zone abbreviation (`PST`, `CEST`, `+03`) are
//! read back with a zero offset, the zone name itself is not interpreted.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Everything before the zone field; `%e` is the space-padded day of month.
const HEAD: &str = "%a %b %e %H:%M:%S";
const YEAR: &str = "%Y";

/// Full chrono layout used when writing.
pub const LAYOUT: &str = "%a %b %e %H:%M:%S UTC %Y";

pub fn encode(ts: &DateTime<Utc>) -> String {
    ts.format(LAYOUT).to_string()
}

/// Decode a stored column value. `field` names the column in the error.
///
/// Only the exact layout is accepted: the text must be what [`encode`]
/// would write for the parsed instant, apart from the zone token.
pub fn decode(field: &'static str, raw: &str) -> AppResult<DateTime<Utc>> {
    let invalid = |reason: String| AppError::InvalidTimestamp {
        field,
        value: raw.to_string(),
        reason,
    };

    // <head> <zone> <year>
    let mut parts = raw.rsplitn(3, ' ');
    let (Some(year), Some(zone), Some(head)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid("expected `<date> <time> <zone> <year>`".into()));
    };
    if zone.is_empty() {
        return Err(invalid("missing time zone".into()));
    }

    let naive = NaiveDateTime::parse_from_str(&format!("{head} {year}"), &format!("{HEAD} {YEAR}"))
        .map_err(|e| invalid(e.to_string()))?;

    if naive.format(HEAD).to_string() != head || naive.format(YEAR).to_string() != year {
        return Err(invalid("not in `Mon Jan _2 15:04:05 MST 2006` layout".into()));
    }

    Ok(naive.and_utc())
}

/// Current wall-clock time truncated to the one-second resolution of [`LAYOUT`].
pub fn now() -> DateTime<Utc> {
    truncate(Utc::now())
}

pub fn truncate(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp(ts.timestamp(), 0).unwrap_or(ts)
}

/// SQL expression rewriting a column in [`LAYOUT`] into `YYYY-MM-DD HH:MM:SS`,
/// the form SQLite's `datetime()` produces, so the two compare chronologically.
///
/// Offsets (1-based): month 5..7, day 9..10, time 12..19, year = last 4.
pub fn sql_iso(column: &str) -> String {
    format!(
        "printf('%s-%02d-%02d %s', \
         substr({c}, -4), \
         (instr('JanFebMarAprMayJunJulAugSepOctNovDec', substr({c}, 5, 3)) + 2) / 3, \
         CAST(trim(substr({c}, 9, 2)) AS INTEGER), \
         substr({c}, 12, 8))",
        c = column
    )
}

/// SQL predicate, true exactly when the column holds text [`decode`] accepts:
/// the fixed head, a zone token without spaces, a four digit year, a real
/// calendar date and the matching weekday. NULL when the column is NULL.
pub fn sql_is_well_formed(column: &str) -> String {
    let iso = sql_iso(column);
    format!(
        "(substr({c}, 1, 20) GLOB \
         '[A-Z][a-z][a-z] [A-Z][a-z][a-z] [ 123][0-9] [0-2][0-9]:[0-5][0-9]:[0-5][0-9] ' \
         AND substr({c}, -5) GLOB ' [0-9][0-9][0-9][0-9]' \
         AND length({c}) > 25 \
         AND instr(substr({c}, 21, length({c}) - 25), ' ') = 0 \
         AND datetime({iso}) = {iso} \
         AND substr('SunMonTueWedThuFriSat', strftime('%w', {iso}) * 3 + 1, 3) = substr({c}, 1, 3))",
        c = column,
        iso = iso
    )
}
