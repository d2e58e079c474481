use chrono::{TimeZone, Utc};
use rusqlite::Connection;
use work::AppError;
use work::db::query::{ListFilter, MAX_WINDOW_DAYS, list_query};
use work::db::timestamp::{self, decode, encode, sql_is_well_formed, sql_iso};

#[test]
fn test_encode_uses_unix_date_layout() {
    let ts = Utc.with_ymd_and_hms(2026, 10, 9, 14, 3, 27).unwrap();
    assert_eq!(encode(&ts), "Fri Oct  9 14:03:27 UTC 2026");

    let ts = Utc.with_ymd_and_hms(2025, 1, 20, 8, 0, 0).unwrap();
    assert_eq!(encode(&ts), "Mon Jan 20 08:00:00 UTC 2025");
}

#[test]
fn test_decode_accepts_encoded_text() {
    let ts = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(decode("start", "Tue Dec 31 23:59:59 UTC 2024").unwrap(), ts);
}

#[test]
fn test_decode_rejects_foreign_formats() {
    for raw in [
        "",
        "2024-12-31T23:59:59Z",
        "Mon Dec 31 23:59:59 UTC 2024", // wrong weekday
        "Tue Dec 31 23:59:59 2024",     // no zone
        "Tue Dec 31 23:59:59  2024",
        "Sat Mar 01 10:00:00 UTC 2025", // zero-padded day
        "Sat Mar 1 10:00:00 UTC 2025",
        "Tue Dec 31 23:59:59 UTC 2024 ",
    ] {
        match decode("end", raw) {
            Err(AppError::InvalidTimestamp { field, value, .. }) => {
                assert_eq!(field, "end");
                assert_eq!(value, raw);
            }
            other => panic!("{raw:?} decoded as {other:?}"),
        }
    }
}

#[test]
fn test_decode_ignores_zone_abbreviation() {
    let ts = Utc.with_ymd_and_hms(2025, 1, 20, 8, 0, 0).unwrap();
    for raw in [
        "Mon Jan 20 08:00:00 UTC 2025",
        "Mon Jan 20 08:00:00 PST 2025",
        "Mon Jan 20 08:00:00 CEST 2025",
        "Mon Jan 20 08:00:00 +03 2025",
    ] {
        assert_eq!(decode("start", raw).unwrap(), ts, "{raw}");
    }
}

#[test]
fn test_now_is_whole_seconds() {
    assert_eq!(timestamp::now().timestamp_subsec_nanos(), 0);
}

#[test]
fn test_sql_iso_matches_sqlite_datetime() {
    let conn = Connection::open_in_memory().unwrap();

    for ts in [
        Utc.with_ymd_and_hms(2026, 10, 9, 14, 3, 27).unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 20, 8, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap(),
    ] {
        let (iso, native): (String, String) = conn
            .query_row(
                &format!("SELECT {}, datetime(?2)", sql_iso("?1")),
                [encode(&ts), ts.format("%Y-%m-%d %H:%M:%S").to_string()],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(iso, native);
    }
}

/// The SQL layout check and the decoder must agree on every input, or the
/// day window could hide a row that decoding would reject.
#[test]
fn test_sql_well_formed_agrees_with_decode() {
    let conn = Connection::open_in_memory().unwrap();
    let sql = format!("SELECT COALESCE({}, 0)", sql_is_well_formed("?1"));

    for raw in [
        "Fri Oct  9 14:03:27 UTC 2026",
        "Tue Oct 14 09:30:00 CEST 2025",
        "Thu Feb 29 23:59:59 PST 2024",
        "Sat Mar  1 00:00:00 +03 2025",
        "Thu Oct  9 14:03:27 UTC 2026",
        "Sat Feb 29 10:00:00 UTC 2025",
        "Fri Oct  9 24:00:00 UTC 2026",
        "Fri Oct 09 14:03:27 UTC 2026",
        "Fri Oct 9 14:03:27 UTC 2026",
        "Fri Oct  9 14:03:27  2026",
        "Fri Oct  9 14:03:27 UTC 2026 ",
        "Fri Oct  9 14:03:27 U C 2026",
        "Fri Xyz  9 14:03:27 UTC 2026",
        "2026-10-09 14:03:27",
        "garbage",
        "",
    ] {
        let in_sql: bool = conn.query_row(&sql, [raw], |r| r.get(0)).unwrap();
        assert_eq!(in_sql, decode("start", raw).is_ok(), "{raw:?}");
    }
}

#[test]
fn test_list_filter_normalizes_non_positive_values() {
    assert_eq!(ListFilter::new(0, 0), ListFilter::default());
    assert_eq!(ListFilter::new(-1, -7), ListFilter::default());
    assert_eq!(ListFilter::new(0, MAX_WINDOW_DAYS + 1), ListFilter::default());
    assert_eq!(ListFilter::new(0, MAX_WINDOW_DAYS).days, Some(MAX_WINDOW_DAYS));
    assert_eq!(
        ListFilter::new(3, 2),
        ListFilter {
            limit: Some(3),
            days: Some(2)
        }
    );
}

#[test]
fn test_list_query_variants() {
    let cols = ["id", "start", "end"];

    let q = list_query("shift", &cols, &ListFilter::new(0, 0));
    assert_eq!(q.sql, "SELECT id, start, end FROM shift ORDER BY id DESC");
    assert!(q.args.is_empty());

    let q = list_query("shift", &cols, &ListFilter::new(5, 0));
    assert_eq!(q.sql, "SELECT id, start, end FROM shift ORDER BY id DESC LIMIT ?1");
    assert_eq!(q.args, vec![5]);

    let q = list_query("shift", &cols, &ListFilter::new(0, 7));
    assert!(q.sql.contains("WHERE (printf("));
    assert!(q.sql.contains("> COALESCE(datetime('now', '-' || ?1 || ' days'), '')"));
    assert!(q.sql.contains("OR NOT COALESCE("));
    assert!(q.sql.ends_with("ORDER BY id DESC"));
    assert_eq!(q.args, vec![7]);

    let q = list_query("task", &["id"], &ListFilter::new(2, 7));
    assert!(q.sql.starts_with("SELECT id FROM task WHERE "));
    assert!(q.sql.ends_with("ORDER BY id DESC LIMIT ?2"));
    assert_eq!(q.args, vec![7, 2]);
}

#[test]
fn test_list_queries_prepare_against_schema() {
    let dal = work::WorkDal::open_in_memory().unwrap();
    for (limit, days) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let q = list_query(
            "task",
            &["id", "description", "classification", "start", "end"],
            &ListFilter::new(limit, days),
        );
        dal.conn().prepare(&q.sql).expect(&q.sql);
    }
}
