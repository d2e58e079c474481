use crate::core::task::{TaskLogic, next_id};
use crate::db::WorkDal;
use crate::errors::{AppError, AppResult};
use crate::models::Shift;
use chrono::{DateTime, Utc};

pub struct ShiftLogic;

impl ShiftLogic {
    /// The latest shift, if it is still open.
    pub fn open_shift(dal: &WorkDal) -> AppResult<Option<Shift>> {
        Ok(dal.get_latest_shift()?.filter(Shift::is_open))
    }

    /// Open shift `latest + 1` at `now`. Only one shift may be open.
    pub fn start(dal: &WorkDal, now: DateTime<Utc>) -> AppResult<Shift> {
        let latest = dal.get_latest_shift()?;

        if let Some(s) = &latest
            && s.is_open()
        {
            return Err(AppError::State(format!(
                "Shift #{} is already open; end it first with `work shift end`.",
                s.id
            )));
        }

        let shift = Shift::started(next_id(latest.map(|s| s.id), "shift")?, now);
        dal.create_shift(&shift)?;
        Ok(shift)
    }

    /// Close the open shift and its open task. Returns the closed shift,
    /// or `None` when nothing was open.
    pub fn end(dal: &WorkDal, now: DateTime<Utc>) -> AppResult<Option<Shift>> {
        let Some(mut shift) = Self::open_shift(dal)? else {
            return Ok(None);
        };

        if now <= shift.start {
            return Err(AppError::State(format!(
                "Shift #{} started less than a second ago; it is still open.",
                shift.id
            )));
        }

        TaskLogic::stop(dal, now)?;

        dal.end_shift_at(shift.id, now)?;
        shift.end = now;
        Ok(Some(shift))
    }
}
