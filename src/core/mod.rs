//! Shift/task workflow on top of the data access layer.
//! The store itself has no notion of "open"; these rules live here.

pub mod shift;
pub mod task;

pub use shift::ShiftLogic;
pub use task::TaskLogic;
