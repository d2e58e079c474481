pub mod dal;
pub mod initialize;
pub mod query;
pub mod shifts;
pub mod tasks;
pub mod timestamp;

pub use dal::WorkDal;
pub use query::{ListFilter, ListQuery};
