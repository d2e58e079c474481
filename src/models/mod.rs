pub mod classification;
pub mod shift;
pub mod task;

pub use classification::TaskClassification;
pub use shift::Shift;
pub use task::Task;
