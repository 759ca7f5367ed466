pub mod app;
pub mod config;
pub mod dialog;
pub mod display;
pub mod error;
pub mod models;
pub mod routines;
pub mod storage;
pub mod store;

pub use error::PlannerError;
pub use models::{DaySchedule, Exercise, Schedule};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SCHEDULE_KEY};
pub use store::ScheduleStore;
