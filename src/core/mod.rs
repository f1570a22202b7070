pub mod balancer;
pub mod directory;
pub mod engine;
pub mod resolver;
pub mod schedule;
pub mod text;

pub use crate::domain::model::{
    DaySchedule, MatchResponse, Professional, ProfessionalId, TimeSlot,
};
pub use crate::domain::ports::ScheduleProvider;
pub use crate::utils::error::Result;
