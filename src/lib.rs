pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::clinicorp::ClinicorpClient;
pub use crate::config::{AppConfig, CliArgs, ProviderConfig};
pub use crate::core::directory::Directory;
pub use crate::core::engine::MatchEngine;
pub use crate::core::resolver::Resolver;
pub use crate::domain::model::{
    DaySchedule, MatchResponse, Professional, ProfessionalId, TimeSlot,
};
pub use crate::domain::ports::ScheduleProvider;
pub use crate::utils::error::{MatchError, Result};
