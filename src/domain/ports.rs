use crate::domain::model::DaySchedule;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// External scheduling provider. Returns raw availability for a date
/// range; the engine narrows it afterwards.
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    async fn available_days(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DaySchedule>>;
}
