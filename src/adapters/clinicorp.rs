use crate::config::settings::ProviderConfig;
use crate::domain::model::DaySchedule;
use crate::domain::ports::ScheduleProvider;
use crate::utils::error::{MatchError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;

/// Clinicorp `get_avaliable_days` client. The request timeout bounds the
/// only suspension point in a match request.
pub struct ClinicorpClient {
    client: Client,
    config: ProviderConfig,
}

impl ClinicorpClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl ScheduleProvider for ClinicorpClient {
    async fn available_days(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DaySchedule>> {
        let from_str = from.format("%Y-%m-%d").to_string();
        let to_str = to.format("%Y-%m-%d").to_string();

        tracing::debug!("fetching availability from {} to {}", from_str, to_str);
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("subscriber_id", self.config.subscriber_id.as_str()),
                ("code_link", self.config.code_link.as_str()),
                ("from", from_str.as_str()),
                ("to", to_str.as_str()),
                ("includeHolidays", ""),
                ("showAvailableTimes", "X"),
            ])
            .header("accept", "application/json")
            .header("Authorization", &self.config.auth_header)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("provider response status: {}", status);
        if !status.is_success() {
            return Err(MatchError::ProviderStatusError {
                status: status.as_u16(),
            });
        }

        let payload: serde_json::Value = response.json().await?;
        let items = payload
            .as_array()
            .ok_or_else(|| MatchError::ProviderPayloadError {
                message: "expected a JSON array of day schedules".to_string(),
            })?;

        let mut days = Vec::with_capacity(items.len());
        for item in items {
            let day: DaySchedule =
                serde_json::from_value(item.clone()).map_err(|e| MatchError::DataShapeError {
                    message: e.to_string(),
                })?;
            days.push(day);
        }
        Ok(days)
    }
}
