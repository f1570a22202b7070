use crate::core::directory::Directory;
use crate::core::resolver::Resolver;
use crate::core::schedule::filter_schedule;
use crate::domain::model::MatchResponse;
use crate::domain::ports::ScheduleProvider;
use crate::utils::error::MatchError;
use chrono::{Duration, Local};
use std::collections::HashMap;
use std::sync::Arc;

/// Ties the resolver to the scheduling provider: text in, final
/// response out. Provider and data faults never escape as errors; they
/// become `success: false` responses so one bad request cannot take the
/// caller down.
pub struct MatchEngine<P: ScheduleProvider> {
    resolver: Resolver,
    provider: P,
    window_days: u32,
}

impl<P: ScheduleProvider> MatchEngine<P> {
    pub fn new(directory: Arc<Directory>, provider: P, window_days: u32) -> Self {
        Self {
            resolver: Resolver::new(directory),
            provider,
            window_days,
        }
    }

    pub async fn match_and_schedule(&self, service_text: &str) -> MatchResponse {
        tracing::info!("matching request: {:?}", service_text);

        let professional = match self.resolver.resolve(service_text) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!("resolver configuration fault: {}", e);
                return MatchResponse::failure("Não conseguimos identificar o serviço.", None);
            }
        };
        tracing::info!(
            "professional identified: {} (color {})",
            professional.name,
            professional.color
        );

        let today = Local::now().date_naive();
        let until = today + Duration::days(i64::from(self.window_days));

        let raw_days = match self.provider.available_days(today, until).await {
            Ok(days) => days,
            Err(e) => {
                tracing::error!("provider fetch failed: {}", e);
                let message = match e {
                    MatchError::ProviderStatusError { status } => {
                        format!("Erro na agenda externa. Código: {}", status)
                    }
                    MatchError::ProviderPayloadError { .. } => {
                        "Erro de formato na resposta da agenda.".to_string()
                    }
                    MatchError::DataShapeError { .. } => "Erro ao processar horários.".to_string(),
                    _ => "Erro técnico ao buscar horários.".to_string(),
                };
                return MatchResponse::failure(message, Some(professional.color.clone()));
            }
        };

        let schedules = filter_schedule(&raw_days, professional.id);
        tracing::info!("{} day(s) with open slots after filtering", schedules.len());

        if schedules.is_empty() {
            let message = format!(
                "Agendamento com {}. Sem horários livres nos próximos {} dias.",
                professional.name, self.window_days
            );
            return MatchResponse::success(message, &professional, Vec::new());
        }

        let message = format!("Horários encontrados para {}.", professional.name);
        MatchResponse::success(message, &professional, schedules)
    }

    /// Current rotation counters, for the diagnostics surface.
    pub fn rotation_snapshot(&self) -> HashMap<String, u64> {
        self.resolver.rotation_snapshot()
    }
}
