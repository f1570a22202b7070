use chrono::{Duration, Local};
use httpmock::prelude::*;
use odonto_match::{ClinicorpClient, Directory, MatchEngine, ProviderConfig};
use std::sync::Arc;

const WINDOW_DAYS: u32 = 15;
const GABRIELA_ID: u64 = 5859536659349504;
const RAMON_ID: u64 = 5108599479861248;

fn provider_config(endpoint: String) -> ProviderConfig {
    ProviderConfig {
        endpoint,
        subscriber_id: "odontomaria".to_string(),
        code_link: "57762".to_string(),
        auth_header: "Basic dGVzdA==".to_string(),
        timeout_seconds: Some(2),
    }
}

fn engine(server: &MockServer) -> MatchEngine<ClinicorpClient> {
    let directory = Directory::builtin();
    directory.validate().unwrap();
    let provider = ClinicorpClient::new(provider_config(server.url("/"))).unwrap();
    MatchEngine::new(Arc::new(directory), provider, WINDOW_DAYS)
}

fn slot(start: &str, end: &str, professional_id: u64) -> serde_json::Value {
    serde_json::json!({
        "from": start,
        "to": end,
        "isSelectable": true,
        "isSelected": false,
        "professionalId": professional_id
    })
}

fn day(date: &str, slots: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "Date": date,
        "Week": "5",
        "DayWeek": "n/a",
        "AvaliableTimes": slots,
        "day": 1,
        "month": 1,
        "year": 2026,
        "jsonDate": format!("{}T00:00:00", date)
    })
}

#[tokio::test]
async fn test_end_to_end_match_and_filter() {
    let server = MockServer::start();

    let today = Local::now().date_naive();
    let until = today + Duration::days(i64::from(WINDOW_DAYS));

    // 2026-01-26 is a Monday, 2026-01-24 a Saturday.
    let payload = serde_json::json!([
        day(
            "2026-01-26",
            vec![
                slot("09:00", "09:30", GABRIELA_ID),
                slot("18:00", "18:30", GABRIELA_ID),
                slot("10:00", "10:30", RAMON_ID),
            ],
        ),
        day("2026-01-24", vec![slot("09:00", "09:30", GABRIELA_ID)]),
    ]);

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .query_param("subscriber_id", "odontomaria")
            .query_param("code_link", "57762")
            .query_param("from", today.format("%Y-%m-%d").to_string())
            .query_param("to", until.format("%Y-%m-%d").to_string())
            .query_param("showAvailableTimes", "X")
            .header("Authorization", "Basic dGVzdA==");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(payload);
    });

    let engine = engine(&server);
    let response = engine
        .match_and_schedule("22/01/2026 12:00 - preciso de uma limpeza")
        .await;

    api_mock.assert();
    assert!(response.success);
    assert_eq!(
        response.professional_name.as_deref(),
        Some("Gabriela Formiga da Silva")
    );
    assert_eq!(response.color.as_deref(), Some("#FFB6C1"));

    // Saturday dropped, Ramon's slot dropped, 18:00 slot past the cutoff.
    assert_eq!(response.schedules.len(), 1);
    assert_eq!(response.schedules[0].date, "2026-01-26");
    assert_eq!(response.schedules[0].available_times.len(), 1);
    assert_eq!(response.schedules[0].available_times[0].start_time, "09:00");

    // The group keyword went through the balancer once.
    assert_eq!(engine.rotation_snapshot().get("clareamento_limpeza"), Some(&1));
}

#[tokio::test]
async fn test_provider_failure_becomes_structured_response() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(500);
    });

    let engine = engine(&server);
    let response = engine.match_and_schedule("dor de dente urgente").await;

    api_mock.assert();
    assert!(!response.success);
    assert!(response.message.contains("500"));
    // The professional was resolved before the fetch, so the color survives.
    assert_eq!(response.color.as_deref(), Some("#FFB6C1"));
    assert!(response.schedules.is_empty());
}

#[tokio::test]
async fn test_non_list_payload_is_a_format_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "maintenance window"}));
    });

    let engine = engine(&server);
    let response = engine.match_and_schedule("limpeza").await;

    assert!(!response.success);
    assert_eq!(response.message, "Erro de formato na resposta da agenda.");
}

#[tokio::test]
async fn test_malformed_record_is_a_processing_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{"Date": "2026-01-26", "day": 26}]));
    });

    let engine = engine(&server);
    let response = engine.match_and_schedule("limpeza").await;

    assert!(!response.success);
    assert_eq!(response.message, "Erro ao processar horários.");
}

#[tokio::test]
async fn test_unmatched_text_falls_back_to_triage() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let engine = engine(&server);
    let response = engine.match_and_schedule("oi").await;

    assert!(response.success);
    assert_eq!(
        response.professional_name.as_deref(),
        Some("Gabriela Formiga da Silva")
    );
    assert!(response.schedules.is_empty());
    assert!(response.message.contains("Sem horários livres"));
}
