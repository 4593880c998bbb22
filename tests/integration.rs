//! Integration tests for the Wage Projection Engine.
//!
//! This test suite covers:
//! - The reference scenario through the HTTP API
//! - Chart sampling and loss statistics
//! - The loss report and its formatted milestones
//! - Custom schedule directories loaded from disk
//! - Error cases

use std::fs;
use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use wage_projection::api::{AppState, create_router};
use wage_projection::calculation::{
    calculate_reference_wage_impact, calculate_wage_impact, format_currency,
};
use wage_projection::config::{ConfigLoader, InsightsSettings, ProjectionConfig};
use wage_projection::error::EngineError;
use wage_projection::insights::{FALLBACK_MESSAGE, InsightsClient};
use wage_projection::models::ProjectionInputs;

// =============================================================================
// Test Helpers
// =============================================================================

fn offline_client() -> InsightsClient {
    InsightsClient::new(InsightsSettings::default(), None).expect("Failed to build client")
}

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/projection").expect("Failed to load config");
    AppState::new(config, offline_client())
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn create_request(start_wage: f64, weekly_hours: f64, projection_years: u32) -> Value {
    json!({
        "start_wage": start_wage,
        "weekly_hours": weekly_hours,
        "projection_years": projection_years,
    })
}

fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Writes a projection directory with the given schedule YAML bodies.
fn write_config_dir(name: &str, alliance: &str, kp: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "wage_projection_it_{}_{}",
        name,
        uuid::Uuid::new_v4()
    ));
    fs::create_dir_all(dir.join("schedules")).unwrap();
    fs::write(
        dir.join("projection.yaml"),
        "name: \"Test comparison\"\nanchor_date: \"2025-10-01\"\npost_contract_rate: 1.03\n",
    )
    .unwrap();
    fs::write(dir.join("schedules/alliance.yaml"), alliance).unwrap();
    fs::write(dir.join("schedules/kp.yaml"), kp).unwrap();
    dir
}

// =============================================================================
// Reference Scenario
// =============================================================================

#[tokio::test]
async fn test_reference_four_year_scenario() {
    let (status, result) = post(
        create_router_for_test(),
        "/calculate",
        create_request(50.0, 40.0, 4),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let chart = result["chart_data"].as_array().unwrap();
    assert_eq!(chart.len(), 17);

    let first = &chart[0];
    assert_eq!(first["date"], "10/2025");
    assert_eq!(first["display_date"], 2025);
    assert_eq!(first["alliance_rate"], 54.5);
    assert_eq!(first["kp_rate"], 53.25);
    assert_eq!(first["gap"], 1.25);
    assert_approx(first["cumulative_diff"].as_f64().unwrap(), 1.25 * 2080.0 / 12.0);

    let last = chart.last().unwrap();
    assert_eq!(last["date"], "10/2029");

    assert!(result["stats"]["loss_4_year"].as_f64().unwrap() > 0.0);
    assert_eq!(result["stats"]["loss_10_year"], 0.0);
    assert_eq!(result["stats"]["loss_20_year"], 0.0);
    assert_eq!(result["stats"]["loss_30_year"], 0.0);
}

#[tokio::test]
async fn test_quarterly_labels_step_three_months() {
    let (_, result) = post(
        create_router_for_test(),
        "/calculate",
        create_request(50.0, 40.0, 1),
    )
    .await;

    let labels: Vec<&str> = result["chart_data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["date"].as_str().unwrap())
        .collect();
    assert_eq!(labels, ["10/2025", "1/2026", "4/2026", "7/2026", "10/2026"]);
}

#[tokio::test]
async fn test_rates_hold_between_raises() {
    let (_, result) = post(
        create_router_for_test(),
        "/calculate",
        create_request(50.0, 40.0, 1),
    )
    .await;

    let chart = result["chart_data"].as_array().unwrap();
    for point in &chart[1..4] {
        assert_eq!(point["alliance_rate"], 54.5);
        assert_eq!(point["kp_rate"], 53.25);
    }
    // October 2026: second-year raises.
    assert_eq!(chart[4]["kp_rate"], 56.71);
}

#[tokio::test]
async fn test_zero_horizon_returns_single_point() {
    let (status, result) = post(
        create_router_for_test(),
        "/calculate",
        create_request(50.0, 40.0, 0),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["chart_data"].as_array().unwrap().len(), 1);
    for key in ["loss_4_year", "loss_10_year", "loss_20_year", "loss_30_year"] {
        assert_eq!(result["stats"][key], 0.0);
    }
}

#[tokio::test]
async fn test_api_matches_library_call() {
    let (_, result) = post(
        create_router_for_test(),
        "/calculate",
        create_request(57.5, 32.0, 30),
    )
    .await;

    let direct = calculate_reference_wage_impact(57.5, 32.0, 30);
    assert_eq!(
        result["stats"]["loss_30_year"].as_f64().unwrap(),
        direct.stats.loss_30_year
    );
    assert_eq!(
        result["chart_data"].as_array().unwrap().len(),
        direct.chart_data.len()
    );
}

#[test]
fn test_losses_grow_with_horizon() {
    let stats = calculate_reference_wage_impact(50.0, 40.0, 30).stats;
    assert!(stats.loss_4_year > 0.0);
    assert!(stats.loss_10_year > stats.loss_4_year);
    assert!(stats.loss_20_year > stats.loss_10_year);
    assert!(stats.loss_30_year > stats.loss_20_year);
}

// =============================================================================
// Loss Report
// =============================================================================

#[tokio::test]
async fn test_report_milestones_are_formatted() {
    let (status, report) = post(
        create_router_for_test(),
        "/report",
        create_request(50.0, 40.0, 30),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["hours_per_year"], 2080.0);

    let milestones = report["milestones"].as_array().unwrap();
    let years: Vec<u64> = milestones
        .iter()
        .map(|m| m["years"].as_u64().unwrap())
        .collect();
    assert_eq!(years, [4, 10, 20, 30]);

    for milestone in milestones {
        let loss = milestone["loss"].as_f64().unwrap();
        assert_eq!(milestone["formatted_loss"], format_currency(loss));
        assert!(milestone["formatted_loss"].as_str().unwrap().starts_with('$'));
    }
}

#[tokio::test]
async fn test_report_timeline_lists_scheduled_and_post_contract_raises() {
    let (_, report) = post(
        create_router_for_test(),
        "/report",
        create_request(50.0, 40.0, 5),
    )
    .await;

    let timeline = report["raise_timeline"].as_array().unwrap();
    let scheduled = timeline
        .iter()
        .filter(|r| r["source"] == "scheduled")
        .count();
    let post_contract: Vec<&Value> = timeline
        .iter()
        .filter(|r| r["source"] == "post_contract")
        .collect();

    // Five scheduled events per proposal inside the first four years.
    assert_eq!(scheduled, 10);
    // October 2029 and October 2030 fall inside a five-year horizon.
    assert_eq!(post_contract.len(), 4);
    let dates: Vec<&str> = post_contract
        .iter()
        .map(|r| r["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, ["10/2029", "10/2029", "10/2030", "10/2030"]);
    assert_eq!(post_contract[0]["proposal"], "alliance");
    assert_eq!(post_contract[1]["proposal"], "kp");
    assert_eq!(post_contract[0]["description"], "3.0% Post-Contract");
}

#[tokio::test]
async fn test_report_assumptions_mention_hours() {
    let (_, report) = post(
        create_router_for_test(),
        "/report",
        create_request(50.0, 36.0, 30),
    )
    .await;

    let assumptions = report["assumptions"].as_str().unwrap();
    assert!(assumptions.contains("36 hours/week"));
    assert!(assumptions.contains("1872 hours/year"));
    assert!(assumptions.contains("3.0%"));
}

// =============================================================================
// Insights
// =============================================================================

#[tokio::test]
async fn test_insights_degrade_to_fallback_offline() {
    let (status, body) = post(
        create_router_for_test(),
        "/insights",
        create_request(50.0, 40.0, 30),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["insights"], FALLBACK_MESSAGE);
    assert!(body["stats"]["loss_30_year"].as_f64().unwrap() > 0.0);
}

// =============================================================================
// Custom Schedules
// =============================================================================

#[test]
fn test_shipped_config_loads() {
    let loader = ConfigLoader::load("./config/projection").unwrap();
    assert_eq!(loader.config(), &ProjectionConfig::reference());
    assert_eq!(loader.insights().model, "gemini-3-flash-preview");
    assert_eq!(loader.insights().max_output_tokens, 300);
}

#[test]
fn test_empty_schedule_compounds_fallback_every_october() {
    let dir = write_config_dir(
        "empty_kp",
        "name: \"Alliance\"\nevents:\n  - { month: 10, year: 2025, rate: 1.10, description: \"10%\" }\n",
        "name: \"KP\"\nevents: []\n",
    );
    let loader = ConfigLoader::load(&dir).unwrap();
    fs::remove_dir_all(&dir).ok();

    let result = calculate_wage_impact(&ProjectionInputs::new(100.0, 40.0, 2), loader.config());
    let chart = &result.chart_data;

    // KP receives 3% in October 2025, 2026 and 2027.
    assert_eq!(chart[0].kp_rate, 103.0);
    assert_eq!(chart[4].kp_rate, 106.09);
    assert_eq!(chart[8].kp_rate, 109.27);

    // Alliance's only event year is 2025, so fallback starts October 2026.
    assert_eq!(chart[0].alliance_rate, 110.0);
    assert_eq!(chart[4].alliance_rate, 113.3);
}

#[test]
fn test_contract_end_year_delays_fallback() {
    let dir = write_config_dir(
        "end_year",
        "name: \"Alliance\"\ncontract_end_year: 2027\nevents: []\n",
        "name: \"KP\"\nevents: []\n",
    );
    let loader = ConfigLoader::load(&dir).unwrap();
    fs::remove_dir_all(&dir).ok();

    let result = calculate_wage_impact(&ProjectionInputs::new(100.0, 40.0, 3), loader.config());
    let chart = &result.chart_data;

    assert_eq!(chart[0].alliance_rate, 100.0);
    assert_eq!(chart[8].alliance_rate, 100.0);
    assert_eq!(chart[12].alliance_rate, 103.0);
    assert!(result.stats.loss_4_year == 0.0);
    assert!(chart[12].cumulative_diff < 0.0);
}

#[test]
fn test_missing_schedule_file_is_reported() {
    let dir = write_config_dir("missing", "name: \"Alliance\"\nevents: []\n", "");
    fs::remove_file(dir.join("schedules/kp.yaml")).unwrap();

    let err = ConfigLoader::load(&dir).unwrap_err();
    fs::remove_dir_all(&dir).ok();

    match err {
        EngineError::ConfigNotFound { path } => assert!(path.ends_with("kp.yaml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_rate_is_rejected() {
    let dir = write_config_dir(
        "bad_rate",
        "name: \"Alliance\"\nevents:\n  - { month: 10, year: 2025, rate: 0, description: \"none\" }\n",
        "name: \"KP\"\nevents: []\n",
    );
    let err = ConfigLoader::load(&dir).unwrap_err();
    fs::remove_dir_all(&dir).ok();

    assert!(matches!(err, EngineError::InvalidSchedule { .. }));
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_negative_wage_returns_400() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        create_request(-5.0, 40.0, 4),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_wrong_type_returns_malformed_json() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        json!({ "start_wage": "fifty", "weekly_hours": 40 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_hours_returns_validation_error() {
    let (status, body) = post(
        create_router_for_test(),
        "/report",
        json!({ "start_wage": 50 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
