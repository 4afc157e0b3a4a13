mod common;

use std::sync::Arc;

use common::{init_test_logging, sample_catalog, sample_records, FakeCatalog};
use connector_guide::catalog::Gender;
use connector_guide::cli::commands::{
    query::QueryCommand, show::ShowCommand, CommandHandler, GuideContext,
};
use connector_guide::config::Settings;
use connector_guide::wizard::{ApplicationType, OrientationChoice};
use connector_guide::GuideError;
use pretty_assertions::assert_eq;

fn context() -> GuideContext {
    GuideContext::with_catalog(Settings::default(), Arc::new(sample_catalog())).unwrap()
}

fn query(application: ApplicationType, poles: u8, json: bool) -> QueryCommand {
    QueryCommand {
        application,
        poles,
        orientation: OrientationChoice::Horizontal,
        locking: false,
        special: false,
        keying: false,
        json,
    }
}

async fn run(handler: &dyn CommandHandler, ctx: &GuideContext) -> connector_guide::Result<String> {
    let mut out = Vec::new();
    handler.execute(ctx, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_query_prints_grouped_results() {
    init_test_logging();
    let ctx = context();
    let output = run(&query(ApplicationType::WireToBoard, 4, false), &ctx)
        .await
        .unwrap();

    assert!(output.starts_with("3 connectors found"));
    assert!(output.contains("Sockets (2)"));
    assert!(output.contains("Headers (1)"));
    assert!(output.contains("/en/connector/20"));
}

#[tokio::test]
async fn test_query_json_report() {
    let ctx = context();
    let output = run(&query(ApplicationType::WireToWire, 4, true), &ctx)
        .await
        .unwrap();

    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["answers"]["application_type"], "wire-to-wire");
    assert_eq!(report["answers"]["pole_count"], 4);
    assert_eq!(report["results"]["sockets"].as_array().unwrap().len(), 2);
    assert_eq!(report["results"]["tabs"][0]["model_name"], "CT-4M");
    assert_eq!(report["results"]["headers"].as_array().unwrap().len(), 0);
    assert_eq!(report["failed_roles"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_query_reports_failed_roles_in_json() {
    let catalog = Arc::new(FakeCatalog::new(sample_records()).failing_for(Gender::Male));
    let ctx = GuideContext::with_catalog(Settings::default(), catalog).unwrap();

    let output = run(&query(ApplicationType::WireToWire, 4, true), &ctx)
        .await
        .unwrap();
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["failed_roles"], serde_json::json!(["tab"]));
    assert_eq!(report["results"]["sockets"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_query_without_matches_offers_restart() {
    let ctx = context();
    let output = run(&query(ApplicationType::BoardToBoard, 12, false), &ctx)
        .await
        .unwrap();
    assert!(output.contains("No matching connectors"));
}

#[tokio::test]
async fn test_query_rejects_out_of_range_poles() {
    let ctx = context();
    let err = run(&query(ApplicationType::WireToWire, 1, false), &ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, GuideError::InvalidPoleCount(1)));
}

#[tokio::test]
async fn test_show_by_id_and_by_route() {
    let ctx = context();

    let by_id = run(&ShowCommand { target: "20".into() }, &ctx).await.unwrap();
    assert!(by_id.starts_with("/en/connector/20\n"));
    assert!(by_id.contains("PH-4"));

    let by_route = run(
        &ShowCommand {
            target: "/de/connector/20".into(),
        },
        &ctx,
    )
    .await
    .unwrap();
    assert!(by_route.starts_with("/de/connector/20\n"));
    assert!(by_route.contains("Sonderausführung"));
}

#[tokio::test]
async fn test_show_unknown_connector() {
    let ctx = context();
    let err = run(&ShowCommand { target: "999".into() }, &ctx)
        .await
        .unwrap_err();
    assert!(matches!(err, GuideError::NotFound(999)));

    let err = run(
        &ShowCommand {
            target: "/en/terminals".into(),
        },
        &ctx,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GuideError::Route(_)));
}
