//! Integration tests for POST /api/analyze.
//!
//! Covers:
//! - Sorting by urgency score and resource matching
//! - Blank-line skipping and empty batches
//! - Fallback extraction when the model misbehaves
//! - Input validation (400) and store failures (500)

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use test_context::test_context;
use triage_core::kernel::test_dependencies::{FailingStore, MockAI};
use triage_core::domains::triage::utils::LocationResolver;
use triage_core::kernel::TestDependencies;

use crate::common::{TestHarness, FIRE_MESSAGE, FOOD_MESSAGE, INJURY_MESSAGE};

// =============================================================================
// Happy path
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn batch_is_sorted_by_urgency_score(ctx: &TestHarness) {
    let (status, body) = ctx.analyze(&[FOOD_MESSAGE, FIRE_MESSAGE, INJURY_MESSAGE]).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 3);

    let scores: Vec<u64> = results
        .iter()
        .map(|r| r["urgency_score"].as_u64().unwrap())
        .collect();
    assert_eq!(scores, vec![90, 80, 20]);

    assert_eq!(results[0]["original_content"], INJURY_MESSAGE);
    assert_eq!(results[1]["original_content"], FIRE_MESSAGE);
    assert_eq!(results[2]["original_content"], FOOD_MESSAGE);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn each_message_is_matched_to_nearest_compatible_resource(ctx: &TestHarness) {
    let (_, body) = ctx.analyze(&[FOOD_MESSAGE, FIRE_MESSAGE, INJURY_MESSAGE]).await;
    let results = body["results"].as_array().unwrap();

    // "Medical" need is served by ambulances; the busy SIMS unit is skipped
    assert_eq!(results[0]["matched_resource_id"], "1");
    assert_eq!(results[0]["matched_resource"]["type"], "Ambulance");
    assert_eq!(results[1]["matched_resource_id"], "8");
    assert_eq!(results[2]["matched_resource_id"], "6");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn result_carries_flattened_extraction(ctx: &TestHarness) {
    let (_, body) = ctx.analyze(&[FOOD_MESSAGE]).await;
    let result = &body["results"][0];

    assert_eq!(result["need"], "Food");
    assert_eq!(result["quantity"], "5");
    assert_eq!(result["location"], "Velachery");
    assert_eq!(result["urgency_level"], "low");
    assert!(result["id"].as_str().is_some());
    assert!(result["analyzed_at"].as_str().is_some());

    // Jitter-free resolver: exact gazetteer coordinates
    assert_eq!(result["coordinates"]["lat"], 12.9791);
    assert_eq!(result["coordinates"]["lng"], 80.2185);
}

#[tokio::test]
async fn jittered_coordinates_stay_near_landmark() {
    let ctx = TestHarness::new(
        TestDependencies::new()
            .mock_ai(common::scripted_ai())
            .with_resolver(LocationResolver::new(0.0025, 0.05)),
    );

    let (status, body) = ctx.analyze(&[FOOD_MESSAGE, FOOD_MESSAGE]).await;

    assert_eq!(status, StatusCode::OK);
    for result in body["results"].as_array().unwrap() {
        let lat = result["coordinates"]["lat"].as_f64().unwrap();
        let lng = result["coordinates"]["lng"].as_f64().unwrap();
        assert!((lat - 12.9791).abs() <= 0.0025);
        assert!((lng - 80.2185).abs() <= 0.0025);
        // Jitter is small enough that the nearest food bank doesn't change
        assert_eq!(result["matched_resource_id"], "6");
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn blank_messages_are_skipped(ctx: &TestHarness) {
    let (status, body) = ctx.analyze(&["", "   ", FOOD_MESSAGE, "\t"]).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["original_content"], FOOD_MESSAGE);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_batch_returns_empty_results(ctx: &TestHarness) {
    let (status, body) = ctx.analyze(&[]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "results": [] }));
}

// =============================================================================
// Fallback extraction
// =============================================================================

#[tokio::test]
async fn model_failure_yields_fallback_record() {
    let ai = MockAI::new().with_error("upstream timeout");
    let ctx = TestHarness::new(TestDependencies::new().mock_ai(ai));

    let (status, body) = ctx.analyze(&["Help, water rising at my street"]).await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["results"][0];
    assert_eq!(result["need"], "General");
    assert_eq!(result["location"], "Unknown");
    assert_eq!(result["urgency_level"], "medium");
    assert_eq!(result["urgency_score"], 40);
    // No General resources in the registry
    assert!(result.get("matched_resource_id").is_none());
    // Unknown location falls back to the city centre
    assert_eq!(result["coordinates"]["lat"], 13.05);
    assert_eq!(result["coordinates"]["lng"], 80.25);
}

#[tokio::test]
async fn unparsable_answer_does_not_fail_the_batch() {
    let ai = MockAI::new()
        .with_response("Sorry, I cannot help with that.")
        .with_response_for(FIRE_MESSAGE, r#"{"need":"Fire","location":"T. Nagar","urgency_level":"high","urgency_reason":"fire"}"#);
    let ctx = TestHarness::new(TestDependencies::new().mock_ai(ai));

    let (status, body) = ctx.analyze(&["Baby needs milk", FIRE_MESSAGE]).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["need"], "Fire");
    // Fallback is medium (40) plus the vulnerable-person bonus
    assert_eq!(results[1]["urgency_score"], 50);
    assert_eq!(results[1]["need"], "General");
}

#[tokio::test]
async fn unknown_urgency_level_is_treated_as_low() {
    let ai = MockAI::new().with_response(
        r#"{"need":"Shelter","quantity":null,"location":"Egmore","urgency_level":"critical","urgency_reason":"roof collapsed"}"#,
    );
    let ctx = TestHarness::new(TestDependencies::new().mock_ai(ai));

    let (_, body) = ctx.analyze(&["Roof collapsed, need a place to stay"]).await;
    let result = &body["results"][0];

    assert_eq!(result["urgency_level"], "low");
    assert_eq!(result["urgency_score"], 20);
    assert_eq!(result["matched_resource"]["type"], "Shelter");
}

// =============================================================================
// Errors
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_messages_field_is_rejected(ctx: &TestHarness) {
    let (status, body) = ctx.post_json("/api/analyze", &json!({ "msgs": ["hi"] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid input format");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_string_messages_are_rejected(ctx: &TestHarness) {
    let (status, _) = ctx
        .post_json("/api/analyze", &json!({ "messages": ["ok", 42] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_json_is_rejected(ctx: &TestHarness) {
    let (status, body) = ctx.post_raw("/api/analyze", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid input format");

    // Nothing was processed
    let (_, results) = ctx.get("/api/results").await;
    assert_eq!(results, json!([]));
}

#[tokio::test]
async fn store_failure_aborts_batch_with_500() {
    let store = Arc::new(FailingStore::failing_after(1));
    let ctx = TestHarness::new(
        TestDependencies::new()
            .mock_ai(common::scripted_ai())
            .with_store(store),
    );

    let (status, body) = ctx.analyze(&[FIRE_MESSAGE, FOOD_MESSAGE]).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal Server Error");
    assert!(body.get("results").is_none());

    // The entry recorded before the failure stays in the log
    let (_, results) = ctx.get("/api/results").await;
    assert_eq!(results.as_array().unwrap().len(), 1);
    assert_eq!(results[0]["original_content"], FIRE_MESSAGE);
}
