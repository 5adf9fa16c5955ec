//! Canned messages and model answers shared by the integration tests.

use serde_json::json;
use triage_core::kernel::test_dependencies::MockAI;

pub const FIRE_MESSAGE: &str = "Fire in the market near T. Nagar, a child is trapped inside";
pub const INJURY_MESSAGE: &str = "Elderly man with a broken leg at Adyar bus depot";
pub const FOOD_MESSAGE: &str = "Need rice for 5 families in Velachery";

/// Mock model that answers each canned message with a plausible extraction.
pub fn scripted_ai() -> MockAI {
    MockAI::new()
        .with_response_for(
            FIRE_MESSAGE,
            json!({
                "need": "Fire",
                "quantity": null,
                "location": "T. Nagar",
                "urgency_level": "high",
                "urgency_reason": "Active fire with a person trapped"
            })
            .to_string(),
        )
        .with_response_for(
            INJURY_MESSAGE,
            json!({
                "need": "Medical",
                "quantity": "1",
                "location": "Adyar",
                "urgency_level": "high",
                "urgency_reason": "Fracture in an elderly person"
            })
            .to_string(),
        )
        .with_response_for(
            FOOD_MESSAGE,
            format!(
                "```json\n{}\n```",
                json!({
                    "need": "Food",
                    "quantity": 5,
                    "location": "Velachery",
                    "urgency_level": "low",
                    "urgency_reason": "Supplies requested, no immediate danger"
                })
            ),
        )
}
