//! Structured fields extracted from a raw emergency message

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Categorical urgency reported by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
        }
    }

    /// Lenient parse used at the model boundary.
    ///
    /// Unrecognized values are logged and treated as `Low`, the same branch an
    /// unknown level would take when scoring.
    pub fn parse_lenient(value: &str) -> Self {
        match value.parse() {
            Ok(level) => level,
            Err(_) => {
                warn!(urgency_level = %value, "Unrecognized urgency level from AI, defaulting to low");
                UrgencyLevel::Low
            }
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UrgencyLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(UrgencyLevel::Low),
            "medium" => Ok(UrgencyLevel::Medium),
            "high" => Ok(UrgencyLevel::High),
            _ => Err(anyhow::anyhow!("Invalid urgency level: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for UrgencyLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(UrgencyLevel::parse_lenient(&raw))
    }
}

/// Extraction result for one message
///
/// Field names match the JSON contract the model is asked to fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub need: String,
    #[serde(default, deserialize_with = "quantity_as_text")]
    pub quantity: Option<String>,
    pub location: String,
    pub urgency_level: UrgencyLevel,
    pub urgency_reason: String,
}

impl ExtractionResult {
    pub const FALLBACK_REASON: &'static str = "AI analysis failed, defaulted to medium.";

    /// Fixed result used whenever the model call or its parsing fails.
    pub fn fallback() -> Self {
        Self {
            need: "General".to_string(),
            quantity: None,
            location: "Unknown".to_string(),
            urgency_level: UrgencyLevel::Medium,
            urgency_reason: Self::FALLBACK_REASON.to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

// Models sometimes answer `"quantity": 3` instead of `"3"`.
fn quantity_as_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "quantity must be text, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_contract() {
        let json = r#"{
            "need": "Ambulance",
            "quantity": "2 people",
            "location": "Near T. Nagar bus stand",
            "urgency_level": "high",
            "urgency_reason": "Person unconscious."
        }"#;

        let result: ExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.need, "Ambulance");
        assert_eq!(result.quantity.as_deref(), Some("2 people"));
        assert_eq!(result.urgency_level, UrgencyLevel::High);
    }

    #[test]
    fn test_quantity_may_be_null_missing_or_numeric() {
        let base = r#""need":"Food","location":"Adyar","urgency_level":"low","urgency_reason":"r""#;

        let null: ExtractionResult =
            serde_json::from_str(&format!(r#"{{{base},"quantity":null}}"#)).unwrap();
        assert_eq!(null.quantity, None);

        let missing: ExtractionResult = serde_json::from_str(&format!("{{{base}}}")).unwrap();
        assert_eq!(missing.quantity, None);

        let numeric: ExtractionResult =
            serde_json::from_str(&format!(r#"{{{base},"quantity":40}}"#)).unwrap();
        assert_eq!(numeric.quantity.as_deref(), Some("40"));
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let json = r#"{"need":"Food","urgency_level":"low","urgency_reason":"r"}"#;
        assert!(serde_json::from_str::<ExtractionResult>(json).is_err());
    }

    #[test]
    fn test_unknown_urgency_level_defaults_to_low() {
        let json = r#"{"need":"Fire","location":"Egmore","urgency_level":"CRITICAL","urgency_reason":"r"}"#;
        let result: ExtractionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.urgency_level, UrgencyLevel::Low);
    }

    #[test]
    fn test_urgency_level_is_case_insensitive() {
        assert_eq!(UrgencyLevel::parse_lenient("High"), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::parse_lenient(" MEDIUM "), UrgencyLevel::Medium);
    }

    #[test]
    fn test_fallback_serialization() {
        let json = serde_json::to_value(ExtractionResult::fallback()).unwrap();
        assert_eq!(json["need"], "General");
        assert!(json["quantity"].is_null());
        assert_eq!(json["location"], "Unknown");
        assert_eq!(json["urgency_level"], "medium");
        assert_eq!(json["urgency_reason"], "AI analysis failed, defaulted to medium.");
    }
}
