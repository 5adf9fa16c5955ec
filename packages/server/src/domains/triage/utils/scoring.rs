//! Urgency scoring
//!
//! Pure function: categorical level plus keyword signals from the raw message.

use crate::domains::triage::models::UrgencyLevel;

/// Words hinting at physical harm.
pub const INJURY_KEYWORDS: &[&str] = &["injury", "blood", "broken", "pain", "unconscious", "breathing"];

/// Words hinting at a vulnerable person involved.
pub const VULNERABLE_KEYWORDS: &[&str] =
    &["child", "baby", "kid", "elderly", "senior", "old", "boy", "girl"];

const KEYWORD_BONUS: u8 = 10;
const MAX_SCORE: u8 = 100;

fn base_score(level: UrgencyLevel) -> u8 {
    match level {
        UrgencyLevel::High => 70,
        UrgencyLevel::Medium => 40,
        UrgencyLevel::Low => 20,
    }
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Score a message from 0 to 100.
///
/// Keywords are plain substrings of the lowercased text, so "pains" counts as
/// "pain" and "golden" counts as "old". Each keyword set adds its bonus at
/// most once.
pub fn score_urgency(level: UrgencyLevel, raw_text: &str) -> u8 {
    let lowered = raw_text.to_lowercase();
    let mut score = base_score(level);

    if mentions_any(&lowered, INJURY_KEYWORDS) {
        score += KEYWORD_BONUS;
    }
    if mentions_any(&lowered, VULNERABLE_KEYWORDS) {
        score += KEYWORD_BONUS;
    }

    score.min(MAX_SCORE)
}
