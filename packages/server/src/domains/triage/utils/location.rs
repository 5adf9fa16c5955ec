//! Approximate location resolution
//!
//! Maps free-text locations onto coordinates using a small fixed gazetteer of
//! Chennai landmarks. This is not real geocoding: a matched landmark gets a
//! little random jitter so repeated mentions don't stack on one map point, and
//! anything unrecognized lands somewhere around the city centre.

use rand::Rng;
use tracing::debug;

use crate::common::utils::Coordinate;

/// Known place names, scanned in order. The first name contained in the input
/// wins, even when a later name would be a longer match.
pub const GAZETTEER: &[(&str, Coordinate)] = &[
    ("T. Nagar", Coordinate::new(13.0418, 80.2341)),
    ("Marina Beach", Coordinate::new(13.0500, 80.2824)),
    ("Chennai Central", Coordinate::new(13.0827, 80.2707)),
    ("Anna Nagar", Coordinate::new(13.0850, 80.2101)),
    ("Adyar", Coordinate::new(13.0067, 80.2578)),
    ("Velachery", Coordinate::new(12.9791, 80.2185)),
    ("Mylapore", Coordinate::new(13.0330, 80.2677)),
    ("Guindy", Coordinate::new(13.0067, 80.2206)),
    ("Kodambakkam", Coordinate::new(13.0521, 80.2255)),
    ("Besant Nagar", Coordinate::new(13.0003, 80.2665)),
    ("Egmore", Coordinate::new(13.0783, 80.2619)),
    ("Nungambakkam", Coordinate::new(13.0588, 80.2435)),
    ("Saidapet", Coordinate::new(13.0213, 80.2231)),
    ("Tambaram", Coordinate::new(12.9229, 80.1275)),
];

/// Fallback point for unrecognized locations.
pub const CITY_CENTER: Coordinate = Coordinate::new(13.05, 80.25);

pub const DEFAULT_LANDMARK_JITTER_DEG: f64 = 0.0025;
pub const DEFAULT_FALLBACK_JITTER_DEG: f64 = 0.05;

/// Upper bound for either jitter range, in degrees
pub const MAX_JITTER_DEG: f64 = 1.0;

/// Resolves location text to a coordinate. Never fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationResolver {
    /// Max offset per axis around a matched landmark, in degrees
    landmark_jitter: f64,
    /// Max offset per axis around the city centre, in degrees
    fallback_jitter: f64,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self {
            landmark_jitter: DEFAULT_LANDMARK_JITTER_DEG,
            fallback_jitter: DEFAULT_FALLBACK_JITTER_DEG,
        }
    }
}

impl LocationResolver {
    /// Ranges are taken as absolute values and capped at [`MAX_JITTER_DEG`].
    /// Non-finite ranges disable jitter.
    pub fn new(landmark_jitter: f64, fallback_jitter: f64) -> Self {
        Self {
            landmark_jitter: sanitize_range(landmark_jitter),
            fallback_jitter: sanitize_range(fallback_jitter),
        }
    }

    pub fn landmark_jitter(&self) -> f64 {
        self.landmark_jitter
    }

    pub fn fallback_jitter(&self) -> f64 {
        self.fallback_jitter
    }

    /// Zero jitter: landmark and fallback lookups return exact base points.
    pub fn deterministic() -> Self {
        Self::new(0.0, 0.0)
    }

    /// First gazetteer entry named in `location_text`, case-insensitively.
    pub fn landmark(location_text: &str) -> Option<(&'static str, Coordinate)> {
        let lowered = location_text.to_lowercase();
        GAZETTEER
            .iter()
            .find(|(name, _)| lowered.contains(&name.to_lowercase()))
            .copied()
    }

    pub fn resolve(&self, location_text: &str) -> Coordinate {
        match Self::landmark(location_text) {
            Some((name, base)) => {
                debug!(location = %location_text, landmark = name, "Resolved location to landmark");
                jitter(base, self.landmark_jitter)
            }
            None => {
                debug!(location = %location_text, "Unknown location, using city centre");
                jitter(CITY_CENTER, self.fallback_jitter)
            }
        }
    }
}

fn sanitize_range(range: f64) -> f64 {
    if range.is_finite() {
        range.abs().min(MAX_JITTER_DEG)
    } else {
        0.0
    }
}

fn jitter(base: Coordinate, range: f64) -> Coordinate {
    if range == 0.0 {
        return base;
    }
    let mut rng = rand::rng();
    Coordinate::new(
        base.lat + rng.random_range(-range..=range),
        base.lng + rng.random_range(-range..=range),
    )
}
