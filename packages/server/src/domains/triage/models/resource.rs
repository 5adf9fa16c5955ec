//! Emergency resources (ambulances, shelters, food banks, ...)
//!
//! Resources are loaded once at process start from a fixed seed list and are
//! read-only for the lifetime of the process.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::common::utils::Coordinate;

/// Kind of help a resource provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Ambulance,
    Shelter,
    Food,
    Police,
    Fire,
    General,
}

impl ResourceType {
    pub const ALL: [ResourceType; 6] = [
        ResourceType::Ambulance,
        ResourceType::Shelter,
        ResourceType::Food,
        ResourceType::Police,
        ResourceType::Fire,
        ResourceType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Ambulance => "Ambulance",
            ResourceType::Shelter => "Shelter",
            ResourceType::Food => "Food",
            ResourceType::Police => "Police",
            ResourceType::Fire => "Fire",
            ResourceType::General => "General",
        }
    }

    /// Map an extracted need onto the resource type that serves it.
    ///
    /// Needs mentioning "medical" or "injury" are served by ambulances.
    /// Anything else must name a type exactly (ignoring case); free text such
    /// as "water" maps to `None` and therefore never matches a resource.
    pub fn from_need(need: &str) -> Option<Self> {
        let lowered = need.to_lowercase();
        if lowered.contains("medical") || lowered.contains("injury") {
            return Some(ResourceType::Ambulance);
        }
        lowered.parse().ok()
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Invalid resource type: {}", s))
    }
}

/// Resource availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceStatus {
    Available,
    Busy,
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceStatus::Available => write!(f, "Available"),
            ResourceStatus::Busy => write!(f, "Busy"),
        }
    }
}

/// Resource - a dispatchable unit or facility at a fixed position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub lat: f64,
    pub lng: f64,
    pub status: ResourceStatus,
}

impl Resource {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        resource_type: ResourceType,
        position: Coordinate,
        status: ResourceStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resource_type,
            lat: position.lat,
            lng: position.lng,
            status,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    pub fn is_available(&self) -> bool {
        self.status == ResourceStatus::Available
    }

    /// The fixed resource list the service starts with.
    pub fn seed() -> Vec<Resource> {
        use ResourceStatus::{Available, Busy};
        use ResourceType::{Ambulance, Fire, Food, Police, Shelter};

        [
            ("1", "Apollo Hospital", Ambulance, 13.0645, 80.2504, Available),
            ("2", "MMM Hospital", Ambulance, 13.0841, 80.1887, Available),
            ("3", "SIMS Hospital", Ambulance, 13.0514, 80.2104, Busy),
            ("4", "Relief Shelter Chennai Central", Shelter, 13.0827, 80.2707, Available),
            ("5", "Anna Nagar Community Center", Shelter, 13.0850, 80.2101, Available),
            ("6", "Tamil Nadu Food Bank", Food, 13.0400, 80.2400, Available),
            ("7", "Amma Unavagam", Food, 13.0700, 80.2200, Available),
            ("8", "Fire & Rescue Mylapore", Fire, 13.0330, 80.2677, Available),
            ("9", "Chennai Police HQ", Police, 13.0418, 80.2755, Available),
            ("10", "St. Thomas Mount Shelter", Shelter, 13.0035, 80.2014, Busy),
        ]
        .into_iter()
        .map(|(id, name, kind, lat, lng, status)| {
            Resource::new(id, name, kind, Coordinate::new(lat, lng), status)
        })
        .collect()
    }
}
