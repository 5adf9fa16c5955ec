//! Nearest-compatible-resource matching

use crate::common::utils::{distance_km, Coordinate};
use crate::domains::triage::models::{Resource, ResourceType};

/// Find the nearest available resource serving `need`.
///
/// Only resources that are `Available` and whose type matches the need (see
/// [`ResourceType::from_need`]) are candidates. Unmatched needs stay
/// unmatched: there is no fallback to other types or to busy resources. Ties
/// go to the resource listed first.
pub fn match_resource(need: &str, position: Coordinate, resources: &[Resource]) -> Option<Resource> {
    let target = ResourceType::from_need(need)?;

    let mut best: Option<(&Resource, f64)> = None;
    for resource in resources
        .iter()
        .filter(|r| r.is_available() && r.resource_type == target)
    {
        let distance = distance_km(position, resource.coordinate());
        match best {
            Some((_, closest)) if distance >= closest => {}
            _ => best = Some((resource, distance)),
        }
    }

    best.map(|(resource, _)| resource.clone())
}
