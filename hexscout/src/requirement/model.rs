//! Requirement domain model.

use crate::backend::{RequirementSubmission, SubmittedLocation};
use crate::cell::CellId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Default tolerated travel duration for a new requirement, in minutes.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// How the user travels from a tile to the requirement's anchor location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walk,
    Cycle,
    #[default]
    Drive,
    PublicTransport,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walk => write!(f, "walk"),
            Self::Cycle => write!(f, "cycle"),
            Self::Drive => write!(f, "drive"),
            Self::PublicTransport => write!(f, "public_transport"),
        }
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walk" => Ok(Self::Walk),
            "cycle" => Ok(Self::Cycle),
            "drive" => Ok(Self::Drive),
            "public_transport" => Ok(Self::PublicTransport),
            other => Err(format!(
                "unknown travel mode '{}' (expected walk, cycle, drive, or public_transport)",
                other
            )),
        }
    }
}

/// Resolved anchor location for a requirement.
///
/// Immutable once attached; changing a requirement's location is a full
/// replacement of this value, never a field edit.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub address: String,
    pub cell_id: CellId,
    pub lat: f64,
    pub lng: f64,
}

/// One user-specified location constraint.
///
/// A requirement without a location is incomplete and excluded from map
/// scoring until the user resolves an address for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    /// Stable for the requirement's lifetime; never reused after delete.
    pub id: Uuid,
    /// Tolerated travel duration in minutes.
    pub duration_minutes: u32,
    pub travel_mode: TravelMode,
    pub location: Option<Location>,
}

impl Requirement {
    /// Creates an incomplete requirement with default duration and mode.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            travel_mode: TravelMode::default(),
            location: None,
        }
    }

    /// A requirement is complete once it has a resolved anchor location.
    pub fn is_complete(&self) -> bool {
        self.location.is_some()
    }

    /// Builds the wire submission for this requirement, converting the
    /// edited minutes to the seconds the backend expects.
    ///
    /// Returns `None` for incomplete requirements, which are never
    /// submitted.
    pub fn to_submission(&self, city_code: &str) -> Option<RequirementSubmission> {
        let location = self.location.as_ref()?;
        Some(RequirementSubmission {
            city_code: city_code.to_string(),
            requirement_id: self.id,
            tolerated_duration: self.duration_minutes * 60,
            travel_mode: self.travel_mode,
            locations: vec![SubmittedLocation {
                id: 0,
                address: location.address.clone(),
                cell_id: location.cell_id.clone(),
                lat: location.lat,
                lng: location.lng,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smith_st() -> Location {
        Location {
            address: "12 Smith St".to_string(),
            cell_id: CellId::from("abcd1"),
            lat: -34.92,
            lng: 138.60,
        }
    }

    #[test]
    fn test_new_requirement_defaults() {
        let requirement = Requirement::new(Uuid::new_v4());
        assert_eq!(requirement.duration_minutes, 30);
        assert_eq!(requirement.travel_mode, TravelMode::Drive);
        assert!(requirement.location.is_none());
        assert!(!requirement.is_complete());
    }

    #[test]
    fn test_attaching_location_completes() {
        let mut requirement = Requirement::new(Uuid::new_v4());
        requirement.location = Some(smith_st());
        assert!(requirement.is_complete());
    }

    #[test]
    fn test_incomplete_requirement_has_no_submission() {
        let requirement = Requirement::new(Uuid::new_v4());
        assert!(requirement.to_submission("Adelaide").is_none());
    }

    #[test]
    fn test_submission_converts_minutes_to_seconds() {
        let mut requirement = Requirement::new(Uuid::new_v4());
        requirement.duration_minutes = 30;
        requirement.location = Some(smith_st());

        let submission = requirement.to_submission("Adelaide").unwrap();
        assert_eq!(submission.tolerated_duration, 1800);
        assert_eq!(submission.city_code, "Adelaide");
        assert_eq!(submission.requirement_id, requirement.id);
        assert_eq!(submission.locations.len(), 1);
        assert_eq!(submission.locations[0].id, 0);
        assert_eq!(submission.locations[0].address, "12 Smith St");
        assert_eq!(submission.locations[0].cell_id, CellId::from("abcd1"));
    }

    #[test]
    fn test_travel_mode_round_trips_from_str() {
        for mode in [
            TravelMode::Walk,
            TravelMode::Cycle,
            TravelMode::Drive,
            TravelMode::PublicTransport,
        ] {
            assert_eq!(mode.to_string().parse::<TravelMode>().unwrap(), mode);
        }
        assert!("teleport".parse::<TravelMode>().is_err());
    }
}
