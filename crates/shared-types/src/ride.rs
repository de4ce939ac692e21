use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::{GeoPoint, VehicleType};

/// Lifecycle state of a ride as reported by the backend.
///
/// The UI renders the happy path as a fixed sequence of steps; transitions
/// themselves are enforced server-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    #[default]
    #[serde(alias = "REQUESTED")]
    Requested,
    #[serde(alias = "ACCEPTED")]
    Accepted,
    #[serde(alias = "PICKED_UP")]
    PickedUp,
    #[serde(alias = "IN_TRANSIT")]
    InTransit,
    #[serde(alias = "COMPLETED")]
    Completed,
    #[serde(alias = "CANCELLED")]
    Cancelled,
}

impl RideStatus {
    /// Display order of the status stepper.
    pub const STEPS: [RideStatus; 5] = [
        RideStatus::Requested,
        RideStatus::Accepted,
        RideStatus::PickedUp,
        RideStatus::InTransit,
        RideStatus::Completed,
    ];

    pub const ALL: [RideStatus; 6] = [
        RideStatus::Requested,
        RideStatus::Accepted,
        RideStatus::PickedUp,
        RideStatus::InTransit,
        RideStatus::Completed,
        RideStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Requested => "requested",
            RideStatus::Accepted => "accepted",
            RideStatus::PickedUp => "picked_up",
            RideStatus::InTransit => "in_transit",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RideStatus::Requested => "Requested",
            RideStatus::Accepted => "Accepted",
            RideStatus::PickedUp => "Picked up",
            RideStatus::InTransit => "In transit",
            RideStatus::Completed => "Completed",
            RideStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse a filter value. Returns `None` for unknown or empty input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "requested" => Some(RideStatus::Requested),
            "accepted" => Some(RideStatus::Accepted),
            "picked_up" => Some(RideStatus::PickedUp),
            "in_transit" => Some(RideStatus::InTransit),
            "completed" => Some(RideStatus::Completed),
            "cancelled" => Some(RideStatus::Cancelled),
            _ => None,
        }
    }

    /// Position in the stepper, `None` for cancelled rides.
    pub fn step_index(&self) -> Option<usize> {
        Self::STEPS.iter().position(|s| s == self)
    }

    /// The status a driver moves the ride to next, if any.
    pub fn next(&self) -> Option<RideStatus> {
        match self {
            RideStatus::Accepted => Some(RideStatus::PickedUp),
            RideStatus::PickedUp => Some(RideStatus::InTransit),
            RideStatus::InTransit => Some(RideStatus::Completed),
            RideStatus::Requested | RideStatus::Completed | RideStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RideStatus::Completed | RideStatus::Cancelled)
    }

    pub fn rider_can_cancel(&self) -> bool {
        matches!(self, RideStatus::Requested)
    }
}

/// Named place on a ride.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Location {
    pub address: String,
    #[serde(flatten)]
    pub point: GeoPoint,
}

/// A ride as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    #[serde(alias = "_id")]
    pub id: String,
    pub pickup: Location,
    pub destination: Location,
    #[serde(default)]
    pub status: RideStatus,
    #[serde(default)]
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub fare: f64,
    #[serde(default)]
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rider: Option<RideParty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<RideParty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Minimal view of the other party on a ride.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RideParty {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Rider's booking form payload for `POST rides/request`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
#[cfg_attr(
    feature = "validation",
    validate(schema(function = "validate_ride_points", skip_on_field_errors = false))
)]
pub struct RideRequest {
    #[cfg_attr(feature = "validation", validate(nested))]
    pub pickup: LocationInput,
    #[cfg_attr(feature = "validation", validate(nested))]
    pub destination: LocationInput,
    pub vehicle_type: VehicleType,
}

/// A location typed into the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LocationInput {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Address must be at least 3 characters"))
    )]
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl LocationInput {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

#[cfg(feature = "validation")]
fn validate_ride_points(req: &RideRequest) -> Result<(), validator::ValidationError> {
    if !req.pickup.point().is_valid() || !req.destination.point().is_valid() {
        let mut err = validator::ValidationError::new("coordinates");
        err.message = Some("Coordinates are out of range".into());
        return Err(err);
    }
    if req.pickup.point() == req.destination.point() {
        let mut err = validator::ValidationError::new("same_location");
        err.message = Some("Pickup and destination must differ".into());
        return Err(err);
    }
    Ok(())
}

/// Body of `PATCH rides/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RideStatusUpdate {
    pub status: RideStatus,
}

/// One completed ride on a driver's earnings statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EarningEntry {
    pub ride_id: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Response of `GET drivers/earnings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DriverEarnings {
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub completed_rides: i64,
    #[serde(default)]
    pub history: Vec<EarningEntry>,
}

/// Platform totals for the admin overview (`GET stats/overview`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_riders: i64,
    #[serde(default)]
    pub total_drivers: i64,
    #[serde(default)]
    pub pending_drivers: i64,
    #[serde(default)]
    pub total_rides: i64,
    #[serde(default)]
    pub completed_rides: i64,
    #[serde(default)]
    pub total_revenue: f64,
}

impl AdminStats {
    /// Share of rides that completed, as a percentage.
    pub fn completion_rate(&self) -> f64 {
        if self.total_rides <= 0 {
            return 0.0;
        }
        (self.completed_rides as f64 / self.total_rides as f64 * 100.0).min(100.0)
    }
}

/// Pick the ride a rider or driver is currently on.
pub fn current_ride(rides: &[Ride]) -> Option<&Ride> {
    rides.iter().find(|r| !r.status.is_terminal())
}

/// Name of a ride party for tables, or a dash when the backend omitted it.
pub fn party_name(party: Option<&RideParty>) -> &str {
    party.map(|p| p.name.as_str()).unwrap_or("—")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(status: RideStatus) -> Ride {
        Ride {
            id: format!("ride-{}", status.as_str()),
            pickup: Location::default(),
            destination: Location::default(),
            status,
            vehicle_type: VehicleType::Economy,
            fare: 0.0,
            distance_km: 0.0,
            rider: None,
            driver: None,
            created_at: None,
        }
    }

    #[test]
    fn steps_are_in_display_order() {
        let indices: Vec<Option<usize>> = RideStatus::STEPS.iter().map(|s| s.step_index()).collect();
        assert_eq!(indices, vec![Some(0), Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(RideStatus::Cancelled.step_index(), None);
    }

    #[test]
    fn next_walks_the_driver_path() {
        let mut status = RideStatus::Accepted;
        let mut seen = vec![status];
        while let Some(next) = status.next() {
            seen.push(next);
            status = next;
        }
        assert_eq!(
            seen,
            vec![
                RideStatus::Accepted,
                RideStatus::PickedUp,
                RideStatus::InTransit,
                RideStatus::Completed
            ]
        );
        assert_eq!(RideStatus::Requested.next(), None);
        assert_eq!(RideStatus::Cancelled.next(), None);
    }

    #[test]
    fn only_requested_rides_can_be_cancelled_by_rider() {
        for status in RideStatus::STEPS {
            assert_eq!(status.rider_can_cancel(), status == RideStatus::Requested);
        }
    }

    #[test]
    fn parse_accepts_filter_spellings() {
        assert_eq!(RideStatus::parse("picked-up"), Some(RideStatus::PickedUp));
        assert_eq!(RideStatus::parse("IN_TRANSIT"), Some(RideStatus::InTransit));
        assert_eq!(RideStatus::parse(""), None);
        assert_eq!(RideStatus::parse("all"), None);
    }

    #[test]
    fn ride_deserializes_backend_json() {
        let json = r#"{
            "_id": "r1",
            "pickup": {"address": "Gulshan 1", "lat": 23.78, "lng": 90.41},
            "destination": {"address": "Motijheel", "lat": 23.73, "lng": 90.42},
            "status": "PICKED_UP",
            "vehicleType": "premium",
            "fare": 350.5,
            "driver": {"_id": "d1", "name": "Karim"},
            "createdAt": "2026-03-01T10:00:00Z"
        }"#;
        let ride: Ride = serde_json::from_str(json).unwrap();
        assert_eq!(ride.id, "r1");
        assert_eq!(ride.status, RideStatus::PickedUp);
        assert_eq!(ride.vehicle_type, VehicleType::Premium);
        assert_eq!(ride.pickup.point.lat, 23.78);
        assert_eq!(party_name(ride.driver.as_ref()), "Karim");
        assert_eq!(party_name(ride.rider.as_ref()), "—");
        assert!(ride.created_at.is_some());
    }

    #[test]
    fn current_ride_skips_finished_rides() {
        let rides = vec![
            ride(RideStatus::Completed),
            ride(RideStatus::Cancelled),
            ride(RideStatus::InTransit),
        ];
        assert_eq!(current_ride(&rides).unwrap().status, RideStatus::InTransit);
        assert!(current_ride(&rides[..2]).is_none());
    }

    #[test]
    fn completion_rate_handles_empty_platform() {
        assert_eq!(AdminStats::default().completion_rate(), 0.0);
        let stats = AdminStats {
            total_rides: 8,
            completed_rides: 6,
            ..Default::default()
        };
        assert_eq!(stats.completion_rate(), 75.0);
    }

    #[cfg(feature = "validation")]
    #[test]
    fn ride_request_rejects_identical_points() {
        let here = LocationInput {
            address: "Banani 11".into(),
            lat: 23.79,
            lng: 90.40,
        };
        let req = RideRequest {
            pickup: here.clone(),
            destination: here,
            vehicle_type: VehicleType::Economy,
        };
        assert!(req.validate().is_err());
    }

    #[cfg(feature = "validation")]
    #[test]
    fn nested_address_errors_use_dotted_keys() {
        let req = RideRequest {
            pickup: LocationInput {
                address: "x".into(),
                lat: 23.79,
                lng: 90.40,
            },
            destination: LocationInput {
                address: "Gulshan 2".into(),
                lat: 23.80,
                lng: 90.41,
            },
            vehicle_type: VehicleType::Comfort,
        };
        let err = crate::AppError::from(req.validate().unwrap_err());
        assert_eq!(
            err.field_errors.get("pickup.address").map(String::as_str),
            Some("Address must be at least 3 characters")
        );
        assert!(!err.field_errors.contains_key("destination.address"));
    }

    #[cfg(feature = "validation")]
    #[test]
    fn identical_points_become_the_top_level_message() {
        let here = LocationInput {
            address: "Banani 11".into(),
            lat: 23.79,
            lng: 90.40,
        };
        let req = RideRequest {
            pickup: here.clone(),
            destination: here,
            vehicle_type: VehicleType::Economy,
        };
        let err = crate::AppError::from(req.validate().unwrap_err());
        assert_eq!(err.message, "Pickup and destination must differ");
    }
}
