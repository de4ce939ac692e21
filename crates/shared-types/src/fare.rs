use serde::{Deserialize, Serialize};

use crate::{haversine_km, GeoPoint};

/// Vehicle class a rider can request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    #[default]
    Economy,
    Comfort,
    Premium,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [
        VehicleType::Economy,
        VehicleType::Comfort,
        VehicleType::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Economy => "economy",
            VehicleType::Comfort => "comfort",
            VehicleType::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Economy => "Economy",
            VehicleType::Comfort => "Comfort",
            VehicleType::Premium => "Premium",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "comfort" => VehicleType::Comfort,
            "premium" => VehicleType::Premium,
            _ => VehicleType::Economy,
        }
    }

    /// Base fare table for this vehicle class.
    pub fn rates(&self) -> FareRates {
        match self {
            VehicleType::Economy => FareRates {
                base: 50.0,
                per_km: 15.0,
                minimum: 80.0,
            },
            VehicleType::Comfort => FareRates {
                base: 80.0,
                per_km: 22.0,
                minimum: 120.0,
            },
            VehicleType::Premium => FareRates {
                base: 120.0,
                per_km: 35.0,
                minimum: 200.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareRates {
    pub base: f64,
    pub per_km: f64,
    pub minimum: f64,
}

/// Range a randomly drawn surge multiplier falls in.
pub const SURGE_MIN: f64 = 1.0;
pub const SURGE_MAX: f64 = 1.25;

/// A fare quote shown on the booking form. Not binding; the backend settles the fare.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FareEstimate {
    pub vehicle_type: VehicleType,
    pub distance_km: f64,
    pub surge: f64,
    pub amount: f64,
}

/// Price a trip. `surge` is clamped into `[SURGE_MIN, SURGE_MAX]`.
pub fn estimate_fare(
    vehicle_type: VehicleType,
    pickup: GeoPoint,
    destination: GeoPoint,
    surge: f64,
) -> FareEstimate {
    let rates = vehicle_type.rates();
    let distance_km = haversine_km(pickup, destination);
    let surge = surge.clamp(SURGE_MIN, SURGE_MAX);

    let raw = (rates.base + rates.per_km * distance_km) * surge;
    let amount = round_cents(raw.max(rates.minimum));

    FareEstimate {
        vehicle_type,
        distance_km: round_cents(distance_km),
        surge,
        amount,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
