use dioxus::prelude::*;
use shared_types::{party_name, Ride, RideStatus};
use shared_ui::{Badge, Card, CardContent, CardHeader, CardTitle, StatusStepper};

use crate::format_helpers::{format_datetime, format_km, format_money, status_variant};

#[component]
pub fn RideStatusBadge(status: RideStatus) -> Element {
    rsx! {
        Badge {
            variant: status_variant(status),
            dot: !status.is_terminal() && status != RideStatus::Requested,
            "{status.label()}"
        }
    }
}

/// The other party on a ride, from the viewer's side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Counterpart {
    Driver,
    Rider,
}

impl Counterpart {
    fn label(&self) -> &'static str {
        match self {
            Counterpart::Driver => "Driver",
            Counterpart::Rider => "Rider",
        }
    }
}

/// Card showing one ride: route, parties, fare and the progress stepper.
#[component]
pub fn RideSummary(
    ride: Ride,
    counterpart: Counterpart,
    #[props(default)] children: Element,
) -> Element {
    let steps: Vec<String> = RideStatus::STEPS
        .iter()
        .map(|s| s.label().to_string())
        .collect();
    let halted = ride.status == RideStatus::Cancelled;
    let party = match counterpart {
        Counterpart::Driver => ride.driver.as_ref(),
        Counterpart::Rider => ride.rider.as_ref(),
    };
    let counterpart = counterpart.label();
    let party_label = party_name(party).to_string();
    let party_phone = party.and_then(|p| p.phone.clone());

    rsx! {
        Card { class: "ride-summary",
            CardHeader {
                div { class: "ride-summary-head",
                    CardTitle { "{ride.vehicle_type.label()} ride" }
                    RideStatusBadge { status: ride.status }
                }
            }
            CardContent {
                StatusStepper {
                    steps,
                    current: ride.status.step_index(),
                    halted,
                }
                dl { class: "ride-summary-details",
                    dt { "Pickup" }
                    dd { "{ride.pickup.address}" }
                    dt { "Destination" }
                    dd { "{ride.destination.address}" }
                    dt { "Distance" }
                    dd { {format_km(ride.distance_km)} }
                    dt { "Fare" }
                    dd { {format_money(ride.fare)} }
                    dt { "{counterpart}" }
                    dd {
                        "{party_label}"
                        if let Some(phone) = party_phone {
                            span { class: "ride-summary-phone", " \u{00b7} {phone}" }
                        }
                    }
                    dt { "Requested" }
                    dd { {format_datetime(ride.created_at)} }
                }
                {children}
            }
        }
    }
}
