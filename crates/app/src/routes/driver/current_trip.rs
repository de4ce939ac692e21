use dioxus::prelude::*;
use shared_types::{AppError, RideStatus, Role};
use shared_ui::{
    use_toast, Button, ButtonVariant, Notice, NoticeTone, PageHeader, SkeletonRows, ToastOptions,
};

use super::DriverStatusNotice;
use crate::components::{Counterpart, RideSummary};
use crate::routes::Route;

/// Button text for moving a trip out of `status`.
fn advance_label(status: RideStatus) -> Option<&'static str> {
    match status.next()? {
        RideStatus::Accepted => Some("Accept ride"),
        RideStatus::PickedUp => Some("Confirm pickup"),
        RideStatus::InTransit => Some("Start trip"),
        RideStatus::Completed => Some("Complete trip"),
        RideStatus::Requested | RideStatus::Cancelled => None,
    }
}

/// The trip the driver is working on, with the next lifecycle action.
#[component]
pub fn CurrentTrip() -> Element {
    let toast = use_toast();
    let mut trip = use_resource(move || async move { server::api::active_ride().await });
    let mut advancing = use_signal(|| false);

    let mut advance = move |id: String, status: RideStatus| {
        spawn(async move {
            advancing.set(true);
            match server::api::advance_ride(id, status).await {
                Ok(ride) => {
                    let msg = format!("Ride {}", ride.status.label().to_lowercase());
                    toast.success(msg, ToastOptions::new());
                    trip.restart();
                }
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
            advancing.set(false);
        });
    };

    rsx! {
        PageHeader {
            title: "Current Trip",
            actions: rsx! {
                Button { variant: ButtonVariant::Outline, onclick: move |_| trip.restart(), "Refresh" }
            },
        }

        DriverStatusNotice {}

        match &*trip.read() {
            None => rsx! { SkeletonRows { rows: 5 } },
            Some(Err(e)) => rsx! {
                Notice { tone: NoticeTone::Danger, title: "Could not load your trip",
                    {AppError::friendly_message(&e.to_string())}
                }
            },
            Some(Ok(None)) => rsx! {
                Notice { tone: NoticeTone::Info, title: "No trip in progress",
                    "Accept a request to start a trip. "
                    Link { to: Route::area(Role::Driver, "available-rides"), "See available rides" }
                }
            },
            Some(Ok(Some(ride))) => {
                let ride = ride.clone();
                let id = ride.id.clone();
                let status = ride.status;
                rsx! {
                    RideSummary { ride, counterpart: Counterpart::Rider,
                        if let Some(label) = advance_label(status) {
                            div { class: "form-actions",
                                Button {
                                    loading: advancing(),
                                    onclick: move |_| advance(id.clone(), status),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
