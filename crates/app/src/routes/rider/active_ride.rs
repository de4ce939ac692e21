use dioxus::prelude::*;
use shared_types::{AppError, Role};
use shared_ui::{
    use_toast, Button, ButtonVariant, Notice, NoticeTone, PageHeader, SkeletonRows, ToastOptions,
};

use crate::components::{Counterpart, RideSummary};
use crate::routes::Route;

/// The rider's ride in progress, with its status stepper.
#[component]
pub fn ActiveRide() -> Element {
    let toast = use_toast();
    let mut ride = use_resource(move || async move { server::api::active_ride().await });
    let mut cancelling = use_signal(|| false);

    let mut cancel = move |id: String| {
        spawn(async move {
            cancelling.set(true);
            match server::api::cancel_ride(id).await {
                Ok(_) => {
                    toast.success("Ride cancelled".to_string(), ToastOptions::new());
                    ride.restart();
                }
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
            cancelling.set(false);
        });
    };

    rsx! {
        PageHeader {
            title: "Active Ride",
            actions: rsx! {
                Button { variant: ButtonVariant::Outline, onclick: move |_| ride.restart(), "Refresh" }
            },
        }

        match &*ride.read() {
            None => rsx! { SkeletonRows { rows: 5 } },
            Some(Err(e)) => rsx! {
                Notice { tone: NoticeTone::Danger, title: "Could not load your ride",
                    {AppError::friendly_message(&e.to_string())}
                }
            },
            Some(Ok(None)) => rsx! {
                Notice { tone: NoticeTone::Info, title: "No ride in progress",
                    "Book a ride and it will show up here. "
                    Link { to: Route::area(Role::Rider, "book-ride"), "Book a ride" }
                }
            },
            Some(Ok(Some(current))) => {
                let current = current.clone();
                let id = current.id.clone();
                let can_cancel = current.status.rider_can_cancel();
                rsx! {
                    RideSummary { ride: current, counterpart: Counterpart::Driver,
                        if can_cancel {
                            div { class: "form-actions",
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    loading: cancelling(),
                                    onclick: move |_| cancel(id.clone()),
                                    "Cancel ride"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
