use dioxus::prelude::*;
use shared_types::{party_name, AppError, Role};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, Notice, NoticeTone,
    PageHeader, SkeletonRows, ToastOptions, ToggleSwitch,
};

use super::DriverStatusNotice;
use crate::auth::use_auth;
use crate::format_helpers::{format_km, format_money};
use crate::routes::Route;

/// Open ride requests a driver can take, plus the online toggle.
#[component]
pub fn AvailableRides() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let mut rides = use_resource(move || async move { server::api::available_rides().await });
    let mut accepting = use_signal(|| None::<String>);

    let user = auth.current_user.read().clone();
    let can_drive = user.as_ref().is_some_and(|u| u.can_drive());
    let is_online = user.as_ref().is_some_and(|u| u.is_online);
    let online_label = if is_online { "Online" } else { "Offline" };

    let toggle_online = move |online: bool| {
        spawn(async move {
            match server::api::set_availability(online).await {
                Ok(updated) => {
                    auth.set_user(updated);
                    let msg = if online { "You are online" } else { "You are offline" };
                    toast.success(msg.to_string(), ToastOptions::new());
                    rides.restart();
                }
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
        });
    };

    let mut accept = move |id: String| {
        spawn(async move {
            accepting.set(Some(id.clone()));
            match server::api::accept_ride(id).await {
                Ok(_) => {
                    toast.success("Ride accepted".to_string(), ToastOptions::new());
                    navigator().push(Route::area(Role::Driver, "current-trip"));
                }
                Err(e) => {
                    toast.error(
                        AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                    rides.restart();
                }
            }
            accepting.set(None);
        });
    };

    rsx! {
        PageHeader {
            title: "Available Rides",
            subtitle: "Ride requests waiting for a driver.",
            actions: rsx! {
                ToggleSwitch {
                    checked: is_online,
                    disabled: !can_drive,
                    label: "{online_label}",
                    on_change: toggle_online,
                }
                Button { variant: ButtonVariant::Outline, onclick: move |_| rides.restart(), "Refresh" }
            },
        }

        DriverStatusNotice {}

        match &*rides.read() {
            None => rsx! { SkeletonRows { rows: 5 } },
            Some(Err(e)) => rsx! {
                Notice { tone: NoticeTone::Danger, title: "Could not load ride requests",
                    {AppError::friendly_message(&e.to_string())}
                }
            },
            Some(Ok(list)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Rider" }
                        DataTableColumn { "Pickup" }
                        DataTableColumn { "Destination" }
                        DataTableColumn { "Vehicle" }
                        DataTableColumn { numeric: true, "Distance" }
                        DataTableColumn { numeric: true, "Fare" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        if list.is_empty() {
                            DataTableEmpty { columns: 7, message: "No ride requests right now." }
                        }
                        for ride in list.iter() {
                            DataTableRow { key: "{ride.id}",
                                DataTableCell { "{party_name(ride.rider.as_ref())}" }
                                DataTableCell { "{ride.pickup.address}" }
                                DataTableCell { "{ride.destination.address}" }
                                DataTableCell { "{ride.vehicle_type.label()}" }
                                DataTableCell { numeric: true, {format_km(ride.distance_km)} }
                                DataTableCell { numeric: true, {format_money(ride.fare)} }
                                DataTableCell {
                                    Button {
                                        size: ButtonSize::Small,
                                        disabled: !can_drive || !is_online || accepting().is_some(),
                                        loading: accepting().as_deref() == Some(ride.id.as_str()),
                                        onclick: {
                                            let id = ride.id.clone();
                                            move |_| accept(id.clone())
                                        },
                                        "Accept"
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
