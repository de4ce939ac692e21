use dioxus::prelude::*;
use shared_types::{
    haversine_km, AppError, FareEstimate, FeatureFlags, LocationInput, RideRequest, Role,
    VehicleType,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, FormSelect,
    Input, Notice, NoticeTone, PageHeader, ToastOptions,
};
use std::collections::HashMap;

use crate::format_helpers::{format_km, format_money, parse_point};
use crate::routes::Route;

/// Booking form for one end of the trip.
#[derive(Clone, Copy, PartialEq)]
struct PlaceFields {
    address: Signal<String>,
    lat: Signal<String>,
    lng: Signal<String>,
}

impl PlaceFields {
    fn new() -> Self {
        Self {
            address: Signal::new(String::new()),
            lat: Signal::new(String::new()),
            lng: Signal::new(String::new()),
        }
    }

    /// Form values as a request location, or per-field errors keyed
    /// `{prefix}.lat` / `{prefix}.lng`. Nothing non-finite reaches the wire.
    fn to_input(self, prefix: &str) -> Result<LocationInput, HashMap<String, String>> {
        let (lat, lng) = (self.lat.read().clone(), self.lng.read().clone());
        place_input(prefix, &self.address.read(), &lat, &lng)
    }
}

fn parse_coordinate(raw: &str, label: &str, limit: f64) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("{label} must be a number"))?;
    if value.abs() > limit {
        return Err(format!("{label} must be between -{limit} and {limit}"));
    }
    Ok(value)
}

fn place_input(
    prefix: &str,
    address: &str,
    lat: &str,
    lng: &str,
) -> Result<LocationInput, HashMap<String, String>> {
    let lat = parse_coordinate(lat, "Latitude", 90.0);
    let lng = parse_coordinate(lng, "Longitude", 180.0);
    match (lat, lng) {
        (Ok(lat), Ok(lng)) => Ok(LocationInput {
            address: address.trim().to_string(),
            lat,
            lng,
        }),
        (lat, lng) => {
            let mut errors = HashMap::new();
            if let Err(msg) = lat {
                errors.insert(format!("{prefix}.lat"), msg);
            }
            if let Err(msg) = lng {
                errors.insert(format!("{prefix}.lng"), msg);
            }
            Err(errors)
        }
    }
}

#[component]
pub fn BookRide() -> Element {
    let flags: FeatureFlags = use_context();
    let toast = use_toast();

    let pickup = use_hook(PlaceFields::new);
    let destination = use_hook(PlaceFields::new);
    let mut vehicle_type = use_signal(VehicleType::default);
    let mut estimate = use_signal(|| Option::<FareEstimate>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut estimating = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let distance = use_memo(move || {
        let a = parse_point(&pickup.lat.read(), &pickup.lng.read())?;
        let b = parse_point(&destination.lat.read(), &destination.lng.read())?;
        Some(haversine_km(a, b))
    });

    // A stale estimate is worse than none
    use_effect(move || {
        let _ = distance();
        let _ = vehicle_type();
        estimate.set(None);
    });

    let request_estimate = move |_: MouseEvent| {
        let (Some(a), Some(b)) = (
            parse_point(&pickup.lat.read(), &pickup.lng.read()),
            parse_point(&destination.lat.read(), &destination.lng.read()),
        ) else {
            form_error.set(Some("Enter valid coordinates for both places first".to_string()));
            return;
        };
        form_error.set(None);
        spawn(async move {
            estimating.set(true);
            match server::api::estimate_fare(a, b, vehicle_type()).await {
                Ok(est) => estimate.set(Some(est)),
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
            estimating.set(false);
        });
    };

    let submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        submitting.set(true);
        field_errors.set(HashMap::new());
        form_error.set(None);

        let req = match (pickup.to_input("pickup"), destination.to_input("destination")) {
            (Ok(pickup), Ok(destination)) => RideRequest {
                pickup,
                destination,
                vehicle_type: vehicle_type(),
            },
            (a, b) => {
                let mut errors = HashMap::new();
                errors.extend(a.err().unwrap_or_default());
                errors.extend(b.err().unwrap_or_default());
                field_errors.set(errors);
                submitting.set(false);
                return;
            }
        };

        match server::api::request_ride(req).await {
            Ok(_) => {
                toast.success(
                    "Ride requested. Looking for a driver...".to_string(),
                    ToastOptions::new(),
                );
                navigator().push(Route::area(Role::Rider, "active-ride"));
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    form_error.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        submitting.set(false);
    };

    rsx! {
        PageHeader {
            title: "Book a Ride",
            subtitle: "Tell us where to pick you up and where you're going.",
        }

        div { class: "book-ride-grid",
            Card {
                CardContent {
                    if let Some(err) = form_error() {
                        Notice { tone: NoticeTone::Danger, title: err }
                    }
                    form { class: "form-stack", onsubmit: submit,
                        PlaceFieldset { title: "Pickup", key_prefix: "pickup", fields: pickup, errors: field_errors }
                        PlaceFieldset { title: "Destination", key_prefix: "destination", fields: destination, errors: field_errors }

                        FormSelect {
                            label: "Vehicle type",
                            value: "{vehicle_type().as_str()}",
                            onchange: move |e: Event<FormData>| {
                                vehicle_type.set(VehicleType::from_str_or_default(&e.value()));
                            },
                            for vt in VehicleType::ALL {
                                option { value: vt.as_str(), "{vt.label()}" }
                            }
                        }

                        div { class: "form-actions",
                            if flags.fare_estimate {
                                Button {
                                    variant: ButtonVariant::Outline,
                                    loading: estimating(),
                                    onclick: request_estimate,
                                    "Estimate fare"
                                }
                            }
                            button {
                                class: "button",
                                "data-style": "primary",
                                r#type: "submit",
                                disabled: submitting(),
                                if submitting() { "Requesting..." } else { "Request ride" }
                            }
                        }
                    }
                }
            }

            Card { class: "trip-summary",
                CardHeader { CardTitle { "Trip summary" } }
                CardContent {
                    dl { class: "ride-summary-details",
                        dt { "Distance" }
                        dd { {distance().map(format_km).unwrap_or_else(|| "\u{2014}".to_string())} }
                        dt { "Vehicle" }
                        dd { "{vehicle_type().label()}" }
                        if let Some(est) = estimate() {
                            dt { "Estimated fare" }
                            dd { class: "fare-amount", {format_money(est.amount)} }
                            if est.surge > 1.0 {
                                dt { "Demand" }
                                dd { {format!("\u{00d7}{:.2}", est.surge)} }
                            }
                        }
                    }
                    if flags.fare_estimate && estimate().is_none() {
                        p { class: "text-muted", "Ask for an estimate to see the fare before booking." }
                    }
                }
            }
        }
    }
}

#[component]
fn PlaceFieldset(
    title: String,
    key_prefix: String,
    fields: PlaceFields,
    errors: Signal<HashMap<String, String>>,
) -> Element {
    let PlaceFields {
        mut address,
        mut lat,
        mut lng,
    } = fields;
    let error_for = move |field: &str| {
        errors
            .read()
            .get(&format!("{key_prefix}.{field}"))
            .cloned()
            .unwrap_or_default()
    };
    let address_error = error_for("address");
    let lat_error = error_for("lat");
    let lng_error = error_for("lng");

    rsx! {
        fieldset { class: "form-fieldset",
            legend { "{title}" }
            Input {
                label: "Address",
                value: address(),
                required: true,
                error: address_error,
                on_input: move |e: FormEvent| address.set(e.value()),
            }
            div { class: "form-row",
                Input {
                    label: "Latitude",
                    input_type: "text",
                    placeholder: "23.7808",
                    value: lat(),
                    error: lat_error,
                    on_input: move |e: FormEvent| lat.set(e.value()),
                }
                Input {
                    label: "Longitude",
                    input_type: "text",
                    placeholder: "90.4070",
                    value: lng(),
                    error: lng_error,
                    on_input: move |e: FormEvent| lng.set(e.value()),
                }
            }
        }
    }
}
