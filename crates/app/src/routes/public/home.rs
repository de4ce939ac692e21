use dioxus::prelude::*;
use shared_types::VehicleType;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::format_helpers::format_money;
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Get where you're going." }
            p { class: "hero-subtitle",
                "Request a ride in seconds, track your driver live, and pay a fare you saw up front."
            }
            div { class: "hero-actions",
                Link { to: Route::Register {}, class: "button", "data-style": "primary", "data-size": "lg",
                    "Ride with us"
                }
                Link { to: Route::Register {}, class: "button", "data-style": "outline", "data-size": "lg",
                    "Drive with us"
                }
            }
        }

        section { class: "vehicle-grid",
            for vt in VehicleType::ALL {
                Card { key: "{vt.as_str()}",
                    CardHeader {
                        CardTitle { "{vt.label()}" }
                        CardDescription { {vehicle_blurb(vt)} }
                    }
                    CardContent {
                        p { class: "vehicle-rate",
                            "From {format_money(vt.rates().minimum)} \u{00b7} {format_money(vt.rates().per_km)}/km"
                        }
                    }
                }
            }
        }
    }
}

fn vehicle_blurb(vt: VehicleType) -> &'static str {
    match vt {
        VehicleType::Economy => "Everyday rides at the lowest price.",
        VehicleType::Comfort => "Newer cars with extra legroom.",
        VehicleType::Premium => "Top-rated drivers in high-end cars.",
    }
}
