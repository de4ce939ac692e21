use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader, CardTitle};

#[component]
pub fn About() -> Element {
    rsx! {
        article { class: "prose",
            h1 { "About RideShare" }
            p {
                "RideShare connects riders with nearby drivers. Riders book a trip, see the distance and an "
                "estimated fare, and follow the ride from pickup to drop-off."
            }
            p {
                "Drivers go online when they are ready to work, pick up open requests and keep track of "
                "their earnings. Every driver is reviewed and approved by our operations team before taking "
                "a first ride."
            }
        }
    }
}

const FEATURES: &[(&str, &str)] = &[
    ("Up-front fares", "See the distance and an estimated fare before you book."),
    ("Live ride status", "Follow each step from accepted to completed."),
    ("Choose your ride", "Economy, Comfort or Premium for every trip."),
    ("Driver earnings", "Drivers see completed trips and totals at a glance."),
    ("Vetted drivers", "Admins approve drivers and can suspend accounts."),
    ("Ride history", "Every trip you have taken, searchable and paginated."),
];

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "feature-page",
            h1 { "Features" }
            div { class: "feature-grid",
                for (title, body) in FEATURES.iter() {
                    Card { key: "{title}",
                        CardHeader { CardTitle { "{title}" } }
                        CardContent { p { "{body}" } }
                    }
                }
            }
        }
    }
}
