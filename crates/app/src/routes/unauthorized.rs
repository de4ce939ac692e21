use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Shown when a signed-in user opens another role's dashboard.
#[component]
pub fn Unauthorized() -> Element {
    let auth = use_auth();
    let role = auth.role();

    rsx! {
        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "403" }
                h1 { class: "not-found-title", "Access denied" }
                p { class: "not-found-message",
                    "Your account doesn't have permission to view this page."
                }
                if role.is_dashboard_role() {
                    Link { to: Route::home_for(role), class: "not-found-link",
                        "Go to your {role.label().to_lowercase()} dashboard"
                    }
                } else {
                    Link { to: Route::Login { redirect: None }, class: "not-found-link",
                        "Sign in with another account"
                    }
                }
            }
        }
    }
}
