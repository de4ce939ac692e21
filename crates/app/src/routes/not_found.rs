use dioxus::prelude::*;
use shared_types::Role;

use crate::routes::Route;

/// Top-level fallback for any path no route claims.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "not-found-page",
            NotFoundCard {
                path: format!("/{}", route.join("/")),
                back: Route::Home {},
                back_label: "Back to home",
            }
        }
    }
}

/// Unknown sub-path inside a dashboard subtree. Rendered within the shell so
/// the sidebar stays usable.
#[component]
pub fn MissingPage(role: Role, path: String) -> Element {
    let full = format!("{}/{}", role.base_path().unwrap_or_default(), path);

    rsx! {
        NotFoundCard {
            path: full,
            back: Route::home_for(role),
            back_label: "Back to dashboard",
        }
    }
}

#[component]
fn NotFoundCard(path: String, back: Route, back_label: String) -> Element {
    rsx! {
        div { class: "not-found-card",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "Nothing here" }
            p { class: "not-found-message",
                "No page lives at "
                code { "{path}" }
                "."
            }
            Link { to: back, class: "not-found-link", "{back_label}" }
        }
    }
}
