//! Unguarded marketing pages.

mod contact;
mod faq;
mod home;
mod info;

pub use contact::Contact;
pub use faq::Faq;
pub use home::Home;
pub use info::{About, Features};

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Top navigation and footer around the public pages.
#[component]
pub fn PublicLayout() -> Element {
    let auth = use_auth();
    let user = auth.current_user.read().clone();

    rsx! {
        div { class: "public-shell",
            header { class: "public-nav",
                Link { to: Route::Home {}, class: "public-brand", "RideShare" }
                nav { class: "public-links",
                    Link { to: Route::About {}, "About" }
                    Link { to: Route::Features {}, "Features" }
                    Link { to: Route::Faq {}, "FAQ" }
                    Link { to: Route::Contact {}, "Contact" }
                }
                div { class: "public-actions",
                    if let Some(user) = user {
                        Link { to: Route::home_for(user.role), class: "button", "data-style": "primary",
                            "Dashboard"
                        }
                    } else {
                        Link { to: Route::Login { redirect: None }, class: "public-signin", "Sign in" }
                        Link { to: Route::Register {}, class: "button", "data-style": "primary",
                            "Get started"
                        }
                    }
                }
            }
            main { class: "public-main",
                Outlet::<Route> {}
            }
            footer { class: "public-footer",
                p { "\u{00a9} RideShare. Safe rides, fair fares." }
            }
        }
    }
}
