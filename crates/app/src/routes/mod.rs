pub mod admin;
pub mod driver;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod public;
pub mod register;
pub mod rider;
pub mod shell;
pub mod unauthorized;

use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::{GuardDecision, Role, SessionStatus};

use login::Login;
use not_found::NotFound;
use public::{About, Contact, Faq, Features, Home, PublicLayout};
use register::Register;
use shell::DashboardShell;
use unauthorized::Unauthorized;

/// Application routes.
///
/// Each dashboard role owns one catch-all subtree. The sub-path is resolved
/// against the role's route table inside [`DashboardShell`].
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(PublicLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/features")]
    Features {},
    #[route("/contact")]
    Contact {},
    #[route("/faq")]
    Faq {},
    #[end_layout]
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/register")]
    Register {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[route("/rider/:..segments")]
    RiderArea { segments: Vec<String> },
    #[route("/driver/:..segments")]
    DriverArea { segments: Vec<String> },
    #[route("/admin/:..segments")]
    AdminArea { segments: Vec<String> },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Route for a path inside a role's subtree, e.g. `(Driver, "profile/edit")`.
    /// Roles without a dashboard map to the home page.
    pub fn area(role: Role, path: &str) -> Route {
        let segments: Vec<String> = path
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        match role {
            Role::Rider => Route::RiderArea { segments },
            Role::Driver => Route::DriverArea { segments },
            Role::Admin => Route::AdminArea { segments },
            Role::Guest | Role::Public => Route::Home {},
        }
    }

    /// Landing page after sign-in: the first sidebar entry of the role.
    pub fn home_for(role: Role) -> Route {
        match shared_types::default_entry(role) {
            Some(item) => Route::area(role, item.url),
            None => Route::Home {},
        }
    }
}

#[component]
fn RiderArea(segments: Vec<String>) -> Element {
    rsx! { RoleArea { role: Role::Rider, segments } }
}

#[component]
fn DriverArea(segments: Vec<String>) -> Element {
    rsx! { RoleArea { role: Role::Driver, segments } }
}

#[component]
fn AdminArea(segments: Vec<String>) -> Element {
    rsx! { RoleArea { role: Role::Admin, segments } }
}

/// One role's dashboard: the shared shell behind a guard for that role.
#[component]
fn RoleArea(role: Role, segments: Vec<String>) -> Element {
    let path = Route::area(role, &segments.join("/")).to_string();

    rsx! {
        AuthGuard { roles: vec![role], path,
            DashboardShell { role, segments }
        }
    }
}

/// Auth guard: renders `children` only for a signed-in user whose role is in `roles`.
///
/// Every navigation (`path` change) re-checks the session from a loading
/// state. A missing session or a failed lookup redirects to `/login` with
/// the requested path; a wrong role redirects to `/unauthorized`.
///
/// Uses `use_server_future` with `?` so SSR suspends until the session
/// lookup completes and hydration reuses the embedded result.
#[component]
pub fn AuthGuard(roles: Vec<Role>, path: String, children: Element) -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(use_reactive!(|(path,)| async move {
        tracing::trace!(%path, "checking session");
        server::api::get_current_user().await
    }))?;

    let lookup = resource.read().as_ref().cloned();
    if let Some(Err(err)) = &lookup {
        tracing::warn!(error = %err, "session lookup failed, treating visitor as signed out");
    }

    let status = SessionStatus::from_lookup(lookup.as_ref());
    let decision = GuardDecision::evaluate(status, &roles);

    match decision {
        GuardDecision::Loading => rsx! {
            div { class: "auth-guard-loading",
                div { class: "spinner" }
                p { "Checking your session..." }
            }
        },
        GuardDecision::RedirectLogin => {
            auth.clear_auth();
            navigator().replace(Route::Login {
                redirect: Some(path.clone()),
            });
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        GuardDecision::RedirectUnauthorized => {
            if let SessionStatus::Authenticated(user) = status {
                auth.set_user(user.clone());
            }
            navigator().replace(Route::Unauthorized {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        GuardDecision::Authorized => {
            if let SessionStatus::Authenticated(user) = status {
                auth.set_user(user.clone());
            }
            children
        }
    }
}
