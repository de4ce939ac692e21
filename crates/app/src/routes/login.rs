use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppError, Role};
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};
use std::collections::HashMap;

/// Where to go after signing in.
///
/// The `redirect` query value is honoured when it is a local path that the
/// role may open; anything else falls back to the role's first page.
pub fn destination(redirect: Option<&str>, role: Role) -> Route {
    let requested = redirect
        .filter(|p| p.starts_with('/') && !p.starts_with("//"))
        .and_then(|p| p.parse::<Route>().ok());

    match requested {
        Some(route) if allowed_for(&route, role) => route,
        _ => Route::home_for(role),
    }
}

fn allowed_for(route: &Route, role: Role) -> bool {
    match route {
        Route::RiderArea { .. } => role == Role::Rider,
        Route::DriverArea { .. } => role == Role::Driver,
        Route::AdminArea { .. } => role == Role::Admin,
        Route::Login { .. } | Route::Register {} | Route::NotFound { .. } => false,
        _ => true,
    }
}

/// Login page. Accepts an optional `redirect` query param set by the auth
/// guard; after login, navigates there instead of the role's default page.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    // Forward visitors who are already signed in
    let signed_in_role = auth.current_user.read().as_ref().map(|u| u.role);
    if let Some(role) = signed_in_role {
        navigator().replace(destination(redirect_target.read().as_deref(), role));
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(user) => {
                let target = destination(redirect_target.read().as_deref(), user.role);
                auth.set_user(user);
                navigator().replace(target);
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned().unwrap_or_default();

    rsx! {
        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Welcome back. Sign in to book or drive." }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "form-stack", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            id: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            error: error_for("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            id: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            error: error_for("password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "data-style": "primary",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Create one" }
                    }
                }
            }
        }
    }
}
