use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppError, RegisterRequest, Role, VehicleInput, VehicleType};
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect,
    Input, ToastOptions,
};
use std::collections::HashMap;

/// Build the registration payload from the form fields.
/// Vehicle details are only sent for driver sign-ups.
#[allow(clippy::too_many_arguments)]
pub fn build_request(
    name: &str,
    email: &str,
    password: &str,
    phone: &str,
    role: Role,
    model: &str,
    plate: &str,
    vehicle_type: VehicleType,
) -> RegisterRequest {
    let phone = phone.trim();
    let vehicle = (role == Role::Driver).then(|| VehicleInput {
        model: model.trim().to_string(),
        plate_number: plate.trim().to_uppercase(),
        vehicle_type,
    });

    RegisterRequest {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        role,
        vehicle,
    }
}

/// Sign-up page for riders and drivers. Admin accounts cannot self-register.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Role::Rider);
    let mut model = use_signal(String::new);
    let mut plate = use_signal(String::new);
    let mut vehicle_type = use_signal(VehicleType::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Redirect to the dashboard if already signed in
    let signed_in_role = auth.current_user.read().as_ref().map(|u| u.role);
    if let Some(r) = signed_in_role {
        navigator().replace(Route::home_for(r));
    }

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        if password() != confirm() {
            field_errors.set(HashMap::from([(
                "confirm_password".to_string(),
                "Passwords do not match".to_string(),
            )]));
            return;
        }

        loading.set(true);
        let req = build_request(
            &name(),
            &email(),
            &password(),
            &phone(),
            role(),
            &model(),
            &plate(),
            vehicle_type(),
        );

        match server::api::register(req).await {
            Ok(user) => {
                let note = if user.role == Role::Driver {
                    "Account created. An admin will review your driver profile."
                } else {
                    "Account created. Sign in to book your first ride."
                };
                toast.success(note.to_string(), ToastOptions::new());
                navigator().push(Route::Login { redirect: None });
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
                class: "auth-card auth-card-wide",

                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Ride with us or drive with us." }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { class: "form-stack", onsubmit: handle_register,
                        div { class: "role-choice",
                            for option in [Role::Rider, Role::Driver] {
                                button {
                                    key: "{option}",
                                    r#type: "button",
                                    class: "role-choice-option",
                                    "data-selected": if role() == option { "true" } else { "false" },
                                    onclick: move |_| role.set(option),
                                    "I want to {option_verb(option)}"
                                }
                            }
                        }

                        Input {
                            label: "Full name",
                            value: name(),
                            required: true,
                            error: error_for("name"),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            required: true,
                            error: error_for("email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Phone",
                            input_type: "tel",
                            value: phone(),
                            error: error_for("phone"),
                            on_input: move |e: FormEvent| phone.set(e.value()),
                        }
                        div { class: "form-row",
                            Input {
                                label: "Password",
                                input_type: "password",
                                value: password(),
                                required: true,
                                error: error_for("password"),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            Input {
                                label: "Confirm password",
                                input_type: "password",
                                value: confirm(),
                                required: true,
                                error: error_for("confirm_password"),
                                on_input: move |e: FormEvent| confirm.set(e.value()),
                            }
                        }

                        if role() == Role::Driver {
                            fieldset { class: "form-fieldset",
                                legend { "Vehicle" }
                                div { class: "form-row",
                                    Input {
                                        label: "Model",
                                        placeholder: "Toyota Axio",
                                        value: model(),
                                        required: true,
                                        error: error_for("vehicle.model"),
                                        on_input: move |e: FormEvent| model.set(e.value()),
                                    }
                                    Input {
                                        label: "Plate number",
                                        value: plate(),
                                        required: true,
                                        error: error_for("vehicle.plate_number"),
                                        on_input: move |e: FormEvent| plate.set(e.value()),
                                    }
                                }
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
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "data-style": "primary",
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login { redirect: None }, "Sign in" }
                    }
                }
            }
        }
    }
}

fn option_verb(role: Role) -> &'static str {
    match role {
        Role::Driver => "drive",
        _ => "ride",
    }
}
