use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{use_toast, Card, CardContent, CardHeader, CardTitle, Input, ToastOptions};
use std::collections::HashMap;

#[component]
pub fn Contact() -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        sending.set(true);
        field_errors.set(HashMap::new());

        match server::api::send_contact_message(name(), email(), message()).await {
            Ok(resp) => {
                toast.success(resp.message, ToastOptions::new());
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    toast.error(AppError::friendly_message(&err_str), ToastOptions::new());
                } else {
                    field_errors.set(fe);
                }
            }
        }
        sending.set(false);
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned().unwrap_or_default();

    rsx! {
        section { class: "contact-page",
            Card {
                CardHeader { CardTitle { "Contact us" } }
                CardContent {
                    form { class: "form-stack", onsubmit: handle_submit,
                        Input {
                            label: "Name",
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
                        div { class: "input-wrapper",
                            label { class: "input-label", "Message" }
                            textarea {
                                class: "input textarea",
                                rows: "5",
                                value: message(),
                                oninput: move |e| message.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("message") {
                                p { class: "input-error", "{err}" }
                            }
                        }
                        button {
                            class: "button",
                            "data-style": "primary",
                            r#type: "submit",
                            disabled: sending(),
                            if sending() { "Sending..." } else { "Send message" }
                        }
                    }
                }
            }
        }
    }
}
