use dioxus::prelude::*;
use shared_types::{AppError, Role, SessionUser};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, PageHeader, SkeletonRows, ToastOptions,
};
use std::collections::HashMap;

use crate::auth::use_auth;
use crate::routes::Route;

/// Account flags worth surfacing on the profile card.
fn account_badges(user: &SessionUser) -> Vec<(BadgeVariant, &'static str)> {
    let mut badges = Vec::new();
    if user.is_blocked {
        badges.push((BadgeVariant::Destructive, "Blocked"));
    }
    if user.role == Role::Driver {
        if user.is_approved {
            badges.push((BadgeVariant::Success, "Approved"));
        } else {
            badges.push((BadgeVariant::Warning, "Pending approval"));
        }
        badges.push(if user.is_online {
            (BadgeVariant::Success, "Online")
        } else {
            (BadgeVariant::Outline, "Offline")
        });
    }
    badges
}

#[component]
pub fn ProfileView(role: Role) -> Element {
    let auth = use_auth();
    let Some(user) = auth.current_user.read().clone() else {
        return rsx! { SkeletonRows { rows: 4 } };
    };
    let badges = account_badges(&user);
    let dash = "\u{2014}".to_string();

    rsx! {
        PageHeader {
            title: "Profile",
            actions: rsx! {
                Link { to: Route::area(role, "profile/edit"), class: "button", "data-style": "outline",
                    "Edit profile"
                }
            },
        }

        Card { class: "profile-card",
            CardHeader {
                div { class: "profile-head",
                    span { class: "profile-avatar", "{user.initials()}" }
                    div {
                        CardTitle { "{user.name}" }
                        CardDescription { "{user.email}" }
                    }
                }
                div { class: "profile-badges",
                    Badge { variant: BadgeVariant::Primary, "{user.role.label()}" }
                    for (variant, text) in badges {
                        Badge { key: "{text}", variant, "{text}" }
                    }
                }
            }
            CardContent {
                dl { class: "profile-details",
                    dt { "Phone" }
                    dd { {user.phone.clone().unwrap_or(dash.clone())} }
                    dt { "Address" }
                    dd { {user.address.clone().unwrap_or(dash.clone())} }
                    if let Some(vehicle) = &user.vehicle {
                        dt { "Vehicle" }
                        dd { "{vehicle.model} \u{00b7} {vehicle.plate_number} \u{00b7} {vehicle.vehicle_type.label()}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProfileEdit(role: Role) -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let current = auth.current_user.peek().clone();

    let mut name = use_signal(|| current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut phone =
        use_signal(|| current.as_ref().and_then(|u| u.phone.clone()).unwrap_or_default());
    let mut address =
        use_signal(|| current.as_ref().and_then(|u| u.address.clone()).unwrap_or_default());
    let mut profile_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut password_errors = use_signal(HashMap::<String, String>::new);
    let mut changing = use_signal(|| false);

    let save_profile = move |evt: FormEvent| async move {
        evt.prevent_default();
        saving.set(true);
        profile_errors.set(HashMap::new());

        match server::api::update_profile(name(), phone(), address()).await {
            Ok(user) => {
                auth.set_user(user);
                toast.success("Profile updated".to_string(), ToastOptions::new());
                navigator().push(Route::area(role, "profile"));
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    toast.error(AppError::friendly_message(&err_str), ToastOptions::new());
                } else {
                    profile_errors.set(fe);
                }
            }
        }
        saving.set(false);
    };

    let change_password = move |evt: FormEvent| async move {
        evt.prevent_default();
        changing.set(true);
        password_errors.set(HashMap::new());

        match server::api::change_password(old_password(), new_password(), confirm_password())
            .await
        {
            Ok(resp) => {
                toast.success(resp.message, ToastOptions::new());
                old_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    toast.error(AppError::friendly_message(&err_str), ToastOptions::new());
                } else {
                    password_errors.set(fe);
                }
            }
        }
        changing.set(false);
    };

    let profile_error = move |f: &str| profile_errors.read().get(f).cloned().unwrap_or_default();
    let password_error = move |f: &str| password_errors.read().get(f).cloned().unwrap_or_default();

    rsx! {
        PageHeader { title: "Edit profile", subtitle: "Blank fields keep their current value." }

        div { class: "profile-edit-grid",
            Card {
                CardHeader { CardTitle { "Details" } }
                CardContent {
                    form { class: "form-stack", onsubmit: save_profile,
                        Input {
                            label: "Name",
                            value: name(),
                            error: profile_error("name"),
                            on_input: move |e: FormEvent| name.set(e.value()),
                        }
                        Input {
                            label: "Phone",
                            input_type: "tel",
                            value: phone(),
                            error: profile_error("phone"),
                            on_input: move |e: FormEvent| phone.set(e.value()),
                        }
                        Input {
                            label: "Address",
                            value: address(),
                            error: profile_error("address"),
                            on_input: move |e: FormEvent| address.set(e.value()),
                        }
                        div { class: "form-actions",
                            button {
                                class: "button",
                                "data-style": "primary",
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Saving..." } else { "Save changes" }
                            }
                            Link { to: Route::area(role, "profile"), class: "button", "data-style": "ghost",
                                "Cancel"
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Change password" }
                    CardDescription { "Use at least 8 characters." }
                }
                CardContent {
                    form { class: "form-stack", onsubmit: change_password,
                        Input {
                            label: "Current password",
                            input_type: "password",
                            value: old_password(),
                            required: true,
                            error: password_error("old_password"),
                            on_input: move |e: FormEvent| old_password.set(e.value()),
                        }
                        Input {
                            label: "New password",
                            input_type: "password",
                            value: new_password(),
                            required: true,
                            error: password_error("new_password"),
                            on_input: move |e: FormEvent| new_password.set(e.value()),
                        }
                        Input {
                            label: "Confirm new password",
                            input_type: "password",
                            value: confirm_password(),
                            required: true,
                            error: password_error("confirm_password"),
                            on_input: move |e: FormEvent| confirm_password.set(e.value()),
                        }
                        button {
                            class: "button",
                            "data-style": "secondary",
                            r#type: "submit",
                            disabled: changing(),
                            if changing() { "Updating..." } else { "Update password" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            id: "u1".into(),
            name: "Rae Driver".into(),
            email: "rae@example.com".into(),
            role,
            phone: None,
            address: None,
            is_approved: false,
            is_blocked: false,
            is_online: false,
            vehicle: None,
        }
    }

    #[test]
    fn riders_have_no_driver_badges() {
        assert!(account_badges(&user(Role::Rider)).is_empty());
    }

    #[test]
    fn unapproved_driver_is_flagged() {
        let labels: Vec<&str> = account_badges(&user(Role::Driver))
            .into_iter()
            .map(|(_, text)| text)
            .collect();
        assert_eq!(labels, vec!["Pending approval", "Offline"]);
    }

    #[test]
    fn blocked_badge_comes_first() {
        let mut u = user(Role::Rider);
        u.is_blocked = true;
        assert_eq!(
            account_badges(&u),
            vec![(BadgeVariant::Destructive, "Blocked")]
        );
    }
}
