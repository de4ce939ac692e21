use dioxus::prelude::*;
use shared_types::{AppError, ListQuery, Role, SessionUser};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect,
    Input, Notice, NoticeTone, PageHeader, Pagination, SkeletonRows, ToastOptions,
};

use super::search_filter;

/// Moderation action an admin can take on a user row.
#[derive(Debug, Clone, Copy, PartialEq)]
enum UserAction {
    Block(bool),
    Approve(bool),
}

impl UserAction {
    fn done_message(&self) -> &'static str {
        match self {
            UserAction::Block(true) => "User blocked",
            UserAction::Block(false) => "User unblocked",
            UserAction::Approve(true) => "Driver approved",
            UserAction::Approve(false) => "Driver approval revoked",
        }
    }
}

/// `blocked` filter value from the select: "", "true" or "false".
fn blocked_filter(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[component]
pub fn UsersManagement() -> Element {
    let toast = use_toast();
    let mut page = use_signal(|| 1u32);
    let mut search = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut blocked = use_signal(String::new);
    let mut busy = use_signal(|| None::<String>);

    let mut users = use_resource(move || async move {
        let role = role();
        let query = ListQuery {
            search: search_filter(&search()),
            role: (!role.is_empty()).then_some(role),
            blocked: blocked_filter(&blocked()),
            ..ListQuery::page(page())
        };
        server::api::list_users(query).await
    });

    let mut apply = move |id: String, action: UserAction| {
        spawn(async move {
            busy.set(Some(id.clone()));
            let result = match action {
                UserAction::Block(on) => server::api::set_user_blocked(id, on).await,
                UserAction::Approve(on) => server::api::set_driver_approval(id, on).await,
            };
            match result {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, ?action, "user updated");
                    toast.success(action.done_message().to_string(), ToastOptions::new());
                    users.restart();
                }
                Err(e) => toast.error(
                    AppError::friendly_message(&e.to_string()),
                    ToastOptions::new(),
                ),
            }
            busy.set(None);
        });
    };

    rsx! {
        PageHeader { title: "Users", subtitle: "Riders, drivers and administrators." }

        div { class: "list-filters",
            Input {
                label: "Search",
                placeholder: "Name or email",
                value: search(),
                on_input: move |evt: FormEvent| {
                    search.set(evt.value());
                    page.set(1);
                },
            }
            FormSelect {
                label: "Role",
                value: role(),
                onchange: move |evt: Event<FormData>| {
                    role.set(evt.value());
                    page.set(1);
                },
                option { value: "", "Any role" }
                for r in Role::DASHBOARD_ROLES {
                    option { value: r.as_str(), "{r.label()}" }
                }
            }
            FormSelect {
                label: "Account",
                value: blocked(),
                onchange: move |evt: Event<FormData>| {
                    blocked.set(evt.value());
                    page.set(1);
                },
                option { value: "", "Any" }
                option { value: "false", "Active" }
                option { value: "true", "Blocked" }
            }
        }

        match &*users.read() {
            None => rsx! { SkeletonRows { rows: 8 } },
            Some(Err(e)) => rsx! {
                Notice { tone: NoticeTone::Danger, title: "Could not load users",
                    {AppError::friendly_message(&e.to_string())}
                }
            },
            Some(Ok(result)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Role" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        if result.data.is_empty() {
                            DataTableEmpty { columns: 5, message: "No users match these filters." }
                        }
                        for user in result.data.iter() {
                            UserRow {
                                key: "{user.id}",
                                user: user.clone(),
                                busy: busy().as_deref() == Some(user.id.as_str()),
                                on_action: move |(id, action)| apply(id, action),
                            }
                        }
                    }
                }
                Pagination { page, total_pages: result.meta.total_pages, total: result.meta.total }
            },
        }
    }
}

#[component]
fn UserRow(user: SessionUser, busy: bool, on_action: EventHandler<(String, UserAction)>) -> Element {
    let is_driver = user.role == Role::Driver;
    let is_admin = user.role == Role::Admin;
    let block_id = user.id.clone();
    let approve_id = user.id.clone();
    let blocked = user.is_blocked;
    let approved = user.is_approved;

    rsx! {
        DataTableRow {
            DataTableCell { "{user.name}" }
            DataTableCell { "{user.email}" }
            DataTableCell { Badge { variant: BadgeVariant::Outline, "{user.role.label()}" } }
            DataTableCell {
                if blocked {
                    Badge { variant: BadgeVariant::Destructive, "Blocked" }
                } else if is_driver && !approved {
                    Badge { variant: BadgeVariant::Warning, "Pending" }
                } else {
                    Badge { variant: BadgeVariant::Success, "Active" }
                }
            }
            DataTableCell {
                div { class: "row-actions",
                    if is_driver {
                        Button {
                            size: ButtonSize::Small,
                            variant: if approved { ButtonVariant::Outline } else { ButtonVariant::Primary },
                            disabled: busy,
                            onclick: move |_| on_action.call((approve_id.clone(), UserAction::Approve(!approved))),
                            if approved { "Revoke approval" } else { "Approve" }
                        }
                    }
                    if !is_admin {
                        Button {
                            size: ButtonSize::Small,
                            variant: if blocked { ButtonVariant::Outline } else { ButtonVariant::Destructive },
                            disabled: busy,
                            onclick: move |_| on_action.call((block_id.clone(), UserAction::Block(!blocked))),
                            if blocked { "Unblock" } else { "Block" }
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

    #[test]
    fn blocked_filter_reads_select_values() {
        assert_eq!(blocked_filter(""), None);
        assert_eq!(blocked_filter("true"), Some(true));
        assert_eq!(blocked_filter("false"), Some(false));
    }

    #[test]
    fn actions_describe_their_outcome() {
        assert_eq!(UserAction::Block(false).done_message(), "User unblocked");
        assert_eq!(UserAction::Approve(true).done_message(), "Driver approved");
    }
}
