use dioxus::prelude::*;
use shared_types::{AppError, Role};
use shared_ui::{Notice, NoticeTone, PageHeader, SkeletonRows, StatGrid, StatTile};

use crate::format_helpers::{format_money, format_percent};
use crate::routes::Route;

/// Platform totals for administrators.
#[component]
pub fn Overview() -> Element {
    let stats = use_resource(move || async move { server::api::admin_overview().await });

    rsx! {
        PageHeader { title: "Overview", subtitle: "Platform activity at a glance." }

        match &*stats.read() {
            None => rsx! { SkeletonRows { rows: 4 } },
            Some(Err(e)) => rsx! {
                Notice { tone: NoticeTone::Danger, title: "Could not load statistics",
                    {AppError::friendly_message(&e.to_string())}
                }
            },
            Some(Ok(s)) => rsx! {
                if s.pending_drivers > 0 {
                    Notice { tone: NoticeTone::Warning, title: "Drivers awaiting approval",
                        "{s.pending_drivers} driver account(s) need review. "
                        Link { to: Route::area(Role::Admin, "users-management"), "Review drivers" }
                    }
                }
                StatGrid {
                    StatTile { label: "Users", value: "{s.total_users}",
                        hint: "{s.total_riders} riders \u{00b7} {s.total_drivers} drivers" }
                    StatTile { label: "Pending drivers", value: "{s.pending_drivers}" }
                    StatTile { label: "Rides", value: "{s.total_rides}",
                        hint: "{s.completed_rides} completed" }
                    StatTile { label: "Completion rate", value: format_percent(s.completion_rate()) }
                    StatTile { label: "Revenue", value: format_money(s.total_revenue) }
                }
            },
        }
    }
}
