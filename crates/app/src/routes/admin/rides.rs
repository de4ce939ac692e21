use dioxus::prelude::*;
use shared_types::{party_name, AppError, ListQuery};
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, Input, Notice, NoticeTone, PageHeader, Pagination, SkeletonRows,
};

use super::search_filter;
use crate::components::{RideStatusBadge, StatusFilter};
use crate::format_helpers::{format_datetime, format_money};

/// Every ride on the platform, filterable by status.
#[component]
pub fn RidesManagement() -> Element {
    let mut page = use_signal(|| 1u32);
    let mut search = use_signal(String::new);
    let status = use_signal(String::new);

    let rides = use_resource(move || async move {
        let status = status();
        let query = ListQuery {
            search: search_filter(&search()),
            status: (!status.is_empty()).then_some(status),
            ..ListQuery::page(page())
        };
        server::api::list_rides(query).await
    });

    rsx! {
        PageHeader { title: "Rides", subtitle: "All ride requests across the platform." }

        div { class: "list-filters",
            Input {
                label: "Search",
                placeholder: "Address, rider or driver",
                value: search(),
                on_input: move |evt: FormEvent| {
                    search.set(evt.value());
                    page.set(1);
                },
            }
            StatusFilter { status, page }
        }

        match &*rides.read() {
            None => rsx! { SkeletonRows { rows: 8 } },
            Some(Err(e)) => rsx! {
                Notice { tone: NoticeTone::Danger, title: "Could not load rides",
                    {AppError::friendly_message(&e.to_string())}
                }
            },
            Some(Ok(result)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Requested" }
                        DataTableColumn { "Rider" }
                        DataTableColumn { "Driver" }
                        DataTableColumn { "Route" }
                        DataTableColumn { "Status" }
                        DataTableColumn { numeric: true, "Fare" }
                    }
                    DataTableBody {
                        if result.data.is_empty() {
                            DataTableEmpty { columns: 6, message: "No rides match these filters." }
                        }
                        for ride in result.data.iter() {
                            DataTableRow { key: "{ride.id}",
                                DataTableCell { {format_datetime(ride.created_at)} }
                                DataTableCell { "{party_name(ride.rider.as_ref())}" }
                                DataTableCell { "{party_name(ride.driver.as_ref())}" }
                                DataTableCell {
                                    span { class: "ride-route",
                                        "{ride.pickup.address} \u{2192} {ride.destination.address}"
                                    }
                                }
                                DataTableCell { RideStatusBadge { status: ride.status } }
                                DataTableCell { numeric: true, {format_money(ride.fare)} }
                            }
                        }
                    }
                }
                Pagination { page, total_pages: result.meta.total_pages, total: result.meta.total }
            },
        }
    }
}
