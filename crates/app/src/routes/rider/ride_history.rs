use dioxus::prelude::*;
use shared_types::{party_name, AppError, ListQuery};
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, Notice, NoticeTone, PageHeader, Pagination, SkeletonRows,
};

use crate::components::{RideStatusBadge, StatusFilter};
use crate::format_helpers::{format_datetime, format_km, format_money};

#[component]
pub fn RideHistory() -> Element {
    let page = use_signal(|| 1u32);
    let status = use_signal(String::new);

    let rides = use_resource(move || async move {
        let status = status();
        let query = ListQuery {
            status: (!status.is_empty()).then_some(status),
            ..ListQuery::page(page())
        };
        server::api::my_rides(query).await
    });

    rsx! {
        PageHeader { title: "Ride History", subtitle: "Every ride you have requested." }

        div { class: "list-filters",
            StatusFilter { status, page }
        }

        match &*rides.read() {
            None => rsx! { SkeletonRows { rows: 6 } },
            Some(Err(e)) => rsx! {
                Notice { tone: NoticeTone::Danger, title: "Could not load rides",
                    {AppError::friendly_message(&e.to_string())}
                }
            },
            Some(Ok(result)) => rsx! {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Requested" }
                        DataTableColumn { "Route" }
                        DataTableColumn { "Driver" }
                        DataTableColumn { "Status" }
                        DataTableColumn { numeric: true, "Distance" }
                        DataTableColumn { numeric: true, "Fare" }
                    }
                    DataTableBody {
                        if result.data.is_empty() {
                            DataTableEmpty { columns: 6, message: "No rides yet." }
                        }
                        for ride in result.data.iter() {
                            DataTableRow { key: "{ride.id}",
                                DataTableCell { {format_datetime(ride.created_at)} }
                                DataTableCell {
                                    span { class: "ride-route",
                                        "{ride.pickup.address} \u{2192} {ride.destination.address}"
                                    }
                                }
                                DataTableCell { "{party_name(ride.driver.as_ref())}" }
                                DataTableCell { RideStatusBadge { status: ride.status } }
                                DataTableCell { numeric: true, {format_km(ride.distance_km)} }
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
