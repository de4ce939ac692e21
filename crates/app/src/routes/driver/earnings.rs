use dioxus::prelude::*;
use shared_types::{AppError, DriverEarnings};
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, Notice, NoticeTone, PageHeader, SkeletonRows, StatGrid, StatTile,
};

use crate::format_helpers::{format_datetime, format_money};

fn average_fare(earnings: &DriverEarnings) -> f64 {
    if earnings.completed_rides > 0 {
        earnings.total_earnings / earnings.completed_rides as f64
    } else {
        0.0
    }
}

#[component]
pub fn Earnings() -> Element {
    let earnings = use_resource(move || async move { server::api::driver_earnings().await });

    rsx! {
        PageHeader { title: "Earnings", subtitle: "Payouts from completed trips." }

        match &*earnings.read() {
            None => rsx! { SkeletonRows { rows: 4 } },
            Some(Err(e)) => rsx! {
                Notice { tone: NoticeTone::Danger, title: "Could not load earnings",
                    {AppError::friendly_message(&e.to_string())}
                }
            },
            Some(Ok(data)) => rsx! {
                StatGrid {
                    StatTile { label: "Total earned", value: format_money(data.total_earnings) }
                    StatTile { label: "Completed trips", value: "{data.completed_rides}" }
                    StatTile {
                        label: "Average per trip",
                        value: format_money(average_fare(data)),
                    }
                }

                h2 { class: "section-title", "History" }
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Completed" }
                        DataTableColumn { "Ride" }
                        DataTableColumn { numeric: true, "Amount" }
                    }
                    DataTableBody {
                        if data.history.is_empty() {
                            DataTableEmpty { columns: 3, message: "No completed trips yet." }
                        }
                        for entry in data.history.iter() {
                            DataTableRow { key: "{entry.ride_id}",
                                DataTableCell { {format_datetime(entry.completed_at)} }
                                DataTableCell { code { "{entry.ride_id}" } }
                                DataTableCell { numeric: true, {format_money(entry.amount)} }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_zero_without_trips() {
        let empty = DriverEarnings {
            total_earnings: 0.0,
            completed_rides: 0,
            history: vec![],
        };
        assert_eq!(average_fare(&empty), 0.0);
    }

    #[test]
    fn average_divides_total_by_trips() {
        let earnings = DriverEarnings {
            total_earnings: 90.0,
            completed_rides: 4,
            history: vec![],
        };
        assert_eq!(average_fare(&earnings), 22.5);
    }
}
