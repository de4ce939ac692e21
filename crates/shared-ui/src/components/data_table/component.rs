use dioxus::prelude::*;

/// Horizontally scrollable table used by the ride and user lists.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// `thead > tr` wrapper for column headers.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(
    #[props(default = false)] numeric: bool,
    children: Element,
) -> Element {
    rsx! {
        th { class: if numeric { "numeric" } else { "" }, {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(
    #[props(default = false)] numeric: bool,
    children: Element,
) -> Element {
    rsx! {
        td { class: if numeric { "numeric" } else { "" }, {children} }
    }
}

/// Full-width row shown when a list has no entries.
#[component]
pub fn DataTableEmpty(columns: usize, message: String) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}", "{message}" }
        }
    }
}
