use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// Page-number pagination with Previous/Next buttons. `page` is 1-based.
#[component]
pub fn Pagination(mut page: Signal<u32>, total_pages: u32, total: u64) -> Element {
    let current = (*page.read()).max(1);
    let last = total_pages.max(1);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: current <= 1,
                onclick: move |_| {
                    let p = *page.read();
                    page.set(p.saturating_sub(1).max(1));
                },
                "Previous"
            }
            span { class: "pagination-info", "Page {current} of {last} ({total} total)" }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: current >= last,
                onclick: move |_| {
                    let p = *page.read();
                    page.set(p + 1);
                },
                "Next"
            }
        }
    }
}
