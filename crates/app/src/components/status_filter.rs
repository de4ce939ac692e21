use dioxus::prelude::*;
use shared_types::RideStatus;
use shared_ui::FormSelect;

/// Ride status dropdown for list filters. An empty value means "any status".
#[component]
pub fn StatusFilter(mut status: Signal<String>, mut page: Signal<u32>) -> Element {
    rsx! {
        FormSelect {
            label: "Status",
            value: status(),
            onchange: move |evt: Event<FormData>| {
                status.set(evt.value());
                page.set(1);
            },
            option { value: "", "Any status" }
            for s in RideStatus::ALL {
                option { value: s.as_str(), "{s.label()}" }
            }
        }
    }
}
