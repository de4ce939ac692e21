use dioxus::prelude::*;

/// Pulsing placeholder shown while data loads.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// A stack of `rows` skeleton lines, for table and card bodies.
#[component]
pub fn SkeletonRows(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "skeleton-rows",
            for i in 0..rows {
                Skeleton { key: "{i}", class: "skeleton-line" }
            }
        }
    }
}
