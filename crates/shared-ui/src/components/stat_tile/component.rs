use dioxus::prelude::*;

/// Single metric on an overview grid.
#[component]
pub fn StatTile(label: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        div { class: "stat-tile",
            span { class: "stat-tile-label", "{label}" }
            strong { class: "stat-tile-value", "{value}" }
            if !hint.is_empty() {
                span { class: "stat-tile-hint", "{hint}" }
            }
        }
    }
}

/// Responsive grid holding [`StatTile`]s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_is_optional() {
        let html = dioxus_ssr::render_element(rsx! {
            StatTile { label: "Total rides", value: "128" }
        });
        assert!(html.contains("Total rides"));
        assert!(html.contains("128"));
        assert!(!html.contains("stat-tile-hint"));
    }

    #[test]
    fn hint_renders_when_given() {
        let html = dioxus_ssr::render_element(rsx! {
            StatTile { label: "Drivers", value: "12", hint: "3 awaiting approval" }
        });
        assert!(html.contains("3 awaiting approval"));
    }
}
