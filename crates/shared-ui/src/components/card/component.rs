use dioxus::prelude::*;

/// Merge a fixed class with caller attributes.
fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Bordered surface used for forms, ride summaries and profile details.
///
/// Compose with the section components below in order: header (title,
/// description), content, footer.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { ..merged, {children} }
    }
}

#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-header", attributes);

    rsx! {
        header { ..merged, {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-title", attributes);

    rsx! {
        h3 { ..merged, {children} }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-description", attributes);

    rsx! {
        p { ..merged, {children} }
    }
}

#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-content", attributes);

    rsx! {
        div { ..merged, {children} }
    }
}

/// Footer row, usually holding the card's submit or cancel buttons.
#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("card-footer", attributes);

    rsx! {
        footer { ..merged, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_class_is_merged_with_base_class() {
        let html = dioxus_ssr::render_element(rsx! {
            Card { class: "ride-summary",
                CardHeader { CardTitle { "Trip" } }
                CardContent { "Body" }
            }
        });
        assert!(html.contains("ride-summary"));
        assert!(html.contains(r#"<h3 class="card-title">Trip</h3>"#));
        assert!(html.contains("card-content"));
    }
}
