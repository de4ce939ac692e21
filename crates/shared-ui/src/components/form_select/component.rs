use dioxus::prelude::*;

/// Labelled native `<select>`; children are `option` elements.
///
/// The label wraps the control so clicking it focuses the select. With an
/// empty `label` only the select is rendered.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    let control = rsx! {
        select {
            class: "form-select",
            value,
            disabled,
            onchange: move |evt| {
                if let Some(cb) = onchange.as_ref() {
                    cb.call(evt);
                }
            },
            {children}
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        if label.is_empty() {
            div { class: "form-select-wrapper", {control} }
        } else {
            label { class: "form-select-wrapper",
                span { class: "form-select-label", "{label}" }
                {control}
            }
        }
    }
}
