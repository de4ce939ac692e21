use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// Labelled on/off switch, used for the driver's availability control.
///
/// The caller owns the state: `on_change` receives the requested value and
/// `checked` should follow once the change has been confirmed.
#[component]
pub fn ToggleSwitch(
    checked: bool,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "switch-field", "data-disabled": disabled,
            prim::Switch {
                class: "switch",
                checked: Some(checked),
                disabled,
                on_checked_change: move |value: bool| on_change.call(value),
                prim::SwitchThumb { class: "switch-thumb" }
            }
            if !label.is_empty() {
                span { class: "switch-label", "{label}" }
            }
        }
    }
}
