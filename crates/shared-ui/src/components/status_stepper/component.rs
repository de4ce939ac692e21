use dioxus::prelude::*;

/// Horizontal progress indicator over a fixed list of steps.
///
/// Steps before `current` render as done, `current` as active, the rest as
/// pending. With `halted` set (a cancelled ride) every step after the last
/// completed one renders as skipped.
#[component]
pub fn StatusStepper(
    steps: Vec<String>,
    current: Option<usize>,
    #[props(default = false)] halted: bool,
) -> Element {
    rsx! {
        ol { class: "status-stepper", "data-halted": if halted { "true" } else { "false" },
            for (i, step) in steps.iter().enumerate() {
                li {
                    key: "{i}",
                    class: "status-step",
                    "data-state": step_state(i, current, halted),
                    span { class: "status-step-marker", "{i + 1}" }
                    span { class: "status-step-label", "{step}" }
                }
            }
        }
    }
}

fn step_state(index: usize, current: Option<usize>, halted: bool) -> &'static str {
    match current {
        Some(c) if index < c => "done",
        Some(c) if index == c && !halted => "active",
        _ if halted => "skipped",
        _ => "pending",
    }
}
