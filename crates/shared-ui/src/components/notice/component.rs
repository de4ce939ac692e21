use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NoticeTone {
    #[default]
    Info,
    Warning,
    Danger,
}

impl NoticeTone {
    fn class(&self) -> &'static str {
        match self {
            NoticeTone::Info => "info",
            NoticeTone::Warning => "warning",
            NoticeTone::Danger => "danger",
        }
    }
}

/// Full-width banner for account states such as a pending driver approval.
#[component]
pub fn Notice(
    #[props(default)] tone: NoticeTone,
    title: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        div { class: "notice", role: "status", "data-tone": tone.class(),
            strong { class: "notice-title", "{title}" }
            div { class: "notice-body", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_is_rendered_as_data_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            Notice { tone: NoticeTone::Warning, title: "Awaiting approval", "An admin will review your account." }
        });
        assert!(html.contains(r#"data-tone="warning""#));
        assert!(html.contains("Awaiting approval"));
        assert!(html.contains("An admin will review your account."));
    }
}
