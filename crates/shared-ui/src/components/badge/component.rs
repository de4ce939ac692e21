use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline pill for roles, ride statuses and account flags. `dot` adds a
/// pulsing marker for states that are still changing, like a ride in transit.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default = false)] dot: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "badge", None, false),
            Attribute::new("data-style", variant.class(), None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { ..merged,
            if dot {
                span { class: "badge-dot", "aria-hidden": "true" }
            }
            {children}
        }
    }
}
