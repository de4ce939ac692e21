use dioxus::prelude::*;

/// Colour scheme, emitted as `data-style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Cancel, block and other irreversible actions.
    Destructive,
    Outline,
    Ghost,
}

/// Emitted as `data-size`. `Small` fits inside table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Regular,
    Large,
}

fn style_attr(variant: ButtonVariant) -> &'static str {
    use ButtonVariant::*;
    match variant {
        Primary => "primary",
        Secondary => "secondary",
        Destructive => "destructive",
        Outline => "outline",
        Ghost => "ghost",
    }
}

fn size_attr(size: ButtonSize) -> &'static str {
    match size {
        ButtonSize::Small => "sm",
        ButtonSize::Regular => "md",
        ButtonSize::Large => "lg",
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default = false)]
    pub disabled: bool,
    /// Disables the button and shows a spinner while a request is in flight.
    #[props(default = false)]
    pub loading: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let ButtonProps {
        variant,
        size,
        disabled,
        loading,
        onclick,
        attributes,
        children,
    } = props;

    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "button", None, false),
            Attribute::new("data-style", style_attr(variant), None, false),
            Attribute::new("data-size", size_attr(size), None, false),
        ],
        attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            disabled: disabled || loading,
            "aria-busy": "{loading}",
            onclick: move |evt| {
                match onclick.as_ref() {
                    Some(cb) if !loading => cb.call(evt),
                    _ => {}
                }
            },
            ..merged,
            if loading {
                span { class: "button-spinner" }
            }
            {children}
        }
    }
}
