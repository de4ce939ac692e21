use dioxus::prelude::*;

/// Open/closed state shared by the dashboard sidebar and its trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

fn with_class(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Provides sidebar state to the dashboard shell.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

/// The navigation column. On narrow viewports it overlays the page and a
/// backdrop closes it.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let mut merged = with_class("sidebar", attributes);
    merged.push(Attribute::new(
        "data-state",
        if is_open { "open" } else { "closed" },
        None,
        false,
    ));

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-header", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-content", attributes);
    rsx! {
        nav { ..merged, {children} }
    }
}

#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = with_class("sidebar-footer", attributes);
    rsx! {
        div { ..merged, {children} }
    }
}

/// Labelled section of menu entries.
#[component]
pub fn SidebarGroup(label: String, children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group",
            if !label.is_empty() {
                div { class: "sidebar-group-label", "{label}" }
            }
            {children}
        }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

/// Menu entry body. Clicking it closes the sidebar when it is overlaid on
/// a narrow viewport; wrap it in a router `Link` for navigation.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let mut merged = with_class("sidebar-menu-button", attributes);
    merged.push(Attribute::new(
        "data-active",
        if active { "true" } else { "false" },
        None,
        false,
    ));

    rsx! {
        span {
            onclick: move |_| state.set(SidebarState { open: false }),
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let merged = with_class("sidebar-trigger", attributes);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            ..merged,
            {children}
        }
    }
}

/// Main column next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
