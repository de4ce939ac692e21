use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCar, LdHistory, LdLayoutDashboard, LdLogOut, LdMapPin, LdNavigation, LdRoute, LdUser,
    LdUsers, LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::{resolve, role_routes, sidebar_items, NavIcon, PageKey, Role};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Sidebar, SidebarContent,
    SidebarFooter, SidebarGroup, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarProvider, SidebarTrigger,
};

use super::not_found::MissingPage;
use super::{admin, driver, profile, rider, Route};
use crate::auth::use_auth;

/// Dashboard layout shared by the rider, driver and admin subtrees.
///
/// Resolves `segments` against the role's route table and renders the
/// matching page. An empty sub-path forwards to the first sidebar entry.
#[component]
pub fn DashboardShell(role: Role, segments: Vec<String>) -> Element {
    let mut auth = use_auth();
    let routes = role_routes(role);
    let page = resolve(&routes, &segments);

    if segments.is_empty() {
        navigator().replace(Route::home_for(role));
        return rsx! {};
    }

    let title = page.map(|p| p.title()).unwrap_or("Page not found");
    let user = auth.current_user.read().clone();
    let (name, email, initials) = user
        .as_ref()
        .map(|u| (u.name.clone(), u.email.clone(), u.initials()))
        .unwrap_or_default();

    let sign_out = move |_: MouseEvent| {
        spawn(async move {
            if let Err(e) = server::api::logout().await {
                tracing::warn!(error = %e, "logout failed");
            }
            auth.clear_auth();
            navigator().push(Route::Login { redirect: None });
        });
    };

    rsx! {
        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    Link { to: Route::Home {}, class: "sidebar-brand",
                        span { class: "sidebar-brand-mark", Icon::<LdCar> { icon: LdCar, width: 20, height: 20 } }
                        span { class: "sidebar-brand-name", "RideShare" }
                    }
                }

                SidebarContent {
                    SidebarGroup { label: "{role.label()}",
                        SidebarMenu {
                            for item in sidebar_items(role) {
                                SidebarMenuItem { key: "{item.url}",
                                    Link { to: Route::area(role, item.url),
                                        SidebarMenuButton { active: page == Some(item.page),
                                            NavIconView { icon: item.icon }
                                            "{item.title}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    SidebarGroup { label: "Account",
                        SidebarMenu {
                            SidebarMenuItem {
                                Link { to: Route::area(role, "profile"),
                                    SidebarMenuButton {
                                        active: matches!(page, Some(PageKey::ProfileView | PageKey::ProfileEdit)),
                                        NavIconView { icon: NavIcon::Profile }
                                        "Profile"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-user",
                        span { class: "sidebar-user-avatar", "{initials}" }
                        div { class: "sidebar-user-text",
                            span { class: "sidebar-user-name", "{name}" }
                            span { class: "sidebar-user-email", "{email}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: sign_out,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign out"
                    }
                }
            }

            SidebarInset {
                header { class: "navbar-bar",
                    SidebarTrigger {
                        span { class: "navbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "navbar-title", "{title}" }
                    div { class: "navbar-spacer" }
                    Badge { variant: BadgeVariant::Outline, "{role.label()}" }
                }

                div { class: "page-content",
                    {match page {
                        Some(key) => rsx! { PageView { page: key, role } },
                        None => rsx! { MissingPage { role, path: segments.join("/") } },
                    }}
                }
            }
        }
    }
}

/// Dispatch a resolved page key to its component.
#[component]
fn PageView(page: PageKey, role: Role) -> Element {
    match page {
        PageKey::BookRide => rsx! { rider::BookRide {} },
        PageKey::ActiveRide => rsx! { rider::ActiveRide {} },
        PageKey::RideHistory => rsx! { rider::RideHistory {} },
        PageKey::AvailableRides => rsx! { driver::AvailableRides {} },
        PageKey::CurrentTrip => rsx! { driver::CurrentTrip {} },
        PageKey::Earnings => rsx! { driver::Earnings {} },
        PageKey::AdminOverview => rsx! { admin::Overview {} },
        PageKey::UsersManagement => rsx! { admin::UsersManagement {} },
        PageKey::RidesManagement => rsx! { admin::RidesManagement {} },
        PageKey::ProfileView => rsx! { profile::ProfileView { role } },
        PageKey::ProfileEdit => rsx! { profile::ProfileEdit { role } },
    }
}

#[component]
fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Car => rsx! { Icon::<LdCar> { icon: LdCar, width: 18, height: 18 } },
        NavIcon::MapPin => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 18, height: 18 } },
        NavIcon::History => rsx! { Icon::<LdHistory> { icon: LdHistory, width: 18, height: 18 } },
        NavIcon::Navigation => rsx! { Icon::<LdNavigation> { icon: LdNavigation, width: 18, height: 18 } },
        NavIcon::Wallet => rsx! { Icon::<LdWallet> { icon: LdWallet, width: 18, height: 18 } },
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Rides => rsx! { Icon::<LdRoute> { icon: LdRoute, width: 18, height: 18 } },
        NavIcon::Profile => rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } },
    }
}
