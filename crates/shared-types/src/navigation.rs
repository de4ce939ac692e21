//! Per-role sidebar tables and the route generator built on top of them.
//!
//! Sidebar entries are static data. Each entry names its page through a
//! [`PageKey`] tag; the UI layer maps the tag to a component, so nothing
//! executable lives in these tables.

use serde::{Deserialize, Serialize};

use crate::Role;

/// Symbolic icon reference for a sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavIcon {
    Car,
    MapPin,
    History,
    Navigation,
    Wallet,
    Dashboard,
    Users,
    Rides,
    Profile,
}

/// Page reachable inside a role's dashboard subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageKey {
    // Rider
    BookRide,
    ActiveRide,
    RideHistory,
    // Driver
    AvailableRides,
    CurrentTrip,
    Earnings,
    // Admin
    AdminOverview,
    UsersManagement,
    RidesManagement,
    // Every dashboard role
    ProfileView,
    ProfileEdit,
}

impl PageKey {
    /// The role whose subtree owns this page. `None` for pages shared by all roles.
    pub fn owner(&self) -> Option<Role> {
        match self {
            PageKey::BookRide | PageKey::ActiveRide | PageKey::RideHistory => Some(Role::Rider),
            PageKey::AvailableRides | PageKey::CurrentTrip | PageKey::Earnings => {
                Some(Role::Driver)
            }
            PageKey::AdminOverview | PageKey::UsersManagement | PageKey::RidesManagement => {
                Some(Role::Admin)
            }
            PageKey::ProfileView | PageKey::ProfileEdit => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PageKey::BookRide => "Book a Ride",
            PageKey::ActiveRide => "Active Ride",
            PageKey::RideHistory => "Ride History",
            PageKey::AvailableRides => "Available Rides",
            PageKey::CurrentTrip => "Current Trip",
            PageKey::Earnings => "Earnings",
            PageKey::AdminOverview => "Overview",
            PageKey::UsersManagement => "Users",
            PageKey::RidesManagement => "Rides",
            PageKey::ProfileView => "Profile",
            PageKey::ProfileEdit => "Edit Profile",
        }
    }
}

/// A static navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub title: &'static str,
    /// Path relative to the role prefix, e.g. `book-ride` under `/rider`.
    pub url: &'static str,
    pub icon: NavIcon,
    pub page: PageKey,
}

pub const RIDER_SIDEBAR: &[SidebarItem] = &[
    SidebarItem {
        title: "Book a Ride",
        url: "book-ride",
        icon: NavIcon::Car,
        page: PageKey::BookRide,
    },
    SidebarItem {
        title: "Active Ride",
        url: "active-ride",
        icon: NavIcon::MapPin,
        page: PageKey::ActiveRide,
    },
    SidebarItem {
        title: "Ride History",
        url: "ride-history",
        icon: NavIcon::History,
        page: PageKey::RideHistory,
    },
];

pub const DRIVER_SIDEBAR: &[SidebarItem] = &[
    SidebarItem {
        title: "Available Rides",
        url: "available-rides",
        icon: NavIcon::Rides,
        page: PageKey::AvailableRides,
    },
    SidebarItem {
        title: "Current Trip",
        url: "current-trip",
        icon: NavIcon::Navigation,
        page: PageKey::CurrentTrip,
    },
    SidebarItem {
        title: "Earnings",
        url: "earnings",
        icon: NavIcon::Wallet,
        page: PageKey::Earnings,
    },
];

pub const ADMIN_SIDEBAR: &[SidebarItem] = &[
    SidebarItem {
        title: "Overview",
        url: "overview",
        icon: NavIcon::Dashboard,
        page: PageKey::AdminOverview,
    },
    SidebarItem {
        title: "Users",
        url: "users-management",
        icon: NavIcon::Users,
        page: PageKey::UsersManagement,
    },
    SidebarItem {
        title: "Rides",
        url: "rides-management",
        icon: NavIcon::Rides,
        page: PageKey::RidesManagement,
    },
];

/// Profile routes appended to every dashboard subtree. Not shown in the sidebar menu.
const PROFILE_ROUTES: &[(&str, PageKey)] = &[
    ("profile", PageKey::ProfileView),
    ("profile/edit", PageKey::ProfileEdit),
];

/// Sidebar table for a role. Roles without a dashboard get an empty table.
pub fn sidebar_items(role: Role) -> &'static [SidebarItem] {
    match role {
        Role::Rider => RIDER_SIDEBAR,
        Role::Driver => DRIVER_SIDEBAR,
        Role::Admin => ADMIN_SIDEBAR,
        Role::Guest | Role::Public => &[],
    }
}

/// Router entry produced from a sidebar item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub page: PageKey,
}

/// Convert sidebar items into router entries. Paths are trimmed of
/// surrounding whitespace and slashes; order is preserved.
pub fn generate_routes(items: &[SidebarItem]) -> Vec<RouteEntry> {
    items
        .iter()
        .map(|item| RouteEntry {
            path: normalize_path(item.url),
            page: item.page,
        })
        .collect()
}

/// Full route table of a role's subtree: sidebar routes followed by the
/// profile routes.
pub fn role_routes(role: Role) -> Vec<RouteEntry> {
    let mut routes = generate_routes(sidebar_items(role));
    if role.is_dashboard_role() {
        routes.extend(PROFILE_ROUTES.iter().map(|(path, page)| RouteEntry {
            path: (*path).to_string(),
            page: *page,
        }));
    }
    routes
}

/// Find the page for the path segments below a role prefix.
/// When two entries share a path, the last one wins.
pub fn resolve(routes: &[RouteEntry], segments: &[String]) -> Option<PageKey> {
    let wanted = normalize_path(&segments.join("/"));
    routes
        .iter()
        .rev()
        .find(|entry| entry.path == wanted)
        .map(|entry| entry.page)
}

/// The page a role lands on when visiting its bare prefix.
pub fn default_entry(role: Role) -> Option<&'static SidebarItem> {
    sidebar_items(role).first()
}

/// Absolute browser path of a page inside a role subtree, e.g. `/rider/book-ride`.
pub fn page_href(role: Role, page: PageKey) -> Option<String> {
    let base = role.base_path()?;
    role_routes(role)
        .into_iter()
        .find(|entry| entry.page == page)
        .map(|entry| format!("{base}/{}", entry.path))
}

fn normalize_path(raw: &str) -> String {
    raw.trim().trim_matches('/').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segs(path: &str) -> Vec<String> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    #[test]
    fn generate_routes_empty_input_yields_no_routes() {
        assert!(generate_routes(&[]).is_empty());
    }

    #[test]
    fn generate_routes_trims_whitespace() {
        let items = [SidebarItem {
            title: "X",
            url: " /x ",
            icon: NavIcon::Car,
            page: PageKey::BookRide,
        }];
        assert_eq!(
            generate_routes(&items),
            vec![RouteEntry {
                path: "x".to_string(),
                page: PageKey::BookRide
            }]
        );
    }

    #[test]
    fn generate_routes_preserves_table_order() {
        let paths: Vec<String> = generate_routes(DRIVER_SIDEBAR)
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, vec!["available-rides", "current-trip", "earnings"]);
    }

    #[test]
    fn every_sidebar_page_belongs_to_its_table_role() {
        for role in Role::DASHBOARD_ROLES {
            for entry in role_routes(role) {
                let owner = entry.page.owner();
                assert!(
                    owner.is_none() || owner == Some(role),
                    "{:?} wired into the {role} subtree",
                    entry.page
                );
            }
        }
    }

    #[test]
    fn roles_without_dashboard_have_no_routes() {
        assert!(role_routes(Role::Guest).is_empty());
        assert!(role_routes(Role::Public).is_empty());
    }

    #[test]
    fn resolve_finds_sidebar_and_profile_pages() {
        let routes = role_routes(Role::Admin);
        assert_eq!(
            resolve(&routes, &segs("users-management")),
            Some(PageKey::UsersManagement)
        );
        assert_eq!(
            resolve(&routes, &segs("profile/edit")),
            Some(PageKey::ProfileEdit)
        );
        assert_eq!(resolve(&routes, &segs("nope")), None);
    }

    #[test]
    fn resolve_duplicate_path_last_entry_wins() {
        let items = [
            SidebarItem {
                title: "First",
                url: "dup",
                icon: NavIcon::Car,
                page: PageKey::BookRide,
            },
            SidebarItem {
                title: "Second",
                url: "dup",
                icon: NavIcon::History,
                page: PageKey::RideHistory,
            },
        ];
        let routes = generate_routes(&items);
        assert_eq!(resolve(&routes, &segs("dup")), Some(PageKey::RideHistory));
    }

    #[test]
    fn default_entry_is_first_sidebar_item() {
        assert_eq!(default_entry(Role::Rider).unwrap().page, PageKey::BookRide);
        assert_eq!(
            default_entry(Role::Driver).unwrap().page,
            PageKey::AvailableRides
        );
        assert_eq!(
            default_entry(Role::Admin).unwrap().page,
            PageKey::AdminOverview
        );
        assert!(default_entry(Role::Guest).is_none());
    }

    #[test]
    fn page_href_joins_role_prefix() {
        assert_eq!(
            page_href(Role::Rider, PageKey::RideHistory).as_deref(),
            Some("/rider/ride-history")
        );
        assert_eq!(
            page_href(Role::Driver, PageKey::ProfileEdit).as_deref(),
            Some("/driver/profile/edit")
        );
        assert_eq!(page_href(Role::Rider, PageKey::Earnings), None);
        assert_eq!(page_href(Role::Public, PageKey::ProfileView), None);
    }
}
