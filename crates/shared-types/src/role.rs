use serde::{Deserialize, Serialize};
use std::fmt;

/// Permission scope attached to every RideShare account.
///
/// - `Admin`: platform operators; manage users, drivers and rides.
/// - `Driver`: accept and drive ride requests.
/// - `Rider`: book rides.
/// - `Guest`: signed-up account without a dashboard.
/// - `Public`: anonymous or unknown role. Marketing pages only.
///
/// The role comes from the backend user record and is never changed by the client.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "ADMIN", alias = "Admin")]
    Admin,
    #[serde(alias = "DRIVER", alias = "Driver")]
    Driver,
    #[serde(alias = "RIDER", alias = "Rider")]
    Rider,
    #[serde(alias = "GUEST", alias = "Guest")]
    Guest,
    #[default]
    #[serde(alias = "PUBLIC", alias = "Public")]
    Public,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Driver,
        Role::Rider,
        Role::Guest,
        Role::Public,
    ];

    /// Roles that own a guarded dashboard subtree.
    pub const DASHBOARD_ROLES: [Role; 3] = [Role::Admin, Role::Driver, Role::Rider];

    /// Parse a role tag. Unknown values default to Public.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "driver" => Role::Driver,
            "rider" => Role::Rider,
            "guest" => Role::Guest,
            _ => Role::Public,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Driver => "driver",
            Role::Rider => "rider",
            Role::Guest => "guest",
            Role::Public => "public",
        }
    }

    /// Human-readable label for badges and headers.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Driver => "Driver",
            Role::Rider => "Rider",
            Role::Guest => "Guest",
            Role::Public => "Public",
        }
    }

    pub fn is_dashboard_role(&self) -> bool {
        Self::DASHBOARD_ROLES.contains(self)
    }

    /// URL prefix of the role's dashboard subtree, if it has one.
    pub fn base_path(&self) -> Option<&'static str> {
        match self {
            Role::Admin => Some("/admin"),
            Role::Driver => Some("/driver"),
            Role::Rider => Some("/rider"),
            Role::Guest | Role::Public => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_or_default_known_values() {
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("DRIVER"), Role::Driver);
        assert_eq!(Role::from_str_or_default(" Rider "), Role::Rider);
        assert_eq!(Role::from_str_or_default("guest"), Role::Guest);
    }

    #[test]
    fn from_str_or_default_unknown_falls_to_public() {
        assert_eq!(Role::from_str_or_default(""), Role::Public);
        assert_eq!(Role::from_str_or_default("superuser"), Role::Public);
    }

    #[test]
    fn as_str_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_str_or_default(role.as_str()), role);
        }
    }

    #[test]
    fn deserializes_lower_and_upper_case_tags() {
        let lower: Role = serde_json::from_str(r#""driver""#).unwrap();
        let upper: Role = serde_json::from_str(r#""ADMIN""#).unwrap();
        assert_eq!(lower, Role::Driver);
        assert_eq!(upper, Role::Admin);
    }

    #[test]
    fn only_three_roles_have_dashboards() {
        let with_base: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|r| r.base_path().is_some())
            .collect();
        assert_eq!(with_base, vec![Role::Admin, Role::Driver, Role::Rider]);
        assert!(!Role::Guest.is_dashboard_role());
        assert!(!Role::Public.is_dashboard_role());
    }
}
