use serde::{Deserialize, Serialize};

use crate::{Role, VehicleType};

/// Vehicle registered by a driver account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    pub model: String,
    pub plate_number: String,
    #[serde(default)]
    pub vehicle_type: VehicleType,
}

/// Authenticated user returned by `GET users/me` (safe to send to client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleInfo>,
}

impl SessionUser {
    /// Two-letter initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }

    /// Drivers may only take rides once an admin approved them.
    pub fn can_drive(&self) -> bool {
        self.role == Role::Driver && self.is_approved && !self.is_blocked
    }
}

/// Token pair and user returned by `POST auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: SessionUser,
}

/// Response of `POST auth/refresh-token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}
