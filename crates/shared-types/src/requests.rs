use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

use crate::{Role, VehicleType};

/// Login form payload for `POST auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
}

/// Vehicle fields collected when a driver signs up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct VehicleInput {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Vehicle model is required"))
    )]
    pub model: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Plate number is required"))
    )]
    pub plate_number: String,
    pub vehicle_type: VehicleType,
}

/// Sign-up form payload for `POST users/register`.
///
/// Only riders and drivers can self-register. Drivers must supply a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
#[cfg_attr(
    feature = "validation",
    validate(schema(function = "validate_registration", skip_on_field_errors = false))
)]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "validation", validate(nested))]
    pub vehicle: Option<VehicleInput>,
}

#[cfg(feature = "validation")]
fn validate_registration(req: &RegisterRequest) -> Result<(), validator::ValidationError> {
    match req.role {
        Role::Rider => Ok(()),
        Role::Driver if req.vehicle.is_some() => Ok(()),
        Role::Driver => {
            let mut err = validator::ValidationError::new("vehicle_required");
            err.message = Some("Drivers must provide vehicle details".into());
            Err(err)
        }
        _ => {
            let mut err = validator::ValidationError::new("role");
            err.message = Some("Choose rider or driver".into());
            Err(err)
        }
    }
}

/// Profile edit payload for `PATCH users/updateOwnProfile`.
///
/// `None` fields are left unchanged by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))
    )]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 7, max = 20, message = "Phone must be 7-20 characters"))
    )]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UpdateProfileRequest {
    /// Build a patch from raw form input. Blank fields become `None`.
    pub fn from_form(name: &str, phone: &str, address: &str) -> Self {
        fn non_blank(s: &str) -> Option<String> {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        }
        Self {
            name: non_blank(name),
            phone: non_blank(phone),
            address: non_blank(address),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.address.is_none()
    }
}

/// Payload for `POST users/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
#[cfg_attr(
    feature = "validation",
    validate(schema(function = "validate_password_change", skip_on_field_errors = false))
)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub new_password: String,
    #[serde(default, skip_serializing)]
    #[cfg_attr(
        feature = "validation",
        validate(must_match(other = "new_password", message = "Passwords do not match"))
    )]
    pub confirm_password: String,
}

#[cfg(feature = "validation")]
fn validate_password_change(req: &ChangePasswordRequest) -> Result<(), validator::ValidationError> {
    if req.old_password == req.new_password {
        let mut err = validator::ValidationError::new("same_password");
        err.message = Some("New password must differ from the current one".into());
        return Err(err);
    }
    Ok(())
}

/// Contact form submission from the public site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ContactMessage {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 10, max = 2000, message = "Message must be 10-2000 characters"))
    )]
    pub message: String,
}

/// Body of `PATCH drivers/availability`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityUpdate {
    pub is_online: bool,
}

/// Body of `PATCH users/{id}/block`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockUpdate {
    pub is_blocked: bool,
}

/// Body of `PATCH drivers/{id}/approval`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalUpdate {
    pub is_approved: bool,
}

/// Generic message response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
