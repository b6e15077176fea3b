use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::double_option;
use crate::entity::web_setting;
use crate::error::AppError;

/// Site name used when the settings row is first created.
pub const DEFAULT_SITE_NAME: &str = "Service Marketplace";

#[derive(Serialize, utoipa::ToSchema)]
pub struct SettingsResponse {
    #[schema(example = "Service Marketplace")]
    pub site_name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    /// When set, the public site shows a maintenance page.
    pub maintenance_mode: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<web_setting::Model> for SettingsResponse {
    fn from(m: web_setting::Model) -> Self {
        Self {
            site_name: m.site_name,
            contact_email: m.contact_email,
            contact_phone: m.contact_phone,
            address: m.address,
            maintenance_mode: m.maintenance_mode,
            updated_at: m.updated_at,
        }
    }
}

/// Partial update. Nullable fields distinguish "absent" from `null`.
#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateSettingsRequest {
    pub site_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub contact_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub contact_phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    pub maintenance_mode: Option<bool>,
}

pub fn validate_update_settings(payload: &UpdateSettingsRequest) -> Result<(), AppError> {
    if let Some(ref name) = payload.site_name {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > 128 {
            return Err(AppError::Validation(
                "Site name must be 1-128 characters".into(),
            ));
        }
    }
    if let Some(Some(ref email)) = payload.contact_email
        && !email.contains('@')
    {
        return Err(AppError::Validation(
            "Contact email must be an email address".into(),
        ));
    }
    Ok(())
}
