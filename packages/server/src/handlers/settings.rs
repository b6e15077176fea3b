use axum::Json;
use axum::extract::State;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::instrument;

use crate::entity::web_setting::{self, SETTINGS_ID};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::settings::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Settings",
    operation_id = "getSettings",
    summary = "Get the site settings",
    description = "Returns the single settings row, creating it with defaults on first access. Requires `settings:view` permission.",
    responses(
        (status = 200, description = "Current settings", body = SettingsResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn get_settings(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    auth_user.require_permission("settings:view")?;

    let model = get_or_create(&state.db).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    patch,
    path = "/",
    tag = "Settings",
    operation_id = "updateSettings",
    summary = "Update the site settings",
    description = "Partially updates the settings using PATCH semantics. For nullable fields an explicit `null` clears the value and an absent field leaves it unchanged. Requires `settings:edit` permission.",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = SettingsResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload))]
pub async fn update_settings(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateSettingsRequest>,
) -> Result<Json<SettingsResponse>, AppError> {
    auth_user.require_permission("settings:edit")?;
    validate_update_settings(&payload)?;

    let existing = get_or_create(&state.db).await?;
    if payload == UpdateSettingsRequest::default() {
        return Ok(Json(existing.into()));
    }

    let mut active: web_setting::ActiveModel = existing.into();

    if let Some(ref name) = payload.site_name {
        active.site_name = Set(name.trim().to_string());
    }
    if let Some(email) = payload.contact_email {
        active.contact_email = Set(email);
    }
    if let Some(phone) = payload.contact_phone {
        active.contact_phone = Set(phone);
    }
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(flag) = payload.maintenance_mode {
        active.maintenance_mode = Set(flag);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&state.db).await?;
    Ok(Json(model.into()))
}

/// Load the settings row, inserting the defaults if it does not exist yet.
/// Concurrent first reads race on the insert; the loser's insert is a no-op.
async fn get_or_create<C: ConnectionTrait>(db: &C) -> Result<web_setting::Model, AppError> {
    if let Some(model) = web_setting::Entity::find_by_id(SETTINGS_ID).one(db).await? {
        return Ok(model);
    }

    let defaults = web_setting::ActiveModel {
        id: Set(SETTINGS_ID),
        site_name: Set(DEFAULT_SITE_NAME.to_string()),
        contact_email: Set(None),
        contact_phone: Set(None),
        address: Set(None),
        maintenance_mode: Set(false),
        updated_at: Set(chrono::Utc::now()),
    };

    match web_setting::Entity::insert(defaults)
        .on_conflict(
            OnConflict::column(web_setting::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
    {
        Ok(_) | Err(DbErr::RecordNotInserted) => {}
        Err(e) => return Err(e.into()),
    }

    web_setting::Entity::find_by_id(SETTINGS_ID)
        .one(db)
        .await?
        .ok_or_else(|| AppError::Internal("Settings row missing after insert".into()))
}
