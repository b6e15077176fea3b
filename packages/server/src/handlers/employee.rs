use axum::Json;
use axum::extract::{Path, Query, State};
use sea_orm::prelude::Expr;
use sea_orm::sea_query::{Func, LikeExpr};
use sea_orm::*;
use tracing::instrument;

use super::deletion::delete_entity;
use crate::deletion::EntityKind;
use crate::entity::employee;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::employee::*;
use crate::models::deletion::DeleteResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Employees",
    operation_id = "listEmployees",
    summary = "List employees with pagination and search",
    description = "Returns a paginated list of employees, newest first. Requires `employee:view` permission. `search` matches name or position case-insensitively.",
    params(ListQuery),
    responses(
        (status = 200, description = "List of employees", body = EmployeeListResponse),
        (status = 400, description = "Page out of range (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query))]
pub async fn list_employees(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<EmployeeListResponse>, AppError> {
    auth_user.require_permission("employee:view")?;

    let (page, per_page, offset) = query.page_window()?;
    let mut select = employee::Entity::find();

    if let Some(pattern) = query.search_pattern() {
        let pattern = pattern.to_lowercase();
        select = select.filter(
            Condition::any()
                .add(
                    Expr::expr(Func::lower(Expr::col(employee::Column::Name)))
                        .like(LikeExpr::new(pattern.clone()).escape('\\')),
                )
                .add(
                    Expr::expr(Func::lower(Expr::col(employee::Column::Position)))
                        .like(LikeExpr::new(pattern).escape('\\')),
                ),
        );
    }

    let total = select
        .clone()
        .paginate(&state.db, per_page)
        .num_items()
        .await?;

    let data = select
        .order_by_desc(employee::Column::CreatedAt)
        .order_by_asc(employee::Column::Id)
        .offset(Some(offset))
        .limit(Some(per_page))
        .all(&state.db)
        .await?
        .into_iter()
        .map(EmployeeResponse::from)
        .collect();

    Ok(Json(EmployeeListResponse {
        data,
        pagination: Pagination::new(page, per_page, total),
    }))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Employees",
    operation_id = "getEmployee",
    summary = "Get an employee by ID",
    description = "Requires `employee:view` permission.",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = EmployeeResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Employee not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn get_employee(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, AppError> {
    auth_user.require_permission("employee:view")?;

    let model = employee::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".into()))?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Employees",
    operation_id = "deleteEmployee",
    summary = "Delete an employee and everything that hangs off it",
    description = "Deletes the employee's hosted profile image, every object under `employeeImage/{id}/`, the linked login principal, and finally the employee row. Image and principal cleanup is best effort: failures are logged and do not fail the request. Requires `employee:delete` permission.",
    params(("id" = String, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = DeleteResponse),
        (status = 400, description = "Invalid employee ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Employee not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Stores not configured (CONFIGURATION_ERROR) or record delete failed (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn delete_employee(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    auth_user.require_permission("employee:delete")?;
    delete_entity(&state, EntityKind::Employee, Some(&id)).await
}

#[utoipa::path(
    delete,
    path = "/",
    tag = "Employees",
    operation_id = "deleteEmployeeWithoutId",
    summary = "Reject an employee delete that names no employee",
    description = "Always fails with `Employee ID missing` once stores are configured. Requires `employee:delete` permission.",
    responses(
        (status = 400, description = "Employee ID missing (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 500, description = "Stores not configured (CONFIGURATION_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn reject_missing_employee_id(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    auth_user.require_permission("employee:delete")?;
    delete_entity(&state, EntityKind::Employee, None).await
}
