use axum::Json;
use axum::extract::{Path, Query, State};
use sea_orm::prelude::Expr;
use sea_orm::sea_query::{Func, LikeExpr};
use sea_orm::*;
use tracing::instrument;

use super::deletion::delete_entity;
use crate::deletion::EntityKind;
use crate::entity::customer;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::customer::*;
use crate::models::deletion::DeleteResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Customers",
    operation_id = "listCustomers",
    summary = "List customers with pagination and search",
    description = "Returns a paginated list of customers, newest first. Requires `customer:view` permission. `search` matches name or email case-insensitively.",
    params(ListQuery),
    responses(
        (status = 200, description = "List of customers", body = CustomerListResponse),
        (status = 400, description = "Page out of range (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, query))]
pub async fn list_customers(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<CustomerListResponse>, AppError> {
    auth_user.require_permission("customer:view")?;

    let (page, per_page, offset) = query.page_window()?;
    let mut select = customer::Entity::find();

    if let Some(pattern) = query.search_pattern() {
        let pattern = pattern.to_lowercase();
        select = select.filter(
            Condition::any()
                .add(
                    Expr::expr(Func::lower(Expr::col(customer::Column::Name)))
                        .like(LikeExpr::new(pattern.clone()).escape('\\')),
                )
                .add(
                    Expr::expr(Func::lower(Expr::col(customer::Column::Email)))
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
        .order_by_desc(customer::Column::CreatedAt)
        .order_by_asc(customer::Column::Id)
        .offset(Some(offset))
        .limit(Some(per_page))
        .all(&state.db)
        .await?
        .into_iter()
        .map(CustomerResponse::from)
        .collect();

    Ok(Json(CustomerListResponse {
        data,
        pagination: Pagination::new(page, per_page, total),
    }))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Customers",
    operation_id = "getCustomer",
    summary = "Get a customer by ID",
    description = "Requires `customer:view` permission.",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = CustomerResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Customer not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn get_customer(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, AppError> {
    auth_user.require_permission("customer:view")?;

    let model = customer::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".into()))?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Customers",
    operation_id = "deleteCustomer",
    summary = "Delete a customer and everything that hangs off it",
    description = "Deletes the customer's hosted profile image, every object under `customerImage/{id}/`, the linked login principal, and finally the customer row. Image and principal cleanup is best effort: failures are logged and do not fail the request. Requires `customer:delete` permission.",
    params(("id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = DeleteResponse),
        (status = 400, description = "Invalid customer ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Customer not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Stores not configured (CONFIGURATION_ERROR) or record delete failed (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id = %id))]
pub async fn delete_customer(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    auth_user.require_permission("customer:delete")?;
    delete_entity(&state, EntityKind::Customer, Some(&id)).await
}

#[utoipa::path(
    delete,
    path = "/",
    tag = "Customers",
    operation_id = "deleteCustomerWithoutId",
    summary = "Reject a customer delete that names no customer",
    description = "Always fails with `Customer ID missing` once stores are configured. Requires `customer:delete` permission.",
    responses(
        (status = 400, description = "Customer ID missing (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
        (status = 500, description = "Stores not configured (CONFIGURATION_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn reject_missing_customer_id(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    auth_user.require_permission("customer:delete")?;
    delete_entity(&state, EntityKind::Customer, None).await
}
