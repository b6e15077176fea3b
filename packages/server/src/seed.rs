use sea_orm::sea_query::{Index, OnConflict, PostgresQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::config::AuthConfig;
use crate::entity::{customer, employee, principal, role, role_permission};
use crate::utils::hash;

/// Default roles seeded on startup.
const DEFAULT_ROLES: &[&str] = &[role::ADMIN_ROLE, "manager", role::DEFAULT_ROLE];

/// Default role-permission mappings seeded on startup.
const DEFAULT_MAPPINGS: &[(&str, &str)] = &[
    // Admin: all permissions
    ("admin", "customer:view"),
    ("admin", "customer:delete"),
    ("admin", "employee:view"),
    ("admin", "employee:delete"),
    ("admin", "settings:view"),
    ("admin", "settings:edit"),
    // Manager: read-only dashboard
    ("manager", "customer:view"),
    ("manager", "employee:view"),
    ("manager", "settings:view"),
];

/// Seed the `role` and `role_permission` tables with defaults.
pub async fn seed_role_permissions(db: &DatabaseConnection) -> Result<(), DbErr> {
    let mut roles_inserted = 0u32;
    for &name in DEFAULT_ROLES {
        let model = role::ActiveModel {
            name: Set(name.to_string()),
        };

        let result = role::Entity::insert(model)
            .on_conflict(OnConflict::column(role::Column::Name).do_nothing().to_owned())
            .exec_without_returning(db)
            .await;

        match result {
            Ok(_) => roles_inserted += 1,
            Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }
    }

    if roles_inserted > 0 {
        info!("Seeded {} new roles", roles_inserted);
    }

    let mut perms_inserted = 0u32;
    for &(role, permission) in DEFAULT_MAPPINGS {
        let model = role_permission::ActiveModel {
            role: Set(role.to_string()),
            permission: Set(permission.to_string()),
        };

        let result = role_permission::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    role_permission::Column::Role,
                    role_permission::Column::Permission,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(_) => perms_inserted += 1,
            Err(DbErr::RecordNotInserted) => {}
            Err(e) => return Err(e),
        }
    }

    if perms_inserted > 0 {
        info!("Seeded {} new role-permission mappings", perms_inserted);
    }

    Ok(())
}

/// Create the bootstrap admin principal when `auth.admin_email` and
/// `auth.admin_password` are both configured and no principal uses that email.
pub async fn seed_admin(db: &DatabaseConnection, auth: &AuthConfig) -> Result<(), DbErr> {
    let (Some(email), Some(password)) = (&auth.admin_email, &auth.admin_password) else {
        return Ok(());
    };
    let email = email.trim().to_lowercase();

    let existing = principal::Entity::find()
        .filter(principal::Column::Email.eq(&email))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let password = hash::hash_password(password)
        .map_err(|e| DbErr::Custom(format!("Password hash error: {e}")))?;

    let model = principal::ActiveModel {
        id: Set(uuid::Uuid::now_v7().to_string()),
        email: Set(email.clone()),
        password: Set(password),
        role: Set(role::ADMIN_ROLE.to_string()),
        created_at: Set(chrono::Utc::now()),
    };

    let result = principal::Entity::insert(model)
        .on_conflict(
            OnConflict::column(principal::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await;

    match result {
        Ok(_) => {
            info!(email = %email, "Seeded bootstrap admin principal");
            Ok(())
        }
        Err(DbErr::RecordNotInserted) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Ensure required database indexes exist.
///
/// Roster lists are ordered by creation time and customers are filtered by
/// their principal, neither of which schema-sync indexes on its own.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let statements = [
        (
            "idx_customer_created",
            Index::create()
                .if_not_exists()
                .name("idx_customer_created")
                .table(customer::Entity)
                .col(customer::Column::CreatedAt)
                .to_string(PostgresQueryBuilder),
        ),
        (
            "idx_customer_principal",
            Index::create()
                .if_not_exists()
                .name("idx_customer_principal")
                .table(customer::Entity)
                .col(customer::Column::PrincipalId)
                .to_string(PostgresQueryBuilder),
        ),
        (
            "idx_employee_created",
            Index::create()
                .if_not_exists()
                .name("idx_employee_created")
                .table(employee::Entity)
                .col(employee::Column::CreatedAt)
                .to_string(PostgresQueryBuilder),
        ),
    ];

    for (name, stmt) in statements {
        match db.execute_unprepared(&stmt).await {
            Ok(_) => info!("Ensured index {} exists", name),
            Err(e) => tracing::warn!("Failed to create index {}: {}", name, e),
        }
    }

    Ok(())
}
