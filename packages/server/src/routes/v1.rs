use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/auth", auth_routes())
        .nest("/customers", customer_routes())
        .nest("/employees", employee_routes())
        .nest("/settings", settings_routes())
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::me))
}

fn customer_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::customer::list_customers,
            handlers::customer::reject_missing_customer_id
        ))
        .routes(routes!(
            handlers::customer::get_customer,
            handlers::customer::delete_customer
        ))
}

fn employee_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::employee::list_employees,
            handlers::employee::reject_missing_employee_id
        ))
        .routes(routes!(
            handlers::employee::get_employee,
            handlers::employee::delete_employee
        ))
}

fn settings_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::settings::get_settings,
        handlers::settings::update_settings
    ))
}
