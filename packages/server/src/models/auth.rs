use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Request body for login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Email of the principal to log in as.
    #[schema(example = "admin@example.com")]
    pub email: String,
    /// Account password.
    #[schema(example = "s3cure_P@ss!")]
    pub password: String,
}

pub fn validate_login_request(payload: &LoginRequest) -> Result<(), AppError> {
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("Email must not be empty".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password must not be empty".into()));
    }
    Ok(())
}

/// Successful login response.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// JWT bearer token valid for 7 days.
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "admin")]
    pub role: String,
    /// Permissions granted to the principal's role.
    #[schema(example = json!(["customer:view", "customer:delete"]))]
    pub permissions: Vec<String>,
}

/// Current authenticated principal.
#[derive(Serialize, utoipa::ToSchema)]
pub struct MeResponse {
    /// Principal ID.
    #[schema(example = "0192f5e4-7c1a-7d2b-9a3e-2f1c4b5d6e7f")]
    pub id: String,
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "admin")]
    pub role: String,
    #[schema(example = json!(["customer:view"]))]
    pub permissions: Vec<String>,
}
