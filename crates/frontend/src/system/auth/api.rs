use contracts::system::auth::{AdminInfo, LoginRequest, LoginResponse};

use crate::shared::http::{self, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    http::post_json_public("/api/admin/login", &request).await
}

/// Profile of the admin owning the stored token
pub async fn get_current_admin() -> Result<AdminInfo, ApiError> {
    http::get_json("/api/admin/me").await
}
