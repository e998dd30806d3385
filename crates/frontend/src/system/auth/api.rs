use contracts::system::auth::{LoginRequest, LoginResponse, UserProfile};

use crate::shared::api_client::{ApiClient, ApiError};

/// Login with e-mail and password
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    client.post("/auth/login", &request).await
}

/// Profile of the token holder
pub async fn current_user(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.get("/auth/me").await
}

pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.post_empty("/auth/logout").await
}
