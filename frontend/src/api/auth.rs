use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, HrUser, LoginRequest, RegisterHrRequest},
};

impl ApiClient {
    /// Session probe. Any failure means there is no valid session.
    pub async fn get_me(&self) -> Result<HrUser, ApiError> {
        let request = self.request(Method::GET, "/hr/me").await;
        let response = self.send(request).await?;
        self.map_json_response(response, "Failed to fetch current user")
            .await
    }

    /// Server answers with a session cookie; the body is not needed.
    pub async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "/hr/login").await.json(request);
        let response = self.send(builder).await?;
        self.map_empty_response(response, "Login failed. Please try again.")
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = self.request(Method::POST, "/hr/logout").await;
        let response = self.send(request).await?;
        self.map_empty_response(response, "Logout failed").await
    }

    pub async fn register_hr(&self, request: &RegisterHrRequest) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "/hr").await.json(request);
        let response = self.send(builder).await?;
        self.map_empty_response(response, "Registration failed").await
    }
}
