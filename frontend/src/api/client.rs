use log::{debug, error};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::rc::Rc;

use crate::{
    api::types::{ApiError, NO_RESPONSE_MESSAGE},
    config,
};

/// Credentialed JSON client for the HR server.
///
/// Every request carries the browser's session cookie. A 401 from any
/// endpoint fires the unauthorized hook, which the session provider uses to
/// drop the session without polling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            on_unauthorized: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&raw).unwrap_or(raw)),
            on_unauthorized: None,
        }
    }

    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);
        debug!("{} {}", method, url);
        with_credentials(self.http_client().request(method, url))
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            error!("Request failed: {}", e);
            ApiError::request_failed(NO_RESPONSE_MESSAGE)
        })?;
        self.handle_unauthorized_status(response.status());
        Ok(response)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response, fallback).await)
        }
    }

    pub(crate) async fn map_empty_response(
        &self,
        response: Response,
        fallback: &str,
    ) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(response, fallback).await)
        }
    }

    async fn map_error_response(response: Response, fallback: &str) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_error_body(status, &body, fallback);
        error!("HTTP {}: {}", status, error);
        error
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}
