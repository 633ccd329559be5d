use gloo::net::http::{Request, RequestBuilder};
use shared::{Expense, ExpensePayload};
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::services::csrf;

/// Relative collection path; same origin as the page that served the app.
pub const DEFAULT_BASE_URL: &str = "/api/expenses/";

/// Failure of a gateway operation, split by the operation that caused it.
/// The payload is the underlying cause (HTTP status or network error).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("could not load expenses: {0}")]
    Fetch(String),
    #[error("could not save expense: {0}")]
    Save(String),
    #[error("could not delete expense: {0}")]
    Delete(String),
}

/// API client for the expense collection endpoint.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}{}/", self.base_url, id)
    }

    /// Attaches the anti-forgery token header to a mutating request, when a
    /// token is present in the cookie jar.
    fn with_csrf(builder: RequestBuilder) -> RequestBuilder {
        match csrf::csrf_token() {
            Some(token) => builder.header(csrf::CSRF_HEADER, &token),
            None => builder,
        }
    }

    /// Fetch the full expense list, in server order.
    pub async fn list(&self) -> Result<Vec<Expense>, GatewayError> {
        let response = Request::get(&self.base_url)
            .credentials(RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| GatewayError::Fetch(format!("network error: {e}")))?;

        if !response.ok() {
            return Err(GatewayError::Fetch(format!(
                "server returned {}",
                response.status()
            )));
        }

        response
            .json::<Vec<Expense>>()
            .await
            .map_err(|e| GatewayError::Fetch(format!("invalid response: {e}")))
    }

    /// Fetch a single expense, used to populate the edit form.
    pub async fn get(&self, id: i64) -> Result<Expense, GatewayError> {
        let response = Request::get(&self.record_url(id))
            .credentials(RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| GatewayError::Fetch(format!("network error: {e}")))?;

        if !response.ok() {
            return Err(GatewayError::Fetch(format!(
                "server returned {}",
                response.status()
            )));
        }

        response
            .json::<Expense>()
            .await
            .map_err(|e| GatewayError::Fetch(format!("invalid response: {e}")))
    }

    /// Create a new expense; the server assigns the identifier.
    pub async fn create(&self, payload: &ExpensePayload) -> Result<Expense, GatewayError> {
        let builder =
            Self::with_csrf(Request::post(&self.base_url).credentials(RequestCredentials::SameOrigin));
        Self::send_payload(builder, payload).await
    }

    /// Replace the full record stored under `id`.
    pub async fn update(&self, id: i64, payload: &ExpensePayload) -> Result<Expense, GatewayError> {
        let builder = Self::with_csrf(
            Request::put(&self.record_url(id)).credentials(RequestCredentials::SameOrigin),
        );
        Self::send_payload(builder, payload).await
    }

    async fn send_payload(
        builder: RequestBuilder,
        payload: &ExpensePayload,
    ) -> Result<Expense, GatewayError> {
        let response = builder
            .json(payload)
            .map_err(|e| GatewayError::Save(format!("could not encode request: {e}")))?
            .send()
            .await
            .map_err(|e| GatewayError::Save(format!("network error: {e}")))?;

        if !response.ok() {
            return Err(GatewayError::Save(format!(
                "server returned {}",
                response.status()
            )));
        }

        response
            .json::<Expense>()
            .await
            .map_err(|e| GatewayError::Save(format!("invalid response: {e}")))
    }

    /// Delete the record stored under `id`. Any response body is ignored.
    pub async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        let response = Self::with_csrf(
            Request::delete(&self.record_url(id)).credentials(RequestCredentials::SameOrigin),
        )
        .send()
        .await
        .map_err(|e| GatewayError::Delete(format!("network error: {e}")))?;

        if !response.ok() {
            return Err(GatewayError::Delete(format!(
                "server returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
