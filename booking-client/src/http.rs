//! HTTP client for network-based API calls

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, MessageResponse, SignupRequest, TableQuery};
use shared::models::{DiningTable, MealTime, NewReservation, Reservation};

use crate::{BookingApi, ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the reservation backend
///
/// Cloning is cheap and clones share the cookie jar, so every clone rides on
/// the same login session.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Backend base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(%method, %url, "Sending request");
        self.client.request(method, url)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with a query string
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::POST, path).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&bytes);
            tracing::warn!(status = status.as_u16(), %message, "Request rejected");
            return Err(match status {
                StatusCode::BAD_REQUEST => ClientError::Validation(message),
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
                StatusCode::FORBIDDEN => ClientError::Forbidden(message),
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::CONFLICT => ClientError::Conflict(message),
                _ => ClientError::Internal {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

/// `message` field of a JSON error body, or the body itself as text
fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<MessageResponse>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}

#[async_trait]
impl BookingApi for HttpClient {
    // ========== Auth API ==========

    async fn signup(&self, request: &SignupRequest) -> ClientResult<MessageResponse> {
        self.post("/signup", request).await
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<MessageResponse> {
        let response = self.post("/login", request).await?;
        tracing::info!(username = %request.username, "Logged in");
        Ok(response)
    }

    async fn logout(&self) -> ClientResult<MessageResponse> {
        self.post_empty("/logout").await
    }

    // ========== Tables API ==========

    async fn tables(&self, date: NaiveDate, time: MealTime) -> ClientResult<Vec<DiningTable>> {
        self.get_with_query("/tables", &TableQuery { date, time }).await
    }

    // ========== Reservations API ==========

    async fn reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.get("/reservations").await
    }

    async fn create_reservation(&self, request: &NewReservation) -> ClientResult<MessageResponse> {
        let response = self.post("/reservations", request).await?;
        tracing::info!(
            table_id = request.table_id,
            date = %request.date,
            time = %request.time,
            guests = request.guests,
            "Reservation created"
        );
        Ok(response)
    }

    async fn cancel_reservation(&self, id: i64) -> ClientResult<MessageResponse> {
        let response = self.delete(&format!("/reservations/{}", id)).await?;
        tracing::info!(reservation_id = id, "Reservation cancelled");
        Ok(response)
    }
}
