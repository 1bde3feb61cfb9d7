//! Named wrappers for the ticketing service's resources.
//!
//! Each operation is a single gateway call with a fixed method and path.
//! Payload schemas are owned by the remote service, so bodies are any
//! `Serialize` value forwarded verbatim and results come back as raw JSON —
//! no client-side validation.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiResult;
use crate::gateway::Gateway;
use crate::transport::ApiRequest;

/// Client for the ticketing service's movies and bookings.
#[derive(Clone)]
pub struct TicketingClient {
    gateway: Gateway,
    base_url: String,
}

impl TicketingClient {
    pub fn new(gateway: Gateway, base_url: impl Into<String>) -> Self {
        Self {
            gateway,
            base_url: base_url.into(),
        }
    }

    /// List all movies.
    pub async fn movies(&self) -> ApiResult<Value> {
        self.gateway
            .request(ApiRequest::get(format!("{}/movies", self.base_url)))
            .await
    }

    /// Create a movie.
    pub async fn create_movie<T: Serialize>(&self, movie: &T) -> ApiResult<Value> {
        let request =
            ApiRequest::post(format!("{}/movies", self.base_url)).with_json(movie)?;
        self.gateway.request(request).await
    }

    /// Update a movie by id.
    pub async fn update_movie<T: Serialize>(&self, id: &str, movie: &T) -> ApiResult<Value> {
        let request =
            ApiRequest::put(format!("{}/movies/{}", self.base_url, id)).with_json(movie)?;
        self.gateway.request(request).await
    }

    /// Delete a movie by id.
    pub async fn delete_movie(&self, id: &str) -> ApiResult<Value> {
        self.gateway
            .request(ApiRequest::delete(format!("{}/movies/{}", self.base_url, id)))
            .await
    }

    /// List the caller's bookings.
    pub async fn bookings(&self) -> ApiResult<Value> {
        self.gateway
            .request(ApiRequest::get(format!("{}/bookings", self.base_url)))
            .await
    }

    /// Create a booking.
    pub async fn create_booking<T: Serialize>(&self, booking: &T) -> ApiResult<Value> {
        let request =
            ApiRequest::post(format!("{}/bookings", self.base_url)).with_json(booking)?;
        self.gateway.request(request).await
    }
}
