//! Stateless request builder and response parser for the dog.ceo API.
//!
//! # Design
//! `DogApiClient` holds only a `base_url`. `build_sub_breeds` produces an
//! `HttpRequest` and `parse_sub_breeds` consumes the matching `HttpResponse`;
//! the round-trip in between belongs to a `Transport`.

use serde_json::{Map, Value};

use crate::error::{BreedNotFoundError, FailureReason};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ApiResponse, SubBreedList};

/// Base URL of the public dog.ceo API.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

#[derive(Debug, Clone)]
pub struct DogApiClient {
    base_url: String,
}

impl DogApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request listing the sub-breeds of `breed`.
    ///
    /// The breed is interpolated verbatim, without percent-encoding. A breed
    /// containing `/`, `?` or spaces produces a different or invalid URL.
    pub fn build_sub_breeds(&self, breed: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/breed/{breed}/list", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Parse the response to a `build_sub_breeds` request.
    ///
    /// The body alone decides the outcome; the HTTP status code is ignored
    /// because the upstream API reports failures inside the envelope.
    pub fn parse_sub_breeds(
        &self,
        breed: &str,
        response: HttpResponse,
    ) -> Result<SubBreedList, BreedNotFoundError> {
        let decode = |msg: String| BreedNotFoundError::new(breed, FailureReason::Decode(msg));

        // Decode as a map first: a derived struct would also accept a
        // positional array like `["success", [...]]`.
        let object: Map<String, Value> =
            serde_json::from_str(&response.body).map_err(|e| decode(e.to_string()))?;
        let envelope: ApiResponse =
            serde_json::from_value(Value::Object(object)).map_err(|e| decode(e.to_string()))?;

        if !envelope.is_success() {
            return Err(BreedNotFoundError::new(
                breed,
                FailureReason::Unsuccessful {
                    status: envelope.status,
                },
            ));
        }

        envelope
            .into_sub_breeds()
            .map_err(|e| BreedNotFoundError::new(breed, FailureReason::MalformedMessage(e.to_string())))
    }
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
