//! Wire types for the dog.ceo API.

use serde::Deserialize;

/// The `status` value the upstream API uses for a successful lookup.
pub const SUCCESS_STATUS: &str = "success";

/// Sub-breed names in the order the upstream API returned them.
pub type SubBreedList = Vec<String>;

/// JSON envelope returned by every dog.ceo endpoint.
///
/// `message` is kept as a raw value: on success it is an array of names, on
/// failure it is a human-readable string that is never inspected.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Interpret `message` as a list of sub-breed names.
    pub fn into_sub_breeds(self) -> Result<SubBreedList, serde_json::Error> {
        serde_json::from_value(self.message)
    }
}
