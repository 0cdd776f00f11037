//! Sub-breed lookups against the dog.ceo REST API.
//!
//! # Overview
//! `DogApiBreedFetcher` implements `BreedFetcher`: given a breed it issues
//! `GET {base}/breed/{breed}/list`, checks the JSON envelope and returns the
//! sub-breed names in upstream order. Any failure along the way surfaces as
//! `BreedNotFoundError` for that breed.
//!
//! # Design
//! - `DogApiClient` is stateless and sans-IO: `build_sub_breeds` produces a
//!   request, `parse_sub_breeds` consumes a response.
//! - `Transport` performs the round-trip. `UreqTransport` is the blocking
//!   production implementation; tests inject their own.
//! - The crate emits `tracing` events but never installs a subscriber.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{DogApiClient, DEFAULT_BASE_URL};
pub use error::{BreedNotFoundError, FailureReason};
pub use fetcher::{BreedFetcher, DogApiBreedFetcher};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{ApiResponse, SubBreedList, SUCCESS_STATUS};
