//! The caller-facing sub-breed lookup.

use tracing::debug;

use crate::client::DogApiClient;
use crate::error::{BreedNotFoundError, FailureReason};
use crate::transport::{Transport, UreqTransport};
use crate::types::SubBreedList;

/// Looks up the sub-breeds of a dog breed.
///
/// Every failure, whether the breed is unknown or the lookup itself broke,
/// is reported as `BreedNotFoundError` for the requested breed.
pub trait BreedFetcher {
    fn get_sub_breeds(&self, breed: &str) -> Result<SubBreedList, BreedNotFoundError>;
}

/// `BreedFetcher` backed by the dog.ceo REST API.
///
/// Owns one transport, injected at construction and reused by every call.
/// Holds no mutable state, so a shared reference can be used from many
/// threads when `T` allows it.
#[derive(Debug, Clone)]
pub struct DogApiBreedFetcher<T> {
    client: DogApiClient,
    transport: T,
}

impl DogApiBreedFetcher<UreqTransport> {
    /// Fetcher for the public API using a default ureq agent.
    pub fn with_default_transport() -> Self {
        Self::new(DogApiClient::default(), UreqTransport::new())
    }
}

impl<T: Transport> DogApiBreedFetcher<T> {
    pub fn new(client: DogApiClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &DogApiClient {
        &self.client
    }
}

impl<T: Transport> BreedFetcher for DogApiBreedFetcher<T> {
    fn get_sub_breeds(&self, breed: &str) -> Result<SubBreedList, BreedNotFoundError> {
        let request = self.client.build_sub_breeds(breed);
        debug!(breed, url = %request.path, "Fetching sub-breeds");

        let result = self
            .transport
            .execute(&request)
            .map_err(|e| BreedNotFoundError::new(breed, FailureReason::Transport(e.to_string())))
            .and_then(|response| self.client.parse_sub_breeds(breed, response));

        match &result {
            Ok(subs) => debug!(breed, count = subs.len(), "Fetched sub-breeds"),
            Err(e) => debug!(breed, reason = %e.reason(), "Sub-breed lookup failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::http::{HttpRequest, HttpResponse};
    use crate::transport::TransportError;

    /// Replies to every request with the same canned response and records
    /// the requested URLs.
    struct CannedTransport {
        status: u16,
        body: String,
        calls: AtomicUsize,
        last_path: std::sync::Mutex<Option<String>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                calls: AtomicUsize::new(0),
                last_path: std::sync::Mutex::new(None),
            }
        }
    }

    impl Transport for CannedTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_path.lock().unwrap() = Some(request.path.clone());
            Ok(HttpResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    struct ResetTransport;

    impl Transport for ResetTransport {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            Err(ureq::Error::Io(io::Error::from(io::ErrorKind::ConnectionReset)).into())
        }
    }

    fn fetcher<T: Transport>(transport: T) -> DogApiBreedFetcher<T> {
        DogApiBreedFetcher::new(DogApiClient::default(), transport)
    }

    const HOUND: &str = r#"{"status":"success","message":["afghan","basset","blood"]}"#;

    #[test]
    fn returns_sub_breeds_for_hound() {
        let transport = CannedTransport::new(200, HOUND);
        let subs = fetcher(&transport).get_sub_breeds("hound").unwrap();
        assert_eq!(subs, vec!["afghan", "basset", "blood"]);
        assert_eq!(
            transport.last_path.lock().unwrap().as_deref(),
            Some("https://dog.ceo/api/breed/hound/list")
        );
    }

    #[test]
    fn unsuccessful_status_names_the_breed() {
        let transport =
            CannedTransport::new(404, r#"{"status":"error","message":"Breed not found"}"#);
        let err = fetcher(transport).get_sub_breeds("nonexistent").unwrap_err();
        assert_eq!(err.breed(), "nonexistent");
        assert_eq!(err.to_string(), "breed not found: nonexistent");
    }

    #[test]
    fn server_error_with_empty_body_is_not_a_crash() {
        let err = fetcher(CannedTransport::new(500, "")).get_sub_breeds("hound").unwrap_err();
        assert_eq!(err.breed(), "hound");
    }

    #[test]
    fn connection_reset_becomes_breed_not_found() {
        let err = fetcher(ResetTransport).get_sub_breeds("hound").unwrap_err();
        assert_eq!(err.breed(), "hound");
        assert!(matches!(err.reason(), FailureReason::Transport(_)));
    }

    #[test]
    fn repeated_calls_are_identical_and_independent() {
        let transport = CannedTransport::new(200, HOUND);
        let f = fetcher(&transport);
        let first = f.get_sub_breeds("hound").unwrap();
        let second = f.get_sub_breeds("hound").unwrap();
        assert_eq!(first, second);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn shared_fetcher_serves_parallel_callers() {
        let transport = Arc::new(CannedTransport::new(200, HOUND));
        let f = fetcher(Arc::clone(&transport));

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| f.get_sub_breeds("hound")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), vec!["afghan", "basset", "blood"]);
            }
        });
        assert_eq!(transport.calls.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn default_fetcher_targets_public_api() {
        let f = DogApiBreedFetcher::with_default_transport();
        assert_eq!(f.client().base_url(), "https://dog.ceo/api");
    }
}
