use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

/// Envelope returned by every route, mirroring dog.ceo.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub status: String,
    pub message: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

/// Breed name to its sub-breeds, in the order they are served.
///
/// `Catalogue::default()` is a slice of the real dog.ceo data;
/// `Catalogue::new()` starts empty.
#[derive(Clone, Debug)]
pub struct Catalogue {
    breeds: HashMap<String, Vec<String>>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self {
            breeds: HashMap::new(),
        }
    }

    pub fn with_breed<I, S>(mut self, breed: &str, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breeds
            .insert(breed.to_string(), sub_breeds.into_iter().map(Into::into).collect());
        self
    }

    pub fn sub_breeds(&self, breed: &str) -> Option<&[String]> {
        self.breeds.get(breed).map(Vec::as_slice)
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new()
            .with_breed("hound", ["afghan", "basset", "blood", "english", "ibizan", "plott", "walker"])
            .with_breed("terrier", ["american", "australian", "bedlington", "border", "cairn", "westhighland"])
            .with_breed("retriever", ["chesapeake", "curly", "flatcoated", "golden"])
            .with_breed("spaniel", ["blenheim", "brittany", "cocker", "irish", "japanese", "sussex", "welsh"])
            .with_breed("bulldog", ["boston", "english", "french"])
            .with_breed("pug", Vec::<String>::new())
            .with_breed("beagle", Vec::<String>::new())
    }
}

pub type Db = Arc<Catalogue>;

pub fn app() -> Router {
    app_with(Catalogue::default())
}

pub fn app_with(catalogue: Catalogue) -> Router {
    Router::new()
        .route("/api/breed/{breed}/list", get(list_sub_breeds))
        .with_state(Arc::new(catalogue))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_sub_breeds(
    State(db): State<Db>,
    Path(breed): Path<String>,
) -> (StatusCode, Json<Envelope>) {
    match db.sub_breeds(&breed) {
        Some(subs) => {
            debug!(%breed, count = subs.len(), "serving sub-breeds");
            (
                StatusCode::OK,
                Json(Envelope {
                    status: "success".to_string(),
                    message: serde_json::json!(subs),
                    code: None,
                }),
            )
        }
        None => {
            debug!(%breed, "unknown breed");
            (
                StatusCode::NOT_FOUND,
                Json(Envelope {
                    status: "error".to_string(),
                    message: serde_json::Value::String(
                        "Breed not found (main breed does not exist)".to_string(),
                    ),
                    code: Some(404),
                }),
            )
        }
    }
}
