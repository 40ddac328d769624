//! Firebase Realtime Database client (REST API)
//!
//! The collection is one JSON object of `push id -> {name, x, y}`:
//! - `GET  {db}/{collection}.json`       fetch-all (`null` when empty)
//! - `POST {db}/{collection}.json`       push-new, answers `{"name": "<id>"}`
//! - `DELETE {db}/{collection}/{id}.json` delete-by-id (no-op when absent)
//!
//! Requests carry `access_token=` (service account) or `auth=` (database
//! secret).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use friendmap_domain::{
    Coordinate, LocationName, LocationRecord, LocationSet, NewLocation, PlanePoint, RecordId,
};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::config::{FirebaseConfig, FirebaseCredential};
use crate::infrastructure::ports::{ClockPort, LocationStore, StoreError};
use crate::infrastructure::service_account::ServiceAccountTokens;

/// Query parameter that authorizes each request.
#[derive(Clone)]
enum RequestAuth {
    /// `access_token=<oauth2 token>`
    AccessToken(Arc<ServiceAccountTokens>),
    /// `auth=<database secret>`
    DatabaseSecret(String),
}

/// Client for one collection in a Firebase Realtime Database.
#[derive(Clone)]
pub struct FirebaseLocationStore {
    client: Client,
    database_url: Url,
    collection: String,
    auth: RequestAuth,
}

impl FirebaseLocationStore {
    /// Build the client. Fails only if the HTTP client itself cannot be
    /// constructed (e.g. no TLS backend).
    pub fn new(config: &FirebaseConfig) -> Result<Self, StoreError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: &FirebaseConfig,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::unavailable("connect", format!("HTTP client: {e}")))?;

        let auth = match &config.credential {
            FirebaseCredential::ServiceAccount(key) => RequestAuth::AccessToken(Arc::new(
                ServiceAccountTokens::new(client.clone(), key.clone(), clock),
            )),
            FirebaseCredential::DatabaseSecret(secret) => {
                RequestAuth::DatabaseSecret(secret.clone())
            }
        };

        Ok(Self {
            client,
            database_url: config.database_url.clone(),
            collection: config.collection.clone(),
            auth,
        })
    }

    /// Create client with custom timeout (for testing).
    pub fn with_timeout(
        database_url: Url,
        collection: &str,
        credential: FirebaseCredential,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        Self::new(&FirebaseConfig {
            database_url,
            collection: collection.to_string(),
            credential,
            timeout,
        })
    }

    /// Build `{db}/{collection}[/{id}].json`, without credentials.
    fn collection_url(
        &self,
        operation: &'static str,
        id: Option<&RecordId>,
    ) -> Result<Url, StoreError> {
        let mut segments: Vec<&str> = self.collection.split('/').collect();
        if let Some(id) = id {
            segments.push(id.as_str());
        }
        let last = segments
            .pop()
            .ok_or_else(|| StoreError::unavailable(operation, "empty collection path"))?;

        let mut url = self.database_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::unavailable(operation, "database URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments)
            .push(&format!("{last}.json"));
        Ok(url)
    }

    /// The collection URL with the auth query parameter attached.
    async fn endpoint(
        &self,
        operation: &'static str,
        id: Option<&RecordId>,
    ) -> Result<Url, StoreError> {
        let mut url = self.collection_url(operation, id)?;
        match &self.auth {
            RequestAuth::AccessToken(tokens) => {
                let token = tokens
                    .access_token()
                    .await
                    .map_err(|e| StoreError::unavailable(operation, e))?;
                url.query_pairs_mut().append_pair("access_token", &token);
            }
            RequestAuth::DatabaseSecret(secret) => {
                url.query_pairs_mut().append_pair("auth", secret);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl LocationStore for FirebaseLocationStore {
    async fn list_all(&self) -> Result<LocationSet, StoreError> {
        let url = self.endpoint("list_all", None).await?;
        tracing::debug!(collection = %self.collection, "Fetching location collection");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("list_all", e))?;
        let body: Value = ensure_success("list_all", response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::unavailable("list_all", format!("invalid response: {e}")))?;

        decode_collection(body)
    }

    async fn add(&self, location: &NewLocation) -> Result<RecordId, StoreError> {
        let url = self.endpoint("add", None).await?;
        let payload = serde_json::to_value(location).map_err(StoreError::serialization)?;

        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("add", e))?;
        let pushed: PushResponse = ensure_success("add", response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::unavailable("add", format!("invalid response: {e}")))?;

        let id = RecordId::new(pushed.name)
            .map_err(|e| StoreError::unavailable("add", format!("store returned {e}")))?;
        tracing::debug!(record_id = %id, "Pushed location");
        Ok(id)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        let url = self.endpoint("delete", Some(id)).await?;

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("delete", e))?;
        ensure_success("delete", response).await?;

        tracing::debug!(record_id = %id, "Deleted location");
        Ok(())
    }
}

#[derive(Deserialize)]
struct PushResponse {
    name: String,
}

/// Stored shape of one record. Numbers are read as floats because other
/// clients may have written non-integer values.
#[derive(Deserialize)]
struct StoredLocation {
    name: String,
    x: f64,
    y: f64,
}

async fn ensure_success(operation: &'static str, response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response.text().await.unwrap_or_default();
    Err(StoreError::unavailable(
        operation,
        format!("HTTP {status}: {error_text}"),
    ))
}

/// Turn the collection body into records.
///
/// The database answers `null` for an empty collection and an array when
/// every key happens to be a small integer. Entries that do not decode into
/// a valid record are skipped.
fn decode_collection(body: Value) -> Result<LocationSet, StoreError> {
    let entries: Vec<(String, Value)> = match body {
        Value::Null => return Ok(LocationSet::new()),
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter(|(_, v)| !v.is_null())
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        other => {
            return Err(StoreError::unavailable(
                "list_all",
                format!("expected an object, got {other}"),
            ))
        }
    };

    let mut set = LocationSet::new();
    for (key, value) in entries {
        match decode_entry(&key, value) {
            Ok(record) => {
                set.insert(record.id.clone(), record);
            }
            Err(reason) => {
                tracing::warn!(key = %key, reason = %reason, "Skipping malformed location entry");
            }
        }
    }
    Ok(set)
}

fn decode_entry(key: &str, value: Value) -> Result<LocationRecord, String> {
    let id = RecordId::new(key).map_err(|e| e.to_string())?;
    let stored: StoredLocation = serde_json::from_value(value).map_err(|e| e.to_string())?;
    let name = LocationName::new(stored.name).map_err(|e| e.to_string())?;
    let x = Coordinate::from_f64_clamped(stored.x).ok_or("x is not finite")?;
    let y = Coordinate::from_f64_clamped(stored.y).ok_or("y is not finite")?;
    Ok(LocationRecord {
        id,
        name,
        point: PlanePoint::new(x, y),
    })
}
