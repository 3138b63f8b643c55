use carelink_core::{
    envelope::{Ack, Envelope},
    errors::{CareError, CareResult},
};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::{auth::Auth, config::ClientConfig};

/// HTTP access to the CareLink API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> CareResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CareError::Internal(Box::new(e)))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `segments`, each one percent-encoded as a single
    /// path segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> CareResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CareError::Validation(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(
        &self,
        method: Method,
        segments: &[&str],
        auth: Option<Auth<'_>>,
    ) -> CareResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!("{} {}", method, url.path());
        let request = self.http.request(method, url);
        Ok(match auth {
            Some(auth) => auth.apply(request),
            None => request,
        })
    }

    /// Sends the request and returns the envelope's payload.
    pub(crate) async fn data<T: DeserializeOwned>(&self, request: RequestBuilder) -> CareResult<T> {
        self.envelope::<T>(request).await?.into_data()
    }

    /// Sends the request and decodes the payload list one record at a time.
    /// Records that do not decode are logged and left out instead of failing
    /// the whole list.
    pub(crate) async fn records<T: DeserializeOwned>(&self, request: RequestBuilder) -> CareResult<Vec<T>> {
        let values = self.data::<Vec<serde_json::Value>>(request).await?;
        let total = values.len();
        let records: Vec<T> = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed record: {}", e);
                    None
                }
            })
            .collect();
        if records.len() < total {
            debug!("Kept {} of {} records", records.len(), total);
        }
        Ok(records)
    }

    /// Sends the request and only checks that the server reported success.
    pub(crate) async fn ack(&self, request: RequestBuilder) -> CareResult<Ack> {
        self.envelope::<serde_json::Value>(request).await?.into_ack()
    }

    async fn envelope<T: DeserializeOwned>(&self, request: RequestBuilder) -> CareResult<Envelope<T>> {
        let response = request.send().await.map_err(transport)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> CareResult<Envelope<T>> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if status.is_success() {
        return serde_json::from_str::<Envelope<T>>(&body)
            .map_err(|e| CareError::Transport(format!("Malformed response body: {e}")));
    }

    // Error bodies usually still use the envelope shape; fall back to the
    // status text when they do not.
    let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

    debug!("Request failed with {}: {}", status, message);

    Err(match status {
        StatusCode::UNAUTHORIZED => CareError::Authentication(message),
        StatusCode::FORBIDDEN => CareError::Authorization(message),
        StatusCode::NOT_FOUND => CareError::NotFound(message),
        _ => CareError::Http {
            status: status.as_u16(),
            message,
        },
    })
}

fn transport(err: reqwest::Error) -> CareError {
    CareError::Transport(err.to_string())
}
