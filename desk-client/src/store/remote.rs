//! Remote sheet endpoint store
//!
//! Speaks the Apps-Script-shaped contract of `shared::api`: GET with an
//! `?action=` query for fetches, POST with a JSON body declared as
//! `text/plain;charset=utf-8` for saves. The endpoint may report errors
//! either as a non-2xx status or as a 200 carrying `{"error": ...}`;
//! both map to typed errors here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;

use shared::api::{ErrorBody, FetchAction, SaveAction, SaveRequest, SaveResponse};
use shared::Versioned;
use shared::models::{Case, Employer};

use crate::error::{ClientError, ClientResult};

use super::CollectionStore;

/// Content type Apps-Script web apps accept without a CORS preflight.
const POST_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, action: FetchAction) -> ClientResult<Versioned<T>> {
        let url = format!("{}?action={}", self.base_url, action.as_str());
        tracing::debug!(action = action.as_str(), "fetching collection");

        let response = self.http.get(&url).send().await?;
        decode_body(response).await
    }

    async fn save<T: Serialize + Sync>(
        &self,
        action: SaveAction,
        items: &[T],
        revision: u64,
    ) -> ClientResult<u64> {
        let request: SaveRequest<&T> = SaveRequest {
            action,
            revision,
            payload: items.iter().collect(),
        };
        let body = serde_json::to_string(&request)?;
        tracing::debug!(action = action.as_str(), revision, "saving collection");

        let response = self
            .http
            .post(&self.base_url)
            .header(CONTENT_TYPE, POST_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        let ack: SaveResponse = decode_body(response).await?;
        Ok(ack.revision)
    }
}

/// Decode a response, mapping both error shapes the endpoint produces.
async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let text = response.text().await?;

    if status == StatusCode::CONFLICT {
        return Err(ClientError::Conflict);
    }
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("endpoint returned {status}"));
        return Err(ClientError::Endpoint(message));
    }

    // Script endpoints can answer 200 with an {error} body.
    if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
        return Err(ClientError::Endpoint(body.error));
    }

    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl CollectionStore for RemoteStore {
    async fn fetch_employers(&self) -> ClientResult<Versioned<Employer>> {
        self.fetch(FetchAction::GetEmployers).await
    }

    async fn save_employers(&self, items: &[Employer], revision: u64) -> ClientResult<u64> {
        self.save(SaveAction::SaveEmployers, items, revision).await
    }

    async fn fetch_cases(&self) -> ClientResult<Versioned<Case>> {
        self.fetch(FetchAction::GetCases).await
    }

    async fn save_cases(&self, items: &[Case], revision: u64) -> ClientResult<u64> {
        self.save(SaveAction::SaveCases, items, revision).await
    }
}
