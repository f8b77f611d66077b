//! HTTP JSON client for the bookmark service.
//!
//! Three round trips, each a single request with no retry: list the
//! collection, create a record, delete a record by id. Non-success statuses,
//! transport failures, and undecodable bodies all map into `ApiError`.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use uuid::Uuid;

use crate::types::bookmark::{Bookmark, NewBookmark};
use crate::types::errors::ApiError;

/// Trait defining the bookmark service operations.
#[async_trait]
pub trait BookmarkApiTrait {
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, ApiError>;
    async fn create_bookmark(&self, draft: &NewBookmark) -> Result<Bookmark, ApiError>;
    async fn delete_bookmark(&self, id: i64) -> Result<(), ApiError>;
}

/// Bookmark service client backed by `reqwest`.
pub struct HttpBookmarkApi {
    client: Client,
    base_url: String,
}

impl HttpBookmarkApi {
    /// Creates a client for the service at `base_url`. No timeout is imposed
    /// unless `timeout_ms` is given.
    pub fn new(base_url: &str, timeout_ms: Option<u64>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(ms) = timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The bookmark collection resource.
    pub fn collection_url(base_url: &str) -> String {
        format!("{}/bookmarks", base_url.trim_end_matches('/'))
    }

    /// The per-record deletion resource.
    pub fn delete_url(base_url: &str, id: i64) -> String {
        format!("{}/delete/{}", base_url.trim_end_matches('/'), id)
    }

    fn transport_error(e: reqwest::Error) -> ApiError {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait]
impl BookmarkApiTrait for HttpBookmarkApi {
    /// Read the full bookmark collection.
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, ApiError> {
        let request_id = Uuid::new_v4();
        let url = Self::collection_url(&self.base_url);
        tracing::debug!(%request_id, %url, "list bookmarks");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%request_id, status = status.as_u16(), "list failed");
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Vec<Bookmark>>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    /// Create a bookmark from the three form fields. Returns the created
    /// record with its server-assigned id.
    async fn create_bookmark(&self, draft: &NewBookmark) -> Result<Bookmark, ApiError> {
        let request_id = Uuid::new_v4();
        let url = Self::collection_url(&self.base_url);
        tracing::debug!(%request_id, %url, title = %draft.title, "create bookmark");

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%request_id, status = status.as_u16(), "create failed");
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<Bookmark>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    /// Delete the record with the given id. No request body.
    async fn delete_bookmark(&self, id: i64) -> Result<(), ApiError> {
        let request_id = Uuid::new_v4();
        let url = Self::delete_url(&self.base_url, id);
        tracing::debug!(%request_id, %url, "delete bookmark");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%request_id, status = status.as_u16(), "delete failed");
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(())
    }
}
