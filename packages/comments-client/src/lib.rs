//! Pure comments REST API client.
//!
//! A minimal client for a comment moderation API. Fetches the full comment
//! collection and approves or deletes single comments by id.
//!
//! # Example
//!
//! ```rust,ignore
//! use comments_client::{CommentStore, CommentsClient};
//!
//! let client = CommentsClient::new("http://localhost:8080");
//!
//! for comment in client.fetch_all().await? {
//!     println!("{}: {}", comment.author, comment.text);
//! }
//! client.approve(&1.into()).await?;
//! ```

pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod types;

pub use error::{CommentsError, Result, TransportError};
pub use types::{Comment, CommentId};

use async_trait::async_trait;
use reqwest::{Client, Method, Url};
use std::sync::Arc;
use std::time::Duration;

/// Remote access to the comment collection.
///
/// Implementations do not retry and do not validate ids; every failure is
/// returned to the caller.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Fetch the full collection, in server order.
    async fn fetch_all(&self) -> Result<Vec<Comment>>;

    /// Mark the comment approved.
    async fn approve(&self, id: &CommentId) -> Result<()>;

    /// Remove the comment.
    async fn delete(&self, id: &CommentId) -> Result<()>;
}

#[async_trait]
impl<T: CommentStore + ?Sized> CommentStore for Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<Comment>> {
        (**self).fetch_all().await
    }

    async fn approve(&self, id: &CommentId) -> Result<()> {
        (**self).approve(id).await
    }

    async fn delete(&self, id: &CommentId) -> Result<()> {
        (**self).delete(id).await
    }
}

/// HTTP implementation of [`CommentStore`].
#[derive(Clone)]
pub struct CommentsClient {
    http_client: Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl CommentsClient {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Create from environment variable `COMMENTS_API_URL`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("COMMENTS_API_URL")
            .map_err(|_| CommentsError::Config("COMMENTS_API_URL not set".into()))?;
        Ok(Self::new(base_url))
    }

    /// Apply a per-request timeout. Without one the transport default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base}/comments[/{id}[/{action}]]`, percent-encoding the id.
    fn endpoint(&self, id: Option<&CommentId>, action: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            CommentsError::Config(format!("invalid base URL {:?}: {}", self.base_url, e))
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                CommentsError::Config(format!("base URL {:?} cannot have a path", self.base_url))
            })?;
            segments.pop_if_empty().push("comments");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
            if let Some(action) = action {
                segments.push(action);
            }
        }

        Ok(url)
    }

    /// Send a request and fail on anything but a 2xx status.
    async fn send(&self, method: Method, url: Url) -> Result<reqwest::Response> {
        tracing::debug!(%method, %url, "Sending comments request");

        let mut request = self.http_client.request(method, url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let resp = request.send().await.map_err(CommentsError::network)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(resp)
    }
}

#[async_trait]
impl CommentStore for CommentsClient {
    async fn fetch_all(&self) -> Result<Vec<Comment>> {
        let url = self.endpoint(None, None)?;
        let resp = self.send(Method::GET, url).await?;

        let body = resp.bytes().await.map_err(CommentsError::network)?;
        let comments: Vec<Comment> = serde_json::from_slice(&body).map_err(|e| {
            CommentsError::Decode(format!("Failed to deserialize comments: {}", e))
        })?;

        tracing::debug!(count = comments.len(), "Fetched comments");
        Ok(comments)
    }

    async fn approve(&self, id: &CommentId) -> Result<()> {
        let url = self.endpoint(Some(id), Some("approve"))?;
        self.send(Method::POST, url).await?;

        tracing::info!(comment_id = %id, "Comment approved");
        Ok(())
    }

    async fn delete(&self, id: &CommentId) -> Result<()> {
        let url = self.endpoint(Some(id), None)?;
        self.send(Method::DELETE, url).await?;

        tracing::info!(comment_id = %id, "Comment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let client = CommentsClient::new("http://localhost:8080");

        assert_eq!(
            client.endpoint(None, None).unwrap().as_str(),
            "http://localhost:8080/comments"
        );
        assert_eq!(
            client
                .endpoint(Some(&CommentId::from(3)), Some("approve"))
                .unwrap()
                .as_str(),
            "http://localhost:8080/comments/3/approve"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_encodes_id() {
        let client = CommentsClient::new("http://example.org/api/");
        let url = client
            .endpoint(Some(&CommentId::from("a b/c")), None)
            .unwrap();

        assert_eq!(url.as_str(), "http://example.org/api/comments/a%20b%2Fc");
    }

    #[test]
    fn test_from_env_requires_api_url() {
        std::env::remove_var("COMMENTS_API_URL");
        let err = CommentsClient::from_env().err().unwrap();
        assert!(matches!(err, CommentsError::Config(_)));

        std::env::set_var("COMMENTS_API_URL", "http://comments.internal:9000");
        let client = CommentsClient::from_env().unwrap();
        assert_eq!(client.base_url(), "http://comments.internal:9000");
        std::env::remove_var("COMMENTS_API_URL");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let client = CommentsClient::new("not a url");
        let err = client.endpoint(None, None).unwrap_err();

        assert!(matches!(err, CommentsError::Config(_)));
    }
}
