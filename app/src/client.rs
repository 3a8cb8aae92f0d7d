//! HTTP client for the remote content API.
//!
//! Every operation issues exactly one request. There is no retry, caching or
//! authentication; failures are logged and handed back to the caller, which
//! decides how the page degrades.

use http::StatusCode;
use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::{ConfigError, ContentApiConfig};
use crate::types::{BlogPost, ContactPayload, Profile, Project};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content API unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("content API answered {status} for {url}")]
    Status { status: StatusCode, url: Url },
    #[error(transparent)]
    Endpoint(#[from] ConfigError),
}

#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    config: ContentApiConfig,
}

impl ContentClient {
    /// # Errors
    ///
    /// Fails when the underlying HTTP client cannot be built (TLS backend
    /// initialisation).
    pub fn new(config: ContentApiConfig) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("portfolio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    pub async fn profile(&self) -> Result<Profile, ContentError> {
        self.get_json(&["profile"]).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ContentError> {
        self.get_json(&["projects"]).await
    }

    pub async fn featured_projects(&self) -> Result<Vec<Project>, ContentError> {
        self.get_json(&["projects", "featured"]).await
    }

    /// `None` when the API reports 404 or answers with `null`.
    pub async fn project(&self, id: &str) -> Result<Option<Project>, ContentError> {
        self.get_optional(&["projects", id]).await
    }

    pub async fn blog_posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        self.get_json(&["blog"]).await
    }

    /// `None` when the API reports 404 or answers with `null`.
    pub async fn blog_post(&self, slug: &str) -> Result<Option<BlogPost>, ContentError> {
        self.get_optional(&["blog", slug]).await
    }

    pub async fn submit_contact(&self, payload: &ContactPayload) -> Result<(), ContentError> {
        let url = self.config.endpoint(&["contact"])?;
        tracing::debug!("POST {url}");
        let response = self
            .http
            .post(url.clone())
            .json(payload)
            .send()
            .await
            .inspect_err(|e| tracing::warn!("POST {url} failed: {e}"))?;
        Self::check_status(response.status(), url)?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ContentError> {
        let url = self.config.endpoint(segments)?;
        tracing::debug!("GET {url}");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .inspect_err(|e| tracing::warn!("GET {url} failed: {e}"))?;
        Self::check_status(response.status(), url.clone())?;
        let body = response
            .json::<T>()
            .await
            .inspect_err(|e| tracing::warn!("GET {url} returned an unreadable body: {e}"))?;
        Ok(body)
    }

    async fn get_optional<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Option<T>, ContentError> {
        match self.get_json::<Option<T>>(segments).await {
            Err(ContentError::Status { status, url }) if status == StatusCode::NOT_FOUND => {
                tracing::info!("{url} not found");
                Ok(None)
            }
            other => other,
        }
    }

    fn check_status(status: StatusCode, url: Url) -> Result<(), ContentError> {
        if status.is_success() {
            return Ok(());
        }
        if status != StatusCode::NOT_FOUND {
            tracing::warn!("{url} answered {status}");
        }
        Err(ContentError::Status { status, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ContentClient {
        ContentClient::new(ContentApiConfig::from_values(None, None).unwrap()).unwrap()
    }

    #[test]
    fn test_client_keeps_base_url() {
        assert_eq!(client().base_url().as_str(), "http://localhost:5000/api");
    }

    #[test]
    fn test_status_check() {
        let url = Url::parse("http://localhost:5000/api/projects").unwrap();
        assert!(ContentClient::check_status(StatusCode::OK, url.clone()).is_ok());
        let err = ContentClient::check_status(StatusCode::SERVICE_UNAVAILABLE, url)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "content API answered 503 Service Unavailable for http://localhost:5000/api/projects"
        );
    }

    #[test]
    fn test_operation_signatures() {
        tokio_test::block_on(async {
            let client = client();
            let _ = client.profile();
            let _ = client.projects();
            let _ = client.featured_projects();
            let _ = client.project("abc");
            let _ = client.blog_posts();
            let _ = client.blog_post("hello-world");
        });
    }
}
