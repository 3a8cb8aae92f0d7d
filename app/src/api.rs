//! Server functions through which pages reach the content API.
//!
//! Each function resolves the shared `ContentClient` from the request context
//! and maps its errors into `ServerFnError` after logging the cause. Nothing
//! here retries: a failed request surfaces immediately so the page can show
//! its degraded state.

#![allow(deprecated)]

use leptos::prelude::{ServerFnError, server};

#[cfg(feature = "ssr")]
use leptos::server_fn::error::NoCustomError;

pub use crate::types::ContactRequest;
use crate::types::{BlogPost, Profile, Project};

#[cfg(feature = "ssr")]
use crate::client::{ContentClient, ContentError};

/// Checks that an id or slug only contains characters that can appear in a
/// content API path segment.
///
/// Valid identifiers contain only alphanumeric characters, hyphens, and
/// underscores, and are at most 200 characters long.
#[cfg(any(feature = "ssr", test))]
fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && identifier.len() <= 200
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(feature = "ssr")]
fn content_client() -> std::sync::Arc<ContentClient> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { content, .. } = expect_context::<AppState>();
    content
}

#[cfg(feature = "ssr")]
fn server_error(operation: &str, err: &ContentError) -> ServerFnError {
    tracing::error!("{operation} failed: {err}");
    ServerFnError::<NoCustomError>::ServerError(format!("{operation} failed: {err}"))
}

/// Fetches the owner's profile.
#[server(endpoint = "/profile")]
pub async fn select_profile() -> Result<Profile, ServerFnError> {
    content_client()
        .profile()
        .await
        .map_err(|e| server_error("select_profile", &e))
}

/// Fetches every project.
#[server(endpoint = "/projects")]
pub async fn select_projects() -> Result<Vec<Project>, ServerFnError> {
    content_client()
        .projects()
        .await
        .map_err(|e| server_error("select_projects", &e))
}

/// Fetches the projects flagged as featured.
#[server(endpoint = "/featured_projects")]
pub async fn select_featured_projects() -> Result<Vec<Project>, ServerFnError> {
    content_client()
        .featured_projects()
        .await
        .map_err(|e| server_error("select_featured_projects", &e))
}

/// Fetches one project by id.
///
/// Returns `Ok(None)` when the project does not exist. Ids with characters
/// outside `[A-Za-z0-9_-]` are treated the same way without asking the API.
#[server(endpoint = "/project")]
pub async fn select_project(id: String) -> Result<Option<Project>, ServerFnError> {
    if !is_valid_identifier(&id) {
        tracing::warn!(
            "Rejected project id '{}'",
            id.chars().take(50).collect::<String>()
        );
        return Ok(None);
    }
    content_client()
        .project(&id)
        .await
        .map_err(|e| server_error("select_project", &e))
}

/// Fetches every blog post.
#[server(endpoint = "/posts")]
pub async fn select_posts() -> Result<Vec<BlogPost>, ServerFnError> {
    content_client()
        .blog_posts()
        .await
        .map_err(|e| server_error("select_posts", &e))
}

/// Fetches one blog post by slug. Returns `Ok(None)` when it does not exist.
#[server(endpoint = "/post")]
pub async fn select_post(slug: String) -> Result<Option<BlogPost>, ServerFnError> {
    if !is_valid_identifier(&slug) {
        tracing::warn!(
            "Rejected post slug '{}'",
            slug.chars().take(50).collect::<String>()
        );
        return Ok(None);
    }
    content_client()
        .blog_post(&slug)
        .await
        .map_err(|e| server_error("select_post", &e))
}

/// Outcome of a contact submission that did not fail.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// The honeypot was filled. Nothing was forwarded.
    Discarded,
}

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Invalid(#[from] crate::types::ContactError),
    #[error(transparent)]
    Upstream(#[from] ContentError),
}

/// Validates a contact request and forwards it to the content API.
///
/// Validation happens first, so an incomplete form never causes a request.
///
/// # Errors
///
/// `DeliveryError::Invalid` for blank fields, `DeliveryError::Upstream` when
/// the API call fails.
#[cfg(feature = "ssr")]
pub async fn deliver_contact(
    client: &ContentClient,
    data: &ContactRequest,
) -> Result<Delivery, DeliveryError> {
    if data.is_bot() {
        tracing::warn!("Contact form rejected: honeypot field was filled (likely bot)");
        return Ok(Delivery::Discarded);
    }
    let payload = data.validate()?;
    client.submit_contact(&payload).await?;
    tracing::info!("Contact message forwarded");
    Ok(Delivery::Sent)
}

/// Handles contact form submissions.
///
/// Bots that fill the honeypot get a success response so they do not retry.
#[server(endpoint = "/contact")]
pub async fn contact(data: ContactRequest) -> Result<(), ServerFnError> {
    match deliver_contact(&content_client(), &data).await {
        Ok(_) => Ok(()),
        Err(DeliveryError::Invalid(e)) => {
            tracing::info!("Contact form incomplete");
            Err(ServerFnError::<NoCustomError>::ServerError(e.to_string()))
        }
        Err(DeliveryError::Upstream(e)) => Err(server_error("contact", &e)),
    }
}
