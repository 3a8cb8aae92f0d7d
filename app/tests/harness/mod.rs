//! A stand-in for the remote content API.
//!
//! Serves canned JSON on an ephemeral local port and records every request it
//! receives, so tests can assert both on what the client returned and on what
//! reached the wire.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use tokio::task::JoinHandle;

use app::client::ContentClient;
use app::config::ContentApiConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub method: Method,
    pub path: String,
    pub body: String,
}

type Routes = HashMap<(Method, String), (StatusCode, String)>;

#[derive(Clone)]
struct Shared {
    routes: Arc<Routes>,
    hits: Arc<Mutex<Vec<Hit>>>,
}

async fn respond(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    body: String,
) -> impl IntoResponse {
    let path = uri.path().to_owned();
    if let Ok(mut hits) = shared.hits.lock() {
        hits.push(Hit {
            method: method.clone(),
            path: path.clone(),
            body,
        });
    }
    let (status, body) = shared
        .routes
        .get(&(method, path))
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, r#"{"message":"Not found"}"#.to_owned()));
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

#[derive(Default)]
pub struct FakeContentApiBuilder {
    routes: Routes,
}

impl FakeContentApiBuilder {
    /// Answers `GET /api{path}` with `status` and `body`.
    pub fn get(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(
            (Method::GET, format!("/api{path}")),
            (StatusCode::from_u16(status).unwrap(), body.into()),
        );
        self
    }

    /// Answers `POST /api{path}` with `status` and `body`.
    pub fn post(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(
            (Method::POST, format!("/api{path}")),
            (StatusCode::from_u16(status).unwrap(), body.into()),
        );
        self
    }

    pub async fn start(self) -> FakeContentApi {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(Mutex::new(Vec::new()));
        let shared = Shared {
            routes: Arc::new(self.routes),
            hits: hits.clone(),
        };
        let app = Router::new().fallback(respond).with_state(shared);
        let server = tokio::spawn(async move {
            axum::serve(listener, app.into_make_service()).await.unwrap();
        });
        FakeContentApi { addr, hits, server }
    }
}

pub struct FakeContentApi {
    addr: SocketAddr,
    hits: Arc<Mutex<Vec<Hit>>>,
    server: JoinHandle<()>,
}

impl FakeContentApi {
    pub fn builder() -> FakeContentApiBuilder {
        FakeContentApiBuilder::default()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn client(&self) -> ContentClient {
        let config = ContentApiConfig::from_values(Some(&self.base_url()), None).unwrap();
        ContentClient::new(config).unwrap()
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }
}

impl Drop for FakeContentApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}
