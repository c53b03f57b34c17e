//! In-process stand-in for the metrics origins.
//!
//! Serves a fixed map of `path -> (status, body)`; anything else is a 404.
//! Every request path is recorded so tests can assert what was (not) fetched.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use fdroid_spider::{Config, HttpClient};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Default)]
struct Routes {
    files: HashMap<String, (StatusCode, String)>,
    requests: Mutex<Vec<String>>,
}

pub struct MetricsServer {
    pub base_url: String,
    routes: Arc<Routes>,
}

impl MetricsServer {
    pub fn requests(&self) -> Vec<String> {
        self.routes.requests.lock().unwrap().clone()
    }

    pub fn config(&self, data_dir: &Path) -> Config {
        Config::new(self.base_url.clone(), data_dir)
    }
}

#[derive(Default)]
pub struct ServerBuilder {
    files: HashMap<String, (StatusCode, String)>,
}

impl ServerBuilder {
    pub fn json(mut self, path: &str, body: serde_json::Value) -> Self {
        self.files.insert(path.to_string(), (StatusCode::OK, body.to_string()));
        self
    }

    pub fn raw(mut self, path: &str, status: StatusCode, body: &str) -> Self {
        self.files.insert(path.to_string(), (status, body.to_string()));
        self
    }

    pub async fn start(self) -> MetricsServer {
        let routes = Arc::new(Routes {
            files: self.files,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(serve).with_state(routes.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MetricsServer {
            base_url: format!("http://{addr}/metrics"),
            routes,
        }
    }
}

pub fn server() -> ServerBuilder {
    ServerBuilder::default()
}

async fn serve(State(routes): State<Arc<Routes>>, uri: Uri) -> Response {
    let path = uri.path().strip_prefix("/metrics").unwrap_or(uri.path()).to_string();
    routes.requests.lock().unwrap().push(path.clone());

    match routes.files.get(&path) {
        Some((status, body)) => (*status, body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Client that never routes the loopback server through an HTTP proxy.
pub fn client() -> HttpClient {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
