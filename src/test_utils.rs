// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking the Kubernetes API and ceph admin sessions.

use crate::ceph::{AdminConnector, AdminSession};
use crate::error::{Result, RgwError};
use crate::types::ClusterMembership;
use async_trait::async_trait;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

struct Failure {
    method: String,
    path: String,
    status: u16,
    body: String,
}

#[derive(Default)]
struct Store {
    objects: BTreeMap<String, Value>,
    failures: Vec<Failure>,
    requests: Vec<(String, String)>,
}

/// An in-memory API server: POST to a collection stores the object under
/// `<collection>/<name>` and answers 409 if that key is taken, GET returns the
/// stored object or 404. Create is atomic across clones of the service.
#[derive(Clone, Default)]
pub struct MockService {
    store: Arc<Mutex<Store>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests matching the method and path prefix with a fixed error
    pub fn fail_on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.store.lock().unwrap().failures.push(Failure {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body: body.to_string(),
        });
        self
    }

    pub fn clear_failures(&self) {
        self.store.lock().unwrap().failures.clear();
    }

    /// Seed an object at its full resource path
    pub fn insert(&self, path: &str, body: &str) {
        let value = serde_json::from_str(body).unwrap();
        self.store
            .lock()
            .unwrap()
            .objects
            .insert(path.to_string(), value);
    }

    pub fn stored(&self, path: &str) -> Option<Value> {
        self.store.lock().unwrap().objects.get(path).cloned()
    }

    pub fn count_stored(&self, prefix: &str) -> usize {
        self.store
            .lock()
            .unwrap()
            .objects
            .keys()
            .filter(|k| k.starts_with(prefix))
            .count()
    }

    pub fn total_stored(&self) -> usize {
        self.store.lock().unwrap().objects.len()
    }

    /// All (method, path) pairs seen so far
    pub fn requests(&self) -> Vec<(String, String)> {
        self.store.lock().unwrap().requests.clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn handle(&self, method: &str, path: &str, body: &[u8]) -> (u16, String) {
        let mut store = self.store.lock().unwrap();
        store.requests.push((method.to_string(), path.to_string()));

        if let Some(f) = store
            .failures
            .iter()
            .find(|f| f.method == method && path.starts_with(&f.path))
        {
            return (f.status, f.body.clone());
        }

        match method {
            "GET" => match store.objects.get(path) {
                Some(obj) => (200, obj.to_string()),
                None => (404, not_found_json(path)),
            },
            "POST" => {
                let mut obj: Value = match serde_json::from_slice(body) {
                    Ok(v) => v,
                    Err(e) => return (400, status_json(400, "BadRequest", &e.to_string())),
                };
                let name = obj["metadata"]["name"].as_str().unwrap_or_default().to_string();
                let key = format!("{}/{}", path, name);
                if store.objects.contains_key(&key) {
                    return (409, already_exists_json(&name));
                }
                obj["metadata"]["uid"] = Value::String(format!("uid-{}", store.objects.len()));
                if path.ends_with("/services") {
                    obj["spec"]["clusterIP"] = Value::String("10.96.0.10".to_string());
                }
                store.objects.insert(key, obj.clone());
                (201, obj.to_string())
            }
            _ => (405, status_json(405, "MethodNotAllowed", method)),
        }
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let this = self.clone();

        Box::pin(async move {
            let body = req
                .into_body()
                .collect()
                .await
                .map_err(tower::BoxError::from)?
                .to_bytes();
            let (status, body) = this.handle(&method, &path, &body);
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(path: &str) -> String {
    status_json(404, "NotFound", &format!("\"{}\" not found", path))
}

pub fn already_exists_json(name: &str) -> String {
    status_json(409, "AlreadyExists", &format!("\"{}\" already exists", name))
}

pub fn secret_json(namespace: &str, name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "stringData": { "keyring": "existing" }
    })
    .to_string()
}

/// Counters shared by a connector and every session it opens
#[derive(Default)]
pub struct SessionStats {
    pub connects: AtomicUsize,
    pub mints: AtomicUsize,
    pub shutdowns: AtomicUsize,
}

impl SessionStats {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn mints(&self) -> usize {
        self.mints.load(Ordering::SeqCst)
    }

    pub fn shutdowns(&self) -> usize {
        self.shutdowns.load(Ordering::SeqCst)
    }
}

pub struct MockSession {
    key: std::result::Result<String, String>,
    entities: Mutex<Vec<String>>,
    stats: Arc<SessionStats>,
}

impl MockSession {
    pub fn with_key(key: &str) -> Self {
        Self {
            key: Ok(key.to_string()),
            entities: Mutex::new(Vec::new()),
            stats: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            key: Err(message.to_string()),
            entities: Mutex::new(Vec::new()),
            stats: Arc::default(),
        }
    }

    pub fn requested_entities(&self) -> Vec<String> {
        self.entities.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdminSession for MockSession {
    async fn auth_get_or_create_key(&self, entity: &str, _caps: &[(&str, &str)]) -> Result<String> {
        self.entities.lock().unwrap().push(entity.to_string());
        self.stats.mints.fetch_add(1, Ordering::SeqCst);
        // Let concurrent reconcilers interleave between lookup and create
        tokio::task::yield_now().await;
        self.key.clone().map_err(RgwError::KeyringError)
    }

    fn shutdown(&mut self) {
        self.stats.shutdowns.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone)]
pub struct MockConnector {
    pub stats: Arc<SessionStats>,
    key: std::result::Result<String, String>,
    connect_error: Option<String>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self {
            stats: Arc::default(),
            key: Ok("AQBmockkey==".to_string()),
            connect_error: None,
        }
    }

    /// Sessions from this connector fail to mint keys
    pub fn failing_mint(mut self, message: &str) -> Self {
        self.key = Err(message.to_string());
        self
    }

    pub fn failing_connect(mut self, message: &str) -> Self {
        self.connect_error = Some(message.to_string());
        self
    }
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdminConnector for MockConnector {
    type Session = MockSession;

    async fn connect(&self, _membership: &ClusterMembership) -> Result<MockSession> {
        if let Some(message) = &self.connect_error {
            return Err(RgwError::ConnectError(message.clone()));
        }
        self.stats.connects.fetch_add(1, Ordering::SeqCst);
        Ok(MockSession {
            key: self.key.clone(),
            entities: Mutex::new(Vec::new()),
            stats: self.stats.clone(),
        })
    }
}
