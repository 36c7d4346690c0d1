// Common test utilities and helpers for all test modules

#![allow(dead_code)]

use security_client::core::models::{CanonicalRequest, QueryOptions, QueryResponse};
use security_client::{Callback, ClientConfig, Security, SecurityError, TransportError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// A request as the transport saw it
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub request: CanonicalRequest,
    pub options: Option<QueryOptions>,
}

/// Mock QueryTransport: scripted replies per action (optionally per id),
/// every call recorded.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<String, Result<Value, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Reply to every call of `action` with `result`.
    pub fn respond(&self, action: &str, result: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert(action.to_string(), Ok(result));
    }

    /// Reply to `action` on one id; takes precedence over `respond`.
    pub fn respond_for(&self, action: &str, id: &str, result: Value) {
        self.replies
            .lock()
            .unwrap()
            .insert(format!("{}:{}", action, id), Ok(result));
    }

    pub fn fail(&self, action: &str, error: TransportError) {
        self.replies
            .lock()
            .unwrap()
            .insert(action.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn actions(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .map(|c| c.request.action)
            .collect()
    }
}

#[async_trait::async_trait]
impl security_client::QueryTransport for MockTransport {
    async fn query(
        &self,
        request: CanonicalRequest,
        options: Option<QueryOptions>,
    ) -> Result<QueryResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            request: request.clone(),
            options,
        });

        let replies = self.replies.lock().unwrap();
        let scoped = request
            .id
            .as_ref()
            .and_then(|id| replies.get(&format!("{}:{}", request.action, id)));
        match scoped.or_else(|| replies.get(&request.action)) {
            Some(Ok(result)) => Ok(QueryResponse::new(result.clone())),
            Some(Err(e)) => Err(e.clone()),
            None => Err(TransportError::new(
                404,
                format!("no scripted reply for {}", request.action),
            )),
        }
    }
}

pub fn security_with(transport: Arc<MockTransport>) -> Security {
    Security::new(transport, ClientConfig::default())
}

/// A callback paired with the receiver its result lands in.
pub fn capture<T: Send + 'static>() -> (
    Callback<T>,
    oneshot::Receiver<Result<T, SecurityError>>,
) {
    let (tx, rx) = oneshot::channel();
    let cb: Callback<T> = Box::new(move |result| {
        let _ = tx.send(result);
    });
    (cb, rx)
}

/// Let spawned fire-and-forget tasks run to completion.
pub async fn settle_background() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
