// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Security Resource Client.
//!
//! `Security` builds canonical requests for roles, profiles and users, sends
//! them through the bound [`QueryTransport`] and turns replies into entity
//! wrappers. It holds no per-call state: every call builds its own request
//! and completion path, so one instance can be cloned and shared freely.
//!
//! Callback-style operations validate their arguments synchronously, spawn
//! the request on the current tokio runtime and return immediately. The
//! future-returning mirror lives in [`promises`].

pub mod hydrate;
pub mod profiles;
pub mod promises;
pub mod registry;
pub mod rights;
pub mod roles;
pub mod users;

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::core::constants::fields;
use crate::core::entities::{EntityKind, SecurityEntity};
use crate::core::errors::SecurityError;
use crate::core::models::{CanonicalRequest, CreateOptions, QueryOptions, RawDocument, RawHits};
use crate::core::resolver::{resolve, Arg, Callback, Payload, Resolved};
use crate::transport::QueryTransport;
use registry::AsyncOperation;

#[derive(Clone)]
pub struct Security {
    transport: Arc<dyn QueryTransport>,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for Security {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Security")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Security {
    pub fn new(transport: Arc<dyn QueryTransport>, config: ClientConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one request and hand back `response.result`.
    pub(crate) async fn query(
        &self,
        request: CanonicalRequest,
        options: Option<QueryOptions>,
    ) -> Result<Value, SecurityError> {
        debug!(
            action = %request.action,
            id = ?request.id,
            "Dispatching security query"
        );
        let response = self.transport.query(request, options).await?;
        Ok(response.result)
    }

    pub(crate) async fn fetch_document(
        &self,
        op: AsyncOperation,
        id: String,
    ) -> Result<RawDocument, SecurityError> {
        let result = self
            .query(CanonicalRequest::new(op.action()).with_id(id), None)
            .await?;
        RawDocument::from_result(result)
    }

    pub(crate) async fn search_documents(
        &self,
        op: AsyncOperation,
        body: Value,
    ) -> Result<RawHits, SecurityError> {
        let result = self
            .query(CanonicalRequest::new(op.action()).with_body(body), None)
            .await?;
        let hits = RawHits::from_result(result)?;
        if hits.hits.len() as u64 > hits.total {
            warn!(
                action = op.action(),
                hits = hits.hits.len(),
                total = hits.total,
                "Search returned more hits than its reported total"
            );
        }
        Ok(hits)
    }

    /// Run `future` on the current runtime and deliver its outcome.
    ///
    /// Without a callback the result is dropped; failures are only logged.
    pub(crate) fn dispatch<R, F>(
        &self,
        op: AsyncOperation,
        future: F,
        callback: Option<Callback<R>>,
    ) -> Result<(), SecurityError>
    where
        R: Send + 'static,
        F: Future<Output = Result<R, SecurityError>> + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| SecurityError::NoRuntime {
            operation: op.method_name(),
        })?;
        debug!(
            operation = op.method_name(),
            kind = op.kind().name(),
            "Spawning security operation"
        );

        runtime.spawn(async move {
            let result = future.await;
            match callback {
                Some(callback) => callback(result),
                None => {
                    if let Err(e) = result {
                        warn!(
                            operation = op.method_name(),
                            error = %e,
                            "Fire-and-forget call failed"
                        );
                    }
                }
            }
        });
        Ok(())
    }

    /// Shared body of `create_role`, `create_profile` and `create_user`.
    pub(crate) fn create_entity<E: SecurityEntity>(
        &self,
        op: AsyncOperation,
        payload: Arg<E>,
        id: Arg<E>,
        options: Arg<E>,
        callback: Arg<E>,
    ) -> Result<&Self, SecurityError> {
        let Resolved {
            payload,
            id,
            options,
            callback,
        } = resolve(payload, id, options, callback)?;
        let options = options.unwrap_or_default();

        let action = create_action(op, &options);
        let request = create_request(action, payload, id);
        let transport_options = options.transport_options();

        let this = self.clone();
        self.dispatch(
            op,
            async move {
                let result = this.query(request.clone(), transport_options).await?;
                E::from_document(RawDocument::from_create_result(result, &request)?)
            },
            callback,
        )?;
        Ok(self)
    }

    /// Shared body of the delete operations. Yields the deleted id.
    pub(crate) fn delete_entity(
        &self,
        op: AsyncOperation,
        id: &str,
        callback: Option<Callback<String>>,
    ) -> Result<&Self, SecurityError> {
        let callback = op.require_callback(callback)?;
        let id = non_empty_id(id)?;

        let this = self.clone();
        self.dispatch(
            op,
            async move {
                let request = CanonicalRequest::new(op.action()).with_id(id.clone());
                let result = this.query(request, None).await?;
                Ok(result
                    .get(fields::ID)
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or(id))
            },
            callback,
        )?;
        Ok(self)
    }
}

/// Pick the plain or replace-or-create action from the call options.
fn create_action(op: AsyncOperation, options: &CreateOptions) -> &'static str {
    let replace = match op.kind() {
        EntityKind::Role => options.replace_if_exist,
        EntityKind::Profile => options.update_if_exist,
        EntityKind::User => {
            if options.replace_if_exist || options.update_if_exist {
                warn!("Users have no replace-or-create action; option ignored");
            }
            false
        }
    };
    match (replace, op.replace_action()) {
        (true, Some(action)) => action,
        _ => op.action(),
    }
}

fn create_request<E: SecurityEntity>(
    action: &str,
    payload: Payload<E>,
    id: Option<String>,
) -> CanonicalRequest {
    let (id, body) = match payload {
        Payload::Entity(entity) => {
            let doc = entity.to_document();
            (Some(doc.id).filter(|id| !id.is_empty()), doc.body)
        }
        Payload::Document(body) => (id, body),
    };
    let request = CanonicalRequest::new(action).with_body(body);
    match id {
        Some(id) => request.with_id(id),
        None => request,
    }
}

pub(crate) fn non_empty_id(id: &str) -> Result<String, SecurityError> {
    if id.is_empty() {
        return Err(SecurityError::InvalidArgument(
            "identifier must not be empty".to_string(),
        ));
    }
    Ok(id.to_string())
}

/// Search filters become the request body; profile and user searches may ask
/// the backend to pre-join nested entities.
pub(crate) fn search_body(filters: Value, hydrate: bool) -> Result<Value, SecurityError> {
    let mut body = match filters {
        Value::Null => serde_json::Map::new(),
        Value::Object(map) => map,
        other => {
            return Err(SecurityError::InvalidArgument(format!(
                "search filters must be a JSON object, got {}",
                other
            )))
        }
    };
    if hydrate {
        body.insert(fields::HYDRATE.to_string(), Value::Bool(true));
    }
    Ok(Value::Object(body))
}
