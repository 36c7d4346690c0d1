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

//! Wire models for the security client.
//!
//! Requests handed to the transport, raw documents read back from it, and the
//! option and result shapes callers see. Pure data, no I/O.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::constants::{self, fields};
use crate::core::errors::SecurityError;

/// Options forwarded verbatim to the query transport
pub type QueryOptions = Map<String, Value>;

/// The normalized request shape handed to the transport.
///
/// `_id` is only present for get/delete and for creates that name their
/// identifier; `body` only for create/search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRequest {
    pub controller: String,
    pub action: String,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl CanonicalRequest {
    pub fn new(action: &str) -> Self {
        Self {
            controller: constants::CONTROLLER.to_string(),
            action: action.to_string(),
            id: None,
            body: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Successful transport reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub result: Value,
}

impl QueryResponse {
    pub fn new(result: Value) -> Self {
        Self { result }
    }
}

/// Options accepted by the create operations.
///
/// Unrecognised keys are kept in `extra` and forwarded to the transport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOptions {
    /// Role creation: replace an existing role with the same id
    #[serde(default)]
    pub replace_if_exist: bool,
    /// Profile creation: update an existing profile with the same id
    #[serde(default)]
    pub update_if_exist: bool,
    #[serde(flatten)]
    pub extra: QueryOptions,
}

impl CreateOptions {
    pub fn replace() -> Self {
        Self {
            replace_if_exist: true,
            ..Self::default()
        }
    }

    pub fn update() -> Self {
        Self {
            update_if_exist: true,
            ..Self::default()
        }
    }

    /// Parse options given as a plain JSON object.
    pub fn from_value(value: Value) -> Result<Self, SecurityError> {
        if !value.is_object() {
            return Err(SecurityError::InvalidArgument(
                "options must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| SecurityError::InvalidArgument(format!("invalid options: {}", e)))
    }

    /// What the transport sees: everything except the action selectors.
    pub fn transport_options(&self) -> Option<QueryOptions> {
        if self.extra.is_empty() {
            None
        } else {
            Some(self.extra.clone())
        }
    }
}

/// Document as read back from the backend (`{_id, _source, _version?}`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default = "empty_object")]
    pub source: Value,
    #[serde(rename = "_version", default)]
    pub version: Option<u64>,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl RawDocument {
    pub fn from_result(result: Value) -> Result<Self, SecurityError> {
        serde_json::from_value(result)
            .map_err(|e| SecurityError::MalformedResponse(format!("invalid document: {}", e)))
    }

    /// Read a create reply, falling back to what was sent when the backend
    /// does not echo it.
    pub fn from_create_result(
        result: Value,
        request: &CanonicalRequest,
    ) -> Result<Self, SecurityError> {
        let id = result
            .get(fields::ID)
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| request.id.clone())
            .ok_or_else(|| {
                SecurityError::MalformedResponse("create reply carries no _id".to_string())
            })?;
        let source = result
            .get(fields::SOURCE)
            .cloned()
            .or_else(|| request.body.clone())
            .unwrap_or_else(empty_object);
        let version = result.get(fields::VERSION).and_then(Value::as_u64);
        Ok(Self {
            id,
            source,
            version,
        })
    }
}

/// Search reply (`{total, hits: [...]}`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHits {
    pub total: u64,
    #[serde(default)]
    pub hits: Vec<RawDocument>,
}

impl RawHits {
    pub fn from_result(result: Value) -> Result<Self, SecurityError> {
        serde_json::from_value(result)
            .map_err(|e| SecurityError::MalformedResponse(format!("invalid search reply: {}", e)))
    }
}

/// A page of search results, in transport order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

/// One entry of a user's rights listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Right {
    pub controller: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// `allowed`, `conditional` or `denied`
    pub value: String,
}

/// Outcome of a local rights check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPermission {
    Allowed,
    Conditional,
    Denied,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_absent_fields() {
        let req = CanonicalRequest::new("createRole").with_body(json!({"allow": true}));
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(
            wire,
            json!({"controller": "security", "action": "createRole", "body": {"allow": true}})
        );
    }

    #[test]
    fn test_create_options_from_plain_object() {
        let opts = CreateOptions::from_value(json!({"replaceIfExist": true, "refresh": "wait_for"}))
            .unwrap();
        assert!(opts.replace_if_exist);
        assert!(!opts.update_if_exist);
        let forwarded = opts.transport_options().unwrap();
        assert_eq!(forwarded.get("refresh"), Some(&json!("wait_for")));
        assert!(forwarded.get("replaceIfExist").is_none());
    }

    #[test]
    fn test_create_options_rejects_non_object() {
        assert!(CreateOptions::from_value(json!("replace")).is_err());
        assert!(CreateOptions::from_value(json!({"replaceIfExist": "yes"})).is_err());
    }

    #[test]
    fn test_search_reply_requires_total() {
        let hits = RawHits::from_result(json!({"total": 0})).unwrap();
        assert!(hits.hits.is_empty());

        let err = RawHits::from_result(json!({"hits": [{"_id": "r1"}]})).unwrap_err();
        assert!(matches!(err, SecurityError::MalformedResponse(_)));
    }

    #[test]
    fn test_raw_document_defaults() {
        let doc = RawDocument::from_result(json!({"_id": "r1"})).unwrap();
        assert_eq!(doc.source, json!({}));
        assert_eq!(doc.version, None);
        assert!(RawDocument::from_result(json!({"_source": {}})).is_err());
    }

    #[test]
    fn test_create_result_falls_back_to_request() {
        let req = CanonicalRequest::new("createRole")
            .with_id("r1")
            .with_body(json!({"allow": true}));
        let doc = RawDocument::from_create_result(json!({"_version": 2}), &req).unwrap();
        assert_eq!(doc.id, "r1");
        assert_eq!(doc.source, json!({"allow": true}));
        assert_eq!(doc.version, Some(2));

        let anonymous = CanonicalRequest::new("createRole").with_body(json!({}));
        assert!(RawDocument::from_create_result(json!({}), &anonymous).is_err());
    }
}
