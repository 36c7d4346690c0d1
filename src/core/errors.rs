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

// Client error types - every failure surfaces exactly once

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the security client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SecurityError {
    /// Malformed or ambiguous call signature, raised before dispatch
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A mandatory-callback operation was invoked without one
    #[error("Missing callback: {operation} requires a completion callback")]
    MissingCallback { operation: &'static str },

    /// Failure reported by the query transport, forwarded untouched
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The transport succeeded but the reply lacks required fields
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The future-returning mirror was requested on a client built without it
    #[error("Promise support is disabled for this client")]
    PromisesDisabled,

    /// The completion of a mirrored call was dropped before it resolved
    #[error("Operation cancelled before completion")]
    Cancelled,

    /// Callback-style calls need a tokio runtime to run on
    #[error("No async runtime available to dispatch {operation}")]
    NoRuntime { operation: &'static str },
}

/// Error reported by a query transport.
///
/// Carries whatever the backend said; the client never rewrites it.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("Transport error ({status}): {message}")]
pub struct TransportError {
    pub status: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl TransportError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl SecurityError {
    /// True for errors raised at the call site, before any request is sent.
    pub fn is_call_site(&self) -> bool {
        matches!(
            self,
            SecurityError::InvalidArgument(_)
                | SecurityError::MissingCallback { .. }
                | SecurityError::PromisesDisabled
                | SecurityError::NoRuntime { .. }
        )
    }

    /// Reclassify a content validation failure found in a backend reply.
    pub(crate) fn into_malformed(self) -> SecurityError {
        match self {
            SecurityError::InvalidArgument(reason) => SecurityError::MalformedResponse(reason),
            other => other,
        }
    }

    /// The transport error, if this failure came from the backend.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            SecurityError::Transport(e) => Some(e),
            _ => None,
        }
    }
}
