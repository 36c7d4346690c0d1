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

//! Query transport seam.
//!
//! The client never talks to the network itself. It hands a
//! [`CanonicalRequest`] to a `QueryTransport` and reads the reply; whatever
//! connection, retry or auth policy exists lives behind this trait.

use async_trait::async_trait;

use crate::core::errors::TransportError;
use crate::core::models::{CanonicalRequest, QueryOptions, QueryResponse};

/// Trait for executing backend queries
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn query(
        &self,
        request: CanonicalRequest,
        options: Option<QueryOptions>,
    ) -> Result<QueryResponse, TransportError>;
}
