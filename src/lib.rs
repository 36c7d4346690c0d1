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

//! security-client: roles, profiles and users over a query transport.
//!
//! This library mediates get/search/create/delete of access-control entities
//! against a remote backend. Calls can be consumed with a completion callback
//! or through the future-returning mirror returned by `Security::promises`.

pub mod client;
pub mod config;
pub mod core;
pub mod transport;
pub mod utils;

pub use crate::client::registry::AsyncOperation;
pub use crate::client::Security;
pub use crate::config::ClientConfig;
pub use crate::core::entities::{Profile, ProfileRef, Role, RoleRefs, SecurityEntity, User};
pub use crate::core::errors::{SecurityError, TransportError};
pub use crate::core::models::{CanonicalRequest, CreateOptions, SearchResult};
pub use crate::core::resolver::{callback, Arg, Callback};
pub use crate::transport::QueryTransport;
