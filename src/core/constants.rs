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

//! security-client Constants - Single source of truth for the wire vocabulary.
//!
//! Action names and field names are the contract with the backend and must
//! not be altered.

/// Controller tag carried by every request
pub const CONTROLLER: &str = "security";

/// Backend action names
pub mod actions {
    pub const GET_ROLE: &str = "getRole";
    pub const SEARCH_ROLES: &str = "searchRoles";
    pub const CREATE_ROLE: &str = "createRole";
    pub const CREATE_OR_REPLACE_ROLE: &str = "createOrReplaceRole";
    pub const DELETE_ROLE: &str = "deleteRole";

    pub const GET_PROFILE: &str = "getProfile";
    pub const SEARCH_PROFILES: &str = "searchProfiles";
    pub const CREATE_PROFILE: &str = "createProfile";
    pub const CREATE_OR_REPLACE_PROFILE: &str = "createOrReplaceProfile";
    pub const DELETE_PROFILE: &str = "deleteProfile";

    pub const GET_USER: &str = "getUser";
    pub const SEARCH_USERS: &str = "searchUsers";
    pub const CREATE_USER: &str = "createUser";
    pub const DELETE_USER: &str = "deleteUser";
}

/// Field names in requests and responses
pub mod fields {
    pub const ID: &str = "_id";
    pub const SOURCE: &str = "_source";
    pub const VERSION: &str = "_version";
    /// Nested role references inside a profile source
    pub const ROLES: &str = "roles";
    /// Nested profile reference inside a user source
    pub const PROFILE: &str = "profile";
    pub const HYDRATE: &str = "hydrate";
}

/// Rights evaluation values
pub mod rights {
    /// Matches any controller, action, index or collection
    pub const WILDCARD: &str = "*";
    pub const ALLOWED: &str = "allowed";
    pub const CONDITIONAL: &str = "conditional";
}

/// Configuration Environment Variables
pub mod config {
    pub const ENV_ENABLE_PROMISES: &str = "SECURITY_CLIENT_ENABLE_PROMISES";
    pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
    pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
}
