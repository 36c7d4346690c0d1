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

//! Registry of network-bound operations.
//!
//! Closed list of everything that dispatches through the transport. The
//! future-returning mirror and the callback policy are derived from it;
//! synchronous helpers (factories, rights checks) are never listed.

use crate::core::constants::actions;
use crate::core::entities::EntityKind;
use crate::core::errors::SecurityError;
use crate::core::resolver::Callback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackPolicy {
    /// get/search: no meaningful fire-and-forget mode
    Mandatory,
    /// create/delete: omitted callback means fire-and-forget
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsyncOperation {
    GetRole,
    SearchRoles,
    CreateRole,
    DeleteRole,
    GetProfile,
    SearchProfiles,
    CreateProfile,
    DeleteProfile,
    GetUser,
    SearchUsers,
    CreateUser,
    DeleteUser,
}

impl AsyncOperation {
    pub const ALL: [AsyncOperation; 12] = [
        AsyncOperation::GetRole,
        AsyncOperation::SearchRoles,
        AsyncOperation::CreateRole,
        AsyncOperation::DeleteRole,
        AsyncOperation::GetProfile,
        AsyncOperation::SearchProfiles,
        AsyncOperation::CreateProfile,
        AsyncOperation::DeleteProfile,
        AsyncOperation::GetUser,
        AsyncOperation::SearchUsers,
        AsyncOperation::CreateUser,
        AsyncOperation::DeleteUser,
    ];

    /// Method name on the client (and on its future-returning mirror)
    pub fn method_name(&self) -> &'static str {
        match self {
            AsyncOperation::GetRole => "get_role",
            AsyncOperation::SearchRoles => "search_roles",
            AsyncOperation::CreateRole => "create_role",
            AsyncOperation::DeleteRole => "delete_role",
            AsyncOperation::GetProfile => "get_profile",
            AsyncOperation::SearchProfiles => "search_profiles",
            AsyncOperation::CreateProfile => "create_profile",
            AsyncOperation::DeleteProfile => "delete_profile",
            AsyncOperation::GetUser => "get_user",
            AsyncOperation::SearchUsers => "search_users",
            AsyncOperation::CreateUser => "create_user",
            AsyncOperation::DeleteUser => "delete_user",
        }
    }

    /// Backend actions this operation may dispatch. The first one is the
    /// default; create operations list their replace variant second.
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            AsyncOperation::GetRole => &[actions::GET_ROLE],
            AsyncOperation::SearchRoles => &[actions::SEARCH_ROLES],
            AsyncOperation::CreateRole => &[actions::CREATE_ROLE, actions::CREATE_OR_REPLACE_ROLE],
            AsyncOperation::DeleteRole => &[actions::DELETE_ROLE],
            AsyncOperation::GetProfile => &[actions::GET_PROFILE],
            AsyncOperation::SearchProfiles => &[actions::SEARCH_PROFILES],
            AsyncOperation::CreateProfile => {
                &[actions::CREATE_PROFILE, actions::CREATE_OR_REPLACE_PROFILE]
            }
            AsyncOperation::DeleteProfile => &[actions::DELETE_PROFILE],
            AsyncOperation::GetUser => &[actions::GET_USER],
            AsyncOperation::SearchUsers => &[actions::SEARCH_USERS],
            AsyncOperation::CreateUser => &[actions::CREATE_USER],
            AsyncOperation::DeleteUser => &[actions::DELETE_USER],
        }
    }

    pub fn action(&self) -> &'static str {
        self.actions()[0]
    }

    /// Replace-or-create variant, for create operations that have one.
    pub fn replace_action(&self) -> Option<&'static str> {
        self.actions().get(1).copied()
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            AsyncOperation::GetRole
            | AsyncOperation::SearchRoles
            | AsyncOperation::CreateRole
            | AsyncOperation::DeleteRole => EntityKind::Role,
            AsyncOperation::GetProfile
            | AsyncOperation::SearchProfiles
            | AsyncOperation::CreateProfile
            | AsyncOperation::DeleteProfile => EntityKind::Profile,
            AsyncOperation::GetUser
            | AsyncOperation::SearchUsers
            | AsyncOperation::CreateUser
            | AsyncOperation::DeleteUser => EntityKind::User,
        }
    }

    pub fn callback_policy(&self) -> CallbackPolicy {
        match self {
            AsyncOperation::GetRole
            | AsyncOperation::SearchRoles
            | AsyncOperation::GetProfile
            | AsyncOperation::SearchProfiles
            | AsyncOperation::GetUser
            | AsyncOperation::SearchUsers => CallbackPolicy::Mandatory,
            _ => CallbackPolicy::Optional,
        }
    }

    /// Fail fast when a mandatory callback is missing.
    pub fn require_callback<T>(
        &self,
        callback: Option<Callback<T>>,
    ) -> Result<Option<Callback<T>>, SecurityError> {
        match (self.callback_policy(), callback) {
            (CallbackPolicy::Mandatory, None) => Err(SecurityError::MissingCallback {
                operation: self.method_name(),
            }),
            (_, callback) => Ok(callback),
        }
    }
}
