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

//! User operations. Same shape as profiles; users have no replace-or-create
//! action.

use futures::future::try_join_all;
use serde_json::Value;

use crate::client::registry::AsyncOperation;
use crate::client::{non_empty_id, search_body, Security};
use crate::core::entities::User;
use crate::core::errors::SecurityError;
use crate::core::models::SearchResult;
use crate::core::resolver::{Arg, Callback};

impl Security {
    /// Build a local, un-hydrated user without any network call.
    pub fn user_factory(&self, id: impl Into<String>, content: Value) -> Result<User, SecurityError> {
        User::new(id, content)
    }

    pub fn get_user(
        &self,
        id: &str,
        hydrate: bool,
        callback: Option<Callback<User>>,
    ) -> Result<(), SecurityError> {
        let op = AsyncOperation::GetUser;
        let callback = op.require_callback(callback)?;
        let id = non_empty_id(id)?;

        let this = self.clone();
        self.dispatch(
            op,
            async move {
                let doc = this.fetch_document(op, id).await?;
                this.materialize_user(doc, hydrate).await
            },
            callback,
        )
    }

    pub fn search_users(
        &self,
        filters: Value,
        hydrate: bool,
        callback: Option<Callback<SearchResult<User>>>,
    ) -> Result<(), SecurityError> {
        let op = AsyncOperation::SearchUsers;
        let callback = op.require_callback(callback)?;
        let body = search_body(filters, hydrate)?;

        let this = self.clone();
        self.dispatch(
            op,
            async move {
                let found = this.search_documents(op, body).await?;
                let documents = try_join_all(
                    found
                        .hits
                        .into_iter()
                        .map(|hit| this.materialize_user(hit, hydrate)),
                )
                .await?;
                Ok(SearchResult {
                    total: found.total,
                    documents,
                })
            },
            callback,
        )
    }

    /// Create a user. Always `createUser`: an existing id is refused by the
    /// backend.
    pub fn create_user(
        &self,
        payload: impl Into<Arg<User>>,
        id: impl Into<Arg<User>>,
        options: impl Into<Arg<User>>,
        callback: impl Into<Arg<User>>,
    ) -> Result<&Self, SecurityError> {
        self.create_entity(
            AsyncOperation::CreateUser,
            payload.into(),
            id.into(),
            options.into(),
            callback.into(),
        )
    }

    pub fn delete_user(
        &self,
        id: &str,
        callback: Option<Callback<String>>,
    ) -> Result<&Self, SecurityError> {
        self.delete_entity(AsyncOperation::DeleteUser, id, callback)
    }
}
