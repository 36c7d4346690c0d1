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

//! Role operations.

use serde_json::Value;

use crate::client::registry::AsyncOperation;
use crate::client::{non_empty_id, search_body, Security};
use crate::core::entities::{Role, SecurityEntity};
use crate::core::errors::SecurityError;
use crate::core::models::SearchResult;
use crate::core::resolver::{Arg, Callback};

impl Security {
    /// Build a local role without any network call.
    pub fn role_factory(&self, id: impl Into<String>, content: Value) -> Role {
        Role::new(id, content)
    }

    /// Fetch one role. The callback is mandatory.
    pub fn get_role(&self, id: &str, callback: Option<Callback<Role>>) -> Result<(), SecurityError> {
        let op = AsyncOperation::GetRole;
        let callback = op.require_callback(callback)?;
        let id = non_empty_id(id)?;

        let this = self.clone();
        self.dispatch(op, async move { this.fetch_role(id).await }, callback)
    }

    /// Search roles; `filters` is forwarded as the request body.
    pub fn search_roles(
        &self,
        filters: Value,
        callback: Option<Callback<SearchResult<Role>>>,
    ) -> Result<(), SecurityError> {
        let op = AsyncOperation::SearchRoles;
        let callback = op.require_callback(callback)?;
        let body = search_body(filters, false)?;

        let this = self.clone();
        self.dispatch(
            op,
            async move {
                let found = this.search_documents(op, body).await?;
                let documents = found
                    .hits
                    .into_iter()
                    .map(Role::from_document)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(SearchResult {
                    total: found.total,
                    documents,
                })
            },
            callback,
        )
    }

    /// Create a role. `replaceIfExist` selects `createOrReplaceRole`; without
    /// it the backend refuses an existing id.
    pub fn create_role(
        &self,
        payload: impl Into<Arg<Role>>,
        id: impl Into<Arg<Role>>,
        options: impl Into<Arg<Role>>,
        callback: impl Into<Arg<Role>>,
    ) -> Result<&Self, SecurityError> {
        self.create_entity(
            AsyncOperation::CreateRole,
            payload.into(),
            id.into(),
            options.into(),
            callback.into(),
        )
    }

    pub fn delete_role(
        &self,
        id: &str,
        callback: Option<Callback<String>>,
    ) -> Result<&Self, SecurityError> {
        self.delete_entity(AsyncOperation::DeleteRole, id, callback)
    }

    pub(crate) async fn fetch_role(&self, id: String) -> Result<Role, SecurityError> {
        let doc = self.fetch_document(AsyncOperation::GetRole, id).await?;
        Role::from_document(doc)
    }
}
