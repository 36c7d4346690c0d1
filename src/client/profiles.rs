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

//! Profile operations.
//!
//! `hydrate` on get materializes roles client-side. On search it is also sent
//! to the backend so hits can come back pre-joined.

use futures::future::try_join_all;
use serde_json::Value;

use crate::client::registry::AsyncOperation;
use crate::client::{non_empty_id, search_body, Security};
use crate::core::entities::Profile;
use crate::core::errors::SecurityError;
use crate::core::models::SearchResult;
use crate::core::resolver::{Arg, Callback};

impl Security {
    /// Build a local, un-hydrated profile without any network call.
    pub fn profile_factory(
        &self,
        id: impl Into<String>,
        content: Value,
    ) -> Result<Profile, SecurityError> {
        Profile::new(id, content)
    }

    pub fn get_profile(
        &self,
        id: &str,
        hydrate: bool,
        callback: Option<Callback<Profile>>,
    ) -> Result<(), SecurityError> {
        let op = AsyncOperation::GetProfile;
        let callback = op.require_callback(callback)?;
        let id = non_empty_id(id)?;

        let this = self.clone();
        self.dispatch(
            op,
            async move { this.fetch_profile(id, hydrate).await },
            callback,
        )
    }

    pub fn search_profiles(
        &self,
        filters: Value,
        hydrate: bool,
        callback: Option<Callback<SearchResult<Profile>>>,
    ) -> Result<(), SecurityError> {
        let op = AsyncOperation::SearchProfiles;
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
                        .map(|hit| this.materialize_profile(hit, hydrate)),
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

    /// Create a profile. `updateIfExist` selects `createOrReplaceProfile`.
    pub fn create_profile(
        &self,
        payload: impl Into<Arg<Profile>>,
        id: impl Into<Arg<Profile>>,
        options: impl Into<Arg<Profile>>,
        callback: impl Into<Arg<Profile>>,
    ) -> Result<&Self, SecurityError> {
        self.create_entity(
            AsyncOperation::CreateProfile,
            payload.into(),
            id.into(),
            options.into(),
            callback.into(),
        )
    }

    pub fn delete_profile(
        &self,
        id: &str,
        callback: Option<Callback<String>>,
    ) -> Result<&Self, SecurityError> {
        self.delete_entity(AsyncOperation::DeleteProfile, id, callback)
    }

    pub(crate) async fn fetch_profile(
        &self,
        id: String,
        hydrate: bool,
    ) -> Result<Profile, SecurityError> {
        let doc = self
            .fetch_document(AsyncOperation::GetProfile, id)
            .await?;
        self.materialize_profile(doc, hydrate).await
    }
}
