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

//! Hydration of nested references.
//!
//! A profile lists roles and a user names a profile. A reference arrives
//! either as a bare id or as an embedded `{_id, _source}` document (when the
//! backend pre-joined it). Hydrating wraps embedded documents in place and
//! fetches bare ids; the result is always all-wrappers, never mixed.

use futures::future::try_join_all;
use serde_json::Value;

use crate::client::Security;
use crate::core::constants::fields;
use crate::core::entities::{
    split_nested, Profile, ProfileRef, Role, RoleRefs, SecurityEntity, User,
};
use crate::core::errors::SecurityError;
use crate::core::models::RawDocument;

impl Security {
    /// Wrap a profile document, materializing its roles when asked.
    pub(crate) async fn materialize_profile(
        &self,
        doc: RawDocument,
        hydrate: bool,
    ) -> Result<Profile, SecurityError> {
        if !hydrate {
            return Profile::from_document(doc);
        }

        let RawDocument {
            id,
            source,
            version,
        } = doc;
        let (content, refs) =
            split_nested(source, fields::ROLES).map_err(SecurityError::into_malformed)?;
        let declares_roles = matches!(refs, Some(Value::Array(_)));
        let items = match refs {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(SecurityError::MalformedResponse(format!(
                    "profile {} roles must be an array, got {}",
                    id, other
                )))
            }
        };

        // Role fetches for one profile run concurrently.
        let pending = items.into_iter().map(|item| {
            let this = self.clone();
            async move {
                match item {
                    Value::String(role_id) => this.fetch_role(role_id).await,
                    embedded @ Value::Object(_) => {
                        Role::from_document(RawDocument::from_result(embedded)?)
                    }
                    other => Err(SecurityError::MalformedResponse(format!(
                        "role reference must be an id or a document, got {}",
                        other
                    ))),
                }
            }
        });
        let roles = try_join_all(pending).await?;

        Ok(Profile::from_parts(
            id,
            content,
            RoleRefs::Hydrated(roles),
            declares_roles,
            version,
        ))
    }

    /// Wrap a user document, materializing its profile (and that profile's
    /// roles) when asked.
    pub(crate) async fn materialize_user(
        &self,
        doc: RawDocument,
        hydrate: bool,
    ) -> Result<User, SecurityError> {
        if !hydrate {
            return User::from_document(doc);
        }

        let RawDocument {
            id,
            source,
            version,
        } = doc;
        let (content, reference) =
            split_nested(source, fields::PROFILE).map_err(SecurityError::into_malformed)?;
        let profile = match reference {
            None | Some(Value::Null) => None,
            Some(Value::String(profile_id)) => Some(self.fetch_profile(profile_id, true).await?),
            Some(embedded @ Value::Object(_)) => Some(
                self.materialize_profile(RawDocument::from_result(embedded)?, true)
                    .await?,
            ),
            Some(other) => {
                return Err(SecurityError::MalformedResponse(format!(
                    "user {} profile must be an id or a document, got {}",
                    id, other
                )))
            }
        };

        Ok(User::from_parts(
            id,
            content,
            profile.map(|p| ProfileRef::Hydrated(Box::new(p))),
            version,
        ))
    }
}
