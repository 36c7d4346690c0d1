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

//! Entity wrappers.
//!
//! `Role`, `Profile` and `User` pair an identifier with the backend-sourced
//! content. Profiles and users also carry their nested references, which are
//! either all bare ids or all materialized wrappers.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::constants::fields;
use crate::core::errors::SecurityError;
use crate::core::models::RawDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EntityKind {
    Role,
    Profile,
    User,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Role => "role",
            EntityKind::Profile => "profile",
            EntityKind::User => "user",
        }
    }
}

/// Transport-ready form of an entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub body: Value,
}

/// Contract every wrapper fulfils for the client.
pub trait SecurityEntity: Sized + Send + 'static {
    fn id(&self) -> &str;

    /// Source payload, without the nested reference field.
    fn content(&self) -> &Value;

    /// Revision marker, when the backend reported one.
    fn version(&self) -> Option<u64>;

    fn to_document(&self) -> EntityDocument;

    /// Build the un-hydrated wrapper from a backend document.
    fn from_document(doc: RawDocument) -> Result<Self, SecurityError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Role {
    id: String,
    content: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<u64>,
}

impl Role {
    pub fn new(id: impl Into<String>, content: Value) -> Self {
        Self {
            id: id.into(),
            content,
            version: None,
        }
    }
}

impl SecurityEntity for Role {
    fn id(&self) -> &str {
        &self.id
    }

    fn content(&self) -> &Value {
        &self.content
    }

    fn version(&self) -> Option<u64> {
        self.version
    }

    fn to_document(&self) -> EntityDocument {
        EntityDocument {
            id: self.id.clone(),
            body: self.content.clone(),
        }
    }

    fn from_document(doc: RawDocument) -> Result<Self, SecurityError> {
        Ok(Self {
            id: doc.id,
            content: doc.source,
            version: doc.version,
        })
    }
}

/// A profile's roles: never a mix of ids and wrappers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RoleRefs {
    Ids(Vec<String>),
    Hydrated(Vec<Role>),
}

impl RoleRefs {
    pub fn ids(&self) -> Vec<&str> {
        match self {
            RoleRefs::Ids(ids) => ids.iter().map(String::as_str).collect(),
            RoleRefs::Hydrated(roles) => roles.iter().map(|r| r.id()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RoleRefs::Ids(ids) => ids.len(),
            RoleRefs::Hydrated(roles) => roles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A profile and its roles.
///
/// `content()` never holds the `roles` field: role references live in
/// `roles()` (ids or materialized roles) and are written back by
/// `to_document()` only when the source declared them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    id: String,
    content: Value,
    roles: RoleRefs,
    #[serde(skip)]
    declares_roles: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<u64>,
}

impl Profile {
    /// Local, un-hydrated profile. Role ids are read from `content.roles`.
    pub fn new(id: impl Into<String>, content: Value) -> Result<Self, SecurityError> {
        let (content, refs) = split_nested(content, fields::ROLES)?;
        let declares_roles = matches!(refs, Some(Value::Array(_)));
        let ids = match refs {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(reference_id)
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(SecurityError::InvalidArgument(format!(
                    "profile roles must be an array, got {}",
                    other
                )))
            }
        };
        Ok(Self {
            id: id.into(),
            content,
            roles: RoleRefs::Ids(ids),
            declares_roles,
            version: None,
        })
    }

    pub(crate) fn from_parts(
        id: String,
        content: Value,
        roles: RoleRefs,
        declares_roles: bool,
        version: Option<u64>,
    ) -> Self {
        Self {
            id,
            content,
            roles,
            declares_roles,
            version,
        }
    }

    pub fn roles(&self) -> &RoleRefs {
        &self.roles
    }

    pub fn role_ids(&self) -> Vec<&str> {
        self.roles.ids()
    }

    pub fn is_hydrated(&self) -> bool {
        matches!(self.roles, RoleRefs::Hydrated(_))
    }
}

impl SecurityEntity for Profile {
    fn id(&self) -> &str {
        &self.id
    }

    fn content(&self) -> &Value {
        &self.content
    }

    fn version(&self) -> Option<u64> {
        self.version
    }

    fn to_document(&self) -> EntityDocument {
        if !self.declares_roles && self.roles.is_empty() {
            return EntityDocument {
                id: self.id.clone(),
                body: self.content.clone(),
            };
        }
        let roles = self
            .role_ids()
            .into_iter()
            .map(|id| Value::String(id.to_string()))
            .collect();
        EntityDocument {
            id: self.id.clone(),
            body: merge_nested(&self.content, fields::ROLES, Value::Array(roles)),
        }
    }

    fn from_document(doc: RawDocument) -> Result<Self, SecurityError> {
        let version = doc.version;
        let mut profile = Profile::new(doc.id, doc.source)
            .map_err(SecurityError::into_malformed)?;
        profile.version = version;
        Ok(profile)
    }
}

/// A user's profile: a bare id or the materialized profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileRef {
    Id(String),
    Hydrated(Box<Profile>),
}

impl ProfileRef {
    pub fn id(&self) -> &str {
        match self {
            ProfileRef::Id(id) => id,
            ProfileRef::Hydrated(profile) => profile.id(),
        }
    }
}

/// A user and its profile reference.
///
/// `content()` never holds the `profile` field; read it through `profile()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    id: String,
    content: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<ProfileRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<u64>,
}

impl User {
    /// Local, un-hydrated user. The profile id is read from `content.profile`.
    pub fn new(id: impl Into<String>, content: Value) -> Result<Self, SecurityError> {
        let (content, reference) = split_nested(content, fields::PROFILE)?;
        let profile = match reference {
            None | Some(Value::Null) => None,
            Some(value) => Some(ProfileRef::Id(reference_id(&value)?)),
        };
        Ok(Self {
            id: id.into(),
            content,
            profile,
            version: None,
        })
    }

    pub(crate) fn from_parts(
        id: String,
        content: Value,
        profile: Option<ProfileRef>,
        version: Option<u64>,
    ) -> Self {
        Self {
            id,
            content,
            profile,
            version,
        }
    }

    pub fn profile(&self) -> Option<&ProfileRef> {
        self.profile.as_ref()
    }

    pub fn profile_id(&self) -> Option<&str> {
        self.profile.as_ref().map(ProfileRef::id)
    }

    pub fn is_hydrated(&self) -> bool {
        matches!(self.profile, Some(ProfileRef::Hydrated(_)))
    }
}

impl SecurityEntity for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn content(&self) -> &Value {
        &self.content
    }

    fn version(&self) -> Option<u64> {
        self.version
    }

    fn to_document(&self) -> EntityDocument {
        let body = match self.profile_id() {
            Some(id) => merge_nested(&self.content, fields::PROFILE, Value::String(id.to_string())),
            None => self.content.clone(),
        };
        EntityDocument {
            id: self.id.clone(),
            body,
        }
    }

    fn from_document(doc: RawDocument) -> Result<Self, SecurityError> {
        let version = doc.version;
        let mut user = User::new(doc.id, doc.source)
            .map_err(SecurityError::into_malformed)?;
        user.version = version;
        Ok(user)
    }
}

/// Remove `field` from an object payload, returning the rest and the field.
pub(crate) fn split_nested(
    content: Value,
    field: &str,
) -> Result<(Value, Option<Value>), SecurityError> {
    match content {
        Value::Object(mut map) => {
            let nested = map.remove(field);
            Ok((Value::Object(map), nested))
        }
        Value::Null => Ok((Value::Object(Map::new()), None)),
        other => Err(SecurityError::InvalidArgument(format!(
            "entity content must be a JSON object, got {}",
            other
        ))),
    }
}

/// Identifier of a nested reference: a bare id or an embedded `{_id, ...}`.
pub(crate) fn reference_id(value: &Value) -> Result<String, SecurityError> {
    match value {
        Value::String(id) => Ok(id.clone()),
        Value::Object(map) => map
            .get(fields::ID)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                SecurityError::InvalidArgument("nested reference carries no _id".to_string())
            }),
        other => Err(SecurityError::InvalidArgument(format!(
            "nested reference must be an id or a document, got {}",
            other
        ))),
    }
}

fn merge_nested(content: &Value, field: &str, nested: Value) -> Value {
    let mut map = content.as_object().cloned().unwrap_or_default();
    map.insert(field.to_string(), nested);
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_splits_roles_from_content() {
        let profile = Profile::new("p1", json!({"roles": ["r1", "r2"], "label": "ops"})).unwrap();
        assert_eq!(profile.content(), &json!({"label": "ops"}));
        assert_eq!(profile.role_ids(), vec!["r1", "r2"]);
        assert!(!profile.is_hydrated());
    }

    #[test]
    fn test_profile_serialize_reinserts_role_ids() {
        let roles = RoleRefs::Hydrated(vec![Role::new("r1", json!({"allow": true}))]);
        let profile =
            Profile::from_parts("p1".to_string(), json!({"label": "ops"}), roles, true, None);
        let doc = profile.to_document();
        assert_eq!(doc.id, "p1");
        assert_eq!(doc.body, json!({"label": "ops", "roles": ["r1"]}));
    }

    #[test]
    fn test_embedded_role_documents_reduce_to_ids() {
        let profile = Profile::new("p1", json!({"roles": [{"_id": "r1", "_source": {}}, "r2"]}))
            .unwrap();
        assert_eq!(profile.roles(), &RoleRefs::Ids(vec!["r1".to_string(), "r2".to_string()]));
    }

    #[test]
    fn test_profile_rejects_malformed_roles() {
        assert!(Profile::new("p1", json!({"roles": "r1"})).is_err());
        assert!(Profile::new("p1", json!({"roles": [1]})).is_err());
        assert!(Profile::new("p1", json!([1, 2])).is_err());
    }

    #[test]
    fn test_profile_without_roles_field_round_trips() {
        let profile = Profile::new("p1", json!({"label": "ops"})).unwrap();
        assert!(profile.roles().is_empty());
        assert_eq!(profile.to_document().body, json!({"label": "ops"}));

        let declared = Profile::new("p2", json!({"label": "ops", "roles": []})).unwrap();
        assert_eq!(declared.to_document().body, json!({"label": "ops", "roles": []}));
    }

    #[test]
    fn test_null_roles_mean_no_roles() {
        let profile = Profile::new("p1", json!({"roles": null, "label": "ops"})).unwrap();
        assert_eq!(profile.roles(), &RoleRefs::Ids(Vec::new()));
        assert_eq!(profile.content(), &json!({"label": "ops"}));
    }

    #[test]
    fn test_document_and_serde_forms_coexist() {
        let profile = Profile::new("p1", json!({"roles": ["r1"]})).unwrap();
        let document = profile.to_document();
        let serialized = serde_json::to_value(&profile).unwrap();
        assert_eq!(document.body, json!({"roles": ["r1"]}));
        assert_eq!(serialized["roles"], json!(["r1"]));
        assert_eq!(serialized["id"], json!("p1"));
    }

    #[test]
    fn test_user_profile_reference() {
        let user = User::new("u1", json!({"profile": "admin", "name": "Ada"})).unwrap();
        assert_eq!(user.profile_id(), Some("admin"));
        assert_eq!(user.content(), &json!({"name": "Ada"}));
        assert_eq!(user.to_document().body, json!({"name": "Ada", "profile": "admin"}));

        let anonymous = User::new("u2", json!({"name": "Bob"})).unwrap();
        assert_eq!(anonymous.profile_id(), None);
        assert_eq!(anonymous.to_document().body, json!({"name": "Bob"}));
    }

    #[test]
    fn test_from_document_keeps_version() {
        let doc = RawDocument {
            id: "p1".to_string(),
            source: json!({"roles": []}),
            version: Some(3),
        };
        let profile = Profile::from_document(doc).unwrap();
        assert_eq!(profile.version(), Some(3));
        assert!(profile.roles().is_empty());
    }
}
