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

//! Argument Resolver.
//!
//! Create calls take four positional slots (payload, id, options, callback),
//! any of which may be omitted or shifted left. Each slot is an [`Arg`]; the
//! resolver maps every combination to one canonical [`Resolved`] shape or
//! rejects it before anything is sent.

use serde_json::Value;

use crate::core::errors::SecurityError;
use crate::core::models::CreateOptions;

/// Completion handler for callback-style calls
pub type Callback<T> = Box<dyn FnOnce(Result<T, SecurityError>) + Send + 'static>;

/// Box a closure as a [`Callback`].
pub fn callback<T, F>(f: F) -> Callback<T>
where
    F: FnOnce(Result<T, SecurityError>) + Send + 'static,
{
    Box::new(f)
}

/// One positional argument, tagged by shape.
pub enum Arg<E> {
    Entity(E),
    Document(Value),
    Id(String),
    Options(CreateOptions),
    Callback(Callback<E>),
    Absent,
}

impl<E> Arg<E> {
    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce(Result<E, SecurityError>) + Send + 'static,
    {
        Arg::Callback(Box::new(f))
    }

    fn shape(&self) -> &'static str {
        match self {
            Arg::Entity(_) => "entity",
            Arg::Document(_) => "document",
            Arg::Id(_) => "id",
            Arg::Options(_) => "options",
            Arg::Callback(_) => "callback",
            Arg::Absent => "nothing",
        }
    }
}

impl<E> std::fmt::Debug for Arg<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Arg::{}", self.shape())
    }
}

impl<E> From<()> for Arg<E> {
    fn from(_: ()) -> Self {
        Arg::Absent
    }
}

impl<E> From<&str> for Arg<E> {
    fn from(id: &str) -> Self {
        Arg::Id(id.to_string())
    }
}

impl<E> From<String> for Arg<E> {
    fn from(id: String) -> Self {
        Arg::Id(id)
    }
}

impl<E> From<CreateOptions> for Arg<E> {
    fn from(options: CreateOptions) -> Self {
        Arg::Options(options)
    }
}

/// JSON strings are ids and `null` is an omitted argument.
impl<E> From<Value> for Arg<E> {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Arg::Absent,
            Value::String(id) => Arg::Id(id),
            other => Arg::Document(other),
        }
    }
}

impl<E, T: Into<Arg<E>>> From<Option<T>> for Arg<E> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Absent, Into::into)
    }
}

impl From<crate::core::entities::Role> for Arg<crate::core::entities::Role> {
    fn from(role: crate::core::entities::Role) -> Self {
        Arg::Entity(role)
    }
}

impl From<crate::core::entities::Profile> for Arg<crate::core::entities::Profile> {
    fn from(profile: crate::core::entities::Profile) -> Self {
        Arg::Entity(profile)
    }
}

impl From<crate::core::entities::User> for Arg<crate::core::entities::User> {
    fn from(user: crate::core::entities::User) -> Self {
        Arg::Entity(user)
    }
}

/// The primary payload of a create call
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<E> {
    Entity(E),
    Document(Value),
}

/// Canonical call shape produced by [`resolve`].
pub struct Resolved<E> {
    pub payload: Payload<E>,
    /// Always `None` for entity payloads: the entity's own id wins.
    pub id: Option<String>,
    pub options: Option<CreateOptions>,
    pub callback: Option<Callback<E>>,
}

impl<E> Resolved<E> {
    pub fn options_or_default(&self) -> CreateOptions {
        self.options.clone().unwrap_or_default()
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for Resolved<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolved")
            .field("payload", &self.payload)
            .field("id", &self.id)
            .field("options", &self.options)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

const ENTITY_WITHOUT_ID: &str = "cannot act on an entity without a string identifier";

fn invalid(message: impl Into<String>) -> SecurityError {
    SecurityError::InvalidArgument(message.into())
}

/// Normalize the four positional slots of a create call.
pub fn resolve<E>(
    payload: Arg<E>,
    id: Arg<E>,
    options: Arg<E>,
    callback: Arg<E>,
) -> Result<Resolved<E>, SecurityError> {
    // an entity carries its own id: an object in the id slot can only be options
    let id = match (&payload, id) {
        (Arg::Entity(_), Arg::Document(value)) => match CreateOptions::from_value(value) {
            Ok(options) => Arg::Options(options),
            Err(_) => return Err(invalid(ENTITY_WITHOUT_ID)),
        },
        (_, id) => id,
    };

    match id {
        // id slot holding the callback: everything after it must be empty
        Arg::Callback(cb) => {
            if !matches!(options, Arg::Absent) || !matches!(callback, Arg::Absent) {
                return Err(invalid("only one completion callback may be supplied"));
            }
            finish(payload, None, None, Some(cb))
        }
        // id slot holding options: shift right by one
        Arg::Options(opts) => match (options, callback) {
            (Arg::Callback(_), Arg::Callback(_)) => {
                Err(invalid("only one completion callback may be supplied"))
            }
            (Arg::Callback(cb), Arg::Absent) | (Arg::Absent, Arg::Callback(cb)) => {
                finish(payload, None, Some(opts), Some(cb))
            }
            (Arg::Absent, Arg::Absent) => finish(payload, None, Some(opts), None),
            (Arg::Callback(_), other) => Err(invalid(format!(
                "unexpected {} after the completion callback",
                other.shape()
            ))),
            (other, _) => Err(invalid(format!(
                "expected a callback after options, got {}",
                other.shape()
            ))),
        },
        id => resolve_positional(payload, id, options, callback),
    }
}

fn resolve_positional<E>(
    payload: Arg<E>,
    id: Arg<E>,
    options: Arg<E>,
    callback: Arg<E>,
) -> Result<Resolved<E>, SecurityError> {
    let (opts, cb) = match (options, callback) {
        (Arg::Callback(_), Arg::Callback(_)) => {
            return Err(invalid("only one completion callback may be supplied"))
        }
        (Arg::Callback(cb), Arg::Absent) => (None, Some(cb)),
        (Arg::Callback(_), other) => {
            return Err(invalid(format!(
                "unexpected {} after the completion callback",
                other.shape()
            )))
        }
        (options, callback) => (options_slot(options)?, callback_slot(callback)?),
    };

    match (payload, id) {
        (payload, Arg::Absent) => finish(payload, None, opts, cb),
        (payload, Arg::Id(id)) => finish(payload, Some(id), opts, cb),
        // payload omitted: the id came first and the payload second
        (Arg::Id(id), shifted @ (Arg::Entity(_) | Arg::Document(_))) => {
            finish(shifted, Some(id), opts, cb)
        }
        (Arg::Entity(_), _) => Err(invalid(ENTITY_WITHOUT_ID)),
        (_, other) => Err(invalid(format!(
            "identifier must be a string, got {}",
            other.shape()
        ))),
    }
}

fn options_slot<E>(arg: Arg<E>) -> Result<Option<CreateOptions>, SecurityError> {
    match arg {
        Arg::Absent => Ok(None),
        Arg::Options(options) => Ok(Some(options)),
        Arg::Document(value) => CreateOptions::from_value(value).map(Some),
        other => Err(invalid(format!("expected options, got {}", other.shape()))),
    }
}

fn callback_slot<E>(arg: Arg<E>) -> Result<Option<Callback<E>>, SecurityError> {
    match arg {
        Arg::Absent => Ok(None),
        Arg::Callback(cb) => Ok(Some(cb)),
        other => Err(invalid(format!(
            "expected a completion callback, got {}",
            other.shape()
        ))),
    }
}

fn finish<E>(
    payload: Arg<E>,
    id: Option<String>,
    options: Option<CreateOptions>,
    callback: Option<Callback<E>>,
) -> Result<Resolved<E>, SecurityError> {
    if id.as_deref() == Some("") {
        return Err(invalid("identifier must not be empty"));
    }
    let payload = match payload {
        // entity ids take precedence over anything passed alongside
        Arg::Entity(entity) => {
            return Ok(Resolved {
                payload: Payload::Entity(entity),
                id: None,
                options,
                callback,
            })
        }
        Arg::Document(value @ Value::Object(_)) => Payload::Document(value),
        Arg::Document(_) => return Err(invalid("payload must be a JSON object")),
        Arg::Callback(_) => return Err(invalid("payload must not be a callback")),
        Arg::Absent | Arg::Id(_) | Arg::Options(_) => {
            return Err(invalid("a payload is required"))
        }
    };
    Ok(Resolved {
        payload,
        id,
        options,
        callback,
    })
}
