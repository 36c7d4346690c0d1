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

//! Future-returning mirror of the async operations.
//!
//! Every method here supplies its own completion callback, delegates to the
//! callback-style operation of the same name and resolves from that callback.
//! The `mirror!` table below has one entry per `AsyncOperation`; factory
//! helpers have no mirror.

use serde_json::Value;
use tokio::sync::oneshot;

use crate::client::registry::AsyncOperation;
use crate::client::Security;
use crate::core::entities::{Profile, Role, User};
use crate::core::errors::SecurityError;
use crate::core::models::SearchResult;
use crate::core::resolver::{Arg, Callback};

/// Handle returned by [`Security::promises`].
#[derive(Debug, Clone, Copy)]
pub struct Promises<'a> {
    security: &'a Security,
}

impl Security {
    /// The future-returning mirror, if this client was built with it.
    pub fn promises(&self) -> Result<Promises<'_>, SecurityError> {
        if self.config().enable_promises {
            Ok(Promises { security: self })
        } else {
            Err(SecurityError::PromisesDisabled)
        }
    }
}

/// Start a callback-style call and wait for its callback.
///
/// Errors raised while starting (bad arguments, no runtime) reject directly.
async fn settle<R, F>(security: &Security, start: F) -> Result<R, SecurityError>
where
    R: Send + 'static,
    F: FnOnce(&Security, Callback<R>) -> Result<(), SecurityError>,
{
    let (tx, rx) = oneshot::channel();
    start(
        security,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    )?;
    rx.await.map_err(|_| SecurityError::Cancelled)?
}

/// Generates the mirror methods and the table of operations they cover.
macro_rules! mirror {
    ($(
        $op:ident => fn $name:ident($($arg:ident: $ty:ty),*) -> $out:ty
            = |$security:ident, $cb:ident| $call:expr;
    )*) => {
        impl Promises<'_> {
            $(
                pub async fn $name(&self, $($arg: $ty),*) -> Result<$out, SecurityError> {
                    settle(self.security, |$security, $cb| $call).await
                }
            )*
        }

        /// Registry entry and method name of every mirrored operation
        pub const MIRRORED: &[(AsyncOperation, &str)] =
            &[$((AsyncOperation::$op, stringify!($name))),*];
    };
}

mirror! {
    GetRole => fn get_role(id: &str) -> Role
        = |security, cb| security.get_role(id, Some(cb));
    SearchRoles => fn search_roles(filters: Value) -> SearchResult<Role>
        = |security, cb| security.search_roles(filters, Some(cb));
    CreateRole => fn create_role(
        payload: impl Into<Arg<Role>>,
        id: impl Into<Arg<Role>>,
        options: impl Into<Arg<Role>>
    ) -> Role
        = |security, cb| security
            .create_role(payload, id, options, Arg::Callback(cb))
            .map(|_| ());
    DeleteRole => fn delete_role(id: &str) -> String
        = |security, cb| security.delete_role(id, Some(cb)).map(|_| ());

    GetProfile => fn get_profile(id: &str, hydrate: bool) -> Profile
        = |security, cb| security.get_profile(id, hydrate, Some(cb));
    SearchProfiles => fn search_profiles(filters: Value, hydrate: bool) -> SearchResult<Profile>
        = |security, cb| security.search_profiles(filters, hydrate, Some(cb));
    CreateProfile => fn create_profile(
        payload: impl Into<Arg<Profile>>,
        id: impl Into<Arg<Profile>>,
        options: impl Into<Arg<Profile>>
    ) -> Profile
        = |security, cb| security
            .create_profile(payload, id, options, Arg::Callback(cb))
            .map(|_| ());
    DeleteProfile => fn delete_profile(id: &str) -> String
        = |security, cb| security.delete_profile(id, Some(cb)).map(|_| ());

    GetUser => fn get_user(id: &str, hydrate: bool) -> User
        = |security, cb| security.get_user(id, hydrate, Some(cb));
    SearchUsers => fn search_users(filters: Value, hydrate: bool) -> SearchResult<User>
        = |security, cb| security.search_users(filters, hydrate, Some(cb));
    CreateUser => fn create_user(
        payload: impl Into<Arg<User>>,
        id: impl Into<Arg<User>>,
        options: impl Into<Arg<User>>
    ) -> User
        = |security, cb| security
            .create_user(payload, id, options, Arg::Callback(cb))
            .map(|_| ());
    DeleteUser => fn delete_user(id: &str) -> String
        = |security, cb| security.delete_user(id, Some(cb)).map(|_| ());
}
