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

// Local rights evaluation - no network call

use crate::client::Security;
use crate::core::constants::rights::{ALLOWED, CONDITIONAL, WILDCARD};
use crate::core::errors::SecurityError;
use crate::core::models::{ActionPermission, Right};

fn matches_scope(right: Option<&str>, requested: Option<&str>) -> bool {
    right == Some(WILDCARD) || right == requested
}

impl Security {
    /// Decide from a rights listing whether an action may run.
    ///
    /// Any matching `allowed` right wins, then any `conditional` one;
    /// everything else is denied.
    pub fn is_action_allowed(
        rights: &[Right],
        controller: &str,
        action: &str,
        index: Option<&str>,
        collection: Option<&str>,
    ) -> Result<ActionPermission, SecurityError> {
        if controller.is_empty() || action.is_empty() {
            return Err(SecurityError::InvalidArgument(
                "controller and action are required".to_string(),
            ));
        }

        let values: Vec<&str> = rights
            .iter()
            .filter(|r| r.controller == controller || r.controller == WILDCARD)
            .filter(|r| r.action == action || r.action == WILDCARD)
            .filter(|r| matches_scope(r.index.as_deref(), index))
            .filter(|r| matches_scope(r.collection.as_deref(), collection))
            .map(|r| r.value.as_str())
            .collect();

        if values.contains(&ALLOWED) {
            Ok(ActionPermission::Allowed)
        } else if values.contains(&CONDITIONAL) {
            Ok(ActionPermission::Conditional)
        } else {
            Ok(ActionPermission::Denied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right(controller: &str, action: &str, index: Option<&str>, value: &str) -> Right {
        Right {
            controller: controller.to_string(),
            action: action.to_string(),
            index: index.map(str::to_string),
            collection: index.map(|_| WILDCARD.to_string()),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_allowed_wins_over_conditional() {
        let rights = vec![
            right("document", "create", Some("*"), "conditional"),
            right("*", "*", Some("*"), "allowed"),
        ];
        let outcome =
            Security::is_action_allowed(&rights, "document", "create", Some("books"), Some("c"));
        assert_eq!(outcome.unwrap(), ActionPermission::Allowed);
    }

    #[test]
    fn test_conditional_and_denied() {
        let rights = vec![
            right("document", "create", Some("books"), "conditional"),
            right("document", "delete", Some("books"), "denied"),
        ];
        assert_eq!(
            Security::is_action_allowed(&rights, "document", "create", Some("books"), Some("c"))
                .unwrap(),
            ActionPermission::Conditional
        );
        assert_eq!(
            Security::is_action_allowed(&rights, "document", "delete", Some("books"), Some("c"))
                .unwrap(),
            ActionPermission::Denied
        );
        assert_eq!(
            Security::is_action_allowed(&rights, "document", "create", Some("films"), Some("c"))
                .unwrap(),
            ActionPermission::Denied
        );
    }

    #[test]
    fn test_server_actions_without_index() {
        let rights = vec![right("server", "info", None, "allowed")];
        assert_eq!(
            Security::is_action_allowed(&rights, "server", "info", None, None).unwrap(),
            ActionPermission::Allowed
        );
    }

    #[test]
    fn test_requires_controller_and_action() {
        assert!(Security::is_action_allowed(&[], "", "info", None, None).is_err());
    }
}
