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

use crate::core::constants::config::{ENV_ENABLE_PROMISES, ENV_LOG_FORMAT, ENV_LOG_LEVEL};
use crate::core::errors::SecurityError;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Expose the future-returning mirror of every async operation
    pub enable_promises: bool,
    pub log_level: String,
    pub log_format: String, // "json" or "text"
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, SecurityError> {
        let enable_promises = match env::var(ENV_ENABLE_PROMISES) {
            Ok(v) => parse_flag(&v).ok_or_else(|| {
                SecurityError::InvalidArgument(format!(
                    "{} must be true/false or 1/0, got {:?}",
                    ENV_ENABLE_PROMISES, v
                ))
            })?,
            Err(_) => true,
        };

        Ok(Self {
            enable_promises,
            log_level: env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| "info".to_string()),
            log_format: env::var(ENV_LOG_FORMAT).unwrap_or_else(|_| "text".to_string()),
        })
    }

    /// Callback-only client: `Security::promises()` is refused.
    pub fn callbacks_only() -> Self {
        Self {
            enable_promises: false,
            ..Self::default()
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            enable_promises: true,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_callbacks_only() {
        let config = ClientConfig::callbacks_only();
        assert!(!config.enable_promises);
        assert_eq!(config.log_format, "text");
    }
}
