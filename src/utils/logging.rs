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

//! Tracing setup for applications embedding the client.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;

/// Filter directives applying `level` to this crate and `warn` elsewhere.
fn client_directives(level: &str) -> String {
    format!("{}={},warn", env!("CARGO_CRATE_NAME"), level.trim())
}

/// Install a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` wins over `config.log_level`, which only scopes this crate's
/// events. Fails on an unparsable level or if a global subscriber is already
/// set.
pub fn init_tracing(
    config: &ClientConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(client_directives(&config.log_level))?,
    };

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    }
}
