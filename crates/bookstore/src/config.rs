// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Where json-server listens when started with its defaults.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Storage key the web front end reads an alternative base URL from.
pub const API_BASE_KEY: &str = "bookstore.api_base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_base: String,
}

impl Config {
    pub fn new(api_base: &str) -> Self {
        Config {
            api_base: api_base.trim().trim_end_matches('/').to_owned(),
        }
    }

    /// Use `api_base` unless it's missing or blank.
    pub fn with_override(api_base: Option<&str>) -> Self {
        match api_base.map(str::trim) {
            Some(base) if !base.is_empty() => Config::new(base),
            _ => Config::default(),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Absolute URL for a path such as `/books/7`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_API_BASE)
    }
}
