// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`Transport`] over the browser's `fetch`.

use bookstore::api::{Api, Error, Transport};
use bookstore::config::{Config, API_BASE_KEY};
use gloo_net::http::{Request, Response};
use gloo_storage::{LocalStorage, Storage};
use log::debug;
use serde_json::Value;

pub struct Fetch {
    config: Config,
}

impl Fetch {
    pub fn new(config: Config) -> Self {
        Fetch { config }
    }

    /// Base URL from local storage, falling back to the json-server default.
    pub fn from_storage() -> Self {
        let stored = LocalStorage::raw().get_item(API_BASE_KEY).ok().flatten();

        Fetch::new(Config::with_override(stored.as_deref()))
    }

    async fn json(response: Response) -> Result<Value, Error> {
        response.json().await.map_err(|err| Error::Decode(err.to_string()))
    }
}

/// Client for the backend configured in this browser.
pub fn api() -> Api<Fetch> {
    Api::new(Fetch::from_storage())
}

fn checked(response: Result<Response, gloo_net::Error>) -> Result<Response, Error> {
    let response = response.map_err(|err| match err {
        gloo_net::Error::SerdeError(err) => Error::Decode(err.to_string()),
        err => Error::Unreachable(err.to_string()),
    })?;

    if !response.ok() {
        return Err(Error::Status {
            status: response.status(),
            text: response.status_text(),
        });
    }

    Ok(response)
}

fn encode(err: gloo_net::Error) -> Error {
    Error::Encode(err.to_string())
}

impl Transport for Fetch {
    async fn get(&self, path: &str) -> Result<Value, Error> {
        let url = self.config.url(path);

        debug!("GET {url}");

        let response = checked(Request::get(&url).send().await)?;

        Fetch::json(response).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, Error> {
        let url = self.config.url(path);

        debug!("POST {url}");

        let request = Request::post(&url).json(&body).map_err(encode)?;
        let response = checked(request.send().await)?;

        Fetch::json(response).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value, Error> {
        let url = self.config.url(path);

        debug!("PATCH {url}");

        let request = Request::patch(&url).json(&body).map_err(encode)?;
        let response = checked(request.send().await)?;

        Fetch::json(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.config.url(path);

        debug!("DELETE {url}");

        checked(Request::delete(&url).send().await).map(drop)
    }
}
