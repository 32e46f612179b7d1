// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed access to the json-server backend.
//!
//! The actual HTTP calls live behind [`Transport`], so the browser can use
//! `fetch` while tests answer from memory. No call is retried, cached or
//! timed out.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::model::{Book, BookUpdate, NewBook, RecordId, Store};

pub const BOOKS: &str = "/books";
pub const STORES: &str = "/stores";

pub fn book_path(id: &RecordId) -> String {
    format!("{BOOKS}/{id}")
}

pub fn store_path(id: &RecordId) -> String {
    format!("{STORES}/{id}")
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The request never got a response, usually because the server is down.
    #[error("server unreachable: {0}")]
    Unreachable(String),
    /// The server answered outside of the 2xx range.
    #[error("server responded with {status} {text}")]
    Status { status: u16, text: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl Error {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::Unreachable(_))
    }
}

/// Sends JSON requests to paths relative to the backend base URL.
///
/// Implementations turn network failures into [`Error::Unreachable`] and
/// non-2xx responses into [`Error::Status`], so callers never have to look
/// at a status code themselves.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<Value, Error>;

    async fn post(&self, path: &str, body: Value) -> Result<Value, Error>;

    async fn patch(&self, path: &str, body: Value) -> Result<Value, Error>;

    /// Succeeds on any 2xx, the response body is ignored.
    async fn delete(&self, path: &str) -> Result<(), Error>;
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|err| Error::Decode(err.to_string()))
}

fn encode<T: Serialize>(body: &T) -> Result<Value, Error> {
    serde_json::to_value(body).map_err(|err| Error::Encode(err.to_string()))
}

pub struct Api<T> {
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T) -> Self {
        Api { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn stores(&self) -> Result<Vec<Store>, Error> {
        decode(self.transport.get(STORES).await?)
    }

    pub async fn store(&self, id: &RecordId) -> Result<Store, Error> {
        decode(self.transport.get(&store_path(id)).await?)
    }

    pub async fn books(&self) -> Result<Vec<Book>, Error> {
        decode(self.transport.get(BOOKS).await?)
    }

    pub async fn book(&self, id: &RecordId) -> Result<Book, Error> {
        decode(self.transport.get(&book_path(id)).await?)
    }

    /// `POST /books`, returns the stored record with its new id.
    pub async fn create_book(&self, book: &NewBook) -> Result<Book, Error> {
        decode(self.transport.post(BOOKS, encode(book)?).await?)
    }

    pub async fn update_book(&self, id: &RecordId, update: &BookUpdate) -> Result<Book, Error> {
        decode(self.transport.patch(&book_path(id), encode(update)?).await?)
    }

    pub async fn delete_book(&self, id: &RecordId) -> Result<(), Error> {
        self.transport.delete(&book_path(id)).await
    }
}
