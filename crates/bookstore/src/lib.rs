// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Bookstore
//!
//! Platform independent half of the bookstore front end. Nothing in here touches
//! the DOM: the page is described by a single [`Page`](page::Page) state, the
//! backend by the [`Transport`](api::Transport) trait, and every user action is
//! an async function in [`workflow`] that talks to both.
//!
//! The `bookstore_web` binary supplies a `gloo-net` transport and renders the
//! [`Page`](page::Page) with Kobold.

pub mod api;
pub mod catalog;
pub mod chrome;
pub mod config;
pub mod form;
pub mod format;
pub mod model;
pub mod page;
pub mod workflow;

/// The prelude module with most commonly used types.
pub mod prelude {
    pub use crate::api::{Api, Error, Transport};
    pub use crate::catalog::{Catalog, Entry, EntryKey};
    pub use crate::config::Config;
    pub use crate::form::{BookForm, FormError, StoreForm};
    pub use crate::model::{Book, BookUpdate, NewBook, RecordId, Store};
    pub use crate::page::{Page, PageHandle};
}
