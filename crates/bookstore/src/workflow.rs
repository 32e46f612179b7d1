// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Everything that talks to the backend in response to the page loading or
//! to the user.
//!
//! Each workflow issues at most one request per step and touches the [`Page`]
//! only through [`PageHandle::update`], never across an `.await`.
//!
//! [`Page`]: crate::page::Page

use log::{debug, error, warn};

use crate::api::{Api, Transport};
use crate::catalog::EntryKey;
use crate::form::BookForm;
use crate::model::{NewBook, RecordId};
use crate::page::PageHandle;

pub const FILL_OUT_ALL: &str = "Please fill out all form values!";
pub const UPDATE_FAILED: &str =
    "Update went wrong! Check the form and make sure there are no empty values!";

/// Fill the store selector and show the first store.
///
/// A failure here is only logged: when the server is down the book list
/// already shows the banner, and one banner is enough.
pub async fn load_stores<T: Transport>(api: &Api<T>, page: &impl PageHandle) {
    match api.stores().await {
        Ok(stores) => {
            debug!("loaded {} stores", stores.len());

            page.update(move |page| page.set_stores(stores));
        }
        Err(err) => error!("failed to load stores: {err}"),
    }
}

/// Render a card for every book, in the order the backend returns them.
pub async fn load_books<T: Transport>(api: &Api<T>, page: &impl PageHandle) {
    match api.books().await {
        Ok(books) => {
            debug!("loaded {} books", books.len());

            page.update(move |page| page.catalog.extend(books));
        }
        Err(err) => {
            error!("failed to load books: {err}");

            page.update(|page| page.show_error(&err));
        }
    }
}

/// Fetch the chosen store and show it in the header and footer.
///
/// Responses are applied in arrival order, so switching quickly can leave an
/// older selection on screen.
pub async fn select_store<T: Transport>(api: &Api<T>, page: &impl PageHandle, id: RecordId) {
    match api.store(&id).await {
        Ok(store) => page.update(move |page| page.store = Some(store)),
        Err(err) => error!("failed to load store {id}: {err}"),
    }
}

/// Validate the new book form. Alerts and returns `None` if anything is
/// missing, in which case no request must be made.
pub fn accept_new_book(page: &impl PageHandle, form: &BookForm) -> Option<NewBook> {
    match form.to_new_book() {
        Ok(book) => Some(book),
        Err(err) => {
            warn!("new book rejected: {err}");

            page.alert(FILL_OUT_ALL);

            None
        }
    }
}

/// Show the book right away, then persist it. The card gets its id when the
/// backend answers, or disappears again if the request fails.
pub async fn create_book<T: Transport>(api: &Api<T>, page: &impl PageHandle, book: NewBook) {
    let mut pending = None;

    page.update(|page| pending = Some(page.catalog.push_pending(book.to_book())));

    let Some(key) = pending else {
        return;
    };

    match api.create_book(&book).await {
        Ok(created) => match created.id {
            Some(id) => {
                debug!("book {:?} saved as {id}", book.title);

                page.update(move |page| {
                    page.catalog.confirm(key, id);
                });
            }
            None => {
                error!("backend saved {:?} without an id", book.title);

                rollback(page, key);
            }
        },
        Err(err) => {
            error!("failed to save {:?}: {err}", book.title);

            rollback(page, key);
        }
    }
}

fn rollback(page: &impl PageHandle, key: EntryKey) {
    page.update(move |page| {
        page.catalog.rollback(key);
    });
}

/// [`accept_new_book`] followed by [`create_book`].
pub async fn submit_new_book<T: Transport>(api: &Api<T>, page: &impl PageHandle, form: BookForm) {
    if let Some(book) = accept_new_book(page, &form) {
        create_book(api, page, book).await;
    }
}

/// Open the edit modal for `id` and fill it with a fresh copy of the record
/// rather than whatever the card currently shows.
pub async fn open_editor<T: Transport>(api: &Api<T>, page: &impl PageHandle, id: RecordId) {
    {
        let id = id.clone();

        page.update(move |page| page.open_editor(id));
    }

    match api.book(&id).await {
        Ok(book) => page.update(move |page| {
            if !page.edit.fill_in(&book) {
                debug!("dropping stale copy of book {id}");
            }
        }),
        Err(err) => error!("failed to load book {id}: {err}"),
    }
}

/// Persist the edit form. The card changes only once the backend accepts the
/// update; on failure the modal stays open.
pub async fn save_edit<T: Transport>(api: &Api<T>, page: &impl PageHandle, form: BookForm) {
    let Some(id) = page.read(|page| page.edit.target().cloned()).flatten() else {
        warn!("edit submitted with no book selected");
        return;
    };

    let update = match form.to_update() {
        Ok(update) => update,
        Err(err) => {
            warn!("update of book {id} rejected: {err}");

            page.alert(FILL_OUT_ALL);

            return;
        }
    };

    page.update(move |page| page.edit.form = form);

    match api.update_book(&id, &update).await {
        Ok(book) => page.update(move |page| {
            if !page.catalog.apply_update(&id, book) {
                warn!("updated book {id} is not in the list");
            }

            page.close_editor();
        }),
        Err(err) => {
            error!("failed to update book {id}: {err}");

            page.alert(UPDATE_FAILED);
        }
    }
}

/// Delete the book behind a card, then remove the card.
pub async fn delete_book<T: Transport>(api: &Api<T>, page: &impl PageHandle, key: EntryKey) {
    let id = match page.read(|page| page.catalog.get(key).map(|entry| entry.record_id().cloned())) {
        Some(Some(Some(id))) => id,
        Some(Some(None)) => {
            warn!("book is still being saved, not deleting");
            return;
        }
        _ => return,
    };

    match api.delete_book(&id).await {
        Ok(()) => page.update(move |page| {
            page.catalog.remove(key);
        }),
        Err(err) => error!("failed to delete book {id}: {err}"),
    }
}
