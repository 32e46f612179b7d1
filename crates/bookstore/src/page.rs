// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The page controller.
//!
//! [`Page`] is constructed once at startup and holds everything the view
//! renders. Workflows never own it; they reach it through a [`PageHandle`].

use crate::api::Error;
use crate::catalog::Catalog;
use crate::chrome::Chrome;
use crate::form::{BookForm, StoreForm};
use crate::model::{Book, RecordId, Store};

pub const SERVER_DOWN: &str = "Whoops! Looks like you forgot to start your JSON-server!";

/// Dismissable error shown above the book list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
}

impl Banner {
    pub fn from_error(err: &Error) -> Self {
        let message = if err.is_unreachable() {
            SERVER_DOWN.to_owned()
        } else {
            err.to_string()
        };

        Banner { message }
    }
}

/// The book being edited in the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    target: Option<RecordId>,
    pub form: BookForm,
    generation: u32,
}

impl EditSession {
    pub fn target(&self) -> Option<&RecordId> {
        self.target.as_ref()
    }

    /// Bumped every time the form is replaced from outside the inputs. The
    /// view rebuilds its inputs when this changes.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn begin(&mut self, id: RecordId) {
        self.target = Some(id);
        self.replace_form(BookForm::default());
    }

    fn replace_form(&mut self, form: BookForm) {
        self.form = form;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Fill the form with the fetched record, unless another book was picked
    /// in the meantime.
    pub fn fill_in(&mut self, book: &Book) -> bool {
        let current = match (&self.target, &book.id) {
            (Some(target), Some(id)) => target == id,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if current {
            self.replace_form(BookForm::fill_in(book));
        }

        current
    }
}

#[derive(Debug, Default)]
pub struct Page {
    pub stores: Vec<Store>,
    pub store: Option<Store>,
    pub catalog: Catalog,
    pub edit: EditSession,
    pub chrome: Chrome,
    pub store_form: StoreForm,
    pub banner: Option<Banner>,
}

impl Page {
    /// Replace the selector options and show the first store.
    pub fn set_stores(&mut self, stores: Vec<Store>) {
        self.store = stores.first().cloned();
        self.stores = stores;
    }

    /// Id of the store currently shown in the header.
    pub fn selected_store(&self) -> Option<&RecordId> {
        self.store.as_ref().map(|store| &store.id)
    }

    /// Id behind the selector option at `index`. The selector reports `-1`
    /// when nothing is selected.
    pub fn store_at(&self, index: i32) -> Option<&RecordId> {
        let index = usize::try_from(index).ok()?;

        self.stores.get(index).map(|store| &store.id)
    }

    pub fn open_editor(&mut self, id: RecordId) {
        self.chrome.open_modal();
        self.edit.begin(id);
    }

    pub fn close_editor(&mut self) {
        self.chrome.close_modal();
    }

    pub fn show_error(&mut self, err: &Error) {
        self.banner = Some(Banner::from_error(err));
    }

    /// Escape key: hide the forms, the modal and the error banner.
    pub fn escape(&mut self) {
        self.chrome.escape();
        self.banner = None;
    }
}

/// Access to the live [`Page`] from async workflows.
///
/// The view framework owns the state; a handle may outlive it, in which case
/// updates are dropped and reads return `None`.
pub trait PageHandle {
    /// Mutate the page and re-render.
    fn update(&self, mutator: impl FnOnce(&mut Page));

    /// Read from the page without re-rendering.
    fn read<R>(&self, getter: impl FnOnce(&Page) -> R) -> Option<R>;

    /// Blocking message box.
    fn alert(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(id: u64, name: &str) -> Store {
        Store {
            id: RecordId::from(id),
            name: name.into(),
            address: format!("{id} Main St"),
            number: "555-555-5555".into(),
            location: "Seattle".into(),
            hours: None,
        }
    }

    #[test]
    fn first_store_is_shown() {
        let mut page = Page::default();

        page.set_stores(vec![store(2, "B"), store(1, "A")]);

        assert_eq!(page.selected_store(), Some(&RecordId::from(2)));
        assert_eq!(page.store_at(1), Some(&RecordId::from(1)));
        assert_eq!(page.store_at(2), None);
        assert_eq!(page.store_at(-1), None);
    }

    #[test]
    fn no_stores_no_header() {
        let mut page = Page::default();

        page.set_stores(Vec::new());

        assert!(page.store.is_none());
    }

    #[test]
    fn banner_messages() {
        let down = Banner::from_error(&Error::Unreachable("Failed to fetch".into()));
        let other = Banner::from_error(&Error::Status {
            status: 500,
            text: "Internal Server Error".into(),
        });

        assert_eq!(down.message, SERVER_DOWN);
        assert_eq!(other.message, "server responded with 500 Internal Server Error");
    }

    #[test]
    fn escape_dismisses_banner_and_modal() {
        let mut page = Page::default();

        page.show_error(&Error::Unreachable(String::new()));
        page.open_editor(RecordId::from(1));
        page.chrome.book_form.toggle();
        page.escape();

        assert!(page.banner.is_none());
        assert!(!page.chrome.is_modal_open());
        assert!(!page.chrome.book_form.is_expanded());
        // the edit target survives, only the modal is hidden
        assert_eq!(page.edit.target(), Some(&RecordId::from(1)));
    }

    #[test]
    fn stale_fill_in_is_ignored() {
        let mut page = Page::default();
        let book = Book {
            id: Some(RecordId::from(1)),
            title: "One".into(),
            author: "A".into(),
            price: 1.0,
            inventory: 1,
            image_url: "1.jpg".into(),
            reviews: Vec::new(),
        };

        page.open_editor(RecordId::from(2));

        assert!(!page.edit.fill_in(&book));
        assert_eq!(page.edit.form, BookForm::default());

        page.open_editor(RecordId::from(1));

        assert!(page.edit.fill_in(&book));
        assert_eq!(page.edit.form.title, "One");
    }

    #[test]
    fn opening_another_book_clears_the_form() {
        let mut page = Page::default();
        let mut book = Book {
            id: Some(RecordId::from(6)),
            title: "Six".into(),
            author: "A".into(),
            price: 6.0,
            inventory: 6,
            image_url: "6.jpg".into(),
            reviews: Vec::new(),
        };

        page.open_editor(RecordId::from(6));
        page.edit.fill_in(&book);
        page.close_editor();
        page.open_editor(RecordId::from(7));

        assert_eq!(page.edit.form, BookForm::default());

        book.id = Some(RecordId::from(7));
        book.title = "Seven".into();

        assert!(page.edit.fill_in(&book));
        assert_eq!(page.edit.form.title, "Seven");
    }

    #[test]
    fn every_fill_is_a_new_generation() {
        let mut page = Page::default();
        let book = Book {
            id: Some(RecordId::from(1)),
            title: "One".into(),
            author: "A".into(),
            price: 1.0,
            inventory: 1,
            image_url: "1.jpg".into(),
            reviews: Vec::new(),
        };

        page.open_editor(RecordId::from(1));
        page.edit.fill_in(&book);

        let first = page.edit.generation();

        page.close_editor();
        page.open_editor(RecordId::from(1));
        page.edit.fill_in(&book);

        // same values, but the inputs still have to be rewritten
        assert_eq!(page.edit.form.title, "One");
        assert_ne!(page.edit.generation(), first);

        let filled = page.edit.generation();

        page.edit.form.title = "Typed".into();

        assert_eq!(page.edit.generation(), filled);
    }
}
