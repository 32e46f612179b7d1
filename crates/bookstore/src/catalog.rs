// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory list of book cards, the source of truth the book list renders from.
//!
//! Every entry gets a local [`EntryKey`] when it is inserted. Entries created
//! optimistically have no [`RecordId`] until the backend confirms them, so
//! they are always addressed by key, never by id.

use crate::format::{format_price, StockLabel};
use crate::model::{Book, RecordId};

/// Local handle of a catalog entry, stable for the lifetime of the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey(u32);

#[derive(Debug, Clone)]
pub struct Entry {
    key: EntryKey,
    book: Book,
    /// Id the entry was confirmed with, kept even if a later update
    /// comes back without one.
    confirmed: Option<RecordId>,
    price: String,
    stock: StockLabel,
}

impl Entry {
    fn new(key: EntryKey, book: Book) -> Self {
        Entry {
            key,
            price: format_price(book.price),
            stock: StockLabel::listing(book.inventory),
            confirmed: book.id.clone(),
            book,
        }
    }

    pub fn key(&self) -> EntryKey {
        self.key
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Backend id of this entry, `None` while a creation is in flight.
    pub fn record_id(&self) -> Option<&RecordId> {
        self.book.id.as_ref().or(self.confirmed.as_ref())
    }

    /// Value of the identifier attribute on the rendered card.
    pub fn id_attr(&self) -> &str {
        self.record_id().map_or("", RecordId::as_str)
    }

    /// DOM id of the rendered card, `book-{id}`. Empty while pending, so it
    /// can't clash with the fixed ids of the page.
    pub fn element_id(&self) -> String {
        match self.record_id() {
            Some(id) => format!("book-{id}"),
            None => String::new(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.record_id().is_none()
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn stock(&self) -> StockLabel {
        self.stock
    }

    pub fn cover_alt(&self) -> String {
        format!("{} cover", self.book.title)
    }
}

#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    next_key: u32,
}

impl Catalog {
    fn next_key(&mut self) -> EntryKey {
        let key = EntryKey(self.next_key);

        self.next_key += 1;

        key
    }

    /// Append a card for `book`, keeping the order of insertion.
    pub fn push(&mut self, book: Book) -> EntryKey {
        let key = self.next_key();

        self.entries.push(Entry::new(key, book));

        key
    }

    pub fn extend(&mut self, books: impl IntoIterator<Item = Book>) {
        for book in books {
            self.push(book);
        }
    }

    /// Append a card for a book the backend doesn't know about yet.
    pub fn push_pending(&mut self, mut book: Book) -> EntryKey {
        book.id = None;

        self.push(book)
    }

    /// Attach the backend id to a pending entry. Returns `false` if the entry
    /// is gone.
    pub fn confirm(&mut self, key: EntryKey, id: RecordId) -> bool {
        match self.get_mut(key) {
            Some(entry) => {
                entry.book.id = Some(id.clone());
                entry.confirmed = Some(id);
                true
            }
            None => false,
        }
    }

    /// Drop a pending entry whose creation failed.
    pub fn rollback(&mut self, key: EntryKey) -> Option<Book> {
        self.remove(key)
    }

    pub fn remove(&mut self, key: EntryKey) -> Option<Book> {
        let idx = self.entries.iter().position(|entry| entry.key == key)?;

        Some(self.entries.remove(idx).book)
    }

    /// Overwrite the displayed fields of the entry for `id` with an updated
    /// record. The stock label switches to the edit rules, see
    /// [`StockLabel::after_edit`].
    pub fn apply_update(&mut self, id: &RecordId, updated: Book) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.record_id() == Some(id))
        else {
            return false;
        };

        let Book {
            id: new_id,
            title,
            author,
            price,
            inventory,
            image_url,
            reviews: _,
        } = updated;

        let book = &mut entry.book;

        book.id = new_id;
        book.title = title;
        book.author = author;
        book.price = price;
        book.inventory = inventory;
        book.image_url = image_url;

        entry.price = format_price(price);
        entry.stock = StockLabel::after_edit(inventory);

        true
    }

    pub fn get(&self, key: EntryKey) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    fn get_mut(&mut self, key: EntryKey) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.key == key)
    }

    pub fn find(&self, id: &RecordId) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.record_id() == Some(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: Option<u64>, title: &str, inventory: u32) -> Book {
        Book {
            id: id.map(RecordId::from),
            title: title.into(),
            author: "Anonymous".into(),
            price: 10.0,
            inventory,
            image_url: format!("{title}.jpg"),
            reviews: Vec::new(),
        }
    }

    #[test]
    fn keeps_fetch_order() {
        let mut catalog = Catalog::default();

        catalog.extend([book(Some(3), "c", 1), book(Some(1), "a", 5), book(Some(2), "b", 0)]);

        let titles: Vec<_> = catalog.iter().map(|e| e.book().title.as_str()).collect();

        assert_eq!(titles, ["c", "a", "b"]);
    }

    #[test]
    fn entry_display_fields() {
        let mut catalog = Catalog::default();
        let key = catalog.push(book(Some(7), "Dune", 2));
        let entry = catalog.get(key).unwrap();

        assert_eq!(entry.price(), "$10.00");
        assert_eq!(entry.stock(), StockLabel::FewLeft);
        assert_eq!(entry.id_attr(), "7");
        assert_eq!(entry.element_id(), "book-7");
        assert_eq!(entry.cover_alt(), "Dune cover");
    }

    #[test]
    fn pending_entry_gets_its_id() {
        let mut catalog = Catalog::default();
        let key = catalog.push_pending(book(Some(99), "new", 3));

        assert!(catalog.get(key).unwrap().is_pending());
        assert_eq!(catalog.get(key).unwrap().id_attr(), "");
        assert_eq!(catalog.get(key).unwrap().element_id(), "");

        assert!(catalog.confirm(key, RecordId::from(42)));

        let entry = catalog.get(key).unwrap();

        assert!(!entry.is_pending());
        assert_eq!(entry.id_attr(), "42");
        assert_eq!(entry.element_id(), "book-42");
        assert!(catalog.find(&RecordId::from(42)).is_some());
    }

    #[test]
    fn interleaved_creations_resolve_independently() {
        let mut catalog = Catalog::default();
        let first = catalog.push_pending(book(None, "first", 3));
        let second = catalog.push_pending(book(None, "second", 3));

        assert!(catalog.confirm(second, RecordId::from(2)));
        assert!(catalog.rollback(first).is_some());

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find(&RecordId::from(2)).unwrap().book().title, "second");
    }

    #[test]
    fn confirm_after_removal_is_ignored() {
        let mut catalog = Catalog::default();
        let key = catalog.push_pending(book(None, "gone", 3));

        catalog.remove(key);

        assert!(!catalog.confirm(key, RecordId::from(1)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn update_rewrites_fields_in_place() {
        let mut catalog = Catalog::default();

        catalog.extend([book(Some(1), "a", 9), book(Some(2), "b", 9)]);

        let mut updated = book(Some(2), "b2", 1);
        updated.price = 4.5;
        updated.author = "Someone".into();
        updated.image_url = "b2.jpg".into();

        assert!(catalog.apply_update(&RecordId::from(2), updated));

        let entry = catalog.find(&RecordId::from(2)).unwrap();

        assert_eq!(entry.book().title, "b2");
        assert_eq!(entry.book().author, "Someone");
        assert_eq!(entry.book().image_url, "b2.jpg");
        assert_eq!(entry.price(), "$4.50");
        // one left reads "In stock" after an edit, unlike on first render
        assert_eq!(entry.stock(), StockLabel::InStock);

        let titles: Vec<_> = catalog.iter().map(|e| e.book().title.as_str()).collect();

        assert_eq!(titles, ["a", "b2"]);
    }

    #[test]
    fn update_without_id_keeps_confirmed_id() {
        let mut catalog = Catalog::default();

        catalog.push(book(Some(5), "a", 0));

        assert!(catalog.apply_update(&RecordId::from(5), book(None, "a", 0)));
        assert_eq!(catalog.find(&RecordId::from(5)).unwrap().id_attr(), "5");
    }

    #[test]
    fn update_of_unknown_id() {
        let mut catalog = Catalog::default();

        catalog.push(book(Some(1), "a", 0));

        assert!(!catalog.apply_update(&RecordId::from(8), book(Some(8), "x", 0)));
        assert_eq!(catalog.iter().next().unwrap().book().title, "a");
    }
}
