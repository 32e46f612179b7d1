// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Form controllers: raw field values in, records out.

use std::fmt::{self, Display};

use crate::model::{Book, BookUpdate, NewBook};

/// Named inputs shared by the create and the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Price,
    Inventory,
    ImageUrl,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Author,
        Field::Price,
        Field::Inventory,
        Field::ImageUrl,
    ];

    /// Value of the `name` attribute on the input.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Price => "price",
            Field::Inventory => "inventory",
            Field::ImageUrl => "imageUrl",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("`{0}` must not be empty")]
    Empty(Field),
    #[error("`{field}` is not a valid number: {value:?}")]
    NotANumber { field: Field, value: String },
}

/// Field values of a book form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub price: String,
    pub inventory: String,
    pub image_url: String,
}

struct Checked<'a> {
    title: &'a str,
    author: &'a str,
    price: f64,
    inventory: u32,
    image_url: &'a str,
}

impl BookForm {
    /// Read every field through `value`, which is handed the input name.
    pub fn read(mut value: impl FnMut(&str) -> String) -> Self {
        BookForm {
            title: value(Field::Title.name()),
            author: value(Field::Author.name()),
            price: value(Field::Price.name()),
            inventory: value(Field::Inventory.name()),
            image_url: value(Field::ImageUrl.name()),
        }
    }

    /// Form pre-filled with a record, for editing.
    pub fn fill_in(book: &Book) -> Self {
        BookForm {
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price.to_string(),
            inventory: book.inventory.to_string(),
            image_url: book.image_url.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Price => &self.price,
            Field::Inventory => &self.inventory,
            Field::ImageUrl => &self.image_url,
        }
    }

    fn check(&self) -> Result<Checked<'_>, FormError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|&field| self.get(field).trim().is_empty())
        {
            return Err(FormError::Empty(field));
        }

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .ok_or_else(|| FormError::NotANumber {
                field: Field::Price,
                value: self.price.clone(),
            })?;

        let inventory = self
            .inventory
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::NotANumber {
                field: Field::Inventory,
                value: self.inventory.clone(),
            })?;

        Ok(Checked {
            title: &self.title,
            author: &self.author,
            price,
            inventory,
            image_url: &self.image_url,
        })
    }

    /// Record for `POST /books`, with no reviews yet.
    pub fn to_new_book(&self) -> Result<NewBook, FormError> {
        let checked = self.check()?;

        Ok(NewBook {
            title: checked.title.to_owned(),
            reviews: Vec::new(),
            author: checked.author.to_owned(),
            price: checked.price,
            inventory: checked.inventory,
            image_url: checked.image_url.to_owned(),
        })
    }

    /// Record for `PATCH /books/{id}`.
    pub fn to_update(&self) -> Result<BookUpdate, FormError> {
        let checked = self.check()?;

        Ok(BookUpdate {
            title: checked.title.to_owned(),
            author: checked.author.to_owned(),
            price: checked.price,
            inventory: checked.inventory,
            image_url: checked.image_url.to_owned(),
        })
    }
}

/// The new store form. Nothing submits it yet; it comes pre-filled so the
/// layout can be checked without typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreForm {
    pub name: String,
    pub location: String,
    pub number: String,
    pub address: String,
    pub hours: String,
}

impl StoreForm {
    /// `(input name, label, value)` for every field, in display order.
    pub fn fields(&self) -> [(&'static str, &'static str, &str); 5] {
        [
            ("name", "Name", &self.name),
            ("location", "Location", &self.location),
            ("number", "Phone number", &self.number),
            ("address", "Address", &self.address),
            ("hours", "Hours", &self.hours),
        ]
    }
}

impl Default for StoreForm {
    fn default() -> Self {
        StoreForm {
            name: "BooksRUs".into(),
            location: "LaLaLand".into(),
            number: "555-555-5555".into(),
            address: "555 Shangri-La".into(),
            hours: "Monday - Friday 9am - 6pm".into(),
        }
    }
}
