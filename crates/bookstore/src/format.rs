// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display text for book cards.

/// `$` followed by the price rounded to exactly two decimal places.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Availability line shown under the price of a book card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLabel {
    InStock,
    FewLeft,
    OutOfStock,
}

impl StockLabel {
    /// Label used when a card is first rendered, from a fetch or a creation.
    pub fn listing(inventory: u32) -> Self {
        match inventory {
            0 => StockLabel::OutOfStock,
            1..=2 => StockLabel::FewLeft,
            _ => StockLabel::InStock,
        }
    }

    /// Label used when an edit is applied to an existing card. This one never
    /// warns about low stock.
    pub fn after_edit(inventory: u32) -> Self {
        if inventory != 0 {
            StockLabel::InStock
        } else {
            StockLabel::OutOfStock
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockLabel::InStock => "In stock",
            StockLabel::FewLeft => "Only a few left!",
            StockLabel::OutOfStock => "Out of stock",
        }
    }
}
