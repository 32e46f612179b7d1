// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Records exchanged with the backend.

use std::fmt::{self, Display};

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Backend assigned key of a [`Book`] or a [`Store`].
///
/// json-server hands out numeric ids in older versions and string ids in newer
/// ones. Both are accepted, and the id is written back in the shape it came in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId {
    text: String,
    numeric: bool,
}

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId {
            text: id.to_string(),
            numeric: true,
        }
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId {
            text: id.to_owned(),
            numeric: false,
        }
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.text.parse::<u64>() {
            Ok(n) if self.numeric => serializer.serialize_u64(n),
            _ => serializer.serialize_str(&self.text),
        }
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => RecordId::from(n),
            Raw::Text(text) => RecordId::from(text.as_str()),
        })
    }
}

/// Prices arrive as JSON numbers, but hand edited seed data sometimes
/// carries them as strings.
fn price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text.trim().parse().map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub author: String,
    #[serde(deserialize_with = "price")]
    pub price: f64,
    pub inventory: u32,
    pub image_url: String,
    #[serde(default)]
    pub reviews: Vec<Value>,
}

/// Body of `POST /books`. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub reviews: Vec<Value>,
    pub author: String,
    pub price: f64,
    pub inventory: u32,
    pub image_url: String,
}

impl NewBook {
    /// The record as it is shown before the backend confirms it.
    pub fn to_book(&self) -> Book {
        Book {
            id: None,
            title: self.title.clone(),
            author: self.author.clone(),
            price: self.price,
            inventory: self.inventory,
            image_url: self.image_url.clone(),
            reviews: self.reviews.clone(),
        }
    }
}

/// Body of `PATCH /books/{id}`: everything but the id and the reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub inventory: u32,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub number: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}
