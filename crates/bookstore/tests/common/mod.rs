// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use bookstore::api::{Api, Error, Transport};
use bookstore::page::{Page, PageHandle};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Answers requests from a script, and records them.
#[derive(Default)]
pub struct Script {
    responses: RefCell<HashMap<(Method, String), VecDeque<Result<Value, Error>>>>,
    requests: RefCell<Vec<Request>>,
    before_post: RefCell<Option<Box<dyn Fn()>>>,
}

impl Script {
    pub fn on(&self, method: Method, path: &str, response: Result<Value, Error>) -> &Self {
        self.responses
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(response);

        self
    }

    /// Run `hook` when a POST arrives, before it is answered.
    pub fn before_post(&self, hook: impl Fn() + 'static) {
        *self.before_post.borrow_mut() = Some(Box::new(hook));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    fn answer(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, Error> {
        self.requests.borrow_mut().push(Request {
            method,
            path: path.to_owned(),
            body,
        });

        self.responses
            .borrow_mut()
            .get_mut(&(method, path.to_owned()))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| {
                Err(Error::Status {
                    status: 404,
                    text: "Not Found".into(),
                })
            })
    }
}

impl Transport for Script {
    async fn get(&self, path: &str) -> Result<Value, Error> {
        self.answer(Method::Get, path, None)
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, Error> {
        if let Some(hook) = &*self.before_post.borrow() {
            hook();
        }

        self.answer(Method::Post, path, Some(body))
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value, Error> {
        self.answer(Method::Patch, path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        self.answer(Method::Delete, path, None).map(drop)
    }
}

pub fn api() -> Api<Script> {
    Api::new(Script::default())
}

/// Page shared the way the view shares it, with alerts written down instead
/// of shown.
#[derive(Default, Clone)]
pub struct TestPage {
    pub page: Rc<RefCell<Page>>,
    pub alerts: Rc<RefCell<Vec<String>>>,
}

impl TestPage {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl PageHandle for TestPage {
    fn update(&self, mutator: impl FnOnce(&mut Page)) {
        mutator(&mut self.page.borrow_mut());
    }

    fn read<R>(&self, getter: impl FnOnce(&Page) -> R) -> Option<R> {
        Some(getter(&self.page.borrow()))
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

pub fn book(id: u64, title: &str, inventory: u32) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": "Author",
        "price": 10,
        "inventory": inventory,
        "imageUrl": format!("https://covers.example/{id}.jpg"),
        "reviews": []
    })
}

pub fn store(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "address": format!("{id} Main St"),
        "number": format!("555-000-{id:04}"),
        "location": format!("Location {id}"),
        "hours": "Monday - Friday 9am - 6pm"
    })
}

pub fn unreachable() -> Error {
    Error::Unreachable("TypeError: Failed to fetch".into())
}

pub fn rejected(status: u16) -> Error {
    Error::Status {
        status,
        text: "Unprocessable Entity".into(),
    }
}
