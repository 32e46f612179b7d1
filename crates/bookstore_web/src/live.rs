// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bookstore::page::{Page, PageHandle};
use kobold::prelude::*;
use log::error;

/// [`PageHandle`] backed by the Kobold state of the running app.
pub struct Live(pub Signal<Page>);

impl PageHandle for Live {
    fn update(&self, mutator: impl FnOnce(&mut Page)) {
        self.0.update(mutator);
    }

    fn read<R>(&self, getter: impl FnOnce(&Page) -> R) -> Option<R> {
        let mut out = None;

        self.0.update_silent(|page| out = Some(getter(page)));

        out
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            error!("no window to alert {message:?}");
            return;
        };

        if let Err(err) = window.alert_with_message(message) {
            error!("alert failed: {err:?}");
        }
    }
}
