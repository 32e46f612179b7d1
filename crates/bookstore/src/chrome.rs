// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Show/hide bookkeeping for the forms and the edit modal.

/// A form hidden behind a toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collapsible {
    expanded: bool,
    show: &'static str,
    hide: &'static str,
}

impl Collapsible {
    /// Starts collapsed. `show` and `hide` are the button labels for the
    /// collapsed and the expanded state.
    pub const fn new(show: &'static str, hide: &'static str) -> Self {
        Collapsible {
            expanded: false,
            show,
            hide,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded ^= true;
    }

    /// Returns `true` if the form was expanded.
    pub fn collapse(&mut self) -> bool {
        std::mem::replace(&mut self.expanded, false)
    }

    pub fn button_label(&self) -> &'static str {
        if self.expanded {
            self.hide
        } else {
            self.show
        }
    }

    pub fn class(&self) -> &'static str {
        if self.expanded {
            "add-form"
        } else {
            "add-form collapsed"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub book_form: Collapsible,
    pub store_form: Collapsible,
    modal: bool,
}

impl Default for Chrome {
    fn default() -> Self {
        Chrome {
            book_form: Collapsible::new("New Book", "Hide Book Form"),
            store_form: Collapsible::new("New Store", "Hide Store Form"),
            modal: false,
        }
    }
}

impl Chrome {
    pub fn is_modal_open(&self) -> bool {
        self.modal
    }

    pub fn open_modal(&mut self) {
        self.modal = true;
    }

    pub fn close_modal(&mut self) {
        self.modal = false;
    }

    pub fn modal_class(&self) -> &'static str {
        if self.modal {
            "modal displayBlock"
        } else {
            "modal"
        }
    }

    /// Escape collapses both forms and closes the modal. Returns `true` if
    /// anything was visible.
    pub fn escape(&mut self) -> bool {
        let book = self.book_form.collapse();
        let store = self.store_form.collapse();
        let modal = std::mem::replace(&mut self.modal, false);

        book | store | modal
    }
}
