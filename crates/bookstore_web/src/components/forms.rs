// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bookstore::form::BookForm;
use bookstore::page::Page;
use bookstore::workflow;
use kobold::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::fetch::api;
use crate::live::Live;

/// Current values of the book inputs of `form`. Missing inputs read as empty.
fn read_form(form: &HtmlFormElement) -> BookForm {
    BookForm::read(|name| {
        form.elements()
            .named_item(name)
            .and_then(|item| item.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    })
}

#[component]
pub fn NewBookForm(page: &Hook<Page>) -> impl View + '_ {
    let toggle = page.bind(|page, _: MouseEvent<HtmlElement>| page.chrome.book_form.toggle());

    let onsubmit = page.bind_async(|signal, event: Event<HtmlFormElement>| {
        event.prevent_default();

        let form = event.target();
        let page = Live(signal);
        let book = workflow::accept_new_book(&page, &read_form(&form));

        if book.is_some() {
            form.reset();
        }

        async move {
            if let Some(book) = book {
                workflow::create_book(&api(), &page, book).await;
            }
        }
    });

    let form = &page.chrome.book_form;

    view! {
        <button #toggleBookForm onclick={toggle}>{ form.button_label() }</button>
        <form #book-form .{ form.class() } {onsubmit}>
            <input type="text" name="title" placeholder="Title" />
            <input type="text" name="author" placeholder="Author" />
            <input type="number" name="price" step="0.01" placeholder="Price" />
            <input type="number" name="inventory" placeholder="Inventory" />
            <input type="text" name="imageUrl" placeholder="Image URL" />
            <input type="submit" value="Add Book" />
        </form>
    }
}

// Prefilled, but nothing persists stores yet.
#[component]
pub fn NewStoreForm(page: &Hook<Page>) -> impl View + '_ {
    let toggle = page.bind(|page, _: MouseEvent<HtmlElement>| page.chrome.store_form.toggle());

    let onsubmit = page.bind(|_, event: Event<HtmlFormElement>| {
        event.prevent_default();

        debug!("store form submitted, nothing to save it to");

        Then::Stop
    });

    let form = &page.chrome.store_form;

    view! {
        <button #toggleStoreForm onclick={toggle}>{ form.button_label() }</button>
        <form #store-form .{ form.class() } {onsubmit}>
        {
            for page.store_form.fields().into_iter().map(|(name, label, value)| view! {
                <label>
                    { static label }
                    <input type="text" name={name} value={ value.to_owned() } />
                </label>
            })
        }
            <input type="submit" value="Add Store" />
        </form>
    }
}

#[component]
pub fn EditModal(page: &Hook<Page>) -> impl View + '_ {
    let close = page.bind(|page, _: MouseEvent<HtmlElement>| page.close_editor());

    let backdrop = page.bind(|page, event: MouseEvent<HtmlElement>| {
        if event.target().id() == "myModal" {
            page.close_editor();

            Then::Render
        } else {
            Then::Stop
        }
    });

    let onsubmit = page.bind_async(|signal, event: Event<HtmlFormElement>| {
        event.prevent_default();

        let form = read_form(&event.target());

        async move { workflow::save_edit(&api(), &Live(signal), form).await }
    });

    let form = &page.edit.form;
    let generation = page.edit.generation();

    view! {
        <div #myModal .{ page.chrome.modal_class() } onclick={backdrop}>
            <div .modal-content>
                <span .close onclick={close}>"×"</span>
                <form #edit-book-form {onsubmit}>
                    <EditFields {form} {generation} />
                    <input type="submit" value="Update Book" />
                </form>
            </div>
        </div>
    }
}

// Inputs only diff against the previous state, not against what was typed.
// Switching branch on every new generation rebuilds them from `form`.
#[component(auto_branch)]
fn EditFields(form: &BookForm, generation: u32) -> impl View + '_ {
    if generation % 2 == 0 {
        view! { <div .fields><EditInputs {form} /></div> }
    } else {
        view! { <div .fields><EditInputs {form} /></div> }
    }
}

#[component]
fn EditInputs(form: &BookForm) -> impl View + '_ {
    view! {
        <input type="text" name="title" value={ form.title.clone() } />
        <input type="text" name="author" value={ form.author.clone() } />
        <input type="number" name="price" step="0.01" value={ form.price.clone() } />
        <input type="number" name="inventory" value={ form.inventory.clone() } />
        <input type="text" name="imageUrl" value={ form.image_url.clone() } />
    }
}
