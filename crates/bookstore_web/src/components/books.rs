// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bookstore::catalog::Entry;
use bookstore::page::Page;
use bookstore::workflow;
use kobold::prelude::*;
use log::warn;
use web_sys::HtmlElement;

use crate::fetch::api;
use crate::live::Live;

#[component]
pub fn BookList(page: &Hook<Page>) -> impl View + '_ {
    view! {
        <ul #book-list>
        {
            for page.catalog.iter().map(move |entry| view! { <BookCard {entry} {page} /> })
        }
        </ul>
    }
}

#[component]
fn BookCard<'a>(entry: &'a Entry, page: &'a Hook<Page>) -> impl View + 'a {
    let key = entry.key();
    let id = entry.record_id().cloned();

    let onedit = page.bind_async(move |signal, _: MouseEvent<HtmlElement>| {
        let id = id.clone();

        async move {
            match id {
                Some(id) => workflow::open_editor(&api(), &Live(signal), id).await,
                None => warn!("book is still being saved, not editing"),
            }
        }
    });

    let ondelete = page.bind_async(move |signal, _: MouseEvent<HtmlElement>| async move {
        workflow::delete_book(&api(), &Live(signal), key).await
    });

    let book = entry.book();

    view! {
        <li .list-li id={ entry.element_id() }>
            <h3>{ ref book.title }</h3>
            <p>{ ref book.author }</p>
            <p>{ ref entry.price() }</p>
            <p .grey>{ entry.stock().as_str() }</p>
            <img src={ book.image_url.clone() } alt={ entry.cover_alt() } />
            <button onclick={onedit}>"Edit"</button>
            <button onclick={ondelete}>"Delete"</button>
        </li>
    }
}
