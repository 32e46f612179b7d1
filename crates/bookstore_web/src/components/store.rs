// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bookstore::page::{Page, PageHandle};
use bookstore::workflow;
use kobold::prelude::*;
use log::warn;
use web_sys::HtmlSelectElement;

use crate::fetch::api;
use crate::live::Live;

#[component]
pub fn StoreHeader(page: &Hook<Page>) -> impl View + '_ {
    let name = page.store.as_ref().map_or("", |store| store.name.as_str());

    view! {
        <h1 #store-name>{ ref name }</h1>
    }
}

#[component]
pub fn StoreSelector(page: &Hook<Page>) -> impl View + '_ {
    let onchange = page.bind_async(|signal, event: Event<HtmlSelectElement>| {
        let index = event.target().selected_index();
        let page = Live(signal);

        async move {
            match page.read(|page| page.store_at(index).cloned()).flatten() {
                Some(id) => workflow::select_store(&api(), &page, id).await,
                None => warn!("no store behind option {index}"),
            }
        }
    });

    view! {
        <select #store-selector {onchange}>
        {
            for page.stores.iter().map(|store| view! {
                <option>{ ref store.name }</option>
            })
        }
        </select>
    }
}

#[component]
pub fn StoreFooter(page: &Hook<Page>) -> impl View + '_ {
    let (address, number, location) = match &page.store {
        Some(store) => (
            store.address.as_str(),
            store.number.as_str(),
            store.location.as_str(),
        ),
        None => ("", "", ""),
    };

    view! {
        <footer>
            <p #address>{ ref address }</p>
            <p #number>{ ref number }</p>
            <p #store>{ ref location }</p>
        </footer>
    }
}
