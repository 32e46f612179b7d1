// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bookstore::page::Page;
use bookstore::workflow;
use gloo_events::EventListener;
use kobold::prelude::*;
use log::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::fetch::api;
use crate::live::Live;

mod books;
mod forms;
mod store;

use books::BookList;
use forms::{EditModal, NewBookForm, NewStoreForm};
use store::{StoreFooter, StoreHeader, StoreSelector};

#[component]
pub fn App() -> impl View {
    stateful(Page::default, |page| {
        view! {
            <header>
                <StoreHeader {page} />
                <StoreSelector {page} />
            </header>
            <main>
                <ErrorBanner {page} />
                <NewBookForm {page} />
                <NewStoreForm {page} />
                <BookList {page} />
                <EditModal {page} />
            </main>
            <StoreFooter {page} />
        }
    })
    .once(|signal| {
        let page = Live(signal.clone());
        spawn_local(async move { workflow::load_stores(&api(), &page).await });

        let page = Live(signal.clone());
        spawn_local(async move { workflow::load_books(&api(), &page).await });

        listen_for_escape(signal);
    })
}

#[component]
fn ErrorBanner(page: &Hook<Page>) -> impl View + '_ {
    page.banner
        .as_ref()
        .map(|banner| view! { <div .error>{ ref banner.message }</div> })
}

fn listen_for_escape(signal: Signal<Page>) {
    let Some(window) = web_sys::window() else {
        error!("no window to listen for the escape key on");
        return;
    };

    EventListener::new(&window, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };

        if matches!(event.key().as_str(), "Escape" | "Esc") {
            signal.update(Page::escape);
        }
    })
    .forget();
}
