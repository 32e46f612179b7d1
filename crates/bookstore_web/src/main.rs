// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kobold::prelude::*;

mod components;
mod fetch;
mod live;

use components::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    kobold::start(view! {
        <App />
    });
}
