use ideas_client::PageQuery;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::api;
use crate::components::banner::Banner;
use crate::components::header::Header;
use crate::components::ideas_page::IdeasPage;
use crate::state::AppState;

fn load_ideas(state: AppState, query: PageQuery) {
    let Some(ticket) = state.listing.try_update(|listing| listing.begin(query)) else {
        return;
    };

    leptos::task::spawn_local(async move {
        let result = api::fetch_ideas(&query).await;
        let failure = result.as_ref().err().cloned();

        let applied = state
            .listing
            .try_update(|listing| listing.complete(ticket, result))
            .unwrap_or(false);

        if let (true, Some(err)) = (applied, failure) {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "Error fetching ideas: {err}"
            )));
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    let page_query = Memo::new(move |_| state.page_query());
    Effect::new(move |_| load_ideas(state, page_query.get()));

    let popstate = window_event_listener(ev::popstate, move |_| state.sync_from_location());
    on_cleanup(move || popstate.remove());

    view! {
        <Header />
        <Banner />
        <main class="page">
            <IdeasPage state=state />
        </main>
    }
}
