use ideas_client::{ListingController, PageQuery, ParamUpdate, QueryParams, QueryStateStore, navigate};
use leptos::prelude::*;

use crate::location::LocationQueryStore;

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) query: RwSignal<QueryParams>,
    pub(crate) listing: RwSignal<ListingController>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            query: RwSignal::new(LocationQueryStore.read()),
            listing: RwSignal::new(ListingController::new()),
        }
    }

    pub(crate) fn page_query(&self) -> PageQuery {
        self.query.with(PageQuery::from_params)
    }

    /// Пишет изменение в адресную строку; перезагрузку запускает эффект в `App`.
    pub(crate) fn navigate(&self, update: ParamUpdate) {
        let mut store = LocationQueryStore;
        navigate(&mut store, update);
        self.query.set(store.read());
    }

    /// Подхватывает адрес после перехода по истории браузера.
    pub(crate) fn sync_from_location(&self) {
        self.query.set(LocationQueryStore.read());
    }
}
