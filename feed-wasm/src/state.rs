use feed_core::{DataStore, ViewController};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) store: RwSignal<DataStore>,
    pub(crate) view: RwSignal<ViewController>,
    pub(crate) error: RwSignal<Option<String>>,
    pub(crate) loading: RwSignal<bool>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            store: RwSignal::new(DataStore::default()),
            view: RwSignal::new(ViewController::new(Vec::new())),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }

    /// Заменяет хранилище и строит представление заново, с первой страницы.
    pub(crate) fn replace_store(&self, store: DataStore) {
        self.view.set(ViewController::new(store.posts().to_vec()));
        self.store.set(store);
    }
}
