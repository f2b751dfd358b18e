use feed_core::{DataStore, FeedSource};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpSource;
use crate::comments_window;
use crate::components::filters_panel::FiltersPanel;
use crate::components::posts_panel::PostsPanel;
use crate::state::AppState;

fn load_feed(state: AppState) {
    state.loading.set(true);
    state.clear_error();

    spawn_local(async move {
        match DataStore::load(&HttpSource).await {
            Ok(store) => state.replace_store(store),
            Err(err) => state.set_error(format!("Не удалось загрузить посты: {err}")),
        }
        state.loading.set(false);
    });
}

fn open_comments(state: AppState, post_id: i64) {
    state.clear_error();

    let tab = match comments_window::open_blank_tab() {
        Ok(tab) => tab,
        Err(message) => {
            state.set_error(message);
            return;
        }
    };

    spawn_local(async move {
        match HttpSource.fetch_comments(post_id).await {
            Ok(comments) => {
                if let Err(message) = comments_window::write_comments(&tab, &comments) {
                    state.set_error(message);
                }
            }
            // вкладка остаётся пустой
            Err(err) => state.set_error(format!("Не удалось загрузить комментарии: {err}")),
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    load_feed(state);

    let error_text = move || state.error.get().unwrap_or_default();

    let on_open_comments = Callback::new(move |post_id: i64| open_comments(state, post_id));

    view! {
        <main class="page">
            <section class="container">
                <h1>"Posts"</h1>

                <FiltersPanel state=state />

                <Show when=move || state.error.get().is_some()>
                    <div class="error-banner">
                        <strong>"Ошибка: "</strong>
                        {error_text}
                    </div>
                </Show>

                <Show when=move || state.loading.get()>
                    <p>"Loading…"</p>
                </Show>

                <PostsPanel state=state on_open_comments=on_open_comments />
            </section>
        </main>
    }
}
