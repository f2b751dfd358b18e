use feed_core::ViewController;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub(crate) fn PostsPanel(state: AppState, on_open_comments: Callback<i64>) -> impl IntoView {
    let page_posts = move || state.view.with(|view| view.page().items.to_vec());
    let has_previous = move || state.view.with(ViewController::has_previous);
    let has_next = move || state.view.with(ViewController::has_next);
    let page_label = move || state.view.with(ViewController::page_label);

    // maybe_update уведомляет подписчиков только если страница сменилась.
    let on_previous = move |_: MouseEvent| {
        state.view.maybe_update(ViewController::go_to_previous_page);
    };
    let on_next = move |_: MouseEvent| {
        state.view.maybe_update(ViewController::go_to_next_page);
    };

    view! {
        <Show when=move || !state.loading.get() && state.view.with(|view| view.filtered().is_empty())>
            <p>"Постов не найдено"</p>
        </Show>

        <div id="posts-container">
            <For
                each=page_posts
                key=|post| post.id
                children=move |post| {
                    let post_id = post.id;
                    view! {
                        <div class="post" on:click=move |_| on_open_comments.run(post_id)>
                            <h3>{post.title}</h3>
                            <p>{post.body}</p>
                        </div>
                    }
                }
            />
        </div>

        <div class="pagination">
            <button id="prev-page" on:click=on_previous disabled=move || !has_previous()>
                "Previous"
            </button>
            <span id="page-info" style="margin: 0 0.5rem;">{page_label}</span>
            <button id="next-page" on:click=on_next disabled=move || !has_next()>
                "Next"
            </button>
        </div>
    }
}
