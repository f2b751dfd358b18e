use leptos::prelude::*;

use crate::input::{parse_sort_selection, parse_user_selection};
use crate::state::AppState;

#[component]
pub(crate) fn FiltersPanel(state: AppState) -> impl IntoView {
    let users = move || state.store.with(|store| store.users().to_vec());
    let search_term = move || state.view.with(|view| view.state().search_term.clone());

    view! {
        <div class="filters">
            <input
                id="search-input"
                type="text"
                placeholder="Search by title"
                prop:value=search_term
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    state.view.update(|view| view.set_search_term(term));
                }
            />

            <select
                id="user-select"
                on:change=move |ev| {
                    let user_id = parse_user_selection(&event_target_value(&ev));
                    state.view.update(|view| view.select_user(user_id));
                }
            >
                <option value="">"All users"</option>
                <For
                    each=users
                    key=|user| user.id
                    children=move |user| {
                        view! { <option value=user.id.to_string()>{user.name}</option> }
                    }
                />
            </select>

            <select
                id="sort-select"
                on:change=move |ev| {
                    let direction = parse_sort_selection(&event_target_value(&ev));
                    state.view.update(|view| view.set_sort_direction(direction));
                }
            >
                <option value="asc">"Title A → Z"</option>
                <option value="desc">"Title Z → A"</option>
            </select>
        </div>
    }
}
