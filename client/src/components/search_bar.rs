//! Grid heading with the match count and the title search box.

use leptos::prelude::*;

use crate::state::ui::GridUi;
use crate::state::watchlist::WatchlistState;
use crate::util::labels::grid_heading;

/// Heading with the visible count, plus the title search box.
#[component]
pub fn SearchBar(ui: GridUi) -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();

    let heading = move || {
        let term = ui.search.get();
        watchlist.with(|s| grid_heading(s.count_matching(&term), s.total()))
    };

    view! {
        <div class="search-bar-container">
            <h2>{heading}</h2>
            <input
                class="search-input"
                type="text"
                placeholder="Search movies by title..."
                prop:value=move || ui.search.get()
                on:input=move |ev| ui.search.set(event_target_value(&ev))
            />
        </div>
    }
}
