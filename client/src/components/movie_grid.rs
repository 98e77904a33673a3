//! Grid of movie cards filtered by the search term.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::movie_card::MovieCard;
use crate::state::ui::GridUi;
use crate::state::watchlist::WatchlistState;
use crate::util::labels::empty_grid_message;

#[component]
pub fn MovieGrid(ui: GridUi) -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();

    view! {
        <Show
            when=move || watchlist.with(|s| s.is_loaded())
            fallback=|| view! { <p class="empty-message">"Loading watchlist..."</p> }
        >
            {move || {
                let term = ui.search.get();
                let movies = watchlist.with(|s| s.matching(&term));
                if movies.is_empty() {
                    view! { <p class="empty-message">{empty_grid_message(&term)}</p> }.into_any()
                } else {
                    view! {
                        <div class="grid">
                            {movies
                                .into_iter()
                                .map(|movie| view! { <MovieCard movie=movie ui=ui/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </Show>
    }
}
