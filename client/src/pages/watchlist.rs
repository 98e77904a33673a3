//! Grid page: add form, search, and poster cards.

use leptos::prelude::*;

use crate::components::add_movie_form::AddMovieForm;
use crate::components::movie_grid::MovieGrid;
use crate::components::search_bar::SearchBar;
use crate::state::ui::GridUi;

#[component]
pub fn WatchlistPage() -> impl IntoView {
    let ui = GridUi::new();

    view! {
        <main class="main">
            <AddMovieForm ui=ui/>
            <section class="movies-grid">
                <SearchBar ui=ui/>
                <MovieGrid ui=ui/>
            </section>
        </main>
    }
}
