//! A single grid card: poster, watched overlay, and either details or the
//! inline editor.

use leptos::prelude::*;
use movies::{Movie, POSTER_NOT_FOUND};

use crate::components::edit_movie_form::EditMovieForm;
use crate::state::ui::GridUi;
use crate::state::watchlist::WatchlistState;
use crate::util::labels::{poster_alt, watched_button_label};

#[component]
pub fn MovieCard(movie: Movie, ui: GridUi) -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();
    let id = movie.id;

    let poster = movie.poster_src().to_owned();
    let poster_failed = RwSignal::new(false);
    let src = move || if poster_failed.get() { POSTER_NOT_FOUND.to_owned() } else { poster.clone() };

    // Memoized so keystrokes in the editor don't re-render the card.
    let editing = Memo::new(move |_| ui.editing.with(|s| s.as_ref().is_some_and(|s| s.is_for(id))));

    let on_toggle = move |_| {
        watchlist.update(|s| {
            s.toggle_watched(id);
        });
    };

    let info = movie.clone();

    view! {
        <div class="movie-card" class:watched=movie.watched>
            <div class="poster-container">
                <img src=src alt=poster_alt(&movie.title) on:error=move |_| poster_failed.set(true)/>
                <div class="overlay">
                    <button class="watched-btn" on:click=on_toggle>
                        {watched_button_label(movie.watched)}
                    </button>
                </div>
            </div>
            <Show
                when=move || editing.get()
                fallback=move || view! { <MovieInfo movie=info.clone() ui=ui/> }
            >
                <EditMovieForm id=id ui=ui/>
            </Show>
        </div>
    }
}

#[component]
fn MovieInfo(movie: Movie, ui: GridUi) -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();
    let id = movie.id;
    let description = (!movie.description.is_empty()).then(|| movie.description.clone());
    let title = movie.title.clone();

    let on_edit = move |_| ui.begin_edit(&movie);
    let on_delete = move |_| {
        watchlist.update(|s| {
            s.delete(id);
        });
        if ui.editing.with_untracked(|s| s.as_ref().is_some_and(|s| s.is_for(id))) {
            ui.cancel_edit();
        }
    };

    view! {
        <div class="movie-info">
            <h3>{title}</h3>
            {description.map(|text| view! { <p>{text}</p> })}
            <div class="actions">
                <button on:click=on_edit>"Edit"</button>
                <button class="delete" on:click=on_delete>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
