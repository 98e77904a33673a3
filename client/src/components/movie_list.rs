//! Compact list of every movie with genre, rating, and notes.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use movies::Movie;

use crate::state::detail_form::DetailFormState;
use crate::state::watchlist::WatchlistState;
use crate::util::labels::{EMPTY_LIST_MESSAGE, genre_line, list_heading, list_title, notes_line, rating_line};

#[component]
pub fn MovieList(form: RwSignal<DetailFormState>) -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();

    view! {
        <div class="movie-list">
            <h2>{move || list_heading(watchlist.with(|s| s.total()))}</h2>
            {move || {
                let movies = watchlist.with(|s| s.movies().to_vec());
                if movies.is_empty() {
                    view! { <p>{EMPTY_LIST_MESSAGE}</p> }.into_any()
                } else {
                    view! {
                        <ul>
                            {movies
                                .into_iter()
                                .map(|movie| view! { <MovieListItem movie=movie form=form/> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn MovieListItem(movie: Movie, form: RwSignal<DetailFormState>) -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();
    let id = movie.id;
    let title = list_title(&movie.title, movie.watched);
    let genre = genre_line(movie.genre.as_deref());
    let rating = rating_line(movie.rating);
    let notes = notes_line(&movie.description);

    let on_edit = move |_| form.update(|f| f.begin_edit(&movie));
    let on_delete = move |_| {
        watchlist.update(|s| {
            s.delete(id);
        });
        form.update(|f| f.forget(id));
    };

    view! {
        <li class="movie-card">
            <h3>{title}</h3>
            <p>{genre}</p>
            <p>{rating}</p>
            <p>{notes}</p>
            <button on:click=on_edit>"Edit"</button>
            <button on:click=on_delete>"Delete"</button>
        </li>
    }
}
