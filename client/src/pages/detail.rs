//! List page: detail form plus the compact movie list.

use leptos::prelude::*;

use crate::components::movie_detail_form::MovieDetailForm;
use crate::components::movie_list::MovieList;
use crate::state::detail_form::DetailFormState;

#[component]
pub fn DetailPage() -> impl IntoView {
    let form = RwSignal::new(DetailFormState::default());

    view! {
        <main class="main main--detail">
            <MovieDetailForm form=form/>
            <MovieList form=form/>
        </main>
    }
}
