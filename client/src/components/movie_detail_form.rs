//! Detail form with genre, rating, notes, and a watched checkbox.

use leptos::prelude::*;

use crate::state::detail_form::DetailFormState;
use crate::state::watchlist::WatchlistState;
use crate::util::clock::now_ms;

/// Add/edit form for the list view. Resets after a successful submit.
#[component]
pub fn MovieDetailForm(form: RwSignal<DetailFormState>) -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut next = form.get_untracked();
        let saved = watchlist.try_update(|s| next.submit(s, now_ms())).unwrap_or(false);
        if saved {
            form.set(next);
        }
    };

    view! {
        <form class="movie-form" on:submit=on_submit>
            <h2>{move || form.with(DetailFormState::heading)}</h2>
            <input
                type="text"
                placeholder="Title"
                required
                prop:value=move || form.with(|f| f.draft.title.clone())
                on:input=move |ev| form.update(|f| f.draft.title = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Genre"
                prop:value=move || form.with(|f| f.draft.genre.clone())
                on:input=move |ev| form.update(|f| f.draft.genre = event_target_value(&ev))
            />
            <input
                type="number"
                min="1"
                max="10"
                placeholder="Rating (1-10)"
                prop:value=move || form.with(|f| f.draft.rating.clone())
                on:input=move |ev| form.update(|f| f.draft.rating = event_target_value(&ev))
            />
            <textarea
                placeholder="Notes"
                prop:value=move || form.with(|f| f.draft.description.clone())
                on:input=move |ev| form.update(|f| f.draft.description = event_target_value(&ev))
            ></textarea>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.draft.watched)
                    on:change=move |ev| form.update(|f| f.draft.watched = event_target_checked(&ev))
                />
                "Watched"
            </label>
            <button type="submit">{move || form.with(DetailFormState::submit_label)}</button>
            <Show when=move || form.with(DetailFormState::is_editing)>
                <button type="button" on:click=move |_| form.update(DetailFormState::reset)>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
