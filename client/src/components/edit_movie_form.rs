//! Inline editor shown inside a grid card.

use leptos::prelude::*;
use movies::{MovieDraft, MovieId};

use crate::state::ui::GridUi;
use crate::state::watchlist::WatchlistState;

/// Edits title, description, and poster of `id`. The watched flag is left
/// alone; it has its own toggle on the card.
#[component]
pub fn EditMovieForm(id: MovieId, ui: GridUi) -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();

    let read = move |field: fn(&MovieDraft) -> String| {
        move || ui.editing.with(|s| s.as_ref().map(|s| field(&s.draft)).unwrap_or_default())
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(session) = ui.editing.get_untracked() else {
            return;
        };
        if !session.is_for(id) {
            return;
        }
        let saved = watchlist
            .try_update(|s| s.update_details(session.id, &session.draft))
            .unwrap_or(false);
        if saved {
            ui.cancel_edit();
        }
    };

    view! {
        <form class="edit-form" on:submit=on_save>
            <input
                type="text"
                required
                prop:value=read(|d| d.title.clone())
                on:input=move |ev| ui.edit_draft(|d| d.title = event_target_value(&ev))
            />
            <input
                type="text"
                prop:value=read(|d| d.description.clone())
                on:input=move |ev| ui.edit_draft(|d| d.description = event_target_value(&ev))
            />
            <input
                type="url"
                placeholder="Poster URL"
                prop:value=read(|d| d.poster.clone())
                on:input=move |ev| ui.edit_draft(|d| d.poster = event_target_value(&ev))
            />
            <div class="edit-buttons">
                <button type="submit">"Save"</button>
                <button type="button" on:click=move |_| ui.cancel_edit()>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
