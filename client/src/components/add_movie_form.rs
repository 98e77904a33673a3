//! Form for adding a movie to the grid view.

use leptos::prelude::*;
use movies::MovieDraft;

use crate::state::ui::GridUi;
use crate::state::watchlist::WatchlistState;
use crate::util::clock::now_ms;

/// Title / description / poster form. On a successful add the form and the
/// search box are cleared and focus returns to the title input.
#[component]
pub fn AddMovieForm(ui: GridUi) -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();
    let draft = RwSignal::new(MovieDraft::default());
    let title_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let added = watchlist.try_update(|s| s.add(&current, now_ms())).flatten();
        if added.is_none() {
            return;
        }
        draft.set(MovieDraft::default());
        ui.search.set(String::new());
        focus_input(title_ref);
    };

    view! {
        <section class="add-section">
            <h2>"Add a Movie"</h2>
            <form class="add-form" on:submit=on_submit>
                <input
                    node_ref=title_ref
                    type="text"
                    placeholder="Movie Title *"
                    required
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Short Description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
                <input
                    type="url"
                    placeholder="Poster Image URL (optional)"
                    prop:value=move || draft.with(|d| d.poster.clone())
                    on:input=move |ev| draft.update(|d| d.poster = event_target_value(&ev))
                />
                <button type="submit">"Add to Watchlist"</button>
            </form>
            <small>"Tip: Paste a direct image URL for the poster."</small>
        </section>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn focus_input(input: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = input.get_untracked() {
            if let Err(err) = el.focus() {
                log::debug!("could not refocus title input: {err:?}");
            }
        }
    }
}
