//! Page header with navigation between the grid and list views.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::watchlist::WatchlistState;

/// Site header. Also shows the last storage error, if any.
#[component]
pub fn NavBar() -> impl IntoView {
    let watchlist = expect_context::<RwSignal<WatchlistState>>();

    view! {
        <header class="header">
            <h1>"My Movie Watchlist"</h1>
            <p>"Track movies you want to watch"</p>
            <nav class="header__nav">
                <A href="/">"Grid"</A>
                <A href="/list">"List"</A>
            </nav>
            <Show when=move || watchlist.with(|s| s.error.is_some())>
                <p class="header__error" role="alert">
                    {move || watchlist.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
        </header>
    }
}
