//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{detail::DetailPage, watchlist::WatchlistPage};
use crate::state::watchlist::WatchlistState;
use crate::util::local_storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared watchlist context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let watchlist = RwSignal::new(WatchlistState::<LocalStorage>::default());
    provide_context(watchlist);

    // Effects only run in the browser, so the server renders an unloaded
    // list and the stored one is read once after hydration.
    Effect::new(move || {
        if !watchlist.with_untracked(|s| s.is_loaded()) {
            watchlist.update(|s| s.load(LocalStorage));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/watchlist.css"/>
        <Title text="My Movie Watchlist"/>

        <Router>
            <div class="App">
                <NavBar/>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=WatchlistPage/>
                    <Route path=StaticSegment("list") view=DetailPage/>
                </Routes>
            </div>
        </Router>
    }
}
