//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the watchlist views while reading/writing the shared
//! `RwSignal<WatchlistState>` from the Leptos context provider.

pub mod add_movie_form;
pub mod edit_movie_form;
pub mod movie_card;
pub mod movie_detail_form;
pub mod movie_grid;
pub mod movie_list;
pub mod nav_bar;
pub mod search_bar;
