//! Reactive-facing holder of the persisted watchlist.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<WatchlistState>` via context. Components
//! call the mutators here; each one writes through to storage via
//! `movies::WatchlistStore` and reports rejections through the log rather
//! than panicking or surfacing empty-title noise to the user.

#[cfg(test)]
#[path = "watchlist_test.rs"]
mod watchlist_test;

use movies::{KeyValueStore, Movie, MovieDraft, MovieId, WatchlistError, WatchlistStore};

use crate::util::local_storage::LocalStorage;

/// The loaded watchlist plus the last user-visible storage problem.
#[derive(Clone, Debug, Default)]
pub struct WatchlistState<S = LocalStorage> {
    store: Option<WatchlistStore<S>>,
    /// Message shown in the banner when storage misbehaves.
    pub error: Option<String>,
}

impl<S: KeyValueStore> WatchlistState<S> {
    /// Open the watchlist from `store`, seeding defaults on first run.
    pub fn load(&mut self, store: S) {
        match WatchlistStore::open(store) {
            Ok(opened) => {
                log::info!("watchlist loaded with {} movies", opened.watchlist().len());
                self.store = Some(opened);
                self.error = None;
            }
            Err(err) => {
                log::error!("failed to open watchlist: {err}");
                self.error = Some(err.to_string());
            }
        }
    }

    /// The underlying store, once loaded.
    pub fn backing_store(&self) -> Option<&S> {
        self.store.as_ref().map(WatchlistStore::store)
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    pub fn movies(&self) -> &[Movie] {
        match &self.store {
            Some(store) => store.watchlist().movies(),
            None => &[],
        }
    }

    pub fn total(&self) -> usize {
        self.movies().len()
    }

    /// Owned copies of the records whose title matches `term`.
    pub fn matching(&self, term: &str) -> Vec<Movie> {
        match &self.store {
            Some(store) => store.watchlist().filter_by_title(term).into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    pub fn count_matching(&self, term: &str) -> usize {
        self.store
            .as_ref()
            .map_or(0, |store| store.watchlist().filter_by_title(term).len())
    }

    pub fn get(&self, id: MovieId) -> Option<Movie> {
        self.store.as_ref().and_then(|store| store.watchlist().get(id).cloned())
    }

    /// Add a record; `None` when the draft was rejected.
    pub fn add(&mut self, draft: &MovieDraft, now_ms: u64) -> Option<MovieId> {
        self.apply("add", |store| store.add(draft, now_ms))
    }

    /// Replace every field of `id`, including watched (detail form).
    pub fn update(&mut self, id: MovieId, draft: &MovieDraft) -> bool {
        self.apply("update", |store| store.update(id, draft)).is_some()
    }

    /// Replace descriptive fields of `id`, keeping watched (grid editor).
    pub fn update_details(&mut self, id: MovieId, draft: &MovieDraft) -> bool {
        self.apply("update", |store| store.update_details(id, draft)).is_some()
    }

    pub fn delete(&mut self, id: MovieId) -> bool {
        self.apply("delete", |store| store.delete(id)).unwrap_or(false)
    }

    pub fn toggle_watched(&mut self, id: MovieId) -> Option<bool> {
        self.apply("toggle", |store| store.toggle_watched(id))
    }

    fn apply<T>(
        &mut self,
        op: &str,
        mutate: impl FnOnce(&mut WatchlistStore<S>) -> Result<T, WatchlistError>,
    ) -> Option<T> {
        let Some(store) = self.store.as_mut() else {
            log::warn!("{op} ignored: watchlist not loaded");
            return None;
        };
        match mutate(store) {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(WatchlistError::EmptyTitle) => {
                log::debug!("{op} ignored: empty title");
                None
            }
            Err(err @ WatchlistError::Storage(_)) => {
                log::error!("{op} not persisted: {err}");
                self.error = Some(err.to_string());
                None
            }
            Err(err) => {
                log::warn!("{op} rejected: {err}");
                self.error = Some(err.to_string());
                None
            }
        }
    }
}
