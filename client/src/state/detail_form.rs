//! Draft state for the detail form (genre, rating, notes, watched).

#[cfg(test)]
#[path = "detail_form_test.rs"]
mod detail_form_test;

use movies::{KeyValueStore, Movie, MovieDraft, MovieId};

use super::watchlist::WatchlistState;

/// The detail form switches between adding and editing one record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailFormState {
    pub editing: Option<MovieId>,
    pub draft: MovieDraft,
}

impl DetailFormState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() { "Edit Movie" } else { "Add New Movie" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update Movie" } else { "Add Movie" }
    }

    pub fn begin_edit(&mut self, movie: &Movie) {
        self.editing = Some(movie.id);
        self.draft = MovieDraft::from_movie(movie);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add or update depending on mode. The form resets only on success.
    pub fn submit<S: KeyValueStore>(&mut self, watchlist: &mut WatchlistState<S>, now_ms: u64) -> bool {
        let saved = match self.editing {
            Some(id) => watchlist.update(id, &self.draft),
            None => watchlist.add(&self.draft, now_ms).is_some(),
        };
        if saved {
            self.reset();
        }
        saved
    }

    /// Called when `id` is deleted elsewhere so the form does not keep
    /// editing a record that no longer exists.
    pub fn forget(&mut self, id: MovieId) {
        if self.editing == Some(id) {
            self.reset();
        }
    }
}
