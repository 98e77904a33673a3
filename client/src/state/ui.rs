#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;
use movies::{Movie, MovieDraft, MovieId};

/// An in-progress inline edit of one grid card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession {
    pub id: MovieId,
    pub draft: MovieDraft,
}

impl EditSession {
    /// Start editing `movie` with its current values prefilled.
    pub fn start(movie: &Movie) -> Self {
        Self { id: movie.id, draft: MovieDraft::from_movie(movie) }
    }

    pub fn is_for(&self, id: MovieId) -> bool {
        self.id == id
    }
}

/// Grid page UI state.
///
/// Kept as separate signals rather than one `RwSignal<struct>` so typing in
/// the search box or an edit field does not rebuild every card.
#[derive(Clone, Copy, Debug)]
pub struct GridUi {
    pub search: RwSignal<String>,
    pub editing: RwSignal<Option<EditSession>>,
}

impl GridUi {
    pub fn new() -> Self {
        Self { search: RwSignal::new(String::new()), editing: RwSignal::new(None) }
    }

    /// Open the inline editor for `movie`, closing any other one.
    pub fn begin_edit(&self, movie: &Movie) {
        self.editing.set(Some(EditSession::start(movie)));
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
    }

    /// Apply `change` to the open edit draft, if any.
    pub fn edit_draft(&self, change: impl FnOnce(&mut MovieDraft)) {
        self.editing.update(|session| {
            if let Some(session) = session.as_mut() {
                change(&mut session.draft);
            }
        });
    }
}

impl Default for GridUi {
    fn default() -> Self {
        Self::new()
    }
}
