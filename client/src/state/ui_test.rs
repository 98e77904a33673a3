use super::*;
use movies::{Rating, Watchlist};

fn matrix() -> Movie {
    Watchlist::defaults().movies()[0].clone()
}

// =============================================================
// EditSession
// =============================================================

#[test]
fn edit_session_prefills_from_movie() {
    let movie = matrix();
    let session = EditSession::start(&movie);
    assert_eq!(session.id, movie.id);
    assert_eq!(session.draft.title, "The Matrix");
    assert_eq!(session.draft.description, movie.description);
    assert_eq!(session.draft.poster, movie.poster.clone().unwrap_or_default());
}

#[test]
fn edit_session_carries_rating_as_text() {
    let mut movie = matrix();
    movie.rating = Rating::parse("8").expect("rating");
    let session = EditSession::start(&movie);
    assert_eq!(session.draft.rating, "8");
}

#[test]
fn edit_session_targets_only_its_movie() {
    let session = EditSession::start(&matrix());
    assert!(session.is_for(MovieId(1)));
    assert!(!session.is_for(MovieId(2)));
}

// =============================================================
// GridUi
// =============================================================

#[test]
fn grid_ui_starts_with_no_search_and_no_editor() {
    let ui = GridUi::default();
    assert!(ui.search.get_untracked().is_empty());
    assert!(ui.editing.get_untracked().is_none());
}

#[test]
fn begin_edit_then_cancel() {
    let ui = GridUi::new();
    ui.begin_edit(&matrix());
    assert_eq!(ui.editing.get_untracked().map(|s| s.id), Some(MovieId(1)));
    ui.cancel_edit();
    assert!(ui.editing.get_untracked().is_none());
}

#[test]
fn edit_draft_only_applies_while_editing() {
    let ui = GridUi::new();
    ui.edit_draft(|d| d.title = "ignored".to_owned());
    assert!(ui.editing.get_untracked().is_none());

    ui.begin_edit(&matrix());
    ui.edit_draft(|d| d.title = "Matrix".to_owned());
    assert_eq!(ui.editing.get_untracked().map(|s| s.draft.title), Some("Matrix".to_owned()));
}
