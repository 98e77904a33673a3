use super::*;
use movies::MemoryStore;

const NOW: u64 = 1_700_000_000_000;

fn loaded() -> WatchlistState<MemoryStore> {
    let mut state = WatchlistState::default();
    state.load(MemoryStore::new());
    state
}

#[test]
fn add_mode_labels() {
    let form = DetailFormState::default();
    assert!(!form.is_editing());
    assert_eq!(form.heading(), "Add New Movie");
    assert_eq!(form.submit_label(), "Add Movie");
}

#[test]
fn edit_mode_labels_and_prefill() {
    let watchlist = loaded();
    let mut form = DetailFormState::default();
    form.begin_edit(&watchlist.movies()[1]);
    assert_eq!(form.editing, Some(MovieId(2)));
    assert_eq!(form.heading(), "Edit Movie");
    assert_eq!(form.submit_label(), "Update Movie");
    assert_eq!(form.draft.title, "Inception");
}

#[test]
fn submit_in_add_mode_adds_with_detail_fields_and_resets() {
    let mut watchlist = loaded();
    let mut form = DetailFormState::default();
    form.draft = MovieDraft {
        title: "Alien".to_owned(),
        genre: "Horror".to_owned(),
        rating: "9".to_owned(),
        description: "In space.".to_owned(),
        watched: true,
        ..MovieDraft::default()
    };
    assert!(form.submit(&mut watchlist, NOW));
    assert_eq!(form, DetailFormState::default());

    let added = watchlist.get(MovieId(NOW)).expect("added");
    assert_eq!(added.genre.as_deref(), Some("Horror"));
    assert_eq!(added.rating.map(movies::Rating::value), Some(9));
    assert!(added.watched);
}

#[test]
fn submit_in_edit_mode_updates_including_watched() {
    let mut watchlist = loaded();
    let mut form = DetailFormState::default();
    form.begin_edit(&watchlist.movies()[0]);
    form.draft.watched = true;
    assert!(form.submit(&mut watchlist, NOW));
    assert!(!form.is_editing());
    assert!(watchlist.get(MovieId(1)).is_some_and(|m| m.watched));
    assert_eq!(watchlist.total(), 2);
}

#[test]
fn submit_with_empty_title_keeps_draft() {
    let mut watchlist = loaded();
    let mut form = DetailFormState::default();
    form.draft.genre = "Drama".to_owned();
    assert!(!form.submit(&mut watchlist, NOW));
    assert_eq!(form.draft.genre, "Drama");
    assert_eq!(watchlist.total(), 2);
}

#[test]
fn forget_resets_only_matching_edit() {
    let watchlist = loaded();
    let mut form = DetailFormState::default();
    form.begin_edit(&watchlist.movies()[0]);
    form.forget(MovieId(2));
    assert!(form.is_editing());
    form.forget(MovieId(1));
    assert!(!form.is_editing());
}
