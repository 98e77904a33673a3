use super::*;

#[test]
fn grid_heading_switches_noun_when_filtered() {
    assert_eq!(grid_heading(2, 2), "Your Watchlist (2 movies)");
    assert_eq!(grid_heading(1, 2), "Your Watchlist (1 results)");
    assert_eq!(grid_heading(0, 0), "Your Watchlist (0 movies)");
}

#[test]
fn empty_grid_message_depends_on_search() {
    assert_eq!(empty_grid_message(""), "Your watchlist is empty. Add some movies!");
    assert_eq!(empty_grid_message("zz"), "No movies match your search.");
    assert_eq!(empty_grid_message(" "), "No movies match your search.");
}

#[test]
fn watched_button_label_reflects_state() {
    assert_eq!(watched_button_label(true), "✓ Watched");
    assert_eq!(watched_button_label(false), "Mark as Watched");
}

#[test]
fn list_lines_fall_back_when_missing() {
    assert_eq!(genre_line(None), "Genre: N/A");
    assert_eq!(genre_line(Some("Drama")), "Genre: Drama");
    assert_eq!(rating_line(None), "Rating: N/A/10");
    assert_eq!(rating_line(Rating::parse("7").expect("rating")), "Rating: 7/10");
    assert_eq!(notes_line(""), "Notes: None");
    assert_eq!(notes_line("Rewatch"), "Notes: Rewatch");
}

#[test]
fn list_title_marks_watched() {
    assert_eq!(list_title("Heat", true), "Heat (Watched ✅)");
    assert_eq!(list_title("Heat", false), "Heat");
    assert_eq!(list_heading(3), "Your Watchlist (3 movies)");
    assert_eq!(poster_alt("Heat"), "Heat poster");
}
