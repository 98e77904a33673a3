//! Display text for headings, empty states, and record fields.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

use movies::Rating;

/// Grid heading: says "movies" when nothing is filtered out, "results" otherwise.
pub fn grid_heading(shown: usize, total: usize) -> String {
    let noun = if shown == total { "movies" } else { "results" };
    format!("Your Watchlist ({shown} {noun})")
}

pub fn list_heading(total: usize) -> String {
    format!("Your Watchlist ({total} movies)")
}

/// Message for an empty grid. Any search text, even whitespace, counts as
/// an active search.
pub fn empty_grid_message(search: &str) -> &'static str {
    if search.is_empty() {
        "Your watchlist is empty. Add some movies!"
    } else {
        "No movies match your search."
    }
}

pub const EMPTY_LIST_MESSAGE: &str = "No movies yet! Add one above.";

pub fn watched_button_label(watched: bool) -> &'static str {
    if watched { "✓ Watched" } else { "Mark as Watched" }
}

pub fn poster_alt(title: &str) -> String {
    format!("{title} poster")
}

pub fn list_title(title: &str, watched: bool) -> String {
    if watched { format!("{title} (Watched ✅)") } else { title.to_owned() }
}

pub fn genre_line(genre: Option<&str>) -> String {
    format!("Genre: {}", genre.unwrap_or("N/A"))
}

pub fn rating_line(rating: Option<Rating>) -> String {
    match rating {
        Some(rating) => format!("Rating: {rating}/10"),
        None => "Rating: N/A/10".to_owned(),
    }
}

pub fn notes_line(notes: &str) -> String {
    if notes.is_empty() { "Notes: None".to_owned() } else { format!("Notes: {notes}") }
}
