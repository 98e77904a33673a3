//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`watchlist`, `ui`, `detail_form`) so
//! components depend on small focused models. The plain structs here hold
//! the rules and are unit-tested without a browser.

pub mod detail_form;
pub mod ui;
pub mod watchlist;
