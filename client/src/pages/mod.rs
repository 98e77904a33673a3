//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped UI state and delegates rendering details
//! to `components`. Both pages share the watchlist provided by `App`.

pub mod detail;
pub mod watchlist;
