//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock)
//! and display text from page and component logic to keep those testable.

pub mod clock;
pub mod labels;
pub mod local_storage;
