//! progbook — terminal reader for "How to Be a Good Programmer".
//!
//! Two fixed collections (book chapters, language catalog) behind a
//! two-tab terminal UI. Read-only: the view never mutates the content
//! store.

pub mod content;
pub mod tui;
