//! The content store — fixed, read-only book and catalog data.
//!
//! Populated once at startup, never mutated. The only invariant is
//! language-name uniqueness (names double as selection keys), checked
//! by [`validate`] before the UI launches.

mod book;
mod catalog;

pub use book::{chapters, BOOK_AUTHOR, BOOK_INTRO, BOOK_SUBTITLE, BOOK_TITLE};
pub use catalog::languages;

use std::collections::HashSet;

use thiserror::Error;

/// Fixed glyph for a chapter heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterIcon {
    BookOpen,
    Tools,
    Rocket,
    Cloud,
    Database,
}

impl ChapterIcon {
    /// Glyph rendered in front of the chapter title.
    pub fn glyph(self) -> &'static str {
        match self {
            ChapterIcon::BookOpen => "\u{25a4}",
            ChapterIcon::Tools => "\u{2699}",
            ChapterIcon::Rocket => "\u{25b2}",
            ChapterIcon::Cloud => "\u{2601}",
            ChapterIcon::Database => "\u{25a3}",
        }
    }
}

/// A subchapter: title plus one paragraph of body text.
#[derive(Debug, Clone)]
pub struct Subchapter {
    pub title: &'static str,
    pub body: &'static str,
}

/// A chapter of the book's table of contents.
#[derive(Debug, Clone)]
pub struct Chapter {
    pub title: &'static str,
    pub icon: ChapterIcon,
    pub body: &'static str,
    pub subchapters: Vec<Subchapter>,
}

/// A descriptive card about one programming language.
#[derive(Debug, Clone)]
pub struct Language {
    /// Unique key — both display name and selection key.
    pub name: &'static str,
    pub description: &'static str,
    pub advantages: Vec<&'static str>,
    pub use_cases: Vec<&'static str>,
    /// Literal source text, displayed verbatim.
    pub code_example: &'static str,
}

/// Content store errors. The shipped data never triggers these; the
/// check runs once at startup so a bad edit fails loudly.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("duplicate language name: {0}")]
    DuplicateLanguage(String),
}

/// Check the language-name uniqueness invariant.
pub fn validate(languages: &[Language]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for lang in languages {
        if !seen.insert(lang.name) {
            return Err(ContentError::DuplicateLanguage(lang.name.to_string()));
        }
    }
    Ok(())
}
