//! In-memory line review entries for the snippet on screen.
//!
//! Entries are addressed by position. Removing one shifts every later index,
//! so callers must not hold indices across a removal.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use crate::model::{LineReview, ReviewCategory};

/// Shortest comment accepted at submission, counted after trimming.
pub const MIN_COMMENT_CHARS: usize = 10;

/// One editable line review row. Fields hold raw form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineReviewEntry {
    pub line_number: String,
    pub comment: String,
    pub category: Option<ReviewCategory>,
}

/// Field selector for [`LineReviewCollection::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineReviewField {
    LineNumber,
    Comment,
    Category,
}

/// First violation found while validating a collection.
///
/// `index` values are 1-based positions as shown to the reviewer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    #[error("Please add at least one line review")]
    Empty,
    #[error("Line review {index}: Please fill in line number, comment, and category")]
    MissingField { index: usize },
    #[error("Line review {index}: Comment must be at least 10 characters long")]
    CommentTooShort { index: usize },
    #[error("Line review {index}: Line number must be between 1 and {line_count}")]
    LineOutOfRange { index: usize, line_count: usize },
}

/// Ordered line review entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineReviewCollection {
    entries: Vec<LineReviewEntry>,
}

impl LineReviewCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[LineReviewEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether some entry already references line `n` exactly.
    #[must_use]
    pub fn has_line(&self, n: usize) -> bool {
        let wanted = n.to_string();
        self.entries.iter().any(|e| e.line_number == wanted)
    }

    /// Append a blank entry for manual fill-in.
    pub fn add(&mut self) {
        self.entries.push(LineReviewEntry::default());
    }

    /// Append an entry for line `n` unless one already references it.
    ///
    /// Returns `true` when an entry was appended. Entries created by
    /// [`add`](Self::add) and edited afterwards can still collide.
    pub fn add_for_line(&mut self, n: usize) -> bool {
        if self.has_line(n) {
            return false;
        }
        self.entries.push(LineReviewEntry {
            line_number: n.to_string(),
            ..LineReviewEntry::default()
        });
        true
    }

    /// Set one field of the entry at `index`. Out-of-range indices are ignored.
    ///
    /// An unknown or blank category label clears the category.
    pub fn update(&mut self, index: usize, field: LineReviewField, value: &str) -> bool {
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        match field {
            LineReviewField::LineNumber => entry.line_number = value.to_owned(),
            LineReviewField::Comment => entry.comment = value.to_owned(),
            LineReviewField::Category => entry.category = ReviewCategory::from_label(value),
        }
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<LineReviewEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Check every entry against a snippet of `line_count` lines.
    ///
    /// Stops at the first violation in sequence order. On success returns the
    /// entries converted to wire form.
    ///
    /// # Errors
    ///
    /// Returns the first [`CollectionError`] encountered.
    pub fn validate(&self, line_count: usize) -> Result<Vec<LineReview>, CollectionError> {
        if self.entries.is_empty() {
            return Err(CollectionError::Empty);
        }
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| validate_entry(i + 1, entry, line_count))
            .collect()
    }
}

fn validate_entry(index: usize, entry: &LineReviewEntry, line_count: usize) -> Result<LineReview, CollectionError> {
    let line_text = entry.line_number.trim();
    let comment = entry.comment.trim();
    let Some(category) = entry.category else {
        return Err(CollectionError::MissingField { index });
    };
    if line_text.is_empty() || comment.is_empty() {
        return Err(CollectionError::MissingField { index });
    }
    if comment.chars().count() < MIN_COMMENT_CHARS {
        return Err(CollectionError::CommentTooShort { index });
    }
    let line_number = line_text
        .parse::<u32>()
        .ok()
        .filter(|n| *n >= 1 && usize::try_from(*n).is_ok_and(|n| n <= line_count))
        .ok_or(CollectionError::LineOutOfRange { index, line_count })?;
    Ok(LineReview {
        line_number,
        comment: comment.to_owned(),
        category,
    })
}
