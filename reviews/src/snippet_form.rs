//! Admin-side snippet input: single-snippet form and bulk JSON import.

#[cfg(test)]
#[path = "snippet_form_test.rs"]
mod snippet_form_test;

use serde_json::{Value, json};

use crate::model::{DEFAULT_MAX_REVIEWS, NewSnippet};

/// Bounds of the per-snippet review quota.
pub const MAX_REVIEWS_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Languages offered by the single-snippet form.
pub const LANGUAGES: [&str; 15] = [
    "JavaScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "TypeScript",
    "Swift",
    "Kotlin",
    "SQL",
    "HTML/CSS",
    "Other",
];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnippetFormError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Max reviews must be between 1 and 10")]
    MaxReviewsOutOfRange,
}

/// Raw single-snippet form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSnippetForm {
    pub title: String,
    pub code: String,
    pub language: String,
    pub max_reviews: String,
}

impl Default for NewSnippetForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            code: String::new(),
            language: String::new(),
            max_reviews: DEFAULT_MAX_REVIEWS.to_string(),
        }
    }
}

impl NewSnippetForm {
    /// Validate the form into a `POST /codes` body.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetFormError::MissingFields`] naming every blank field,
    /// or [`SnippetFormError::MaxReviewsOutOfRange`].
    pub fn validate(&self) -> Result<NewSnippet, SnippetFormError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("Title");
        }
        if self.code.trim().is_empty() {
            missing.push("Code");
        }
        if self.language.trim().is_empty() {
            missing.push("Language");
        }
        if !missing.is_empty() {
            return Err(SnippetFormError::MissingFields(missing));
        }
        let max_reviews = self
            .max_reviews
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| MAX_REVIEWS_RANGE.contains(n))
            .ok_or(SnippetFormError::MaxReviewsOutOfRange)?;
        Ok(NewSnippet {
            title: self.title.trim().to_owned(),
            code: self.code.trim().to_owned(),
            language: self.language.trim().to_owned(),
            max_reviews,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BulkImportError {
    #[error("Please enter codes in JSON format")]
    Empty,
    #[error("Invalid JSON format. Please check your input.")]
    InvalidJson(#[source] serde_json::Error),
    #[error("Input must be an array of code objects")]
    NotArray,
}

/// Parse bulk-import text into the items to forward verbatim.
///
/// # Errors
///
/// Returns [`BulkImportError::Empty`] for blank input,
/// [`BulkImportError::InvalidJson`] for a syntax error, and
/// [`BulkImportError::NotArray`] when the document is not an array.
pub fn parse_bulk_import(text: &str) -> Result<Vec<Value>, BulkImportError> {
    if text.trim().is_empty() {
        return Err(BulkImportError::Empty);
    }
    match serde_json::from_str::<Value>(text).map_err(BulkImportError::InvalidJson)? {
        Value::Array(items) => Ok(items),
        _ => Err(BulkImportError::NotArray),
    }
}

/// Two example snippets in bulk-import shape, pretty printed.
#[must_use]
pub fn sample_bulk_json() -> String {
    let sample = json!([
        {
            "title": "Fibonacci Sequence Generator",
            "language": "Python",
            "code": "def fibonacci(n):\n    if n <= 1:\n        return n\n    return fibonacci(n-1) + fibonacci(n-2)\n\nfor i in range(10):\n    print(fibonacci(i))",
            "maxReviews": 3
        },
        {
            "title": "Binary Search Implementation",
            "language": "JavaScript",
            "code": "function binarySearch(arr, target) {\n    let left = 0;\n    let right = arr.length - 1;\n    \n    while (left <= right) {\n        let mid = Math.floor((left + right) / 2);\n        if (arr[mid] === target) return mid;\n        if (arr[mid] < target) left = mid + 1;\n        else right = mid - 1;\n    }\n    return -1;\n}",
            "maxReviews": 3
        }
    ]);
    serde_json::to_string_pretty(&sample).unwrap_or_default()
}
