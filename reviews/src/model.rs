//! Wire DTOs for the review backend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Counters carry serde
//! defaults so a sparse record from an older backend still deserializes.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default review quota for a new snippet.
pub const DEFAULT_MAX_REVIEWS: u32 = 3;

fn default_max_reviews() -> u32 {
    DEFAULT_MAX_REVIEWS
}

/// A code sample served for review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Backend record identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    /// Language tag, e.g. `"Python"`.
    pub language: String,
    /// Full source text.
    pub code: String,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default = "default_max_reviews")]
    pub max_reviews: u32,
    #[serde(default)]
    pub is_completed: bool,
}

impl Snippet {
    /// Source split on line breaks. Recomputed on every call.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let empty = self.code.is_empty();
        self.code.split('\n').filter(move |_| !empty)
    }

    /// Number of reviewable lines in the source.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

/// Aggregate counters from `GET /stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub total_codes: u64,
    #[serde(default)]
    pub total_reviews: u64,
    #[serde(default)]
    pub completed_codes: u64,
    #[serde(default)]
    pub pending_codes: u64,
}

/// Fixed set of feedback categories a line review can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewCategory {
    #[serde(rename = "Bug/Error")]
    BugError,
    Performance,
    #[serde(rename = "Code Style")]
    CodeStyle,
    #[serde(rename = "Best Practices")]
    BestPractices,
    Security,
    Functionality,
    Debugging,
    Refactoring,
    Other,
}

impl ReviewCategory {
    /// All categories in display order.
    pub const ALL: [Self; 9] = [
        Self::BugError,
        Self::Performance,
        Self::CodeStyle,
        Self::BestPractices,
        Self::Security,
        Self::Functionality,
        Self::Debugging,
        Self::Refactoring,
        Self::Other,
    ];

    /// Wire and display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BugError => "Bug/Error",
            Self::Performance => "Performance",
            Self::CodeStyle => "Code Style",
            Self::BestPractices => "Best Practices",
            Self::Security => "Security",
            Self::Functionality => "Functionality",
            Self::Debugging => "Debugging",
            Self::Refactoring => "Refactoring",
            Self::Other => "Other",
        }
    }

    /// Parse a label as rendered in the category `<select>`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// One validated line review as sent to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReview {
    pub line_number: u32,
    pub comment: String,
    pub category: ReviewCategory,
}

/// `POST /reviews` body. Built once per submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub code_id: String,
    pub reviewer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer_email: Option<String>,
    pub years_of_experience: u32,
    pub position: String,
    pub general_comment: String,
    pub line_reviews: Vec<LineReview>,
}

/// `POST /codes` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSnippet {
    pub title: String,
    pub code: String,
    pub language: String,
    pub max_reviews: u32,
}

/// `POST /codes/bulk` body. Items are forwarded exactly as parsed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BulkImportRequest {
    pub codes: Vec<Value>,
}

/// `POST /codes/bulk` response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportResponse {
    #[serde(default)]
    pub added_count: u64,
}
