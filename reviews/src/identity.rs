//! Reviewer identity form and its validation.
//!
//! DESIGN
//! ======
//! The form keeps raw text exactly as typed. A [`ReviewerIdentity`] can only
//! be obtained through [`ReviewerIdentityForm::validate`], so holding one means
//! every required field was present and well formed.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Whether `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// Which backend variant the reviewer page talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReviewScope {
    /// Snippets are requested per email; the backend dedupes by email.
    #[default]
    EmailScoped,
    /// Snippets are requested without an identity; email is optional.
    Global,
}

impl ReviewScope {
    #[must_use]
    pub fn requires_email(self) -> bool {
        matches!(self, Self::EmailScoped)
    }

    /// Parse the `REVIEW_SCOPE` setting. Anything but `global` is email scoped.
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("global") {
            Self::Global
        } else {
            Self::EmailScoped
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your email first to get a code for review.")]
    EmailRequired,
}

/// Raw reviewer form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewerIdentityForm {
    pub name: String,
    pub email: String,
    pub years_of_experience: String,
    pub position: String,
}

/// Validated reviewer identity with normalized fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewerIdentity {
    name: String,
    email: Option<String>,
    years_of_experience: u32,
    position: String,
}

impl ReviewerIdentity {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed, lower-cased email when one was given.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    #[must_use]
    pub fn years_of_experience(&self) -> u32 {
        self.years_of_experience
    }

    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }
}

impl ReviewerIdentityForm {
    fn years(&self) -> Option<u32> {
        self.years_of_experience.trim().parse().ok()
    }

    /// Labels of required fields that are blank or malformed, in form order.
    #[must_use]
    pub fn missing_fields(&self, scope: ReviewScope) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("Reviewer name");
        }
        if scope.requires_email() && self.email.trim().is_empty() {
            missing.push("Reviewer email");
        }
        if self.years().is_none() {
            missing.push("Years of experience");
        }
        if self.position.trim().is_empty() {
            missing.push("Position");
        }
        missing
    }

    /// Email to scope a snippet request with.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::EmailRequired`] when the scope needs an email
    /// and none was entered.
    pub fn fetch_email(&self, scope: ReviewScope) -> Result<Option<String>, IdentityError> {
        let email = self.email.trim();
        match scope {
            ReviewScope::EmailScoped if email.is_empty() => Err(IdentityError::EmailRequired),
            ReviewScope::EmailScoped => Ok(Some(email.to_owned())),
            ReviewScope::Global => Ok(None),
        }
    }

    /// Validate and normalize the form.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::MissingFields`] listing every blank required
    /// field, or [`IdentityError::InvalidEmail`] for a malformed email.
    pub fn validate(&self, scope: ReviewScope) -> Result<ReviewerIdentity, IdentityError> {
        let missing = self.missing_fields(scope);
        if !missing.is_empty() {
            return Err(IdentityError::MissingFields(missing));
        }
        let email = self.email.trim();
        let email = if email.is_empty() {
            None
        } else if is_valid_email(email) {
            Some(email.to_lowercase())
        } else {
            return Err(IdentityError::InvalidEmail);
        };
        let years_of_experience = self.years().ok_or(IdentityError::MissingFields(vec!["Years of experience"]))?;
        Ok(ReviewerIdentity {
            name: self.name.trim().to_owned(),
            email,
            years_of_experience,
            position: self.position.trim().to_owned(),
        })
    }
}
