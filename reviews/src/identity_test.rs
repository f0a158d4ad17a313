use super::*;

fn complete_form() -> ReviewerIdentityForm {
    ReviewerIdentityForm {
        name: "  Ada Lovelace ".to_owned(),
        email: " Ada@Example.COM ".to_owned(),
        years_of_experience: "7".to_owned(),
        position: " Staff Engineer ".to_owned(),
    }
}

// =============================================================
// Email pattern
// =============================================================

#[test]
fn email_pattern_accepts_common_addresses() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last+tag@example.org"));
}

#[test]
fn email_pattern_rejects_malformed_addresses() {
    for email in ["", "plain", "a@b", "a @b.com", "@b.com", "a@@b.com"] {
        assert!(!is_valid_email(email), "{email} should be rejected");
    }
}

// =============================================================
// ReviewScope
// =============================================================

#[test]
fn scope_setting_defaults_to_email_scoped() {
    assert_eq!(ReviewScope::from_setting(""), ReviewScope::EmailScoped);
    assert_eq!(ReviewScope::from_setting("email"), ReviewScope::EmailScoped);
    assert_eq!(ReviewScope::from_setting(" Global "), ReviewScope::Global);
}

// =============================================================
// missing_fields / validate
// =============================================================

#[test]
fn missing_fields_lists_every_blank_field_in_order() {
    let form = ReviewerIdentityForm::default();
    assert_eq!(
        form.missing_fields(ReviewScope::EmailScoped),
        vec!["Reviewer name", "Reviewer email", "Years of experience", "Position"]
    );
    assert_eq!(
        form.missing_fields(ReviewScope::Global),
        vec!["Reviewer name", "Years of experience", "Position"]
    );
}

#[test]
fn negative_or_non_numeric_years_count_as_missing() {
    for years in ["-1", "three", "2.5", ""] {
        let form = ReviewerIdentityForm {
            years_of_experience: years.to_owned(),
            ..complete_form()
        };
        assert_eq!(form.missing_fields(ReviewScope::EmailScoped), vec!["Years of experience"]);
    }
}

#[test]
fn zero_years_is_accepted() {
    let form = ReviewerIdentityForm {
        years_of_experience: "0".to_owned(),
        ..complete_form()
    };
    let identity = form.validate(ReviewScope::EmailScoped).expect("valid");
    assert_eq!(identity.years_of_experience(), 0);
}

#[test]
fn validate_normalizes_fields() {
    let identity = complete_form().validate(ReviewScope::EmailScoped).expect("valid");
    assert_eq!(identity.name(), "Ada Lovelace");
    assert_eq!(identity.email(), Some("ada@example.com"));
    assert_eq!(identity.years_of_experience(), 7);
    assert_eq!(identity.position(), "Staff Engineer");
}

#[test]
fn validate_reports_missing_fields_message() {
    let form = ReviewerIdentityForm {
        name: String::new(),
        position: String::new(),
        ..complete_form()
    };
    let err = form.validate(ReviewScope::EmailScoped).expect_err("missing");
    assert_eq!(err.to_string(), "Please fill in: Reviewer name, Position");
}

#[test]
fn validate_rejects_bad_email_in_either_scope() {
    let form = ReviewerIdentityForm {
        email: "not-an-email".to_owned(),
        ..complete_form()
    };
    assert_eq!(form.validate(ReviewScope::EmailScoped), Err(IdentityError::InvalidEmail));
    assert_eq!(form.validate(ReviewScope::Global), Err(IdentityError::InvalidEmail));
}

#[test]
fn global_scope_allows_blank_email() {
    let form = ReviewerIdentityForm {
        email: "   ".to_owned(),
        ..complete_form()
    };
    let identity = form.validate(ReviewScope::Global).expect("valid");
    assert_eq!(identity.email(), None);
}

// =============================================================
// fetch_email
// =============================================================

#[test]
fn fetch_email_requires_value_when_email_scoped() {
    let form = ReviewerIdentityForm {
        email: "  ".to_owned(),
        ..complete_form()
    };
    let err = form.fetch_email(ReviewScope::EmailScoped).expect_err("blank");
    assert_eq!(err.to_string(), "Please enter your email first to get a code for review.");
}

#[test]
fn fetch_email_trims_without_lowercasing() {
    let email = complete_form().fetch_email(ReviewScope::EmailScoped).expect("email");
    assert_eq!(email.as_deref(), Some("Ada@Example.COM"));
}

#[test]
fn fetch_email_is_none_in_global_scope() {
    assert_eq!(complete_form().fetch_email(ReviewScope::Global), Ok(None));
}
