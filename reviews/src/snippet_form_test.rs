use super::*;

fn complete_form() -> NewSnippetForm {
    NewSnippetForm {
        title: " Quick sort ".to_owned(),
        code: "\nfn main() {}\n".to_owned(),
        language: "Rust".to_owned(),
        max_reviews: "3".to_owned(),
    }
}

// =============================================================
// NewSnippetForm
// =============================================================

#[test]
fn default_form_uses_default_quota() {
    assert_eq!(NewSnippetForm::default().max_reviews, "3");
}

#[test]
fn validate_trims_title_and_code() {
    let snippet = complete_form().validate().expect("valid");
    assert_eq!(snippet.title, "Quick sort");
    assert_eq!(snippet.code, "fn main() {}");
    assert_eq!(snippet.max_reviews, 3);
}

#[test]
fn validate_lists_only_missing_fields() {
    let form = NewSnippetForm {
        title: "  ".to_owned(),
        language: String::new(),
        ..complete_form()
    };
    let err = form.validate().expect_err("missing");
    assert_eq!(err.to_string(), "Please fill in: Title, Language");
}

#[test]
fn validate_bounds_max_reviews() {
    for value in ["0", "11", "", "many"] {
        let form = NewSnippetForm {
            max_reviews: value.to_owned(),
            ..complete_form()
        };
        assert_eq!(form.validate(), Err(SnippetFormError::MaxReviewsOutOfRange));
    }
}

#[test]
fn languages_include_other_as_last_choice() {
    assert_eq!(LANGUAGES.last(), Some(&"Other"));
    assert!(LANGUAGES.contains(&"Rust"));
}

// =============================================================
// parse_bulk_import
// =============================================================

#[test]
fn bulk_import_rejects_blank_text() {
    let err = parse_bulk_import("   \n").expect_err("blank");
    assert!(matches!(err, BulkImportError::Empty));
}

#[test]
fn bulk_import_rejects_non_array_document() {
    let err = parse_bulk_import(r#"{"a":1}"#).expect_err("object");
    assert!(matches!(err, BulkImportError::NotArray));
    assert_eq!(err.to_string(), "Input must be an array of code objects");
}

#[test]
fn bulk_import_reports_syntax_errors_distinctly() {
    let err = parse_bulk_import("[1,2").expect_err("syntax");
    assert!(matches!(err, BulkImportError::InvalidJson(_)));
    assert_eq!(err.to_string(), "Invalid JSON format. Please check your input.");
}

#[test]
fn bulk_import_passes_items_through_verbatim() {
    let items = parse_bulk_import(r#"[{"title":"t","extra":true}, 7]"#).expect("array");
    assert_eq!(items, vec![json!({"title": "t", "extra": true}), json!(7)]);
}

#[test]
fn sample_bulk_json_parses_as_two_items() {
    let items = parse_bulk_import(&sample_bulk_json()).expect("sample");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["language"], "Python");
    assert_eq!(items[1]["maxReviews"], 3);
}
