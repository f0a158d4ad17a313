use super::*;

fn filled(line: &str, comment: &str, category: Option<ReviewCategory>) -> LineReviewEntry {
    LineReviewEntry {
        line_number: line.to_owned(),
        comment: comment.to_owned(),
        category,
    }
}

fn collection_of(entries: Vec<LineReviewEntry>) -> LineReviewCollection {
    LineReviewCollection { entries }
}

// =============================================================
// add / add_for_line
// =============================================================

#[test]
fn add_appends_blank_entry() {
    let mut c = LineReviewCollection::new();
    c.add();
    c.add();
    assert_eq!(c.len(), 2);
    assert_eq!(c.entries()[1], LineReviewEntry::default());
}

#[test]
fn add_for_line_appends_prefilled_entry() {
    let mut c = LineReviewCollection::new();
    assert!(c.add_for_line(3));
    assert_eq!(c.entries(), &[filled("3", "", None)]);
}

#[test]
fn add_for_line_is_noop_when_line_already_referenced() {
    let mut c = LineReviewCollection::new();
    assert!(c.add_for_line(3));
    assert!(!c.add_for_line(3));
    assert_eq!(c.len(), 1);
}

#[test]
fn add_for_line_only_suppresses_exact_line_text() {
    let mut c = LineReviewCollection::new();
    c.add();
    c.update(0, LineReviewField::LineNumber, "03");
    assert!(c.add_for_line(3));
    assert_eq!(c.len(), 2);
}

#[test]
fn manual_add_can_collide_with_clicked_line() {
    let mut c = LineReviewCollection::new();
    c.add_for_line(2);
    c.add();
    c.update(1, LineReviewField::LineNumber, "2");
    assert_eq!(c.len(), 2);
    assert!(c.entries().iter().all(|e| e.line_number == "2"));
}

// =============================================================
// update / remove
// =============================================================

#[test]
fn update_sets_each_field_by_position() {
    let mut c = LineReviewCollection::new();
    c.add();
    assert!(c.update(0, LineReviewField::LineNumber, "4"));
    assert!(c.update(0, LineReviewField::Comment, "needs a guard clause"));
    assert!(c.update(0, LineReviewField::Category, "Security"));
    assert_eq!(c.entries()[0], filled("4", "needs a guard clause", Some(ReviewCategory::Security)));
}

#[test]
fn update_with_unknown_category_clears_it() {
    let mut c = collection_of(vec![filled("1", "x", Some(ReviewCategory::Other))]);
    c.update(0, LineReviewField::Category, "");
    assert_eq!(c.entries()[0].category, None);
}

#[test]
fn update_out_of_range_is_ignored() {
    let mut c = LineReviewCollection::new();
    assert!(!c.update(0, LineReviewField::Comment, "x"));
    assert!(c.is_empty());
}

#[test]
fn remove_shifts_later_indices() {
    let mut c = LineReviewCollection::new();
    c.add_for_line(1);
    c.add_for_line(2);
    c.add_for_line(3);
    let removed = c.remove(0).expect("entry");
    assert_eq!(removed.line_number, "1");
    assert_eq!(c.entries()[0].line_number, "2");
    assert_eq!(c.entries()[1].line_number, "3");
    assert!(c.remove(5).is_none());
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_rejects_empty_collection() {
    let c = LineReviewCollection::new();
    assert_eq!(c.validate(5), Err(CollectionError::Empty));
}

#[test]
fn validate_reports_missing_fields() {
    let c = collection_of(vec![filled("1", "long enough comment", None)]);
    let err = c.validate(5).expect_err("missing category");
    assert_eq!(err, CollectionError::MissingField { index: 1 });
    assert_eq!(err.to_string(), "Line review 1: Please fill in line number, comment, and category");
}

#[test]
fn validate_treats_whitespace_comment_as_missing() {
    let c = collection_of(vec![filled("1", "    ", Some(ReviewCategory::Other))]);
    assert_eq!(c.validate(5), Err(CollectionError::MissingField { index: 1 }));
}

#[test]
fn validate_rejects_short_comment_after_trimming() {
    let c = collection_of(vec![
        filled("1", "this one is fine", Some(ReviewCategory::Other)),
        filled("2", "   ok       ", Some(ReviewCategory::Other)),
        filled("3", "short", Some(ReviewCategory::Other)),
    ]);
    let err = c.validate(5).expect_err("short comment");
    assert_eq!(err, CollectionError::CommentTooShort { index: 2 });
    assert_eq!(err.to_string(), "Line review 2: Comment must be at least 10 characters long");
}

#[test]
fn validate_accepts_exactly_ten_characters() {
    let c = collection_of(vec![filled("1", "0123456789", Some(ReviewCategory::Other))]);
    assert!(c.validate(1).is_ok());
}

#[test]
fn validate_rejects_lines_outside_snippet() {
    for line in ["0", "6", "-1", "abc", "2.5"] {
        let c = collection_of(vec![filled(line, "a reasonable remark", Some(ReviewCategory::Performance))]);
        let err = c.validate(5).expect_err("out of range");
        assert_eq!(err, CollectionError::LineOutOfRange { index: 1, line_count: 5 });
        assert_eq!(err.to_string(), "Line review 1: Line number must be between 1 and 5");
    }
}

#[test]
fn validate_reports_first_violation_only() {
    let c = collection_of(vec![
        filled("9", "a reasonable remark", Some(ReviewCategory::Other)),
        filled("", "", None),
    ]);
    assert_eq!(c.validate(5), Err(CollectionError::LineOutOfRange { index: 1, line_count: 5 }));
}

#[test]
fn validate_converts_entries_to_wire_form() {
    let c = collection_of(vec![filled(" 3 ", "  looks fine to me ", Some(ReviewCategory::CodeStyle))]);
    let lines = c.validate(5).expect("valid");
    assert_eq!(
        lines,
        vec![LineReview {
            line_number: 3,
            comment: "looks fine to me".to_owned(),
            category: ReviewCategory::CodeStyle,
        }]
    );
}
