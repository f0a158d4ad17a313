use super::*;

fn snippet(completed: bool) -> Snippet {
    Snippet {
        id: "abc".to_owned(),
        title: "Sort".to_owned(),
        language: "Python".to_owned(),
        code: "print(1)".to_owned(),
        review_count: 1,
        max_reviews: 3,
        is_completed: completed,
    }
}

#[test]
fn toggle_label_switches_between_view_and_hide() {
    assert_eq!(toggle_label(false), "View");
    assert_eq!(toggle_label(true), "Hide");
}

#[test]
fn completion_class_marks_finished_snippets() {
    assert_eq!(completion_class(&snippet(true)), "badge badge--completed");
    assert_eq!(completion_class(&snippet(false)), "badge badge--pending");
}
