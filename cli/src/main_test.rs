use super::*;

fn snippet(code: &str, completed: bool) -> Snippet {
    Snippet {
        id: "65f0c1".to_owned(),
        title: "Binary Search".to_owned(),
        language: "Go".to_owned(),
        code: code.to_owned(),
        review_count: 2,
        max_reviews: 3,
        is_completed: completed,
    }
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn parses_random_with_email() {
    let cli = Cli::try_parse_from(["review-cli", "--base-url", "http://h/api", "codes", "random", "--email", "a@b.co"])
        .expect("parse");
    assert_eq!(cli.base_url, "http://h/api");
    match cli.command {
        Command::Codes(CodesCommand { command: CodesSubcommand::Random { email } }) => {
            assert_eq!(email.as_deref(), Some("a@b.co"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn create_defaults_max_reviews_to_three() {
    let cli = Cli::try_parse_from([
        "review-cli", "codes", "create", "--title", "T", "--language", "Rust", "--code", "main.rs",
    ])
    .expect("parse");
    match cli.command {
        Command::Codes(CodesCommand { command: CodesSubcommand::Create { max_reviews, .. } }) => {
            assert_eq!(max_reviews, "3");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn import_reads_stdin_by_default() {
    let cli = Cli::try_parse_from(["review-cli", "codes", "import"]).expect("parse");
    match cli.command {
        Command::Codes(CodesCommand { command: CodesSubcommand::Import { input } }) => assert_eq!(input, "-"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["review-cli", "codes", "delete"]).is_err());
}

// =============================================================
// Client and formatting
// =============================================================

#[test]
fn client_url_drops_trailing_slash() {
    let client = ApiClient::new("http://localhost:5000/api/").expect("client");
    assert_eq!(client.url("/codes/random"), "http://localhost:5000/api/codes/random");
}

#[test]
fn export_filename_uses_iso_date() {
    let date = time::Date::from_calendar_date(2026, time::Month::March, 7).expect("date");
    assert_eq!(export_filename(date), "code_reviews_2026-03-07.csv");
}

#[test]
fn snippet_row_shows_progress_and_status() {
    let row = format_snippet_row(&snippet("x", false));
    assert!(row.starts_with("65f0c1  Go"));
    assert!(row.contains("Reviews: 2/3"));
    assert!(row.contains("Pending"));
    assert!(row.ends_with("Binary Search"));
}

#[test]
fn numbered_source_pads_line_numbers() {
    let code = (1..=10).map(|n| format!("l{n}")).collect::<Vec<_>>().join("\n");
    let rendered = numbered_source(&snippet(&code, true));
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], " 1  l1");
    assert_eq!(lines[9], "10  l10");
}

#[test]
fn stats_render_one_counter_per_line() {
    let stats = Stats { total_codes: 3, total_reviews: 5, completed_codes: 1, pending_codes: 2 };
    assert_eq!(format_stats(&stats).lines().count(), 4);
    assert!(format_stats(&stats).starts_with("Total Codes: 3"));
}

#[test]
fn form_errors_surface_their_message() {
    let form = NewSnippetForm { title: String::new(), code: "x".to_owned(), language: "Go".to_owned(), max_reviews: "3".to_owned() };
    let err = CliError::from(form.validate().expect_err("title missing"));
    assert_eq!(err.to_string(), "Please fill in: Title");
}
