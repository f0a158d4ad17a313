use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:5000/api", HEALTH_PATH), "http://localhost:5000/api/health");
}

#[test]
fn endpoint_tolerates_trailing_slash_on_base() {
    assert_eq!(endpoint("https://example.com/api/", EXPORT_PATH), "https://example.com/api/reviews/export");
}

#[test]
fn paths_match_backend_routes() {
    assert_eq!(BULK_CODES_PATH, "/codes/bulk");
    assert_eq!(RANDOM_CODE_PATH, "/codes/random");
    assert_eq!(REVIEWS_PATH, "/reviews");
}

#[test]
fn helpers_are_unavailable_without_browser() {
    let err = unavailable();
    assert!(err.is_network());
}
