use super::*;

#[test]
fn rejected_prefers_error_field() {
    let err = ApiError::rejected(400, r#"{"error":"Invalid email","message":"ignored"}"#);
    assert_eq!(err.server_message(), Some("Invalid email"));
    assert!(err.is_bad_request());
}

#[test]
fn rejected_falls_back_to_message_field() {
    let err = ApiError::rejected(404, r#"{"error":"","message":"Code not found"}"#);
    assert_eq!(err.server_message(), Some("Code not found"));
    assert!(err.is_not_found());
}

#[test]
fn rejected_with_non_json_body_has_no_message() {
    let err = ApiError::rejected(502, "<html>bad gateway</html>");
    assert_eq!(err, ApiError::Rejected { status: 502, message: None });
    assert_eq!(err.to_string(), "HTTP error! status: 502");
}

#[test]
fn network_and_decode_errors_have_no_status() {
    let network = ApiError::Network("connection refused".to_owned());
    assert!(network.is_network());
    assert_eq!(network.status(), None);
    assert_eq!(ApiError::Decode("eof".to_owned()).server_message(), None);
}
