use super::*;

#[test]
fn status_error_includes_detail_when_present() {
    let bare = SubmitError::Status { status: 500, detail: None };
    assert_eq!(bare.to_string(), "endpoint answered 500");

    let detailed = SubmitError::Status { status: 422, detail: Some("email is invalid".to_owned()) };
    assert_eq!(detailed.to_string(), "endpoint answered 422: email is invalid");
}

#[test]
fn network_error_message() {
    assert_eq!(SubmitError::Network("offline".to_owned()).to_string(), "network error: offline");
}
