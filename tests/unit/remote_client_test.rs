//! Unit tests for the remote client's status-code mapping. The mapping is
//! pure, so these run without a backend.

use rstest::rstest;

use markstash::remote::client::{map_auth_status, map_repository_status};
use markstash::types::errors::{AuthError, RepositoryError};

#[test]
fn test_404_maps_to_not_found() {
    let err = map_repository_status(404, "bookmark abc".to_string());
    assert!(matches!(err, RepositoryError::NotFound(detail) if detail == "bookmark abc"));
}

#[rstest]
#[case(400)]
#[case(422)]
fn test_client_errors_map_to_validation(#[case] status: u16) {
    let err = map_repository_status(status, "bad title".to_string());
    assert!(matches!(err, RepositoryError::Validation(detail) if detail == "bad title"));
}

#[rstest]
#[case(500)]
#[case(502)]
#[case(503)]
fn test_server_errors_map_to_store(#[case] status: u16) {
    let err = map_repository_status(status, "oops".to_string());
    match err {
        RepositoryError::Store(msg) => {
            assert!(msg.contains(&status.to_string()));
            assert!(msg.contains("oops"));
        }
        other => panic!("expected Store variant, got {:?}", other),
    }
}

#[test]
fn test_409_maps_to_duplicate_email() {
    let err = map_auth_status(409, "a@example.com".to_string());
    assert!(matches!(err, AuthError::DuplicateEmail(email) if email == "a@example.com"));
}

#[rstest]
#[case(401)]
#[case(403)]
fn test_auth_rejections_map_to_invalid_credentials(#[case] status: u16) {
    assert!(matches!(
        map_auth_status(status, String::new()),
        AuthError::InvalidCredentials
    ));
}

#[test]
fn test_other_auth_failures_map_to_store() {
    assert!(matches!(map_auth_status(500, "down".to_string()), AuthError::Store(_)));
}
