use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_SESSION_FAILURE);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_SESSION_FAILURE, EXIT_CONFIG_ERROR);
}

#[test]
fn error_reexport_is_usable() {
    let result: Result<()> = Err(ChoroplethError::Config("x".to_string()));
    assert!(result.is_err());
}
