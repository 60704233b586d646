use super::*;

#[test]
fn quiet_wins_over_verbose() {
    assert_eq!(log_filter(3, true), "error");
}

#[test]
fn verbosity_levels() {
    assert_eq!(log_filter(0, false), "warn");
    assert_eq!(log_filter(1, false), "debug");
    assert_eq!(log_filter(2, false), "trace");
    assert_eq!(log_filter(7, false), "trace");
}

#[test]
fn repeated_init_is_harmless() {
    init_logging(0, true);
    init_logging(1, false);
}
