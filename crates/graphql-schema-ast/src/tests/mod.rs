use crate::DEFAULT_LOG_LEVEL;
use crate::resolve_log_level;

#[test]
fn verbose_flag_overrides_env() {
    assert_eq!(resolve_log_level(true, Some("trace")), (tracing::Level::DEBUG, None));
}

#[test]
fn env_levels() {
    assert_eq!(resolve_log_level(false, None), (DEFAULT_LOG_LEVEL, None));
    assert_eq!(resolve_log_level(false, Some(" TRACE ")), (tracing::Level::TRACE, None));
    assert_eq!(resolve_log_level(false, Some("verbose")), (tracing::Level::DEBUG, None));
    assert_eq!(resolve_log_level(false, Some("info")), (tracing::Level::INFO, None));
}

#[test]
fn invalid_env_level_warns() {
    let (level, warning) = resolve_log_level(false, Some("loud"));

    assert_eq!(level, DEFAULT_LOG_LEVEL);
    assert_eq!(
        warning.as_deref(),
        Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
    );
}
