use std::borrow::Cow;
use sysrepo::logging::{self, LogCallback};
use sysrepo::LogLevel;

struct NullLogger;

impl LogCallback for NullLogger {
    fn log<'a>(&'a self, _level: LogLevel, _msg: Option<Cow<'a, str>>) {}
}

#[test]
fn logging_stderr_level() {
    logging::set_stderr_level(LogLevel::Warning);
    assert_eq!(logging::stderr_level(), LogLevel::Warning);
    logging::set_stderr_level(LogLevel::None);
    assert_eq!(logging::stderr_level(), LogLevel::None);
}

#[test]
fn logging_callback_set_once() {
    assert!(logging::init_logger(NullLogger).is_ok());
    assert!(logging::init_default_logger().is_err());
}

#[test]
fn logging_syslog_invalid_app_name() {
    let error = logging::set_syslog_level(Some("bad\0name"), LogLevel::Error)
        .expect_err("Interior NUL accepted");
    assert_eq!(error.errcode, sysrepo::ErrorCode::InvalArg);
}
