//! Formatted-mode shorthands: `infof!(logger, "{} ready", name)` forwards to
//! [`LeveledLogger::infof`](crate::LeveledLogger::infof) with `format_args!`.
//!
//! The macros expand at the call site, so located levels report the line the
//! macro was written on.

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $enabled:expr, $($arg:tt)+) => {
        $logger.debugf($enabled, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
