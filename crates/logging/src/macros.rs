//! crates/logging/src/macros.rs
//! Format-template macros over the [`Logger`](crate::Logger) methods.
//!
//! Each macro wraps `format_args!` and tags the call with its source
//! location, so backends configured to render a file-name prefix can show
//! where the message came from.

/// Emits a FATAL message through a [`Logger`](crate::Logger).
///
/// Real backends terminate the process after the message; see the trait
/// documentation for the `EmptyLogger` exception.
///
/// # Examples
///
/// ```
/// use logging::{fatal_log, EmptyLogger};
///
/// let log = EmptyLogger;
/// fatal_log!(log, "boom: {}", 42); // EmptyLogger: no output, returns normally
/// ```
#[macro_export]
macro_rules! fatal_log {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        ($logger).fatal_at(
            ::std::option::Option::Some($crate::CallSite {
                file: ::std::file!(),
                line: ::std::line!(),
            }),
            ::std::format_args!($($arg)*),
        )
    }};
}

/// Emits an ERROR message through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! error_log {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        ($logger).log_at(
            $crate::Level::Error,
            ::std::option::Option::Some($crate::CallSite {
                file: ::std::file!(),
                line: ::std::line!(),
            }),
            ::std::format_args!($($arg)*),
        )
    }};
}

/// Emits a WARN message through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! warn_log {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        ($logger).log_at(
            $crate::Level::Warn,
            ::std::option::Option::Some($crate::CallSite {
                file: ::std::file!(),
                line: ::std::line!(),
            }),
            ::std::format_args!($($arg)*),
        )
    }};
}

/// Emits an INFO message through a [`Logger`](crate::Logger).
///
/// # Examples
///
/// ```
/// use logging::{info_log, EmptyLogger};
///
/// let log = EmptyLogger;
/// info_log!(log, "sent {} values to {}", 3, "example.com");
/// ```
#[macro_export]
macro_rules! info_log {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        ($logger).log_at(
            $crate::Level::Info,
            ::std::option::Option::Some($crate::CallSite {
                file: ::std::file!(),
                line: ::std::line!(),
            }),
            ::std::format_args!($($arg)*),
        )
    }};
}

/// Emits a DEBUG message through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        ($logger).log_at(
            $crate::Level::Debug,
            ::std::option::Option::Some($crate::CallSite {
                file: ::std::file!(),
                line: ::std::line!(),
            }),
            ::std::format_args!($($arg)*),
        )
    }};
}

/// Emits a TRACE message through a [`Logger`](crate::Logger).
#[macro_export]
macro_rules! trace_log {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::Logger as _;
        ($logger).log_at(
            $crate::Level::Trace,
            ::std::option::Option::Some($crate::CallSite {
                file: ::std::file!(),
                line: ::std::line!(),
            }),
            ::std::format_args!($($arg)*),
        )
    }};
}
