//! Formatting variants of the logging methods.
//!
//! ```
//! use threadlog_core::{Logger, log_error, log_info};
//!
//! let logger = Logger::new();
//! let id = logger.new_id();
//! log_info!(logger.thread(&id), "fetched {} rows", 12).data("table", "users");
//!
//! let mut session = logger.session("reindex");
//! log_error!(session, "shard {} unavailable", 3);
//! session.end();
//! ```
//!
//! Besides formatting, the macros record the name of the calling function
//! when call-site capture is on.

#[macro_export]
macro_rules! log_info {
    ($target:expr, $($arg:tt)+) => {
        $crate::LogTarget::log_at(
            &$target,
            $crate::Level::Info,
            format_args!($($arg)+),
            $crate::__macro_site!(),
        )
    };
}

#[macro_export]
macro_rules! log_error {
    ($target:expr, $($arg:tt)+) => {
        $crate::LogTarget::log_at(
            &$target,
            $crate::Level::Error,
            format_args!($($arg)+),
            $crate::__macro_site!(),
        )
    };
}

#[macro_export]
macro_rules! log_debug {
    ($target:expr, $($arg:tt)+) => {
        $crate::LogTarget::log_at(
            &$target,
            $crate::Level::Debug,
            format_args!($($arg)+),
            $crate::__macro_site!(),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __macro_site {
    () => {{
        fn marker() {}
        $crate::MacroSite::new(::std::any::type_name_of_val(&marker), file!(), line!())
    }};
}
