//! Portfolio chat relay: answers visitor questions about a personal profile
//! through a generative-language provider.

pub mod core;
pub mod types;
pub mod utils;
pub mod web;

pub use web::{build_rocket, start_web_server};

/// Forward to the matching `tracing` macro: `app_log!(info, "...", args)`
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
