//! Binary-local application orchestration helpers.
//!
//! `main.rs` only parses arguments and hands off to `entry::run`.

pub(crate) mod entry;
pub(crate) mod logging;
pub(crate) mod oneshot;
