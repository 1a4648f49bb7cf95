// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Logging macros for the restless crates.
//!
//! All messages are routed through the `log` facade with a target of the form
//! `restless.rust::<module path>`, so that a host application can filter them
//! as a single family.

use std::sync::{atomic::AtomicBool, atomic::Ordering};

#[doc(hidden)]
pub use log as _log;

#[macro_export]
macro_rules! info {
    ($msg:literal, $($arg:tt)+) => {
        restless_log::_log::info!(target: concat!("restless.rust::", module_path!()), $msg, $($arg)+);
    };
    ($msg:literal) => {
        restless_log::_log::info!(target: concat!("restless.rust::", module_path!()), $msg);
    };
}

#[macro_export]
macro_rules! warn {
    ($msg:literal, $($arg:tt)+) => {
        restless_log::_log::warn!(target: concat!("restless.rust::", module_path!()), $msg, $($arg)+);
    };
    ($msg:literal) => {
        restless_log::_log::warn!(target: concat!("restless.rust::", module_path!()), $msg);
    };
}

/// Log a diagnostic message at debug level if diagnostics logging is enabled.
#[macro_export]
macro_rules! diagnostic {
    ($msg:literal, $($arg:tt)+) => {
        if restless_log::is_diagnostics_enabled() {
            restless_log::_log::debug!(target: concat!("restless.rust::", module_path!()), $msg, $($arg)+);
        }
    };
    ($msg:literal) => {
        if restless_log::is_diagnostics_enabled() {
            restless_log::_log::debug!(target: concat!("restless.rust::", module_path!()), $msg);
        }
    };
}

static DIAGNOSTICS_ENABLED: AtomicBool = AtomicBool::new(false);

#[inline]
pub fn is_diagnostics_enabled() -> bool {
    DIAGNOSTICS_ENABLED.load(Ordering::Acquire)
}

/// Initialize the logging.
///
/// Only the diagnostics flag is owned by this crate. Installing a concrete
/// logger (`env_logger`, a bridge to a host language, ...) is left to the
/// application embedding the restless crates.
pub fn init_logging(with_diagnostics: bool) {
    DIAGNOSTICS_ENABLED.store(with_diagnostics, Ordering::Release);
}
