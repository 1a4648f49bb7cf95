// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Validation of the repetition delay against the qubits' T1 times.
//!
//! Restless measurements only work if the state left behind by a measurement
//! has not relaxed by the time the next repetition starts. The repetition
//! delay must therefore be strictly shorter than the T1 time of every qubit.

use restless_units::{Duration, Seconds};

use crate::backend::BackendProperties;
use crate::error::{ConfigurationError, Result, qubit_list};
use crate::types::Qubit;

/// Outcome of comparing the repetition delay against T1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum T1Check {
    /// The delay is shorter than the T1 time of every qubit.
    Passed,
    /// The delay is not short enough, but the error was suppressed.
    Suppressed {
        /// Largest ratio of repetition delay to T1.
        worst_ratio: f64,
    },
}

impl T1Check {
    pub fn passed(&self) -> bool {
        matches!(self, T1Check::Passed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedDelay {
    pub rep_delay: Duration<Seconds>,
    pub t1_check: T1Check,
}

/// Resolve the repetition delay to use.
///
/// Without a requested delay the minimum delay supported by the backend is used.
pub fn resolve_rep_delay(
    backend: &impl BackendProperties,
    requested: Option<Duration<Seconds>>,
) -> Result<Duration<Seconds>> {
    let rep_delay = match requested {
        Some(rep_delay) => rep_delay,
        None => backend
            .min_rep_delay()
            .ok_or(ConfigurationError::MissingRepetitionDelayRange)?,
    };
    if !rep_delay.is_positive_finite() {
        return Err(ConfigurationError::InvalidRepetitionDelay { delay: rep_delay }.into());
    }
    Ok(rep_delay)
}

/// Ratio of the repetition delay to the T1 time of each qubit.
///
/// A T1 time that is not positive and finite counts as missing.
pub fn t1_ratios(
    backend: &impl BackendProperties,
    qubits: &[Qubit],
    rep_delay: Duration<Seconds>,
) -> Result<Vec<(Qubit, f64)>> {
    let mut missing = vec![];
    let mut ratios = Vec::with_capacity(qubits.len());
    for &qubit in qubits {
        match backend.qubit_t1(qubit) {
            Some(t1) if t1.is_positive_finite() => ratios.push((qubit, rep_delay.ratio(t1))),
            _ => missing.push(qubit),
        }
    }
    if !missing.is_empty() {
        return Err(ConfigurationError::MissingDecoherenceData { qubits: missing }.into());
    }
    Ok(ratios)
}

/// Check that the repetition delay is shorter than the T1 time of all qubits.
pub fn check_t1(
    backend: &impl BackendProperties,
    qubits: &[Qubit],
    rep_delay: Duration<Seconds>,
) -> Result<bool> {
    let ratios = t1_ratios(backend, qubits, rep_delay)?;
    Ok(ratios.iter().all(|(_, ratio)| *ratio < 1.0))
}

/// Resolve the repetition delay and validate it against T1.
///
/// When the delay is too long and `suppress_t1_error` is set, a warning is
/// logged and the delay is returned anyway, flagged as [`T1Check::Suppressed`].
pub fn resolve_and_validate(
    backend: &impl BackendProperties,
    qubits: &[Qubit],
    requested: Option<Duration<Seconds>>,
    suppress_t1_error: bool,
) -> Result<ValidatedDelay> {
    let rep_delay = resolve_rep_delay(backend, requested)?;
    let ratios = t1_ratios(backend, qubits, rep_delay)?;
    for (qubit, ratio) in &ratios {
        restless_log::diagnostic!("Qubit {qubit}: rep_delay / T1 = {ratio:.3}");
    }
    if ratios.iter().all(|(_, ratio)| *ratio < 1.0) {
        return Ok(ValidatedDelay {
            rep_delay,
            t1_check: T1Check::Passed,
        });
    }
    if !suppress_t1_error {
        return Err(ConfigurationError::RepetitionDelayTooLong {
            delay: rep_delay,
            qubits: qubits.to_vec(),
        }
        .into());
    }
    let worst_ratio = ratios
        .iter()
        .map(|(_, ratio)| *ratio)
        .fold(f64::NEG_INFINITY, f64::max);
    restless_log::warn!(
        "The repetition delay {} is equal to or greater than the T1 time of one of the physical qubits {}. \
        Restless mode is enabled anyway since the T1 error is suppressed.",
        rep_delay,
        qubit_list(qubits)
    );
    Ok(ValidatedDelay {
        rep_delay,
        t1_check: T1Check::Suppressed { worst_ratio },
    })
}
