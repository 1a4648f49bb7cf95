// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use restless_units::{Duration, Seconds};

use crate::types::Qubit;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    pub fn new<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Anyhow(anyhow::anyhow!(msg.to_string()))
    }

    /// The configuration cause, if this is a configuration error.
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            Error::Configuration(e) => Some(e),
            Error::Anyhow(_) => None,
        }
    }
}

/// Reasons why restless mode cannot be enabled on an experiment.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error(
        "The restless experiment can not be enabled because the backend does not report a repetition delay range."
    )]
    MissingRepetitionDelayRange,
    #[error(
        "The restless experiment can not be enabled since T1 values are not accessible for physical qubits {}.",
        qubit_list(.qubits)
    )]
    MissingDecoherenceData { qubits: Vec<Qubit> },
    #[error("The repetition delay must be a positive, finite value, got {delay}.")]
    InvalidRepetitionDelay { delay: Duration<Seconds> },
    #[error(
        "The specified repetition delay {delay} is equal to or greater than the T1 time of one of the physical qubits {} in the experiment. \
        Consider choosing a smaller repetition delay for the restless experiment.",
        qubit_list(.qubits)
    )]
    RepetitionDelayTooLong {
        delay: Duration<Seconds>,
        qubits: Vec<Qubit>,
    },
    #[error(
        "Cannot enable restless. A data processor has already been set and overriding it is not permitted."
    )]
    ProcessorAlreadySet,
    #[error(
        "The restless data processor can not be set since the experiment analysis does not have a data processor option."
    )]
    ProcessorOptionUnsupported,
}

pub(crate) fn qubit_list(qubits: &[Qubit]) -> String {
    let items = qubits
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{items}]")
}

/// Create a formatted error message.
pub fn create_error_message<T: Into<Error>>(error: T) -> String {
    let e = match error.into() {
        Error::Configuration(e) => return e.to_string(),
        Error::Anyhow(e) => e,
    };
    let causes = e
        .chain()
        .skip(1)
        .map(|cause| format!("{cause}"))
        .collect::<Vec<_>>();
    if causes.is_empty() {
        return format!("{e}");
    }
    // `chain()` yields the highest-level cause first
    let msg = format!("Caused by:\n  {:}", causes.join("\n  "));
    format!("{e}\n{msg}")
}
