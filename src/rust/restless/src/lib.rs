// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Restless measurements.
//!
//! In restless mode the qubits are not reset between repetitions: the outcome
//! of one measurement is the initial state of the next. This crate decides
//! whether an experiment may run restless and configures it to do so:
//!
//! - [`validate_delay`] resolves the repetition delay and checks it against
//!   the T1 time of every measured qubit.
//! - [`select_processor`] builds the data processor matching the
//!   measurement level of the experiment.
//! - [`enable`] ties both together and applies the result to the experiment.
//!
//! The backend, the experiment and the processing nodes are provided by the
//! caller through the [`BackendProperties`], [`ConfigurableExperiment`] and
//! [`NodeLibrary`] traits.

pub mod backend;
pub mod enable;
pub mod error;
pub mod experiment;
pub mod options;
pub mod processor;
pub mod select_processor;
pub mod types;
pub mod validate_delay;

pub use crate::backend::{BackendProperties, BackendSnapshot};
pub use crate::enable::{RestlessEnabled, RestlessExt, enable_restless};
pub use crate::error::{ConfigurationError, Error, Result};
pub use crate::experiment::{ConfigurableExperiment, MeasurementTarget};
pub use crate::options::{
    AnalysisOptions, ProcessorSlot, RestlessRunOptions, RestlessSettings, RunOptions,
};
pub use crate::processor::{DataProcessor, Node, NodeLibrary, StandardNodes};
pub use crate::select_processor::{OutcomeSpec, build_processor};
pub use crate::types::{MeasLevel, MeasReturn, OutcomePattern, Qubit, ReductionMethod};
pub use crate::validate_delay::{T1Check, ValidatedDelay, resolve_and_validate};
pub use restless_units::{Duration, Seconds, seconds};
