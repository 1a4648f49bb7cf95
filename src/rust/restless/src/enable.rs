// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Enabling restless mode on an experiment.
//!
//! Every check runs before the experiment is touched: either both the run
//! options and the data processor are replaced, or neither is.

use crate::error::{ConfigurationError, Result};
use crate::experiment::ConfigurableExperiment;
use crate::options::{ProcessorSlot, RestlessRunOptions, RestlessSettings};
use crate::processor::NodeLibrary;
use crate::select_processor::{OutcomeSpec, build_processor};
use crate::validate_delay::{T1Check, resolve_and_validate};

/// What was applied to the experiment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestlessEnabled {
    pub run_options: RestlessRunOptions,
    pub t1_check: T1Check,
    /// Whether a previously set data processor was replaced.
    pub replaced_processor: bool,
}

impl RestlessEnabled {
    /// Restless mode was enabled although the repetition delay is not short compared to T1.
    pub fn is_degraded(&self) -> bool {
        !self.t1_check.passed()
    }
}

/// Configure `experiment` to run in restless mode.
///
/// Resolves and validates the repetition delay, then sets the restless run
/// options and the restless data processor built from `library`.
pub fn enable_restless<E, L>(
    experiment: &mut E,
    library: &L,
    settings: &RestlessSettings,
) -> Result<RestlessEnabled>
where
    E: ConfigurableExperiment,
    L: NodeLibrary<Node = E::Node>,
{
    let validated = resolve_and_validate(
        experiment.backend(),
        experiment.physical_qubits(),
        settings.rep_delay,
        settings.suppress_t1_error,
    )?;

    let defaults = experiment.default_run_options();
    let meas_level = defaults.meas_level.unwrap_or_default();
    let meas_return = defaults.meas_return.unwrap_or_default();

    let analysis = experiment.analysis_options();
    let replaced_processor = match &analysis.data_processor {
        ProcessorSlot::Unsupported => {
            return Err(ConfigurationError::ProcessorOptionUnsupported.into());
        }
        ProcessorSlot::Empty => false,
        ProcessorSlot::Set(_) if settings.override_processor => true,
        ProcessorSlot::Set(_) => return Err(ConfigurationError::ProcessorAlreadySet.into()),
    };
    let spec = OutcomeSpec::from_analysis_options(analysis, meas_return, experiment.num_qubits());
    let processor = build_processor(library, meas_level, &spec)?;

    let run_options = RestlessRunOptions {
        rep_delay: validated.rep_delay,
        meas_level,
        meas_return,
    };
    experiment.set_run_options(run_options.into());
    experiment.set_data_processor(processor);

    restless_log::info!(
        "Restless mode enabled with repetition delay {} and {:?} data",
        validated.rep_delay,
        meas_level
    );
    Ok(RestlessEnabled {
        run_options,
        t1_check: validated.t1_check,
        replaced_processor,
    })
}

/// Method syntax for [`enable_restless`].
pub trait RestlessExt: ConfigurableExperiment + Sized {
    fn enable_restless<L>(
        &mut self,
        library: &L,
        settings: &RestlessSettings,
    ) -> Result<RestlessEnabled>
    where
        L: NodeLibrary<Node = Self::Node>,
    {
        enable_restless(self, library, settings)
    }
}

impl<E: ConfigurableExperiment> RestlessExt for E {}
