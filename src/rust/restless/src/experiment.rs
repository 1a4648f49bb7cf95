// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use crate::backend::BackendProperties;
use crate::options::{AnalysisOptions, RunOptions};
use crate::processor::DataProcessor;
use crate::types::Qubit;

/// The physical qubits an experiment is run on.
pub trait MeasurementTarget {
    fn physical_qubits(&self) -> &[Qubit];

    fn num_qubits(&self) -> usize {
        self.physical_qubits().len()
    }
}

/// An experiment whose run options and analysis can be reconfigured.
///
/// Implementations are not expected to guard against concurrent calls: the
/// caller owns the experiment exclusively while it is being reconfigured.
pub trait ConfigurableExperiment: MeasurementTarget {
    type Backend: BackendProperties;
    /// Node type of the analysis' data processor.
    type Node;

    fn backend(&self) -> &Self::Backend;

    /// Run options the experiment uses unless overridden.
    fn default_run_options(&self) -> RunOptions;

    fn analysis_options(&self) -> &AnalysisOptions<Self::Node>;

    /// Apply all given run options, leaving options that are `None` untouched.
    fn set_run_options(&mut self, options: RunOptions);

    fn set_data_processor(&mut self, processor: DataProcessor<Self::Node>);
}
