// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;

use crate::error::Result;
use crate::options::AnalysisOptions;
use crate::processor::{DataProcessor, MEMORY_KEY, NodeLibrary};
use crate::types::{MeasLevel, MeasReturn, OutcomePattern, ReductionMethod};

/// What the restless data processor is asked to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeSpec {
    pub num_qubits: usize,
    pub outcome: OutcomePattern,
    pub meas_return: MeasReturn,
    pub normalize: bool,
    /// Only used for kerneled data.
    pub dimensionality_reduction: String,
}

impl OutcomeSpec {
    pub fn new(num_qubits: usize) -> Self {
        OutcomeSpec {
            num_qubits,
            outcome: OutcomePattern::all_ones(num_qubits),
            meas_return: MeasReturn::default(),
            normalize: false,
            dimensionality_reduction: ReductionMethod::default().name().to_string(),
        }
    }

    pub fn from_analysis_options<N>(
        options: &AnalysisOptions<N>,
        meas_return: MeasReturn,
        num_qubits: usize,
    ) -> Self {
        let defaults = OutcomeSpec::new(num_qubits);
        OutcomeSpec {
            num_qubits,
            outcome: options.outcome.clone().unwrap_or(defaults.outcome),
            meas_return,
            normalize: options.normalization.unwrap_or(defaults.normalize),
            dimensionality_reduction: options
                .dimensionality_reduction
                .clone()
                .unwrap_or(defaults.dimensionality_reduction),
        }
    }
}

/// Build the data processor for restless data.
///
/// Classified data is turned into counts shot by shot against the previous
/// outcome, followed by the probability of the target outcome. For kerneled
/// data the restless IQ conversion comes first and the library appends the
/// usual kerneled processing after it.
pub fn build_processor<L: NodeLibrary>(
    library: &L,
    meas_level: MeasLevel,
    spec: &OutcomeSpec,
) -> Result<DataProcessor<L::Node>> {
    let processor = match meas_level {
        MeasLevel::Kerneled => library
            .kerneled_processor(
                &spec.dimensionality_reduction,
                spec.meas_return,
                spec.normalize,
                vec![library.restless_to_iq()],
            )
            .context("Failed to build the restless kerneled data processor")?,
        MeasLevel::Classified => DataProcessor::new(
            MEMORY_KEY,
            vec![
                library.restless_to_counts(spec.num_qubits),
                library.probability(&spec.outcome),
            ],
        ),
    };
    restless_log::diagnostic!(
        "Built restless data processor for {:?} data with {} nodes",
        meas_level,
        processor.len()
    );
    Ok(processor)
}
