// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Data processors and the library of nodes they are assembled from.
//!
//! A [`DataProcessor`] is an ordered list of nodes applied to one entry of the
//! raw experiment data (by default the per-shot `memory`). This crate only
//! decides which nodes are used and in which order; the nodes themselves come
//! from a [`NodeLibrary`].

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::types::{MeasReturn, OutcomePattern, ReductionMethod};

/// Data key the restless processors read from.
pub const MEMORY_KEY: &str = "memory";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataProcessor<N> {
    input_key: String,
    nodes: Vec<N>,
}

impl<N> DataProcessor<N> {
    pub fn new(input_key: impl Into<String>, nodes: Vec<N>) -> Self {
        DataProcessor {
            input_key: input_key.into(),
            nodes,
        }
    }

    pub fn input_key(&self) -> &str {
        &self.input_key
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn append(&mut self, node: N) {
        self.nodes.push(node);
    }
}

impl<N: Display> Display for DataProcessor<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input_key)?;
        for node in &self.nodes {
            write!(f, " -> {node}")?;
        }
        Ok(())
    }
}

/// Source of the processing nodes used by the restless processors.
pub trait NodeLibrary {
    type Node;

    /// Node converting restless per-shot memory into counts by comparing each
    /// shot against the previous one.
    fn restless_to_counts(&self, num_qubits: usize) -> Self::Node;

    /// Node converting restless single-shot IQ data by referencing each shot
    /// to the previous one instead of a reset ground state.
    fn restless_to_iq(&self) -> Self::Node;

    /// Node extracting the probability of `outcome` from counts.
    fn probability(&self, outcome: &OutcomePattern) -> Self::Node;

    /// Build the standard processor for kerneled data.
    ///
    /// `pre_nodes` must come first, ahead of any averaging, projection or
    /// normalization node.
    fn kerneled_processor(
        &self,
        dimensionality_reduction: &str,
        meas_return: MeasReturn,
        normalize: bool,
        pre_nodes: Vec<Self::Node>,
    ) -> anyhow::Result<DataProcessor<Self::Node>>;
}

/// Descriptor of a processing node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node")]
pub enum Node {
    RestlessToCounts { num_qubits: usize },
    RestlessToIq,
    Probability { outcome: OutcomePattern },
    AverageData { axis: usize },
    Projector { method: ReductionMethod },
    MinMaxNormalize,
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::RestlessToCounts { num_qubits } => {
                write!(f, "RestlessToCounts({num_qubits})")
            }
            Node::RestlessToIq => write!(f, "RestlessToIQ"),
            Node::Probability { outcome } => write!(f, "Probability({outcome})"),
            Node::AverageData { axis } => write!(f, "AverageData(axis={axis})"),
            Node::Projector { method } => write!(f, "{method}"),
            Node::MinMaxNormalize => write!(f, "MinMaxNormalize"),
        }
    }
}

/// The bundled node library, producing [`Node`] descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNodes;

impl NodeLibrary for StandardNodes {
    type Node = Node;

    fn restless_to_counts(&self, num_qubits: usize) -> Node {
        Node::RestlessToCounts { num_qubits }
    }

    fn restless_to_iq(&self) -> Node {
        Node::RestlessToIq
    }

    fn probability(&self, outcome: &OutcomePattern) -> Node {
        Node::Probability {
            outcome: outcome.clone(),
        }
    }

    fn kerneled_processor(
        &self,
        dimensionality_reduction: &str,
        meas_return: MeasReturn,
        normalize: bool,
        pre_nodes: Vec<Node>,
    ) -> anyhow::Result<DataProcessor<Node>> {
        let method = ReductionMethod::from_str(dimensionality_reduction)?;
        let mut processor = DataProcessor::new(MEMORY_KEY, pre_nodes);
        if meas_return == MeasReturn::Single {
            processor.append(Node::AverageData { axis: 1 });
        }
        processor.append(Node::Projector { method });
        if normalize {
            processor.append(Node::MinMaxNormalize);
        }
        Ok(processor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kerneled_single_shot() {
        let processor = StandardNodes
            .kerneled_processor("SVD", MeasReturn::Single, true, vec![Node::RestlessToIq])
            .unwrap();
        assert_eq!(processor.input_key(), MEMORY_KEY);
        assert_eq!(
            processor.nodes(),
            &[
                Node::RestlessToIq,
                Node::AverageData { axis: 1 },
                Node::Projector {
                    method: ReductionMethod::Svd
                },
                Node::MinMaxNormalize,
            ]
        );
    }

    #[test]
    fn test_kerneled_averaged_without_normalization() {
        let processor = StandardNodes
            .kerneled_processor("to_real", MeasReturn::Avg, false, vec![])
            .unwrap();
        assert_eq!(
            processor.nodes(),
            &[Node::Projector {
                method: ReductionMethod::ToReal
            }]
        );
    }

    #[test]
    fn test_kerneled_invalid_reduction() {
        let err = StandardNodes
            .kerneled_processor("PCA", MeasReturn::Avg, false, vec![])
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid dimensionality reduction: PCA.");
    }

    #[test]
    fn test_display() {
        let processor = DataProcessor::new(
            MEMORY_KEY,
            vec![
                StandardNodes.restless_to_counts(2),
                StandardNodes.probability(&OutcomePattern::all_ones(2)),
            ],
        );
        assert_eq!(
            processor.to_string(),
            "memory -> RestlessToCounts(2) -> Probability(11)"
        );
    }

    #[test]
    fn test_serialize() {
        let node = Node::Probability {
            outcome: OutcomePattern::all_ones(2),
        };
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"node":"Probability","outcome":"11"}"#
        );
    }

    #[test]
    fn test_serialize_projector() {
        let node = Node::Projector {
            method: ReductionMethod::ToAbs,
        };
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"node":"Projector","method":"ToAbs"}"#
        );
    }
}
