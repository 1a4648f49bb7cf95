// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A physical qubit addressed by an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Qubit(pub u32);

impl Display for Qubit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Level of the data returned by the backend.
///
/// Serialized with the numeric codes used by the backends (1: kerneled, 2: classified).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MeasLevel {
    /// Integrated IQ values, one complex number per shot and qubit.
    Kerneled,
    /// Discriminated 0/1 outcomes.
    #[default]
    Classified,
}

impl MeasLevel {
    pub fn code(&self) -> u8 {
        match self {
            MeasLevel::Kerneled => 1,
            MeasLevel::Classified => 2,
        }
    }
}

impl TryFrom<u8> for MeasLevel {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(MeasLevel::Kerneled),
            2 => Ok(MeasLevel::Classified),
            _ => Err(Error::new(format!(
                "Unsupported measurement level {value}. Restless mode supports 1 (kerneled) and 2 (classified)."
            ))),
        }
    }
}

impl From<MeasLevel> for u8 {
    fn from(value: MeasLevel) -> Self {
        value.code()
    }
}

/// Whether the backend returns every shot or the average over shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasReturn {
    #[default]
    Single,
    Avg,
}

/// Target bit-string whose probability is extracted from classified data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OutcomePattern(String);

impl OutcomePattern {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(Error::new("Invalid outcome: the outcome must not be empty."));
        }
        if let Some(c) = pattern.chars().find(|c| *c != '0' && *c != '1') {
            return Err(Error::new(format!(
                "Invalid outcome '{pattern}': unexpected character '{c}', only '0' and '1' are allowed."
            )));
        }
        Ok(OutcomePattern(pattern))
    }

    /// The all-ones outcome on `num_qubits` qubits, e.g. `"11"` for two qubits.
    pub fn all_ones(num_qubits: usize) -> Self {
        OutcomePattern("1".repeat(num_qubits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn num_bits(&self) -> usize {
        self.0.len()
    }
}

impl Display for OutcomePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OutcomePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        OutcomePattern::new(s)
    }
}

impl TryFrom<String> for OutcomePattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        OutcomePattern::new(value)
    }
}

impl From<OutcomePattern> for String {
    fn from(value: OutcomePattern) -> Self {
        value.0
    }
}

/// Projection of IQ points onto a single real axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReductionMethod {
    #[default]
    Svd,
    ToReal,
    ToImag,
    ToAbs,
}

impl ReductionMethod {
    pub fn name(&self) -> &'static str {
        match self {
            ReductionMethod::Svd => "SVD",
            ReductionMethod::ToReal => "ToReal",
            ReductionMethod::ToImag => "ToImag",
            ReductionMethod::ToAbs => "ToAbs",
        }
    }
}

impl Serialize for ReductionMethod {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Display for ReductionMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReductionMethod {
    type Err = Error;

    /// Names are matched case-insensitively, `_` separators are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('_', "").to_ascii_lowercase();
        match normalized.as_str() {
            "svd" => Ok(ReductionMethod::Svd),
            "toreal" => Ok(ReductionMethod::ToReal),
            "toimag" => Ok(ReductionMethod::ToImag),
            "toabs" => Ok(ReductionMethod::ToAbs),
            _ => Err(Error::new(format!("Invalid dimensionality reduction: {s}."))),
        }
    }
}
