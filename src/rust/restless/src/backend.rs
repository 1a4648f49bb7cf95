// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use std::ops::RangeInclusive;

use anyhow::Context;
use indexmap::IndexMap;
use restless_units::{Duration, Seconds};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Qubit;

/// Read-only backend properties needed to validate restless mode.
///
/// Missing data is reported as `None` and never substituted with a default.
pub trait BackendProperties {
    /// Range of repetition delays supported by the backend.
    fn rep_delay_range(&self) -> Option<RangeInclusive<Duration<Seconds>>>;

    /// Energy relaxation time of a qubit.
    fn qubit_t1(&self, qubit: Qubit) -> Option<Duration<Seconds>>;

    fn min_rep_delay(&self) -> Option<Duration<Seconds>> {
        self.rep_delay_range().map(|range| *range.start())
    }
}

impl<T: BackendProperties + ?Sized> BackendProperties for &T {
    fn rep_delay_range(&self) -> Option<RangeInclusive<Duration<Seconds>>> {
        (**self).rep_delay_range()
    }

    fn qubit_t1(&self, qubit: Qubit) -> Option<Duration<Seconds>> {
        (**self).qubit_t1(qubit)
    }

    fn min_rep_delay(&self) -> Option<Duration<Seconds>> {
        (**self).min_rep_delay()
    }
}

/// Backend properties captured at a point in time.
///
/// ```json
/// {
///   "name": "device",
///   "rep_delay_range": [0.0, 0.0005],
///   "t1": {"0": 8e-5, "1": 9.5e-5}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSnapshot {
    pub name: String,
    /// Minimum and maximum repetition delay.
    pub rep_delay_range: Option<(Duration<Seconds>, Duration<Seconds>)>,
    /// T1 per qubit, in the order reported by the backend.
    pub t1: IndexMap<Qubit, Duration<Seconds>>,
}

impl BackendSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        BackendSnapshot {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_rep_delay_range(
        mut self,
        min: Duration<Seconds>,
        max: Duration<Seconds>,
    ) -> Self {
        self.rep_delay_range = Some((min, max));
        self
    }

    pub fn with_t1(mut self, qubit: Qubit, t1: Duration<Seconds>) -> Self {
        self.t1.insert(qubit, t1);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot = serde_json::from_str(json).context("Invalid backend snapshot")?;
        Ok(snapshot)
    }
}

impl BackendProperties for BackendSnapshot {
    fn rep_delay_range(&self) -> Option<RangeInclusive<Duration<Seconds>>> {
        self.rep_delay_range.map(|(min, max)| min..=max)
    }

    fn qubit_t1(&self, qubit: Qubit) -> Option<Duration<Seconds>> {
        self.t1.get(&qubit).copied()
    }
}
