// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

//! Run and analysis options touched by restless mode.
//!
//! Every option is an explicit `Option<_>` field: `None` means the option was
//! never set, which is distinct from it being set to its default value.

use anyhow::Context;
use restless_units::{Duration, Seconds};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::processor::DataProcessor;
use crate::types::{MeasLevel, MeasReturn, OutcomePattern};

/// Options forwarded to the backend when the experiment is run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Delay between the end of one repetition and the start of the next.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_delay: Option<Duration<Seconds>>,
    /// Reset the qubits to the ground state before each repetition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_qubits: Option<bool>,
    /// Return per-shot measurement memory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meas_level: Option<MeasLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meas_return: Option<MeasReturn>,
    /// Use excited state promotion readout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_measure_esp: Option<bool>,
}

impl RunOptions {
    /// Overlay the options set in `other` on top of `self`.
    pub fn merge(&mut self, other: RunOptions) {
        let RunOptions {
            rep_delay,
            init_qubits,
            memory,
            meas_level,
            meas_return,
            use_measure_esp,
        } = other;
        self.rep_delay = rep_delay.or(self.rep_delay);
        self.init_qubits = init_qubits.or(self.init_qubits);
        self.memory = memory.or(self.memory);
        self.meas_level = meas_level.or(self.meas_level);
        self.meas_return = meas_return.or(self.meas_return);
        self.use_measure_esp = use_measure_esp.or(self.use_measure_esp);
    }
}

/// The complete set of run options applied when restless mode is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestlessRunOptions {
    pub rep_delay: Duration<Seconds>,
    pub meas_level: MeasLevel,
    pub meas_return: MeasReturn,
}

impl From<RestlessRunOptions> for RunOptions {
    fn from(value: RestlessRunOptions) -> Self {
        RunOptions {
            rep_delay: Some(value.rep_delay),
            init_qubits: Some(false),
            memory: Some(true),
            meas_level: Some(value.meas_level),
            meas_return: Some(value.meas_return),
            // Excited state promotion assumes the qubits start in the ground state.
            use_measure_esp: Some(false),
        }
    }
}

/// The data processor option of an analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessorSlot<N> {
    /// The analysis has no data processor option at all.
    Unsupported,
    /// The analysis accepts a data processor, none is set yet.
    Empty,
    Set(DataProcessor<N>),
}

impl<N> ProcessorSlot<N> {
    pub fn is_set(&self) -> bool {
        matches!(self, ProcessorSlot::Set(_))
    }
}

/// Analysis options read when building the restless data processor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions<N> {
    pub data_processor: ProcessorSlot<N>,
    /// Outcome whose probability is analyzed, defaults to all ones.
    pub outcome: Option<OutcomePattern>,
    /// Normalize kerneled data to [0, 1], defaults to `false`.
    pub normalization: Option<bool>,
    /// Name of the IQ projection for kerneled data, defaults to `"SVD"`.
    pub dimensionality_reduction: Option<String>,
}

impl<N> Default for AnalysisOptions<N> {
    fn default() -> Self {
        AnalysisOptions {
            data_processor: ProcessorSlot::Empty,
            outcome: None,
            normalization: None,
            dimensionality_reduction: None,
        }
    }
}

/// Arguments of the restless enablement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RestlessSettings {
    /// Requested repetition delay. The backend minimum is used when absent.
    pub rep_delay: Option<Duration<Seconds>>,
    /// Replace a data processor that is already set on the analysis.
    pub override_processor: bool,
    /// Only warn when the repetition delay is not short compared to T1.
    pub suppress_t1_error: bool,
}

impl Default for RestlessSettings {
    fn default() -> Self {
        RestlessSettings {
            rep_delay: None,
            override_processor: true,
            suppress_t1_error: false,
        }
    }
}

impl RestlessSettings {
    pub fn with_rep_delay(mut self, rep_delay: Duration<Seconds>) -> Self {
        self.rep_delay = Some(rep_delay);
        self
    }

    pub fn with_override_processor(mut self, override_processor: bool) -> Self {
        self.override_processor = override_processor;
        self
    }

    pub fn with_suppress_t1_error(mut self, suppress_t1_error: bool) -> Self {
        self.suppress_t1_error = suppress_t1_error;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings = serde_json::from_str(json).context("Invalid restless settings")?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restless_units::seconds;

    #[test]
    fn test_merge_keeps_unset_options() {
        let mut options = RunOptions {
            meas_level: Some(MeasLevel::Kerneled),
            use_measure_esp: Some(true),
            ..Default::default()
        };
        options.merge(RunOptions {
            use_measure_esp: Some(false),
            memory: Some(true),
            ..Default::default()
        });
        assert_eq!(options.meas_level, Some(MeasLevel::Kerneled));
        assert_eq!(options.use_measure_esp, Some(false));
        assert_eq!(options.memory, Some(true));
        assert_eq!(options.rep_delay, None);
    }

    #[test]
    fn test_restless_run_options() {
        let options: RunOptions = RestlessRunOptions {
            rep_delay: seconds(50e-6),
            meas_level: MeasLevel::Classified,
            meas_return: MeasReturn::Single,
        }
        .into();
        assert_eq!(options.rep_delay, Some(seconds(50e-6)));
        assert_eq!(options.init_qubits, Some(false));
        assert_eq!(options.memory, Some(true));
        assert_eq!(options.use_measure_esp, Some(false));
    }

    #[test]
    fn test_run_options_serde_skips_unset() {
        let options = RunOptions {
            meas_level: Some(MeasLevel::Kerneled),
            meas_return: Some(MeasReturn::Avg),
            ..Default::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"meas_level":1,"meas_return":"avg"}"#);
        let parsed: RunOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = RestlessSettings::from_json("{}").unwrap();
        assert_eq!(settings, RestlessSettings::default());
        assert!(settings.override_processor);
        assert!(!settings.suppress_t1_error);
        assert_eq!(settings.rep_delay, None);
    }

    #[test]
    fn test_settings_from_json() {
        let settings =
            RestlessSettings::from_json(r#"{"rep_delay": 90.0, "suppress_t1_error": true}"#)
                .unwrap();
        assert_eq!(settings.rep_delay, Some(seconds(90.0)));
        assert!(settings.suppress_t1_error);
    }

    #[test]
    fn test_settings_rejects_unknown_fields() {
        let err = RestlessSettings::from_json(r#"{"repdelay": 1.0}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid restless settings"));
    }

    #[test]
    fn test_processor_slot() {
        assert!(!ProcessorSlot::<()>::Empty.is_set());
        assert!(ProcessorSlot::Set(DataProcessor::<()>::new("memory", vec![])).is_set());
    }
}
