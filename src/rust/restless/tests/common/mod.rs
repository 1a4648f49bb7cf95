// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use std::cell::RefCell;

use restless::{
    AnalysisOptions, BackendSnapshot, ConfigurableExperiment, DataProcessor, MeasurementTarget,
    Node, ProcessorSlot, Qubit, RunOptions, seconds,
};

/// Experiment recording the options and processor applied to it.
pub struct FakeExperiment {
    pub qubits: Vec<Qubit>,
    pub backend: BackendSnapshot,
    pub defaults: RunOptions,
    pub run_options: RunOptions,
    pub analysis: AnalysisOptions<Node>,
}

impl FakeExperiment {
    pub fn new(qubits: &[u32], backend: BackendSnapshot) -> Self {
        FakeExperiment {
            qubits: qubits.iter().copied().map(Qubit).collect(),
            backend,
            defaults: RunOptions::default(),
            run_options: RunOptions::default(),
            analysis: AnalysisOptions::default(),
        }
    }

    pub fn processor(&self) -> Option<&DataProcessor<Node>> {
        match &self.analysis.data_processor {
            ProcessorSlot::Set(processor) => Some(processor),
            _ => None,
        }
    }
}

impl MeasurementTarget for FakeExperiment {
    fn physical_qubits(&self) -> &[Qubit] {
        &self.qubits
    }
}

impl ConfigurableExperiment for FakeExperiment {
    type Backend = BackendSnapshot;
    type Node = Node;

    fn backend(&self) -> &BackendSnapshot {
        &self.backend
    }

    fn default_run_options(&self) -> RunOptions {
        self.defaults.clone()
    }

    fn analysis_options(&self) -> &AnalysisOptions<Node> {
        &self.analysis
    }

    fn set_run_options(&mut self, options: RunOptions) {
        self.run_options.merge(options);
    }

    fn set_data_processor(&mut self, processor: DataProcessor<Node>) {
        self.analysis.data_processor = ProcessorSlot::Set(processor);
    }
}

/// Backend with T1 times of 80 and 95 on qubits 0 and 1.
pub fn two_qubit_backend() -> BackendSnapshot {
    BackendSnapshot::new("fake_two_qubit")
        .with_rep_delay_range(seconds(20.0), seconds(500.0))
        .with_t1(Qubit(0), seconds(80.0))
        .with_t1(Qubit(1), seconds(95.0))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    pub level: log::Level,
    pub target: String,
    pub message: String,
}

struct CaptureLogger;

thread_local! {
    static RECORDS: RefCell<Vec<CapturedRecord>> = const { RefCell::new(Vec::new()) };
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        RECORDS.with(|records| {
            records.borrow_mut().push(CapturedRecord {
                level: record.level(),
                target: record.target().to_string(),
                message: record.args().to_string(),
            })
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Run `f` and return the log records it emitted on the current thread.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedRecord>) {
    // Only the first call installs the logger, later calls fail harmlessly.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
    RECORDS.with(|records| records.borrow_mut().clear());
    let result = f();
    let records = RECORDS.with(|records| records.take());
    (result, records)
}
