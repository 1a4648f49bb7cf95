// Copyright 2025 Zurich Instruments AG
// SPDX-License-Identifier: Apache-2.0

use proptest::prelude::*;

use restless::validate_delay::{check_t1, resolve_rep_delay};
use restless::{BackendSnapshot, ConfigurationError, Qubit, resolve_and_validate, seconds};

fn backend_with_t1(t1: &[f64]) -> BackendSnapshot {
    t1.iter()
        .enumerate()
        .fold(BackendSnapshot::new("prop"), |backend, (i, t1)| {
            backend.with_t1(Qubit(i as u32), seconds(*t1))
        })
}

fn qubits(n: usize) -> Vec<Qubit> {
    (0..n as u32).map(Qubit).collect()
}

proptest! {
    #[test]
    fn check_passes_iff_every_ratio_is_below_one(
        delay in 1e-3f64..1e3,
        t1 in prop::collection::vec(1e-3f64..1e3, 1..6),
    ) {
        let backend = backend_with_t1(&t1);
        let expected = t1.iter().all(|t1| delay / t1 < 1.0);
        prop_assert_eq!(check_t1(&backend, &qubits(t1.len()), seconds(delay)).unwrap(), expected);
    }

    #[test]
    fn delay_equal_to_any_t1_fails(
        t1 in prop::collection::vec(1e-3f64..1e3, 1..6),
        index in any::<prop::sample::Index>(),
    ) {
        let backend = backend_with_t1(&t1);
        let delay = t1[index.index(t1.len())];
        prop_assert!(!check_t1(&backend, &qubits(t1.len()), seconds(delay)).unwrap());
    }

    #[test]
    fn backend_minimum_is_used_exactly(min in 1e-9f64..1e-3) {
        let backend = BackendSnapshot::new("prop").with_rep_delay_range(seconds(min), seconds(1.0));
        prop_assert_eq!(resolve_rep_delay(&backend, None).unwrap(), seconds(min));
    }

    #[test]
    fn missing_t1_always_fails(
        delay in 1e-3f64..1e3,
        t1 in prop::collection::vec(1e-3f64..1e3, 1..6),
        suppress in any::<bool>(),
    ) {
        let backend = backend_with_t1(&t1);
        let mut addressed = qubits(t1.len());
        addressed.push(Qubit(t1.len() as u32));
        let err = resolve_and_validate(&backend, &addressed, Some(seconds(delay)), suppress)
            .unwrap_err();
        let expected = ConfigurationError::MissingDecoherenceData {
            qubits: vec![Qubit(t1.len() as u32)],
        };
        prop_assert_eq!(err.as_configuration(), Some(&expected));
    }
}
