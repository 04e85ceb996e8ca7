//! Functional check of the SWAP decomposition.
//!
//! The 21-operation native sequence must exchange the computational basis
//! states |01⟩ and |10⟩ exactly, phase aside, when run on the statevector
//! engine.

use alsvin_compile::decompose;
use alsvin_ir::{QubitId, StandardGate};
use alsvin_sim::Statevector;

fn run_swap_sequence(initial_qubit: usize) -> Vec<f64> {
    let mut sv = Statevector::new(2);
    sv.apply_gate(&StandardGate::X, &[initial_qubit]);

    for inst in decompose(&StandardGate::Swap, &[QubitId(0), QubitId(1)]) {
        sv.apply(&inst);
    }

    sv.amplitudes().iter().map(|a| a.norm_sqr()).collect()
}

#[test]
fn swap_decomposition_maps_01_to_10() {
    // |01⟩ (qubit 0 set, index 1) must end up as |10⟩ (index 2).
    let probs = run_swap_sequence(0);
    assert!((probs[2] - 1.0).abs() < 1e-10, "probs = {probs:?}");
    assert!(probs[1] < 1e-10);
}

#[test]
fn swap_decomposition_maps_10_to_01() {
    let probs = run_swap_sequence(1);
    assert!((probs[1] - 1.0).abs() < 1e-10, "probs = {probs:?}");
    assert!(probs[2] < 1e-10);
}

#[test]
fn swap_decomposition_fixes_00() {
    let mut sv = Statevector::new(2);
    for inst in decompose(&StandardGate::Swap, &[QubitId(0), QubitId(1)]) {
        sv.apply(&inst);
    }
    let probs: Vec<f64> = sv.amplitudes().iter().map(|a| a.norm_sqr()).collect();
    assert!((probs[0] - 1.0).abs() < 1e-10, "probs = {probs:?}");
}
