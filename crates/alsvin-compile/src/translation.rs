//! Rewriting circuits into the chip-native gate set.
//!
//! The chip exposes exactly three calibrated operations: `cz`, `rz`, and
//! `rx_pi` (X rotations at integer multiples of π/2). Every other gate in
//! the set reduces to these through a fixed, deterministic sequence.
//! Each sequence is an algebraic identity, equal to the source gate's
//! matrix up to a global phase.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::debug;

use alsvin_ir::{Circuit, Instruction, InstructionKind, QubitId, StandardGate};

use crate::error::{CompileError, CompileResult};

/// Replacement sequences may momentarily contain non-native gates (the
/// two-pulse gate expands through `rx`); the worklist re-examines them.
/// Two rounds suffice for this gate set; anything deeper is a bug.
const MAX_REWRITE_DEPTH: u32 = 8;

/// Decompose a gate one level towards the native basis.
///
/// Native gates pass through unchanged. The returned instruction sequence
/// acts on the given operand qubits in application order.
pub fn decompose(gate: &StandardGate, qubits: &[QubitId]) -> Vec<Instruction> {
    let q0 = qubits[0];

    match gate {
        // Native set: cz, rz, rx_pi.
        StandardGate::Rz(_) | StandardGate::RxPi(_) | StandardGate::CZ => {
            vec![Instruction::gate(gate.clone(), qubits.to_vec())]
        }

        // X = Rx(π), one full double pulse.
        StandardGate::X => vec![Instruction::single_qubit_gate(StandardGate::RxPi(2), q0)],

        // Z = Rz(π).
        StandardGate::Z => vec![Instruction::single_qubit_gate(StandardGate::Rz(PI), q0)],

        StandardGate::H => native_h(q0),

        // Rx(θ) = Rz(-π/2) · RxPi(1) · Rz(π-θ) · RxPi(1) · Rz(-π/2)
        //
        // The middle angle is π-θ, not θ: conjugating Rz(α) with two
        // quarter X pulses and the outer Rz(-π/2) pair yields Rx(π-α).
        StandardGate::Rx(theta) => vec![
            Instruction::single_qubit_gate(StandardGate::Rz(-FRAC_PI_2), q0),
            Instruction::single_qubit_gate(StandardGate::RxPi(1), q0),
            Instruction::single_qubit_gate(StandardGate::Rz(PI - theta), q0),
            Instruction::single_qubit_gate(StandardGate::RxPi(1), q0),
            Instruction::single_qubit_gate(StandardGate::Rz(-FRAC_PI_2), q0),
        ],

        // The two-pulse gate applies its pulses in ZXZ order; the X
        // rotation reduces further on the next rewrite round.
        StandardGate::TwoPulse(theta, phi, lambda) => vec![
            Instruction::single_qubit_gate(StandardGate::Rz(*theta), q0),
            Instruction::single_qubit_gate(StandardGate::Rx(*phi), q0),
            Instruction::single_qubit_gate(StandardGate::Rz(*lambda), q0),
        ],

        // CX = H(target) · CZ · H(target)
        StandardGate::CX => {
            let q1 = qubits[1];
            let mut result = native_h(q1);
            result.push(Instruction::two_qubit_gate(StandardGate::CZ, q0, q1));
            result.extend(native_h(q1));
            result
        }

        // SWAP = CX(a,b) · CX(b,a) · CX(a,b), each CX via CZ and native H.
        // 21 native operations total; no direct SWAP or CNOT primitive is
        // assumed on hardware.
        StandardGate::Swap => {
            let q1 = qubits[1];
            let mut result = Vec::with_capacity(21);
            result.extend(native_cx(q0, q1));
            result.extend(native_cx(q1, q0));
            result.extend(native_cx(q0, q1));
            result
        }
    }
}

/// H expressed in native pulses: RxPi(1) · Rz(π/2) · RxPi(1), up to a
/// global phase.
fn native_h(q: QubitId) -> Vec<Instruction> {
    vec![
        Instruction::single_qubit_gate(StandardGate::RxPi(1), q),
        Instruction::single_qubit_gate(StandardGate::Rz(FRAC_PI_2), q),
        Instruction::single_qubit_gate(StandardGate::RxPi(1), q),
    ]
}

/// CX from the native set: H on the target, CZ, H on the target.
fn native_cx(control: QubitId, target: QubitId) -> Vec<Instruction> {
    let mut result = native_h(target);
    result.push(Instruction::two_qubit_gate(
        StandardGate::CZ,
        control,
        target,
    ));
    result.extend(native_h(target));
    result
}

/// Rewrite a circuit so that every gate belongs to the native set.
///
/// Measurements, resets, and barriers pass through unchanged. The output
/// circuit has the same registers and the same observable semantics.
pub fn translate_circuit(circuit: &Circuit) -> CompileResult<Circuit> {
    let mut native = Circuit::with_size(
        circuit.name(),
        u32::try_from(circuit.num_qubits()).unwrap_or(u32::MAX),
        u32::try_from(circuit.num_clbits()).unwrap_or(u32::MAX),
    );

    for inst in circuit.instructions() {
        let InstructionKind::Gate(gate) = &inst.kind else {
            native.apply(inst.clone())?;
            continue;
        };

        if gate.is_native() {
            native.apply(inst.clone())?;
            continue;
        }

        // Worklist rewrite: expand until only native gates remain.
        let mut pending = vec![(inst.clone(), 0u32)];
        while let Some((current, depth)) = pending.pop() {
            let Some(g) = current.as_gate() else {
                native.apply(current)?;
                continue;
            };
            if g.is_native() {
                native.apply(current)?;
                continue;
            }
            if depth >= MAX_REWRITE_DEPTH {
                return Err(CompileError::NotReducible(g.name().to_string()));
            }
            let replacement = decompose(g, &current.qubits);
            // Reversed so the first replacement instruction is popped next.
            for r in replacement.into_iter().rev() {
                pending.push((r, depth + 1));
            }
        }
    }

    debug!(
        from = circuit.num_ops(),
        to = native.num_ops(),
        "translated circuit to native basis"
    );
    Ok(native)
}
