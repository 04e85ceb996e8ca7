//! QAOA circuit construction.
//!
//! The ansatz alternates a cost unitary derived from the Ising model with
//! a transverse-field mixer:
//!
//! 1. Initial state: |+⟩^n (uniform superposition)
//! 2. For each layer l with parameters (γ_l, β_l):
//!    - Cost unitary: exp(-i γ_l C), one fragment per Ising term
//!    - Mixer unitary: exp(-i β_l B) where B = Σ Xⱼ
//! 3. Barrier, then measure all qubits.
//!
//! Qubit ordering in emitted fragments follows the model's ascending key
//! order, the same order the operator translation uses, so a bitstring
//! position always refers to the same spin in both places.

use alsvin_ir::{Circuit, QubitId};
use alsvin_ising::IsingModel;

use crate::error::{QaoaError, QaoaResult};

/// Number of parameters a `layers`-deep ansatz consumes.
pub fn num_parameters(layers: usize) -> usize {
    2 * layers
}

/// Build the full measurement circuit for one parameter vector.
///
/// `params` holds two angles per layer, `[γ_1, β_1, ..., γ_p, β_p]`, and
/// must have exactly `2 · layers` entries. The circuit is built fresh on
/// every call; nothing is cached across evaluations.
pub fn build_circuit(
    ising: &IsingModel,
    params: &[f64],
    layers: usize,
    num_qubits: u32,
) -> QaoaResult<Circuit> {
    let expected = num_parameters(layers);
    if params.len() != expected {
        return Err(QaoaError::ParameterCount {
            expected,
            layers,
            got: params.len(),
        });
    }

    let mut circuit = Circuit::with_size("qaoa", num_qubits, num_qubits);

    // Uniform superposition over all spins.
    for q in 0..num_qubits {
        circuit.h(QubitId(q))?;
    }

    for layer in 0..layers {
        let gamma = params[2 * layer];
        let beta = params[2 * layer + 1];
        apply_cost_unitary(&mut circuit, ising, gamma)?;
        apply_mixer_unitary(&mut circuit, num_qubits, beta)?;
    }

    circuit.barrier_all()?;
    circuit.measure_all()?;

    Ok(circuit)
}

/// Apply the cost unitary exp(-i γ C).
///
/// Each coupling (i, j) with coefficient c becomes
/// `CX(i,j) · Rz(2cγ, j) · CX(i,j)`; each local field term becomes a bare
/// `Rz(2cγ, i)`. The constant term only shifts the global phase and emits
/// nothing.
fn apply_cost_unitary(circuit: &mut Circuit, ising: &IsingModel, gamma: f64) -> QaoaResult<()> {
    for (i, j, coeff) in ising.couplings() {
        let angle = 2.0 * coeff * gamma;
        circuit.cx(QubitId(i), QubitId(j))?;
        circuit.rz(angle, QubitId(j))?;
        circuit.cx(QubitId(i), QubitId(j))?;
    }
    for (i, coeff) in ising.fields() {
        circuit.rz(2.0 * coeff * gamma, QubitId(i))?;
    }
    Ok(())
}

/// Apply the mixer unitary exp(-i β B): Rx(2β) on every qubit.
fn apply_mixer_unitary(circuit: &mut Circuit, num_qubits: u32, beta: f64) -> QaoaResult<()> {
    let angle = 2.0 * beta;
    for q in 0..num_qubits {
        circuit.rx(angle, QubitId(q))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvin_ir::Instruction;

    fn demo_model() -> IsingModel {
        IsingModel::from_terms([(vec![0, 1], 0.5), (vec![], -0.5)]).unwrap()
    }

    #[test]
    fn test_single_layer_structure() {
        let circuit = build_circuit(&demo_model(), &[0.3, 0.7], 1, 2).unwrap();

        let names: Vec<_> = circuit.instructions().iter().map(Instruction::name).collect();
        assert_eq!(
            names,
            [
                "h", "h", // superposition
                "cx", "rz", "cx", // cost fragment for (0, 1)
                "rx", "rx", // mixer
                "barrier", "measure",
            ]
        );
    }

    #[test]
    fn test_cost_angle_scaling() {
        let circuit = build_circuit(&demo_model(), &[0.3, 0.0], 1, 2).unwrap();
        let rz = circuit
            .instructions()
            .iter()
            .find(|i| i.name() == "rz")
            .unwrap();
        let alsvin_ir::InstructionKind::Gate(alsvin_ir::StandardGate::Rz(angle)) = &rz.kind
        else {
            panic!("expected rz gate");
        };
        // 2 · coefficient · γ = 2 · 0.5 · 0.3
        assert!((angle - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_field_terms_emit_rotations() {
        let model = IsingModel::from_terms([(vec![0], 0.25)]).unwrap();
        let circuit = build_circuit(&model, &[1.0, 0.0], 1, 1).unwrap();
        let rz_count = circuit
            .instructions()
            .iter()
            .filter(|i| i.name() == "rz")
            .count();
        assert_eq!(rz_count, 1);
    }

    #[test]
    fn test_layer_count_scales_ops() {
        let one = build_circuit(&demo_model(), &[0.1, 0.2], 1, 2).unwrap();
        let two = build_circuit(&demo_model(), &[0.1, 0.2, 0.3, 0.4], 2, 2).unwrap();
        // Each extra layer adds one cost fragment (3 ops) and one mixer (2 ops).
        assert_eq!(two.num_ops(), one.num_ops() + 5);
    }

    #[test]
    fn test_parameter_count_enforced() {
        let err = build_circuit(&demo_model(), &[0.1], 1, 2);
        assert!(matches!(
            err,
            Err(QaoaError::ParameterCount {
                expected: 2,
                layers: 1,
                got: 1
            })
        ));

        // Extra parameters are rejected, never silently ignored.
        let err = build_circuit(&demo_model(), &[0.1, 0.2, 0.3], 1, 2);
        assert!(matches!(err, Err(QaoaError::ParameterCount { .. })));
    }

    #[test]
    fn test_out_of_range_model_rejected() {
        let model = IsingModel::from_terms([(vec![0, 4], 1.0)]).unwrap();
        let err = build_circuit(&model, &[0.1, 0.2], 1, 2);
        assert!(matches!(err, Err(QaoaError::Ir(_))));
    }
}
