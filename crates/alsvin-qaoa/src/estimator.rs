//! Energy estimation from measurement counts.

use tracing::debug;

use alsvin_compile::translate_circuit;
use alsvin_ir::{Circuit, NoiseChannel};
use alsvin_ising::IsingModel;
use alsvin_sim::ExecutionEngine;

use crate::error::{QaoaError, QaoaResult};

/// Estimates the expectation value of an Ising observable over a circuit's
/// measurement distribution.
///
/// The circuit is first rewritten into the chip-native basis, then
/// executed for the configured shot budget (under the noise channel, if
/// one is set), and the counts are reduced against the model's Pauli-term
/// decomposition.
///
/// The returned energy covers the Pauli terms only. The Ising constant
/// offset is NOT added here; the translation hands it to the caller, who
/// is responsible for adding it to the estimate.
pub struct EnergyEstimator<'a, E: ExecutionEngine> {
    engine: &'a E,
    shots: u32,
    noise: Option<NoiseChannel>,
}

impl<'a, E: ExecutionEngine> EnergyEstimator<'a, E> {
    /// Create an estimator over an execution engine.
    pub fn new(engine: &'a E, shots: u32) -> Self {
        Self {
            engine,
            shots,
            noise: None,
        }
    }

    /// Apply a stochastic noise channel during execution.
    #[must_use]
    pub fn with_noise(mut self, noise: NoiseChannel) -> Self {
        self.noise = Some(noise);
        self
    }

    /// The configured shot budget.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Estimate the model's energy over the circuit's output distribution.
    ///
    /// Each Pauli term contributes its coefficient times the
    /// count-weighted parity over the bitstring positions in its Z mask,
    /// normalized by the total number of outcomes.
    #[allow(clippy::cast_precision_loss)]
    pub fn estimate(
        &self,
        circuit: &Circuit,
        ising: &IsingModel,
        num_qubits: u32,
    ) -> QaoaResult<f64> {
        let (operator, _offset) = ising.to_operator(num_qubits)?;

        let native = translate_circuit(circuit)?;
        let result = self
            .engine
            .execute(&native, self.shots, self.noise.as_ref())?;

        let total = result.counts.total();
        if total == 0 {
            return Err(QaoaError::EmptyCounts);
        }

        let mut energy = 0.0;
        for term in operator.terms() {
            let mut weighted_parity = 0.0;
            for (bits, count) in result.counts.iter() {
                let parity = term.parity(|i| bits.as_bytes().get(i) == Some(&b'1'));
                weighted_parity += parity * count as f64;
            }
            energy += term.coeff * weighted_parity / total as f64;
        }

        debug!(energy, shots = self.shots, terms = operator.num_terms(), "estimated energy");
        Ok(energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvin_ir::QubitId;
    use alsvin_sim::StatevectorSimulator;

    fn demo_model() -> IsingModel {
        IsingModel::from_terms([(vec![0, 1], 0.5), (vec![], -0.5)]).unwrap()
    }

    #[test]
    fn test_computational_basis_energy() {
        // |00⟩ is a +1 eigenstate of Z0Z1: energy = 0.5 exactly.
        let engine = StatevectorSimulator::new();
        let estimator = EnergyEstimator::new(&engine, 256);

        let mut circuit = Circuit::with_size("ground", 2, 2);
        circuit.measure_all().unwrap();

        let energy = estimator.estimate(&circuit, &demo_model(), 2).unwrap();
        assert!((energy - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_flipped_basis_energy() {
        // |01⟩ is a −1 eigenstate of Z0Z1: energy = −0.5 exactly.
        let engine = StatevectorSimulator::new();
        let estimator = EnergyEstimator::new(&engine, 256);

        let mut circuit = Circuit::with_size("excited", 2, 2);
        circuit.x(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        let energy = estimator.estimate(&circuit, &demo_model(), 2).unwrap();
        assert!((energy + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_offset_not_included() {
        // The −0.5 constant must not show up in the estimate.
        let engine = StatevectorSimulator::new();
        let estimator = EnergyEstimator::new(&engine, 64);

        let model = IsingModel::from_terms([(vec![], -0.5)]).unwrap();
        let mut circuit = Circuit::with_size("const", 1, 1);
        circuit.measure_all().unwrap();

        let energy = estimator.estimate(&circuit, &model, 1).unwrap();
        assert_eq!(energy, 0.0);
    }

    #[test]
    fn test_zero_shots_fail() {
        let engine = StatevectorSimulator::new();
        let estimator = EnergyEstimator::new(&engine, 0);

        let mut circuit = Circuit::with_size("empty", 2, 2);
        circuit.measure_all().unwrap();

        let result = estimator.estimate(&circuit, &demo_model(), 2);
        assert!(matches!(result, Err(QaoaError::Execution(_))));
    }

    #[test]
    fn test_field_term_energy() {
        // |1⟩ flips the sign of a field term.
        let engine = StatevectorSimulator::new();
        let estimator = EnergyEstimator::new(&engine, 64);

        let model = IsingModel::from_terms([(vec![0], 0.25)]).unwrap();
        let mut circuit = Circuit::with_size("field", 1, 1);
        circuit.x(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        let energy = estimator.estimate(&circuit, &model, 1).unwrap();
        assert!((energy + 0.25).abs() < 1e-12);
    }
}
