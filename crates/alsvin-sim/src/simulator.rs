//! Statevector execution backend.

use rand::Rng;
use tracing::debug;

use alsvin_ir::{Circuit, GateClass, NoiseChannel};

use crate::error::{SimError, SimResult};
use crate::result::{Counts, ExecutionResult};
use crate::statevector::Statevector;

/// The seam between estimation and execution.
///
/// Implementors accept a circuit, a shot budget, and an optional noise
/// channel, and return a deterministic counts format: a map from
/// bitstring (qubit 0 first) to occurrence count.
pub trait ExecutionEngine {
    /// Execute a circuit for the given number of shots.
    fn execute(
        &self,
        circuit: &Circuit,
        shots: u32,
        noise: Option<&NoiseChannel>,
    ) -> SimResult<ExecutionResult>;
}

/// Local statevector execution engine.
///
/// Supports circuits up to ~20 qubits (limited by memory). Without noise,
/// the circuit is simulated once and outcomes are drawn repeatedly from
/// the final distribution. With a noise channel, each shot runs its own
/// stochastic trajectory: after every gate each operand qubit is flipped
/// with the channel's class probability, and sampled readout bits are
/// flipped with the measurement probability.
pub struct StatevectorSimulator {
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl StatevectorSimulator {
    /// Create a new simulator with default capacity.
    pub fn new() -> Self {
        Self { max_qubits: 20 }
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self { max_qubits }
    }

    fn validate(&self, circuit: &Circuit, shots: u32) -> SimResult<()> {
        if shots == 0 {
            return Err(SimError::InvalidShots(
                "shot count must be positive".into(),
            ));
        }
        if circuit.num_qubits() > self.max_qubits as usize {
            return Err(SimError::CircuitTooLarge(format!(
                "Circuit has {} qubits but the engine only supports {}",
                circuit.num_qubits(),
                self.max_qubits
            )));
        }
        Ok(())
    }

    fn run_noiseless(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let mut sv = Statevector::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            sv.apply(inst);
        }

        let mut rng = rand::thread_rng();
        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = sv.sample(&mut rng);
            counts.insert(sv.outcome_to_bitstring(outcome), 1);
        }

        ExecutionResult::new(counts, shots)
    }

    fn run_noisy(&self, circuit: &Circuit, shots: u32, noise: &NoiseChannel) -> ExecutionResult {
        let mut rng = rand::thread_rng();
        let mut counts = Counts::new();

        for _ in 0..shots {
            let mut sv = Statevector::new(circuit.num_qubits());

            for inst in circuit.instructions() {
                sv.apply(inst);
                if let Some(class) = inst.noise_class() {
                    let p = noise.flip_probability(class);
                    for qubit in &inst.qubits {
                        if rng.r#gen::<f64>() < p {
                            sv.apply_gate(&alsvin_ir::StandardGate::X, &[qubit.0 as usize]);
                        }
                    }
                }
            }

            let mut outcome = sv.sample(&mut rng);
            // Readout error: flip each sampled bit independently.
            let p_meas = noise.flip_probability(GateClass::Measure);
            for qubit in 0..circuit.num_qubits() {
                if rng.r#gen::<f64>() < p_meas {
                    outcome ^= 1 << qubit;
                }
            }
            counts.insert(sv.outcome_to_bitstring(outcome), 1);
        }

        ExecutionResult::new(counts, shots)
    }
}

impl Default for StatevectorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionEngine for StatevectorSimulator {
    fn execute(
        &self,
        circuit: &Circuit,
        shots: u32,
        noise: Option<&NoiseChannel>,
    ) -> SimResult<ExecutionResult> {
        self.validate(circuit, shots)?;

        debug!(
            qubits = circuit.num_qubits(),
            ops = circuit.num_ops(),
            shots,
            noisy = noise.is_some(),
            "executing circuit"
        );

        let result = match noise {
            None => self.run_noiseless(circuit, shots),
            Some(channel) => self.run_noisy(circuit, shots, channel),
        };

        debug!(outcomes = result.counts.len(), "execution finished");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_state_counts() {
        let engine = StatevectorSimulator::new();
        let circuit = Circuit::bell().unwrap();

        let result = engine.execute(&circuit, 1000, None).unwrap();
        assert_eq!(result.shots, 1000);

        // Bell state should produce only 00 and 11.
        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.get("01") + counts.get("10"), 0);
    }

    #[test]
    fn test_ghz_state_counts() {
        let engine = StatevectorSimulator::new();
        let circuit = Circuit::ghz(3).unwrap();

        let result = engine.execute(&circuit, 1000, None).unwrap();
        let counts = &result.counts;
        assert_eq!(counts.get("000") + counts.get("111"), 1000);
    }

    #[test]
    fn test_zero_shots_rejected() {
        let engine = StatevectorSimulator::new();
        let circuit = Circuit::bell().unwrap();
        let result = engine.execute(&circuit, 0, None);
        assert!(matches!(result, Err(SimError::InvalidShots(_))));
    }

    #[test]
    fn test_too_many_qubits() {
        let engine = StatevectorSimulator::with_max_qubits(5);
        let circuit = Circuit::with_size("big", 10, 0);
        let result = engine.execute(&circuit, 100, None);
        assert!(matches!(result, Err(SimError::CircuitTooLarge(_))));
    }

    #[test]
    fn test_noiseless_identity_circuit() {
        let engine = StatevectorSimulator::new();
        let mut circuit = Circuit::with_size("idle", 2, 2);
        circuit.measure_all().unwrap();

        let result = engine.execute(&circuit, 64, None).unwrap();
        assert_eq!(result.counts.get("00"), 64);
    }

    #[test]
    fn test_noise_flips_idle_qubits() {
        // With a certain bit-flip on single-qubit gates, an X-then-error
        // circuit always lands back on |0⟩.
        let engine = StatevectorSimulator::new();
        let mut circuit = Circuit::with_size("flip", 1, 1);
        circuit.x(alsvin_ir::QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        let noise = NoiseChannel::bit_flip(0.0, 0.0, 1.0, 0.0).unwrap();
        let result = engine.execute(&circuit, 128, Some(&noise)).unwrap();
        assert_eq!(result.counts.get("0"), 128);
    }

    #[test]
    fn test_readout_error_certain_flip() {
        let engine = StatevectorSimulator::new();
        let mut circuit = Circuit::with_size("readout", 1, 1);
        circuit.measure_all().unwrap();

        let noise = NoiseChannel::bit_flip(0.0, 1.0, 0.0, 0.0).unwrap();
        let result = engine.execute(&circuit, 128, Some(&noise)).unwrap();
        // |0⟩ always reads out as 1 under a certain readout flip.
        assert_eq!(result.counts.get("1"), 128);
    }

    #[test]
    fn test_noisy_bell_mostly_correlated() {
        let engine = StatevectorSimulator::new();
        let circuit = Circuit::bell().unwrap();

        let noise = NoiseChannel::chip_default();
        let result = engine.execute(&circuit, 2000, Some(&noise)).unwrap();
        let counts = &result.counts;
        let correlated = counts.get("00") + counts.get("11");
        // Error rates are a few percent; correlation survives.
        assert!(correlated > 1500, "correlated = {correlated}");
    }
}
