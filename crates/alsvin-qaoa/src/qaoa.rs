//! QAOA driver tying the pieces together.

use tracing::debug;

use alsvin_ir::NoiseChannel;
use alsvin_ising::IsingModel;
use alsvin_sim::StatevectorSimulator;

use crate::circuit::{build_circuit, num_parameters};
use crate::error::QaoaResult;
use crate::estimator::EnergyEstimator;
use crate::optimizer::{Cobyla, OptimizationResult};

/// A QAOA instance over one Ising model.
///
/// Holds the immutable problem data (model, layer count, register size,
/// shot budget, optional noise channel) and evaluates the objective
/// function the classical optimizer drives. Every evaluation rebuilds the
/// circuit from scratch; no state is shared between calls.
pub struct Qaoa {
    ising: IsingModel,
    layers: usize,
    num_qubits: u32,
    shots: u32,
    noise: Option<NoiseChannel>,
    engine: StatevectorSimulator,
}

impl Qaoa {
    /// Create an instance with the default shot budget and no noise.
    pub fn new(ising: IsingModel, layers: usize, num_qubits: u32) -> Self {
        Self {
            ising,
            layers,
            num_qubits,
            shots: 4096,
            noise: None,
            engine: StatevectorSimulator::new(),
        }
    }

    /// Set the number of shots per objective evaluation.
    #[must_use]
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Simulate under a stochastic noise channel.
    #[must_use]
    pub fn with_noise(mut self, noise: NoiseChannel) -> Self {
        self.noise = Some(noise);
        self
    }

    /// The number of parameters one evaluation consumes.
    pub fn num_parameters(&self) -> usize {
        num_parameters(self.layers)
    }

    /// The Ising constant offset.
    ///
    /// [`Qaoa::objective`] does not include it; add it to an objective
    /// value to obtain the full model energy.
    pub fn offset(&self) -> f64 {
        self.ising.constant()
    }

    /// Evaluate the objective function for one parameter vector.
    ///
    /// Builds the layered circuit, rewrites it into the native basis,
    /// executes it, and reduces the counts into an energy estimate. The
    /// returned value excludes the Ising constant offset.
    pub fn objective(&self, params: &[f64]) -> QaoaResult<f64> {
        let circuit = build_circuit(&self.ising, params, self.layers, self.num_qubits)?;

        let mut estimator = EnergyEstimator::new(&self.engine, self.shots);
        if let Some(noise) = self.noise {
            estimator = estimator.with_noise(noise);
        }

        let energy = estimator.estimate(&circuit, &self.ising, self.num_qubits)?;
        debug!(energy, ?params, "objective evaluated");
        Ok(energy)
    }

    /// Minimize the objective from the given starting parameters.
    pub fn run(&self, initial_params: Vec<f64>) -> QaoaResult<OptimizationResult> {
        let optimizer = Cobyla::new().with_maxiter(100).with_tol(1e-4);
        optimizer.minimize(|params| self.objective(params), initial_params)
    }
}
