//! Alsvin QAOA
//!
//! The variational layer of the stack: builds parameterized QAOA circuits
//! from an Ising model, rewrites them into the chip-native gate set,
//! executes them on the statevector engine, and reduces measurement
//! counts into the energy estimate a classical optimizer minimizes.
//!
//! # Example
//!
//! ```rust
//! use alsvin_ising::IsingModel;
//! use alsvin_qaoa::Qaoa;
//!
//! // Two-spin antiferromagnet: E = 0.5·s0·s1 − 0.5, ground energy −1.
//! let model = IsingModel::from_terms([
//!     (vec![0, 1], 0.5),
//!     (vec![], -0.5),
//! ])
//! .unwrap();
//!
//! let qaoa = Qaoa::new(model, 1, 2).with_shots(2048);
//!
//! // At zero angles the state is |++⟩ and the coupling averages to zero,
//! // so the full energy is just the offset. The objective excludes the
//! // constant offset; the caller adds it.
//! let energy = qaoa.objective(&[0.0, 0.0]).unwrap() + qaoa.offset();
//! assert!((energy + 0.5).abs() < 0.1);
//! ```

pub mod circuit;
pub mod error;
pub mod estimator;
pub mod optimizer;
pub mod qaoa;

pub use circuit::{build_circuit, num_parameters};
pub use error::{QaoaError, QaoaResult};
pub use estimator::EnergyEstimator;
pub use optimizer::{Cobyla, OptimizationResult};
pub use qaoa::Qaoa;
