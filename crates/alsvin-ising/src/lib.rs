//! Alsvin Ising Observables
//!
//! Sparse Ising coefficient maps and their translation into weighted
//! Pauli-Z operators plus a scalar offset, the observable form consumed
//! by expectation-value estimation.
//!
//! # Example
//!
//! ```rust
//! use alsvin_ising::IsingModel;
//!
//! // E = 0.5·s0·s1 − 0.5
//! let model = IsingModel::from_terms([
//!     (vec![0, 1], 0.5),
//!     (vec![], -0.5),
//! ])
//! .unwrap();
//!
//! let (operator, offset) = model.to_operator(2).unwrap();
//! assert_eq!(operator.num_terms(), 1);
//! assert_eq!(offset, -0.5);
//! ```

pub mod error;
pub mod model;
pub mod operator;

pub use error::{IsingError, IsingResult};
pub use model::IsingModel;
pub use operator::{PauliTerm, WeightedOperator};
