//! Alsvin Statevector Execution Engine
//!
//! In-process execution of circuits against a statevector simulation,
//! with a fixed shot budget and an optional stochastic bit-flip noise
//! channel. Results come back as a map from measured bitstring to count.
//!
//! # Example
//!
//! ```rust
//! use alsvin_ir::Circuit;
//! use alsvin_sim::{ExecutionEngine, StatevectorSimulator};
//!
//! let engine = StatevectorSimulator::new();
//! let circuit = Circuit::bell().unwrap();
//!
//! let result = engine.execute(&circuit, 1000, None).unwrap();
//! assert_eq!(result.counts.total(), 1000);
//! ```

pub mod error;
pub mod result;
pub mod simulator;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use result::{Counts, ExecutionResult};
pub use simulator::{ExecutionEngine, StatevectorSimulator};
pub use statevector::Statevector;
