//! Alsvin Native Gate-Set Translation
//!
//! Rewrites circuits into the chip's native basis — `cz`, `rz`, and the
//! discrete X pulse `rx_pi` — through fixed decomposition sequences, each
//! an algebraic identity up to global phase.
//!
//! # Example
//!
//! ```rust
//! use alsvin_compile::translate_circuit;
//! use alsvin_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("demo", 2, 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! let native = translate_circuit(&circuit).unwrap();
//! assert!(
//!     native
//!         .instructions()
//!         .iter()
//!         .filter_map(|i| i.as_gate())
//!         .all(|g| g.is_native())
//! );
//! ```

pub mod error;
pub mod translation;
pub mod unitary;

pub use error::{CompileError, CompileResult};
pub use translation::{decompose, translate_circuit};
pub use unitary::Unitary2x2;
