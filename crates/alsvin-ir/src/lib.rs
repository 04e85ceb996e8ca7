//! Alsvin Circuit Intermediate Representation
//!
//! Core data structures for representing quantum circuits targeting a
//! CZ-native chip whose calibrated single-qubit operations are `rz`
//! (continuous Z rotation) and `rx_pi` (X rotations at integer multiples
//! of π/2).
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`], a closed gate set with matrix and adjoint
//!   semantics per variant
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`], an ordered instruction list with a validating
//!   builder API
//! - **Noise**: [`NoiseChannel`], per-gate-class bit-flip probabilities for
//!   stochastic simulation
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use alsvin_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_ops(), 3);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H`, `X`, `Z` | 1 | Clifford / Pauli gates |
//! | `Rx`, `Rz` | 1 | Rotation gates |
//! | `RxPi` | 1 | Chip-native X pulse at k·π/2 |
//! | `TwoPulse` | 1 | ZXZ two-pulse gate |
//! | `CX`, `CZ` | 2 | Controlled-X / Controlled-Z |
//! | `Swap` | 2 | SWAP gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod noise;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use noise::{GateClass, NoiseChannel};
pub use qubit::{ClbitId, QubitId};
