//! Quantum gate types.
//!
//! The gate set is closed: it covers the chip-native operations (`rz`,
//! `rx_pi`, `cz`) plus the handful of higher-level gates the rest of the
//! stack knows how to reduce to them. Keeping it a plain enum makes the
//! decomposition table exhaustiveness-checked by the compiler.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::error::{IrError, IrResult};

/// A gate from the fixed gate set.
///
/// Two-qubit matrices use the convention that the first operand qubit is
/// the least-significant bit of the basis-state index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Z gate.
    Z,
    /// Rotation around the X axis.
    Rx(f64),
    /// Rotation around the Z axis (chip native).
    Rz(f64),
    /// Chip-native discrete X pulse: rotation by `k · π/2` around X.
    ///
    /// The hardware only calibrates X pulses at quarter-turn multiples,
    /// so the multiple is stored as an integer.
    RxPi(i32),
    /// Two-pulse single-qubit gate: `Rz(θ)`, then `Rx(φ)`, then `Rz(λ)`.
    TwoPulse(f64, f64, f64),
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate (chip native).
    CZ,
    /// SWAP gate.
    Swap,
}

impl StandardGate {
    /// Build the discrete X pulse from a float multiple.
    ///
    /// The chip only supports integer multiples of π/2; anything else is
    /// rejected at construction time.
    pub fn rx_pi_checked(multiple: f64) -> IrResult<Self> {
        if !multiple.is_finite() || multiple.fract() != 0.0 {
            return Err(IrError::InvalidParameter {
                gate: "rx_pi".into(),
                reason: format!("angle multiple {multiple} is not an integer"),
            });
        }
        if multiple.abs() > f64::from(i32::MAX) {
            return Err(IrError::InvalidParameter {
                gate: "rx_pi".into(),
                reason: format!("angle multiple {multiple} out of range"),
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        let k = multiple as i32;
        Ok(StandardGate::RxPi(k))
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Z => "z",
            StandardGate::Rx(_) => "rx",
            StandardGate::Rz(_) => "rz",
            StandardGate::RxPi(_) => "rx_pi",
            StandardGate::TwoPulse(_, _, _) => "two_pulse",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H
            | StandardGate::X
            | StandardGate::Z
            | StandardGate::Rx(_)
            | StandardGate::Rz(_)
            | StandardGate::RxPi(_)
            | StandardGate::TwoPulse(_, _, _) => 1,

            StandardGate::CX | StandardGate::CZ | StandardGate::Swap => 2,
        }
    }

    /// Check if this gate belongs to the chip-native set (`cz`, `rz`, `rx_pi`).
    #[inline]
    pub fn is_native(&self) -> bool {
        matches!(
            self,
            StandardGate::Rz(_) | StandardGate::RxPi(_) | StandardGate::CZ
        )
    }

    /// The rotation angle of the discrete X pulse, `k · π/2`.
    pub fn rx_pi_angle(multiple: i32) -> f64 {
        f64::from(multiple) * FRAC_PI_2
    }

    /// The adjoint gate, always a member of the same gate set.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            StandardGate::H => StandardGate::H,
            StandardGate::X => StandardGate::X,
            StandardGate::Z => StandardGate::Z,
            StandardGate::Rx(theta) => StandardGate::Rx(-theta),
            StandardGate::Rz(phi) => StandardGate::Rz(-phi),
            StandardGate::RxPi(k) => StandardGate::RxPi(-k),
            // (Rz(θ)·Rx(φ)·Rz(λ))† applies the negated pulses in reverse
            // order, which is again a two-pulse gate.
            StandardGate::TwoPulse(theta, phi, lambda) => {
                StandardGate::TwoPulse(-lambda, -phi, -theta)
            }
            StandardGate::CX => StandardGate::CX,
            StandardGate::CZ => StandardGate::CZ,
            StandardGate::Swap => StandardGate::Swap,
        }
    }

    /// The closed-form unitary matrix, row-major, `2^n × 2^n`.
    pub fn matrix(&self) -> Vec<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        match self {
            StandardGate::H => {
                let s = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
                vec![s, s, s, -s]
            }
            StandardGate::X => vec![zero, one, one, zero],
            StandardGate::Z => vec![one, zero, zero, -one],
            StandardGate::Rx(theta) => rx_matrix(*theta),
            StandardGate::Rz(phi) => {
                vec![
                    Complex64::from_polar(1.0, -phi / 2.0),
                    zero,
                    zero,
                    Complex64::from_polar(1.0, phi / 2.0),
                ]
            }
            StandardGate::RxPi(k) => rx_matrix(Self::rx_pi_angle(*k)),
            StandardGate::TwoPulse(theta, phi, lambda) => {
                // Rz(λ) · Rx(φ) · Rz(θ) written out in closed form.
                let c = (phi / 2.0).cos();
                let s = (phi / 2.0).sin();
                vec![
                    c * Complex64::from_polar(1.0, -(theta + lambda) / 2.0),
                    Complex64::new(0.0, -s) * Complex64::from_polar(1.0, (theta - lambda) / 2.0),
                    Complex64::new(0.0, -s) * Complex64::from_polar(1.0, -(theta - lambda) / 2.0),
                    c * Complex64::from_polar(1.0, (theta + lambda) / 2.0),
                ]
            }
            StandardGate::CX => vec![
                one, zero, zero, zero, //
                zero, zero, zero, one, //
                zero, zero, one, zero, //
                zero, one, zero, zero,
            ],
            StandardGate::CZ => vec![
                one, zero, zero, zero, //
                zero, one, zero, zero, //
                zero, zero, one, zero, //
                zero, zero, zero, -one,
            ],
            StandardGate::Swap => vec![
                one, zero, zero, zero, //
                zero, zero, one, zero, //
                zero, one, zero, zero, //
                zero, zero, zero, one,
            ],
        }
    }
}

fn rx_matrix(theta: f64) -> Vec<Complex64> {
    let c = Complex64::new((theta / 2.0).cos(), 0.0);
    let s = Complex64::new(0.0, -(theta / 2.0).sin());
    vec![c, s, s, c]
}

impl std::fmt::Display for StandardGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StandardGate::Rx(theta) => write!(f, "rx({theta:.4})"),
            StandardGate::Rz(phi) => write!(f, "rz({phi:.4})"),
            StandardGate::RxPi(k) => write!(f, "rx_pi({k})"),
            StandardGate::TwoPulse(theta, phi, lambda) => {
                write!(f, "two_pulse({theta:.4}, {phi:.4}, {lambda:.4})")
            }
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat_mul(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
        let mut out = vec![Complex64::new(0.0, 0.0); 4];
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    out[i * 2 + j] += a[i * 2 + k] * b[k * 2 + j];
                }
            }
        }
        out
    }

    fn is_identity(m: &[Complex64]) -> bool {
        (m[0] - m[3]).norm() < 1e-10
            && m[1].norm() < 1e-10
            && m[2].norm() < 1e-10
            && (m[0].norm() - 1.0).abs() < 1e-10
    }

    #[test]
    fn test_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CZ.num_qubits(), 2);
        assert_eq!(StandardGate::Swap.name(), "swap");
        assert!(StandardGate::CZ.is_native());
        assert!(StandardGate::RxPi(1).is_native());
        assert!(!StandardGate::CX.is_native());
    }

    #[test]
    fn test_rx_pi_checked() {
        assert_eq!(
            StandardGate::rx_pi_checked(1.0).unwrap(),
            StandardGate::RxPi(1)
        );
        assert_eq!(
            StandardGate::rx_pi_checked(-2.0).unwrap(),
            StandardGate::RxPi(-2)
        );
        assert!(matches!(
            StandardGate::rx_pi_checked(0.5),
            Err(IrError::InvalidParameter { .. })
        ));
        assert!(StandardGate::rx_pi_checked(f64::NAN).is_err());
    }

    #[test]
    fn test_inverse_cancels() {
        let gates = [
            StandardGate::H,
            StandardGate::X,
            StandardGate::Z,
            StandardGate::Rx(0.7),
            StandardGate::Rz(-1.3),
            StandardGate::RxPi(3),
            StandardGate::TwoPulse(0.4, 1.2, -0.8),
        ];
        for g in gates {
            let m = g.matrix();
            let minv = g.inverse().matrix();
            let prod = mat_mul(&minv, &m);
            assert!(is_identity(&prod), "{g} inverse does not cancel");
        }
    }

    #[test]
    fn test_rx_pi_matches_rx() {
        let a = StandardGate::RxPi(1).matrix();
        let b = StandardGate::Rx(FRAC_PI_2).matrix();
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).norm() < 1e-12);
        }
    }

    #[test]
    fn test_two_pulse_degenerate_cases() {
        // TwoPulse(0, φ, 0) is a plain X rotation.
        let a = StandardGate::TwoPulse(0.0, 0.9, 0.0).matrix();
        let b = StandardGate::Rx(0.9).matrix();
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).norm() < 1e-12);
        }
        // TwoPulse(θ, 0, λ) is a Z rotation by θ+λ.
        let a = StandardGate::TwoPulse(0.3, 0.0, 0.5).matrix();
        let b = StandardGate::Rz(0.8).matrix();
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).norm() < 1e-12);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let g = StandardGate::TwoPulse(0.1, 0.2, 0.3);
        let json = serde_json::to_string(&g).unwrap();
        let back: StandardGate = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}
