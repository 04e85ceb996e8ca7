//! Weighted Pauli operators in mask form.
//!
//! An observable is a sum of weighted Pauli strings. Each string is stored
//! densely as a pair of boolean masks over the register — a Z mask and an
//! X mask — so that measurement-count reductions are a straight parity
//! walk over the masked bit positions. The Ising translation only ever
//! produces Z masks; the X mask is carried for completeness of the
//! representation.

use serde::{Deserialize, Serialize};

/// A single weighted Pauli string.
///
/// Mask length always equals the register size of the owning operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// Z mask: `z[i]` is true if the string acts with Z on qubit `i`.
    pub z: Vec<bool>,
    /// X mask: `x[i]` is true if the string acts with X on qubit `i`.
    pub x: Vec<bool>,
}

impl PauliTerm {
    /// A term acting with Z on a single qubit.
    pub fn z_single(coeff: f64, num_qubits: u32, qubit: u32) -> Self {
        let mut z = vec![false; num_qubits as usize];
        z[qubit as usize] = true;
        Self {
            coeff,
            z,
            x: vec![false; num_qubits as usize],
        }
    }

    /// A term acting with Z on a pair of qubits.
    pub fn z_pair(coeff: f64, num_qubits: u32, q0: u32, q1: u32) -> Self {
        let mut z = vec![false; num_qubits as usize];
        z[q0 as usize] = true;
        z[q1 as usize] = true;
        Self {
            coeff,
            z,
            x: vec![false; num_qubits as usize],
        }
    }

    /// Qubit indices carrying a Z factor, ascending.
    pub fn z_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.z
            .iter()
            .enumerate()
            .filter_map(|(i, &set)| set.then_some(i))
    }

    /// True if the term is the identity (both masks empty).
    pub fn is_identity(&self) -> bool {
        !self.z.iter().any(|&b| b) && !self.x.iter().any(|&b| b)
    }

    /// The eigenvalue ±1 of this Z string on a computational basis state.
    ///
    /// `bit(i)` must report the measured value of qubit `i`. X factors do
    /// not contribute; a diagonal reduction of an off-diagonal string is
    /// the caller's mistake.
    pub fn parity<F: Fn(usize) -> bool>(&self, bit: F) -> f64 {
        let ones = self.z_indices().filter(|&i| bit(i)).count();
        if ones % 2 == 0 { 1.0 } else { -1.0 }
    }
}

/// An ordered sum of weighted Pauli terms over a fixed register.
///
/// The scalar offset of the source model is not part of the operator; it
/// travels beside it wherever the operator goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedOperator {
    num_qubits: u32,
    terms: Vec<PauliTerm>,
}

impl WeightedOperator {
    /// Create an operator from terms.
    ///
    /// # Panics
    ///
    /// Panics if any term's mask length differs from `num_qubits`.
    pub fn new(num_qubits: u32, terms: Vec<PauliTerm>) -> Self {
        for term in &terms {
            assert_eq!(
                term.z.len(),
                num_qubits as usize,
                "Z mask length {} does not match register size {num_qubits}",
                term.z.len(),
            );
            assert_eq!(
                term.x.len(),
                num_qubits as usize,
                "X mask length {} does not match register size {num_qubits}",
                term.x.len(),
            );
        }
        Self { num_qubits, terms }
    }

    /// The register size the masks span.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// All terms in translation order.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if the operator has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of absolute coefficients, an upper bound on the spectral norm.
    pub fn lambda(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_single() {
        let term = PauliTerm::z_single(0.25, 3, 1);
        assert_eq!(term.z, vec![false, true, false]);
        assert!(term.x.iter().all(|&b| !b));
        assert_eq!(term.z_indices().collect::<Vec<_>>(), vec![1]);
        assert!(!term.is_identity());
    }

    #[test]
    fn test_z_pair_parity() {
        let term = PauliTerm::z_pair(1.0, 2, 0, 1);
        // |00⟩ and |11⟩ are +1 eigenstates, |01⟩ and |10⟩ are −1.
        assert_eq!(term.parity(|_| false), 1.0);
        assert_eq!(term.parity(|_| true), 1.0);
        assert_eq!(term.parity(|i| i == 0), -1.0);
        assert_eq!(term.parity(|i| i == 1), -1.0);
    }

    #[test]
    fn test_operator_lambda() {
        let op = WeightedOperator::new(
            2,
            vec![
                PauliTerm::z_pair(0.5, 2, 0, 1),
                PauliTerm::z_single(-0.25, 2, 0),
            ],
        );
        assert_eq!(op.num_terms(), 2);
        assert!((op.lambda() - 0.75).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "mask length")]
    fn test_operator_rejects_short_mask() {
        let bad = PauliTerm::z_single(1.0, 2, 0);
        WeightedOperator::new(3, vec![bad]);
    }
}
