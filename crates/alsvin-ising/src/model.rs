//! Sparse Ising-model coefficient maps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{IsingError, IsingResult};
use crate::operator::{PauliTerm, WeightedOperator};

/// A sparse Ising objective:
///
///   E(s) = Σ_{i<j} J_ij s_i s_j  +  Σ_i h_i s_i  +  c
///
/// with spins s ∈ {−1, +1}. Keys are index sets of arity 0 (the constant),
/// 1 (a local field), or 2 (a coupling). Keys are normalized to ascending
/// order on insertion; duplicate keys and higher arities are rejected.
///
/// Serialized as a list of `(key, coefficient)` pairs; deserialization
/// runs the same validation as [`IsingModel::from_terms`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<(Vec<u32>, f64)>",
    into = "Vec<(Vec<u32>, f64)>"
)]
pub struct IsingModel {
    terms: BTreeMap<Vec<u32>, f64>,
}

impl TryFrom<Vec<(Vec<u32>, f64)>> for IsingModel {
    type Error = IsingError;

    fn try_from(terms: Vec<(Vec<u32>, f64)>) -> IsingResult<Self> {
        Self::from_terms(terms)
    }
}

impl From<IsingModel> for Vec<(Vec<u32>, f64)> {
    fn from(model: IsingModel) -> Self {
        model.terms.into_iter().collect()
    }
}

impl IsingModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from `(key, coefficient)` pairs.
    pub fn from_terms(
        terms: impl IntoIterator<Item = (Vec<u32>, f64)>,
    ) -> IsingResult<Self> {
        let mut model = Self::new();
        for (key, coeff) in terms {
            model.insert(&key, coeff)?;
        }
        Ok(model)
    }

    /// Insert one interaction term.
    ///
    /// Keys are treated as sets: `(1, 0)` and `(0, 1)` are the same
    /// coupling, and supplying both is a duplicate.
    pub fn insert(&mut self, key: &[u32], coeff: f64) -> IsingResult<()> {
        if key.len() > 2 {
            return Err(IsingError::UnsupportedArity {
                key: key.to_vec(),
                arity: key.len(),
            });
        }
        let mut normalized = key.to_vec();
        normalized.sort_unstable();
        if normalized.len() == 2 && normalized[0] == normalized[1] {
            return Err(IsingError::RepeatedIndex(key.to_vec()));
        }
        if self.terms.contains_key(&normalized) {
            return Err(IsingError::DuplicateKey(key.to_vec()));
        }
        self.terms.insert(normalized, coeff);
        Ok(())
    }

    /// Set the constant offset (the empty key).
    pub fn set_constant(&mut self, coeff: f64) -> IsingResult<()> {
        self.insert(&[], coeff)
    }

    /// Set a local field term on one spin.
    pub fn set_field(&mut self, spin: u32, coeff: f64) -> IsingResult<()> {
        self.insert(&[spin], coeff)
    }

    /// Set a coupling term between two spins.
    pub fn set_coupling(&mut self, i: u32, j: u32, coeff: f64) -> IsingResult<()> {
        self.insert(&[i, j], coeff)
    }

    /// The constant offset, 0.0 if absent.
    pub fn constant(&self) -> f64 {
        let empty: &[u32] = &[];
        self.terms.get(empty).copied().unwrap_or(0.0)
    }

    /// Local field terms in ascending spin order.
    pub fn fields(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.terms.iter().filter_map(|(k, &v)| match k.as_slice() {
            &[i] => Some((i, v)),
            _ => None,
        })
    }

    /// Coupling terms in ascending key order.
    pub fn couplings(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        self.terms.iter().filter_map(|(k, &v)| match k.as_slice() {
            &[i, j] => Some((i, j, v)),
            _ => None,
        })
    }

    /// Number of interaction terms, the constant included.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if no terms have been inserted.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The smallest register able to hold this model, ignoring the constant.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .keys()
            .filter_map(|k| k.last())
            .max()
            .map_or(0, |&q| q + 1)
    }

    /// Translate into a weighted Pauli-Z operator plus scalar offset.
    ///
    /// Each coupling `(i, j)` becomes a term with Z-mask bits at `i` and
    /// `j`; each field `(i)` a term with a single Z bit; the empty key
    /// becomes the returned offset. X-masks stay all-false. The offset is
    /// NOT folded into the operator: energy estimates built from the
    /// operator alone exclude it, and the caller adds it back.
    pub fn to_operator(&self, num_qubits: u32) -> IsingResult<(WeightedOperator, f64)> {
        if self.min_qubits() > num_qubits {
            let qubit = self
                .terms
                .keys()
                .filter_map(|k| k.last())
                .copied()
                .max()
                .unwrap_or(0);
            return Err(IsingError::QubitOutOfRange { qubit, num_qubits });
        }

        let mut terms = Vec::with_capacity(self.num_terms());
        for (i, j, coeff) in self.couplings() {
            terms.push(PauliTerm::z_pair(coeff, num_qubits, i, j));
        }
        for (i, coeff) in self.fields() {
            terms.push(PauliTerm::z_single(coeff, num_qubits, i));
        }
        Ok((WeightedOperator::new(num_qubits, terms), self.constant()))
    }
}
