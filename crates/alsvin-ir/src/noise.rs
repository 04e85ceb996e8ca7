//! Stochastic noise channel configuration.
//!
//! The channel models the chip's dominant error process as a probabilistic
//! mixture of identity and a bit flip, with a separate probability per
//! operation class. Execution engines sample one flip per affected qubit
//! per operation; two-qubit gates flip each operand qubit independently.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};

/// Operation classes that carry their own error probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateClass {
    /// Qubit reset.
    Reset,
    /// Measurement readout.
    Measure,
    /// Any single-qubit gate.
    SingleQubit,
    /// Any two-qubit gate.
    TwoQubit,
}

/// A per-gate-class bit-flip noise channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseChannel {
    reset: f64,
    measure: f64,
    single_qubit: f64,
    two_qubit: f64,
}

impl NoiseChannel {
    /// Create a channel with one flip probability per operation class.
    ///
    /// Each probability must lie in `[0, 1]`.
    pub fn bit_flip(reset: f64, measure: f64, single_qubit: f64, two_qubit: f64) -> IrResult<Self> {
        for (name, p) in [
            ("reset", reset),
            ("measure", measure),
            ("single_qubit", single_qubit),
            ("two_qubit", two_qubit),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(IrError::InvalidParameter {
                    gate: "noise_channel".into(),
                    reason: format!("{name} flip probability {p} outside [0, 1]"),
                });
            }
        }
        Ok(Self {
            reset,
            measure,
            single_qubit,
            two_qubit,
        })
    }

    /// The chip's characterized error rates.
    pub fn chip_default() -> Self {
        Self {
            reset: 0.003,
            measure: 0.01,
            single_qubit: 0.05,
            two_qubit: 0.05,
        }
    }

    /// The flip probability for an operation class.
    pub fn flip_probability(&self, class: GateClass) -> f64 {
        match class {
            GateClass::Reset => self.reset,
            GateClass::Measure => self.measure,
            GateClass::SingleQubit => self.single_qubit,
            GateClass::TwoQubit => self.two_qubit,
        }
    }
}

impl std::fmt::Display for NoiseChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bit_flip(reset={:.4}, measure={:.4}, 1q={:.4}, 2q={:.4})",
            self.reset, self.measure, self.single_qubit, self.two_qubit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_channel() {
        let ch = NoiseChannel::bit_flip(0.003, 0.01, 0.05, 0.05).unwrap();
        assert_eq!(ch.flip_probability(GateClass::Reset), 0.003);
        assert_eq!(ch.flip_probability(GateClass::Measure), 0.01);
        assert_eq!(ch.flip_probability(GateClass::SingleQubit), 0.05);
        assert_eq!(ch.flip_probability(GateClass::TwoQubit), 0.05);
    }

    #[test]
    fn test_chip_default_matches_characterization() {
        let ch = NoiseChannel::chip_default();
        assert_eq!(ch, NoiseChannel::bit_flip(0.003, 0.01, 0.05, 0.05).unwrap());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(NoiseChannel::bit_flip(-0.1, 0.0, 0.0, 0.0).is_err());
        assert!(NoiseChannel::bit_flip(0.0, 1.5, 0.0, 0.0).is_err());
        assert!(NoiseChannel::bit_flip(0.0, 0.0, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_display() {
        let ch = NoiseChannel::chip_default();
        assert_eq!(
            format!("{ch}"),
            "bit_flip(reset=0.0030, measure=0.0100, 1q=0.0500, 2q=0.0500)"
        );
    }
}
