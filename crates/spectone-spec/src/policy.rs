//! Frequency-mapping policies.
//!
//! A policy is a pure function from a peak's mass-to-charge ratio to an
//! audio frequency in Hz. The three variants carry their own parameter
//! records, so adding a fourth policy is a closed, type-checked change
//! rather than a new string branch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Maps a peak's m/z value to a frequency in Hz.
///
/// The computed frequency may be zero, negative, or non-finite; the
/// synthesizer decides what to do with those (skip or fail).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum FrequencyPolicy {
    /// `frequency = mz + offset`
    Linear {
        /// Additive offset in Hz.
        #[serde(default = "default_offset")]
        offset: f64,
    },
    /// `frequency = scale / (mz + shift)`
    Inverse {
        /// Numerator scale.
        #[serde(default = "default_scale")]
        scale: f64,
        /// Denominator shift, keeps small m/z values off zero.
        #[serde(default = "default_shift")]
        shift: f64,
    },
    /// `frequency = ((mz * factor) mod modulus) + base`
    Modulo {
        /// Multiplier applied before the modulo.
        #[serde(default = "default_factor")]
        factor: f64,
        /// Modulus folding the product into a band.
        #[serde(default = "default_modulus")]
        modulus: f64,
        /// Floor of the folded band in Hz.
        #[serde(default = "default_base")]
        base: f64,
    },
}

fn default_offset() -> f64 {
    300.0
}

fn default_scale() -> f64 {
    100_000.0
}

fn default_shift() -> f64 {
    1.0
}

fn default_factor() -> f64 {
    10.0
}

fn default_modulus() -> f64 {
    500.0
}

fn default_base() -> f64 {
    100.0
}

impl Default for FrequencyPolicy {
    fn default() -> Self {
        Self::Linear {
            offset: default_offset(),
        }
    }
}

impl FrequencyPolicy {
    /// Computes the frequency in Hz for the given m/z value.
    pub fn frequency(&self, mz: f64) -> f64 {
        match *self {
            Self::Linear { offset } => mz + offset,
            Self::Inverse { scale, shift } => scale / (mz + shift),
            Self::Modulo {
                factor,
                modulus,
                base,
            } => floor_mod(mz * factor, modulus) + base,
        }
    }

    /// Returns the policy's parameters as (name, value) pairs, in
    /// declaration order. Used by the validator for range checks.
    pub fn params(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Linear { offset } => vec![("offset", offset)],
            Self::Inverse { scale, shift } => vec![("scale", scale), ("shift", shift)],
            Self::Modulo {
                factor,
                modulus,
                base,
            } => vec![("factor", factor), ("modulus", modulus), ("base", base)],
        }
    }

    /// Returns the variant tag used in serialized form.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Linear { .. } => PolicyKind::Linear,
            Self::Inverse { .. } => PolicyKind::Inverse,
            Self::Modulo { .. } => PolicyKind::Modulo,
        }
    }
}

/// Floored modulo: the result takes the sign of the divisor.
///
/// `%` on f64 truncates toward zero, which disagrees with the folding
/// behavior the modulo policy wants for negative products. A zero
/// divisor yields NaN and is surfaced by the synthesizer as a
/// frequency-computation failure.
fn floor_mod(a: f64, m: f64) -> f64 {
    a - m * (a / m).floor()
}

/// The three policy names accepted at string boundaries (CLI flags,
/// query parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Linear mapping.
    Linear,
    /// Inverse mapping.
    Inverse,
    /// Modulo mapping.
    Modulo,
}

impl PolicyKind {
    /// Returns the lowercase policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Linear => "linear",
            PolicyKind::Inverse => "inverse",
            PolicyKind::Modulo => "modulo",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(PolicyKind::Linear),
            "inverse" => Ok(PolicyKind::Inverse),
            "modulo" => Ok(PolicyKind::Modulo),
            other => Err(SpecError::UnknownPolicy {
                name: other.to_string(),
            }),
        }
    }
}
