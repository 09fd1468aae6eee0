//! Errors for the OG equation library (array-shape checks, parameter
//! containers, and option parsing).
//!
//! This module defines a formula error type, [`OGError`], and a parameter error
//! type, [`ParamError`], used across the Rust API and the optional Python
//! bridge. Both implement `Display`/`Error` and convert to `PyErr` when the
//! `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Shapes are reported as `(rows, cols)` with industries/goods on rows and
//!   time (or remaining age) on columns.
//! - Numeric degeneracy (`epsilon == 1`, `w == 0`, non-positive prices) is
//!   **not** an error: it propagates as NaN/±inf through the returned arrays.
//! - Infeasible consumption is **not** an error either: it is reported through
//!   boolean constraint masks and Euler-error sentinels.

/// Result alias for formula evaluations that may produce [`OGError`].
pub type OGResult<T> = Result<T, OGError>;

/// Result alias for parameter-construction/validation paths that may produce
/// [`ParamError`].
pub type ParamResult<T> = Result<T, ParamError>;

/// Unified error type for formula inputs.
///
/// Covers length/shape mismatches between conformable arrays, empty inputs,
/// option parsing, and wrapped parameter errors.
#[derive(Debug, Clone, PartialEq)]
pub enum OGError {
    // ---- Shape validation ----
    /// A 1-D input does not have the length implied by the other inputs.
    LengthMismatch { name: &'static str, expected: usize, actual: usize },

    /// A 2-D input does not have the shape implied by the other inputs.
    DimMismatch { name: &'static str, expected: (usize, usize), actual: (usize, usize) },

    /// An input that must carry at least one observation is empty.
    EmptyInput { name: &'static str },

    // ---- Options ----
    /// Unknown Euler-error mode name.
    InvalidEulerMode { name: String, reason: &'static str },

    // ---- Parameters ----
    /// Wrapper for a parameter-container error.
    Param(ParamError),
}

impl std::error::Error for OGError {}

impl std::fmt::Display for OGError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OGError::LengthMismatch { name, expected, actual } => {
                write!(f, "Length mismatch for '{name}': expected {expected}, got {actual}")
            }
            OGError::DimMismatch { name, expected, actual } => {
                write!(
                    f,
                    "Shape mismatch for '{name}': expected ({}, {}), got ({}, {})",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            OGError::EmptyInput { name } => {
                write!(f, "Input '{name}' must not be empty.")
            }
            OGError::InvalidEulerMode { name, reason } => {
                write!(f, "Invalid Euler-error mode '{name}'. {reason}")
            }
            OGError::Param(err) => {
                write!(f, "Invalid parameters: {err}")
            }
        }
    }
}

impl From<ParamError> for OGError {
    fn from(err: ParamError) -> OGError {
        OGError::Param(err)
    }
}

/// Convert an [`OGError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface input errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<OGError> for pyo3::PyErr {
    fn from(err: OGError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// Errors specific to parameter construction and validation.
///
/// Typical causes include technology arrays of different shapes, preference
/// parameters outside their admissible range, and expenditure shares that are
/// not a proper simplex.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// Technology / preference arrays must all share one `(rows, cols)` shape.
    ShapeMismatch { name: &'static str, expected: (usize, usize), actual: (usize, usize) },

    /// Parameter arrays must have at least one row and one column.
    EmptyParams { name: &'static str },

    /// Discount factor must be finite and in `[0, 1)`.
    InvalidDiscountFactor { value: f64 },

    /// Coefficient of relative risk aversion must be finite and > 0.
    InvalidRiskAversion { value: f64 },

    /// Expenditure shares must be finite and > 0.
    InvalidExpenditureShare { good: usize, t: usize, value: f64 },

    /// Expenditure shares must sum to one in every period.
    SharesNotNormalized { t: usize, sum: f64 },
}

impl std::error::Error for ParamError {}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::ShapeMismatch { name, expected, actual } => {
                write!(
                    f,
                    "Parameter '{name}' has shape ({}, {}); expected ({}, {})",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            ParamError::EmptyParams { name } => {
                write!(f, "Parameter '{name}' must have at least one row and one column.")
            }
            ParamError::InvalidDiscountFactor { value } => {
                write!(f, "Discount factor beta must be finite and in [0, 1), got {value}")
            }
            ParamError::InvalidRiskAversion { value } => {
                write!(f, "Risk aversion sigma must be finite and > 0, got {value}")
            }
            ParamError::InvalidExpenditureShare { good, t, value } => {
                write!(
                    f,
                    "Expenditure share for good {good} at period {t} must be finite and > 0, got {value}"
                )
            }
            ParamError::SharesNotNormalized { t, sum } => {
                write!(f, "Expenditure shares at period {t} sum to {sum}; expected 1")
            }
        }
    }
}

/// Convert a [`ParamError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl std::convert::From<ParamError> for pyo3::PyErr {
    fn from(err: ParamError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
