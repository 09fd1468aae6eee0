//! Infeasibility penalties for Euler-equation residuals.
//!
//! Purpose
//! -------
//! Define the sentinel magnitudes a root-finder sees when a candidate savings
//! path implies non-positive consumption, and a tagged residual type that keeps
//! "feasible value" and "penalty" apart until the caller asks for a number.
//!
//! Key behaviors
//! -------------
//! - [`CONSUMPTION_SENTINEL`] replaces infeasible consumption before marginal
//!   utilities are taken, keeping `c^(-sigma)` real-valued.
//! - [`DIFF_PENALTY`] / [`PCT_PENALTY`] replace any residual that touches an
//!   infeasible age, in difference and percent-difference mode respectively.
//! - [`EulerResidual`] carries either a genuine residual or the infeasible tag
//!   and lowers to `f64` via [`EulerResidual::value`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The magnitudes `9999` and `9999 / 100` are fixed: external solvers tune
//!   their convergence tolerances against them.
//! - A penalty is never produced for a residual whose two adjacent ages are
//!   both feasible, whatever its arithmetic value.
use crate::og::core::options::EulerErrorMode;

/// Placeholder consumption used for infeasible ages before taking `c^(-sigma)`.
pub const CONSUMPTION_SENTINEL: f64 = 9999.0;

/// Residual reported in difference mode when either adjacent age is infeasible.
pub const DIFF_PENALTY: f64 = 9999.0;

/// Residual reported in percent-difference mode when either adjacent age is
/// infeasible.
pub const PCT_PENALTY: f64 = 9999.0 / 100.0;

/// Tagged Euler residual for one pair of adjacent ages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EulerResidual {
    /// Both ages have strictly positive consumption; the residual is genuine.
    Feasible(f64),
    /// At least one of the two ages has non-positive consumption.
    Infeasible,
}

impl EulerResidual {
    /// Sentinel magnitude used for infeasible residuals in `mode`.
    pub fn penalty(mode: EulerErrorMode) -> f64 {
        match mode {
            EulerErrorMode::Difference => DIFF_PENALTY,
            EulerErrorMode::PercentDifference => PCT_PENALTY,
        }
    }

    /// Lower the tagged residual onto the numeric range expected by solvers.
    pub fn value(self, mode: EulerErrorMode) -> f64 {
        match self {
            EulerResidual::Feasible(v) => v,
            EulerResidual::Infeasible => Self::penalty(mode),
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, EulerResidual::Feasible(_))
    }
}
