//! OG parameter containers — technology and preference parameters.
//!
//! Purpose
//! -------
//! Hold the calibrated parameters the closed-form formulas consume, validated
//! once at construction so the formulas only need to check conformability
//! against the price and factor paths they are given.
//!
//! Key behaviors
//! -------------
//! - [`FirmParams`] bundles the CES technology `(A, gamma, epsilon, delta)`
//!   as `(M, T)` matrices, either supplied directly or tiled from
//!   per-industry vectors via [`FirmParams::stationary`].
//! - [`HouseholdParams`] bundles the discount factor `beta` and the CRRA
//!   coefficient `sigma`.
//! - [`Preferences`] bundles Cobb-Douglas expenditure shares `alpha` and
//!   subsistence minima `c_bar` as `(I, T)` matrices.
//!
//! Invariants & assumptions
//! ------------------------
//! - All technology matrices share one non-empty `(M, T)` shape.
//! - `0 <= beta < 1` and `sigma > 0`, both finite.
//! - Technology values are **not** range-checked: `epsilon == 1`,
//!   `gamma == 0`, or `A == 0` are accepted and degenerate numerically in the
//!   formulas (NaN/±inf), which callers are expected to avoid.
//!
//! Conventions
//! -----------
//! - Rows index industries (or goods), columns index time.
//! - Field names follow the model notation; `a` is total factor productivity.
use crate::og::{
    core::validation::validate_expenditure_shares,
    errors::{ParamError, ParamResult},
};
use ndarray::{Array1, Array2};

/// FirmParams — CES technology parameters for all industries over time.
///
/// Purpose
/// -------
/// Carry total factor productivity, capital share, elasticity of substitution,
/// and depreciation for every industry and period in a single validated value.
///
/// Fields
/// ------
/// - `a`: `Array2<f64>`
///   Total factor productivity `A`, shape `(M, T)`.
/// - `gamma`: `Array2<f64>`
///   Capital share of income, shape `(M, T)`.
/// - `epsilon`: `Array2<f64>`
///   Elasticity of substitution between capital and labor, shape `(M, T)`.
/// - `delta`: `Array2<f64>`
///   Per-period depreciation rate, shape `(M, T)`.
///
/// Invariants
/// ----------
/// - All four matrices share the same non-empty shape.
///
/// Notes
/// -----
/// - The steady-state case is a single column (`T = 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct FirmParams {
    /// Total factor productivity.
    pub a: Array2<f64>,
    /// Capital share of income.
    pub gamma: Array2<f64>,
    /// Elasticity of substitution between capital and labor.
    pub epsilon: Array2<f64>,
    /// Depreciation rate.
    pub delta: Array2<f64>,
}

impl FirmParams {
    /// Construct validated technology parameters from `(M, T)` matrices.
    ///
    /// Errors
    /// ------
    /// - `ParamError::EmptyParams` if `a` has no rows or no columns.
    /// - `ParamError::ShapeMismatch` if `gamma`, `epsilon`, or `delta` differ
    ///   in shape from `a`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_ogmodel::og::core::params::FirmParams;
    /// let params = FirmParams::new(
    ///     array![[1.0, 1.0]],
    ///     array![[0.3, 0.3]],
    ///     array![[0.5, 0.5]],
    ///     array![[0.05, 0.05]],
    /// )
    /// .unwrap();
    /// assert_eq!(params.dim(), (1, 2));
    /// ```
    pub fn new(
        a: Array2<f64>, gamma: Array2<f64>, epsilon: Array2<f64>, delta: Array2<f64>,
    ) -> ParamResult<Self> {
        let expected = a.dim();
        if expected.0 == 0 || expected.1 == 0 {
            return Err(ParamError::EmptyParams { name: "A" });
        }
        for (name, arr) in [("gamma", &gamma), ("epsilon", &epsilon), ("delta", &delta)] {
            if arr.dim() != expected {
                return Err(ParamError::ShapeMismatch { name, expected, actual: arr.dim() });
            }
        }
        Ok(FirmParams { a, gamma, epsilon, delta })
    }

    /// Tile per-industry parameter vectors `(M,)` across `periods` columns.
    ///
    /// Errors
    /// ------
    /// - `ParamError::EmptyParams` if `a` is empty or `periods == 0`.
    /// - `ParamError::ShapeMismatch` if the vectors differ in length; shapes
    ///   are reported as `(len, 1)`.
    pub fn stationary(
        a: Array1<f64>, gamma: Array1<f64>, epsilon: Array1<f64>, delta: Array1<f64>,
        periods: usize,
    ) -> ParamResult<Self> {
        if a.is_empty() || periods == 0 {
            return Err(ParamError::EmptyParams { name: "A" });
        }
        for (name, arr) in [("gamma", &gamma), ("epsilon", &epsilon), ("delta", &delta)] {
            if arr.len() != a.len() {
                return Err(ParamError::ShapeMismatch {
                    name,
                    expected: (a.len(), 1),
                    actual: (arr.len(), 1),
                });
            }
        }
        Self::new(
            tile_columns(&a, periods),
            tile_columns(&gamma, periods),
            tile_columns(&epsilon, periods),
            tile_columns(&delta, periods),
        )
    }

    /// Shape `(M, T)` shared by all technology matrices.
    pub fn dim(&self) -> (usize, usize) {
        self.a.dim()
    }
}

/// HouseholdParams — intertemporal preference parameters.
///
/// Fields
/// ------
/// - `beta`: `f64` — discount factor in `[0, 1)`.
/// - `sigma`: `f64` — coefficient of relative risk aversion, `> 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseholdParams {
    /// Discount factor.
    pub beta: f64,
    /// Coefficient of relative risk aversion.
    pub sigma: f64,
}

impl HouseholdParams {
    /// Construct validated household parameters.
    ///
    /// Errors
    /// ------
    /// - `ParamError::InvalidDiscountFactor` unless `beta` is finite and in `[0, 1)`.
    /// - `ParamError::InvalidRiskAversion` unless `sigma` is finite and `> 0`.
    pub fn new(beta: f64, sigma: f64) -> ParamResult<Self> {
        if !beta.is_finite() || !(0.0..1.0).contains(&beta) {
            return Err(ParamError::InvalidDiscountFactor { value: beta });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(ParamError::InvalidRiskAversion { value: sigma });
        }
        Ok(HouseholdParams { beta, sigma })
    }
}

/// Preferences — Cobb-Douglas-over-goods shares and subsistence minima.
///
/// Fields
/// ------
/// - `alpha`: `Array2<f64>` — expenditure shares, shape `(I, T)`.
/// - `c_bar`: `Array2<f64>` — minimum consumption of each good, shape `(I, T)`.
///
/// Invariants
/// ----------
/// - `alpha` passes [`validate_expenditure_shares`].
/// - `c_bar` has the same shape as `alpha`.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Expenditure shares.
    pub alpha: Array2<f64>,
    /// Subsistence minima.
    pub c_bar: Array2<f64>,
}

impl Preferences {
    /// Construct validated preferences.
    ///
    /// Errors
    /// ------
    /// - Any error from [`validate_expenditure_shares`].
    /// - `ParamError::ShapeMismatch` if `c_bar` differs in shape from `alpha`.
    pub fn new(alpha: Array2<f64>, c_bar: Array2<f64>) -> ParamResult<Self> {
        validate_expenditure_shares(alpha.view())?;
        if c_bar.dim() != alpha.dim() {
            return Err(ParamError::ShapeMismatch {
                name: "c_bar",
                expected: alpha.dim(),
                actual: c_bar.dim(),
            });
        }
        Ok(Preferences { alpha, c_bar })
    }
}

// ---- Helper Methods ----

fn tile_columns(values: &Array1<f64>, periods: usize) -> Array2<f64> {
    Array2::from_shape_fn((values.len(), periods), |(m, _)| values[m])
}
