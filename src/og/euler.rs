//! euler — intertemporal Euler-equation residuals for lifetime savings.
//!
//! Purpose
//! -------
//! Measure how far a candidate savings path is from satisfying the
//! consumption–savings first-order condition between adjacent ages
//!
//! ```text
//! u'(c̃_s) = β (1 + r) u'(c̃_{s+1}),   u'(c) = c^(−σ)
//! ```
//!
//! and report infeasible ages with fixed penalties so that a root-finder is
//! pushed away from them.
//!
//! Key behaviors
//! -------------
//! - [`euler_residuals`] / [`euler_residuals_path`] return tagged
//!   [`EulerResidual`] values (`Feasible(x)` or `Infeasible`).
//! - [`euler_errors`] / [`euler_errors_path`] lower those onto `f64`, using
//!   `9999` (difference mode) or `99.99` (percent mode) for infeasible pairs.
//! - Infeasible consumption is replaced by `9999` on a private copy before
//!   marginal utilities are taken; the caller's array is never modified.
//!
//! Invariants & assumptions
//! ------------------------
//! - `c_tilde` and `c_tilde_cstr` have the same length `S`; the output has
//!   length `S − 1` (empty when `S < 2`).
//! - A residual is `Infeasible` iff `c_tilde_cstr[s] || c_tilde_cstr[s + 1]`,
//!   independently of its arithmetic value.
//! - With the `obs_slog` feature and `verbose = true`, a one-line summary is
//!   logged per call; otherwise this module performs no I/O.
use crate::og::{
    core::{
        options::{EulerErrorMode, EulerOptions},
        params::HouseholdParams,
        penalty::{CONSUMPTION_SENTINEL, EulerResidual},
        validation::check_len,
    },
    errors::OGResult,
};
use ndarray::{Array1, ArrayView1};

/// CRRA marginal utility `c^(−σ)`, elementwise.
///
/// Non-positive entries yield `inf` / NaN; callers substitute infeasible
/// consumption before calling.
pub fn marginal_utility(c: ArrayView1<f64>, sigma: f64) -> Array1<f64> {
    c.mapv(|v| v.powf(-sigma))
}

/// Tagged Euler residuals under a constant interest rate.
///
/// Errors
/// ------
/// - `OGError::LengthMismatch` if `c_tilde_cstr` differs in length from
///   `c_tilde`.
pub fn euler_residuals(
    params: &HouseholdParams, r: f64, c_tilde: ArrayView1<f64>, c_tilde_cstr: ArrayView1<bool>,
    mode: EulerErrorMode,
) -> OGResult<Vec<EulerResidual>> {
    check_len("c_tilde_cstr", c_tilde.len(), c_tilde_cstr.len())?;
    Ok(residuals_with(params, |_| r, c_tilde, c_tilde_cstr, mode))
}

/// Tagged Euler residuals under a time-varying interest rate.
///
/// `r[s]` is the return earned on savings carried from age `s` into `s + 1`,
/// so `r` has length `S − 1`.
///
/// Errors
/// ------
/// - `OGError::LengthMismatch` if `c_tilde_cstr` differs in length from
///   `c_tilde`, or `r` is not of length `S − 1`.
pub fn euler_residuals_path(
    params: &HouseholdParams, r: ArrayView1<f64>, c_tilde: ArrayView1<f64>,
    c_tilde_cstr: ArrayView1<bool>, mode: EulerErrorMode,
) -> OGResult<Vec<EulerResidual>> {
    check_len("c_tilde_cstr", c_tilde.len(), c_tilde_cstr.len())?;
    check_len("r", c_tilde.len().saturating_sub(1), r.len())?;
    Ok(residuals_with(params, |s| r[s], c_tilde, c_tilde_cstr, mode))
}

/// Euler errors under a constant interest rate (`get_b_errors`).
///
/// Parameters
/// ----------
/// - `params`: [`HouseholdParams`]
///   Discount factor `β` and risk aversion `σ`.
/// - `r`: `f64`
///   Interest rate.
/// - `c_tilde`: `ArrayView1<f64>`
///   Composite consumption by age, length `S`.
/// - `c_tilde_cstr`: `ArrayView1<bool>`
///   Infeasibility mask for `c_tilde`, length `S`.
/// - `opts`: [`EulerOptions`]
///   Residual form and diagnostics flag.
///
/// Returns
/// -------
/// `OGResult<Array1<f64>>`
///   Length `S − 1`:
///   - difference: `β (1+r) c̃_{s+1}^(−σ) − c̃_s^(−σ)`,
///   - percent: `β (1+r) c̃_{s+1}^(−σ) / c̃_s^(−σ) − 1`,
///   with `9999` / `99.99` wherever age `s` or `s + 1` is flagged.
///
/// Errors
/// ------
/// - `OGError::LengthMismatch` if the mask and consumption differ in length.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_ogmodel::og::{core::{EulerOptions, HouseholdParams}, euler::euler_errors};
/// let params = HouseholdParams::new(0.96, 2.0).unwrap();
/// let c = array![1.0, 1.0];
/// let flags = array![false, true];
/// let errors =
///     euler_errors(&params, 0.04, c.view(), flags.view(), &EulerOptions::default()).unwrap();
/// assert_eq!(errors, array![9999.0]);
/// ```
pub fn euler_errors(
    params: &HouseholdParams, r: f64, c_tilde: ArrayView1<f64>, c_tilde_cstr: ArrayView1<bool>,
    opts: &EulerOptions,
) -> OGResult<Array1<f64>> {
    let residuals = euler_residuals(params, r, c_tilde, c_tilde_cstr, opts.mode)?;
    Ok(lower(&residuals, opts))
}

/// Euler errors under a time-varying interest rate of length `S − 1`.
///
/// Same output and penalties as [`euler_errors`].
pub fn euler_errors_path(
    params: &HouseholdParams, r: ArrayView1<f64>, c_tilde: ArrayView1<f64>,
    c_tilde_cstr: ArrayView1<bool>, opts: &EulerOptions,
) -> OGResult<Array1<f64>> {
    let residuals = euler_residuals_path(params, r, c_tilde, c_tilde_cstr, opts.mode)?;
    Ok(lower(&residuals, opts))
}

// ---- Helper Methods ----

fn residuals_with<F>(
    params: &HouseholdParams, rate: F, c_tilde: ArrayView1<f64>, c_tilde_cstr: ArrayView1<bool>,
    mode: EulerErrorMode,
) -> Vec<EulerResidual>
where
    F: Fn(usize) -> f64,
{
    let ages = c_tilde.len();
    if ages < 2 {
        return Vec::new();
    }

    let mut c = c_tilde.to_owned();
    for (v, &flag) in c.iter_mut().zip(c_tilde_cstr.iter()) {
        if flag {
            *v = CONSUMPTION_SENTINEL;
        }
    }
    let mu = marginal_utility(c.view(), params.sigma);

    (0..ages - 1)
        .map(|s| {
            if c_tilde_cstr[s] || c_tilde_cstr[s + 1] {
                return EulerResidual::Infeasible;
            }
            let (mu_c, mu_cp1) = (mu[s], mu[s + 1]);
            let discounted = params.beta * (1.0 + rate(s)) * mu_cp1;
            EulerResidual::Feasible(match mode {
                EulerErrorMode::Difference => discounted - mu_c,
                EulerErrorMode::PercentDifference => discounted / mu_c - 1.0,
            })
        })
        .collect()
}

fn lower(residuals: &[EulerResidual], opts: &EulerOptions) -> Array1<f64> {
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        crate::observe::log_euler_summary(residuals, opts.mode);
    }
    residuals.iter().map(|res| res.value(opts.mode)).collect()
}
