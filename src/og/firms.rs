//! firms — CES unit costs, factor demands, and output by industry.
//!
//! Purpose
//! -------
//! Evaluate the closed-form solution of each industry's cost-minimization
//! problem under CES technology
//!
//! ```text
//! X = A ( γ^(1/ε) K^((ε−1)/ε) + (1−γ)^(1/ε) L^((ε−1)/ε) )^(ε/(ε−1))
//! ```
//!
//! given the rental rate of capital `r + δ` and the wage `w`. All quantities
//! are `(M, T)` matrices with industries on rows and time on columns; the
//! interest-rate and wage paths `r`, `w` have length `T` and are broadcast
//! across industries.
//!
//! Key behaviors
//! -------------
//! - [`industry_prices`]: unit cost (= competitive price) of each industry.
//! - [`capital_demand`] / [`labor_demand`]: cost-minimizing factor demands
//!   for a given output `X`.
//! - [`industry_output`]: the technology itself, mapping `(K, L)` back to `X`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are shape-checked; mismatches return [`OGError`](crate::og::errors::OGError)
//!   values.
//! - Values are **not** guarded. The formulas assume `ε ≠ 1`, `0 < γ < 1`,
//!   `A > 0`, `w > 0`, and `r + δ > 0`; outside that region they return
//!   NaN/±inf exactly as the algebra dictates. In particular `ε = 1` does not
//!   fall back to the Cobb-Douglas limit.
//!
//! Testing notes
//! -------------
//! - Unit tests check positivity of prices, the marginal-rate-of-substitution
//!   ratio `L/K`, the `(K, L) → X` round trip, the zero-profit identity
//!   `(r+δ)K + wL = pX`, and the first-order conditions via finite
//!   differences.
use crate::og::{
    core::{params::FirmParams, validation::{check_dim, check_len}},
    errors::OGResult,
};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Industry prices `p` along the time path (`get_p`).
///
/// Parameters
/// ----------
/// - `params`: [`FirmParams`]
///   Technology `(A, γ, ε, δ)`, each `(M, T)`.
/// - `r`: `ArrayView1<f64>`
///   Interest-rate path of length `T`.
/// - `w`: `ArrayView1<f64>`
///   Wage path of length `T`.
///
/// Returns
/// -------
/// `OGResult<Array2<f64>>`
///   `(M, T)` matrix with
///   `p = (1/A) (γ (r+δ)^(1−ε) + (1−γ) w^(1−ε))^(1/(1−ε))`.
///
/// Errors
/// ------
/// - `OGError::LengthMismatch` if `r` or `w` is not of length `T`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_ogmodel::og::{core::FirmParams, firms::industry_prices};
/// let params = FirmParams::new(
///     array![[1.0]], array![[0.3]], array![[0.5]], array![[0.05]],
/// ).unwrap();
/// let p = industry_prices(&params, array![0.05].view(), array![1.0].view()).unwrap();
/// assert!(p[[0, 0]] > 0.0);
/// ```
pub fn industry_prices(
    params: &FirmParams, r: ArrayView1<f64>, w: ArrayView1<f64>,
) -> OGResult<Array2<f64>> {
    check_factor_prices(params, r, w)?;
    Ok(Array2::from_shape_fn(params.dim(), |(m, t)| {
        let (a, gamma, epsilon, delta) = technology_at(params, m, t);
        let one_m_eps = 1.0 - epsilon;
        (1.0 / a)
            * (gamma * (r[t] + delta).powf(one_m_eps) + (1.0 - gamma) * w[t].powf(one_m_eps))
                .powf(1.0 / one_m_eps)
    }))
}

/// Capital demand `K` for output `X` along the time path (`get_K`).
///
/// Parameters
/// ----------
/// - `r`, `w`: `ArrayView1<f64>`
///   Interest-rate and wage paths of length `T`.
/// - `x`: `ArrayView2<f64>`
///   Output of each industry, `(M, T)`.
/// - `params`: [`FirmParams`]
///   Technology `(A, γ, ε, δ)`, each `(M, T)`.
///
/// Returns
/// -------
/// `OGResult<Array2<f64>>`
///   `(M, T)` matrix with
///   `K = (X/A) (γ^(1/ε) + (1−γ)^(1/ε) ((1−γ)/γ)^((ε−1)/ε) ((r+δ)/w)^(ε−1))^(ε/(1−ε))`.
///
/// Errors
/// ------
/// - `OGError::LengthMismatch` if `r` or `w` is not of length `T`.
/// - `OGError::DimMismatch` if `x` is not `(M, T)`.
pub fn capital_demand(
    r: ArrayView1<f64>, w: ArrayView1<f64>, x: ArrayView2<f64>, params: &FirmParams,
) -> OGResult<Array2<f64>> {
    check_factor_prices(params, r, w)?;
    check_dim("X", params.dim(), x.dim())?;
    Ok(Array2::from_shape_fn(params.dim(), |(m, t)| {
        let (a, gamma, epsilon, delta) = technology_at(params, m, t);
        let rental_to_wage = (r[t] + delta) / w[t];
        let bracket = gamma.powf(1.0 / epsilon)
            + (1.0 - gamma).powf(1.0 / epsilon)
                * ((1.0 - gamma) / gamma).powf((epsilon - 1.0) / epsilon)
                * rental_to_wage.powf(epsilon - 1.0);
        (x[[m, t]] / a) * bracket.powf(epsilon / (1.0 - epsilon))
    }))
}

/// Labor demand `L` given capital demand `K` (`get_L`).
///
/// Computes `L = K ((1−γ)/γ) ((r+δ)/w)^ε`, the CES marginal-rate-of-
/// substitution condition solved for labor. `A` is not used.
///
/// Errors
/// ------
/// - `OGError::LengthMismatch` if `r` or `w` is not of length `T`.
/// - `OGError::DimMismatch` if `k` is not `(M, T)`.
pub fn labor_demand(
    r: ArrayView1<f64>, w: ArrayView1<f64>, k: ArrayView2<f64>, params: &FirmParams,
) -> OGResult<Array2<f64>> {
    check_factor_prices(params, r, w)?;
    check_dim("K", params.dim(), k.dim())?;
    Ok(Array2::from_shape_fn(params.dim(), |(m, t)| {
        let (_, gamma, epsilon, delta) = technology_at(params, m, t);
        k[[m, t]] * ((1.0 - gamma) / gamma) * ((r[t] + delta) / w[t]).powf(epsilon)
    }))
}

/// CES output `X` produced from capital `K` and labor `L` (`get_X`).
///
/// Errors
/// ------
/// - `OGError::DimMismatch` if `k` or `l` is not `(M, T)`.
///
/// Notes
/// -----
/// - Inverse of [`capital_demand`] / [`labor_demand`]: feeding their output
///   back in reproduces `X` up to rounding.
pub fn industry_output(
    k: ArrayView2<f64>, l: ArrayView2<f64>, params: &FirmParams,
) -> OGResult<Array2<f64>> {
    check_dim("K", params.dim(), k.dim())?;
    check_dim("L", params.dim(), l.dim())?;
    Ok(Array2::from_shape_fn(params.dim(), |(m, t)| {
        let (a, gamma, epsilon, _) = technology_at(params, m, t);
        let rho = (epsilon - 1.0) / epsilon;
        a * (gamma.powf(1.0 / epsilon) * k[[m, t]].powf(rho)
            + (1.0 - gamma).powf(1.0 / epsilon) * l[[m, t]].powf(rho))
        .powf(1.0 / rho)
    }))
}

// ---- Helper Methods ----

fn check_factor_prices(
    params: &FirmParams, r: ArrayView1<f64>, w: ArrayView1<f64>,
) -> OGResult<()> {
    let (_, periods) = params.dim();
    check_len("r", periods, r.len())?;
    check_len("w", periods, w.len())
}

#[inline]
fn technology_at(params: &FirmParams, m: usize, t: usize) -> (f64, f64, f64, f64) {
    (params.a[[m, t]], params.gamma[[m, t]], params.epsilon[[m, t]], params.delta[[m, t]])
}
