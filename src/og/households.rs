//! households — composite prices, budget constraints, and consumption demand.
//!
//! Purpose
//! -------
//! Evaluate the household side of the model for preferences that are
//! Cobb-Douglas over goods with subsistence minima `c̄`:
//!
//! ```text
//! p̃_t   = Π_i (p_{i,t} / α_{i,t})^α_{i,t}
//! c̃_s   = ((1+r_s) b_s + w_s n_s − Σ_i p_{i,s} c̄_{i,s} − b_{s+1}) / p̃_s
//! c_i,s = α_{i,s} p̃_s c̃_s / p_{i,s} + c̄_{i,s}
//! C_i,t = Σ_s c_{s,i,t}
//! ```
//!
//! Key behaviors
//! -------------
//! - [`composite_price`]: price of one unit of the composite good.
//! - [`composite_consumption`]: composite consumption implied by the budget
//!   constraint over an individual's remaining life, with a terminal branch
//!   (no forward saving) and a path branch (zero bequest after the last age).
//! - [`good_consumption`]: demand for each good given composite consumption.
//! - [`aggregate_consumption`]: sum of individual demand across cohorts.
//!
//! Invariants & assumptions
//! ------------------------
//! - Goods are on rows; remaining-life periods (or time) are on columns.
//!   Distributions of individual consumption are `(S, I, T)` so that the
//!   aggregate is `(I, T)`, the same layout as prices and output.
//! - Constraint masks flag exactly the entries `<= 0`; flagged quantities are
//!   returned unchanged (no clipping) and remain the caller's to interpret.
//! - Expenditure shares are assumed positive and normalized; this is not
//!   re-checked here (see `validate_expenditure_shares`). A zero share
//!   contributes `inf^0 = 1` to the price index.
//! - No input is mutated.
use crate::og::{
    core::{
        savings::Savings,
        validation::{check_dim, check_len, check_non_empty},
    },
    errors::OGResult,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, ArrayView3, Axis, Zip};

/// Composite consumption price `p̃` (`get_p_tilde`).
///
/// Parameters
/// ----------
/// - `alpha`: `ArrayView2<f64>`
///   Expenditure shares, `(I, T)`.
/// - `p_c`: `ArrayView2<f64>`
///   Consumption-good prices, `(I, T)`.
///
/// Returns
/// -------
/// `OGResult<Array1<f64>>`
///   Length-`T` path `p̃_t = Π_i (p_{i,t}/α_{i,t})^α_{i,t}`.
///
/// Errors
/// ------
/// - `OGError::EmptyInput` if there are no goods.
/// - `OGError::DimMismatch` if `p_c` and `alpha` differ in shape.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_ogmodel::og::households::composite_price;
/// let p = array![[1.7, 2.3]];
/// let p_tilde = composite_price(array![[1.0, 1.0]].view(), p.view()).unwrap();
/// assert_eq!(p_tilde, array![1.7, 2.3]);
/// ```
pub fn composite_price(alpha: ArrayView2<f64>, p_c: ArrayView2<f64>) -> OGResult<Array1<f64>> {
    check_non_empty("alpha", alpha.nrows())?;
    check_dim("p_c", alpha.dim(), p_c.dim())?;
    let factors = Zip::from(&p_c).and(&alpha).map_collect(|&p, &a| (p / a).powf(a));
    Ok(factors.map_axis(Axis(0), |column| column.product()))
}

/// Composite consumption over the remaining life (`get_c_tilde`).
///
/// Parameters
/// ----------
/// - `c_bar`: `ArrayView2<f64>`
///   Subsistence minima, `(I, u)`.
/// - `r`, `w`, `p_tilde`, `n`: `ArrayView1<f64>`
///   Remaining interest rates, wages, composite prices, and exogenous labor
///   supply, each of length `u`.
/// - `p_c`: `ArrayView2<f64>`
///   Remaining consumption-good prices, `(I, u)`.
/// - `b`: [`Savings`]
///   `Terminal(b)` in the last period of life (no forward saving) or
///   `Path(b)` with holdings entering each of the `u` periods.
///
/// Returns
/// -------
/// `OGResult<(Array1<f64>, Array1<bool>)>`
///   `(c_tilde, c_tilde_cstr)` where `c_tilde_cstr[s]` is `true` iff
///   `c_tilde[s] <= 0`.
///
/// Errors
/// ------
/// - `OGError::LengthMismatch` if `w`, `p_tilde`, `n`, or a savings path is
///   not of length `u = r.len()`.
/// - `OGError::DimMismatch` if `p_c` does not have `u` columns or `c_bar`
///   differs in shape from `p_c`.
///
/// Notes
/// -----
/// - In the path branch the holding carried out of the last period is zero
///   (agents die without bequests).
pub fn composite_consumption(
    c_bar: ArrayView2<f64>, r: ArrayView1<f64>, w: ArrayView1<f64>, p_c: ArrayView2<f64>,
    p_tilde: ArrayView1<f64>, n: ArrayView1<f64>, b: Savings<'_>,
) -> OGResult<(Array1<f64>, Array1<bool>)> {
    let u = r.len();
    check_len("w", u, w.len())?;
    check_len("p_tilde", u, p_tilde.len())?;
    check_len("n", u, n.len())?;
    check_dim("p_c", (p_c.nrows(), u), p_c.dim())?;
    check_dim("c_bar", p_c.dim(), c_bar.dim())?;
    if let Savings::Path(path) = b {
        check_len("b", u, path.len())?;
    }

    let subsistence_cost = (&p_c * &c_bar).sum_axis(Axis(0));
    let c_tilde = Array1::from_shape_fn(u, |s| {
        let resources = (1.0 + r[s]) * b.entering(s) + w[s] * n[s] - subsistence_cost[s];
        let spending = match b {
            Savings::Terminal(_) => resources,
            Savings::Path(_) => resources - b.forward(s),
        };
        (1.0 / p_tilde[s]) * spending
    });
    let c_tilde_cstr = c_tilde.mapv(|c| c <= 0.0);
    Ok((c_tilde, c_tilde_cstr))
}

/// Consumption of each good over the remaining life (`get_c`).
///
/// Computes `c_{i,s} = α_{i,s} (p̃_s c̃_s) / p_{i,s} + c̄_{i,s}` and the mask
/// `c <= 0`.
///
/// Errors
/// ------
/// - `OGError::LengthMismatch` if `p_tilde` differs in length from `c_tilde`.
/// - `OGError::DimMismatch` if `alpha`, `c_bar`, or `p_c` is not
///   `(I, c_tilde.len())`.
pub fn good_consumption(
    alpha: ArrayView2<f64>, c_bar: ArrayView2<f64>, c_tilde: ArrayView1<f64>,
    p_c: ArrayView2<f64>, p_tilde: ArrayView1<f64>,
) -> OGResult<(Array2<f64>, Array2<bool>)> {
    let u = c_tilde.len();
    check_len("p_tilde", u, p_tilde.len())?;
    check_dim("alpha", (alpha.nrows(), u), alpha.dim())?;
    check_dim("c_bar", alpha.dim(), c_bar.dim())?;
    check_dim("p_c", alpha.dim(), p_c.dim())?;

    let expenditure = &p_tilde * &c_tilde;
    let c = Array2::from_shape_fn(alpha.dim(), |(i, s)| {
        alpha[[i, s]] * (expenditure[s] / p_c[[i, s]]) + c_bar[[i, s]]
    });
    let c_cstr = c.mapv(|v| v <= 0.0);
    Ok((c, c_cstr))
}

/// Aggregate consumption of each good (`get_C`).
///
/// Sums a distribution of individual consumption laid out `(S, I, T)` over
/// the age axis, returning `(I, T)` with `C[[i, t]] = Σ_s c[[s, i, t]]`.
pub fn aggregate_consumption(c: ArrayView3<f64>) -> Array2<f64> {
    c.sum_axis(Axis(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::og::errors::OGError;
    use approx::assert_relative_eq;
    use ndarray::{Array3, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `composite_price` on a single good, a two-good hand computation, and
    //   the zero-share corner.
    // - Both branches of `composite_consumption`, including zero-bequest
    //   padding and the infeasibility mask.
    // - `good_consumption` values, masks, and budget exhaustion.
    // - `aggregate_consumption` as a sum over ages.
    //
    // They intentionally DO NOT cover:
    // - Euler residuals; those live in `og::euler`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a single good with share one is its own composite.
    //
    // Given
    // -----
    // - One good, three periods, `alpha = 1`.
    //
    // Expect
    // ------
    // - `p_tilde == p` exactly.
    fn composite_price_single_good_returns_its_price() {
        let p = array![[0.8, 1.0, 1.35]];
        let alpha = array![[1.0, 1.0, 1.0]];

        let p_tilde = composite_price(alpha.view(), p.view()).unwrap();

        assert_eq!(p_tilde, array![0.8, 1.0, 1.35]);
    }

    #[test]
    // Purpose
    // -------
    // Pin the geometric index on a two-good case.
    //
    // Given
    // -----
    // - `alpha = (0.5, 0.5)`, `p = (1, 4)`.
    //
    // Expect
    // ------
    // - `p_tilde = (1/0.5)^0.5 (4/0.5)^0.5 = sqrt(2·8) = 4`.
    fn composite_price_two_goods_matches_hand_computation() {
        let alpha = array![[0.5], [0.5]];
        let p = array![[1.0], [4.0]];

        let p_tilde = composite_price(alpha.view(), p.view()).unwrap();

        assert_relative_eq!(p_tilde[0], 4.0, max_relative = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Document that a zero share drops the good from the index instead of
    // producing NaN.
    //
    // Given
    // -----
    // - `alpha = (1, 0)`, `p = (2, 3)`.
    //
    // Expect
    // ------
    // - `(3/0)^0 = inf^0 = 1`, so `p_tilde = 2`.
    fn composite_price_zero_share_contributes_one() {
        let alpha = array![[1.0], [0.0]];
        let p = array![[2.0], [3.0]];

        let p_tilde = composite_price(alpha.view(), p.view()).unwrap();

        assert_eq!(p_tilde[0], 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Ensure an index over no goods and non-conformable prices are rejected.
    //
    // Given
    // -----
    // - A `(0, 2)` share matrix; a `(2, 1)` share matrix against `(2, 2)` prices.
    //
    // Expect
    // ------
    // - `EmptyInput` for `alpha`; `DimMismatch` for `p_c`.
    fn composite_price_rejects_empty_and_mismatched_inputs() {
        let empty = Array2::<f64>::zeros((0, 2));
        let err = composite_price(empty.view(), empty.view()).unwrap_err();
        assert_eq!(err, OGError::EmptyInput { name: "alpha" });

        let alpha = array![[0.5], [0.5]];
        let p = array![[1.0, 1.0], [2.0, 2.0]];
        let err = composite_price(alpha.view(), p.view()).unwrap_err();
        assert_eq!(err, OGError::DimMismatch { name: "p_c", expected: (2, 1), actual: (2, 2) });
    }

    #[test]
    // Purpose
    // -------
    // Reference case for the terminal branch.
    //
    // Given
    // -----
    // - `r = 0.05, w = 1, p_c = [1], p_tilde = 1, n = 1, c_bar = [0], b = 0`.
    //
    // Expect
    // ------
    // - `c_tilde = [1.0]`, not flagged.
    fn composite_consumption_terminal_reference_case() {
        let (c_tilde, cstr) = composite_consumption(
            array![[0.0]].view(),
            array![0.05].view(),
            array![1.0].view(),
            array![[1.0]].view(),
            array![1.0].view(),
            array![1.0].view(),
            Savings::Terminal(0.0),
        )
        .unwrap();

        assert_eq!(c_tilde, array![1.0]);
        assert_eq!(cstr, array![false]);
    }

    #[test]
    // Purpose
    // -------
    // Verify the path branch subtracts next-period savings and pads the last
    // period with a zero bequest, and that the mask flags non-positive values.
    //
    // Given
    // -----
    // - Three periods, one good with price 1 and subsistence 0.1,
    //   `r = 0.1`, `w = 1`, `n = (1, 1, 0.2)`, `p_tilde = 1`,
    //   `b = (0, 1.5, 0.5)`.
    //
    // Expect
    // ------
    // - s=0: `1 − 0.1 − 1.5 = −0.6` (flagged).
    // - s=1: `1.1·1.5 + 1 − 0.1 − 0.5 = 2.05`.
    // - s=2: `1.1·0.5 + 0.2 − 0.1 − 0 = 0.65`.
    fn composite_consumption_path_subtracts_forward_savings() {
        let b = array![0.0, 1.5, 0.5];

        let (c_tilde, cstr) = composite_consumption(
            array![[0.1, 0.1, 0.1]].view(),
            array![0.1, 0.1, 0.1].view(),
            array![1.0, 1.0, 1.0].view(),
            array![[1.0, 1.0, 1.0]].view(),
            array![1.0, 1.0, 1.0].view(),
            array![1.0, 1.0, 0.2].view(),
            Savings::Path(b.view()),
        )
        .unwrap();

        assert_relative_eq!(c_tilde[0], -0.6, epsilon = 1e-12);
        assert_relative_eq!(c_tilde[1], 2.05, epsilon = 1e-12);
        assert_relative_eq!(c_tilde[2], 0.65, epsilon = 1e-12);
        assert_eq!(cstr, array![true, false, false]);
        assert_eq!(b, array![0.0, 1.5, 0.5]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a savings path of the wrong length is rejected.
    //
    // Given
    // -----
    // - Two remaining periods and a savings path of length three.
    //
    // Expect
    // ------
    // - `OGError::LengthMismatch { name: "b", expected: 2, actual: 3 }`.
    fn composite_consumption_rejects_short_savings_path() {
        let b = array![0.0, 0.1, 0.2];

        let err = composite_consumption(
            array![[0.0, 0.0]].view(),
            array![0.05, 0.05].view(),
            array![1.0, 1.0].view(),
            array![[1.0, 1.0]].view(),
            array![1.0, 1.0].view(),
            array![1.0, 1.0].view(),
            Savings::Path(b.view()),
        )
        .unwrap_err();

        assert_eq!(err, OGError::LengthMismatch { name: "b", expected: 2, actual: 3 });
    }

    #[test]
    // Purpose
    // -------
    // Verify good-level demand and that it exhausts composite expenditure
    // net of subsistence.
    //
    // Given
    // -----
    // - Two goods, two periods, shares (0.3, 0.7), prices (1, 2) and (1.5, 0.5),
    //   subsistence (0.1, 0), composite consumption (2, 3).
    //
    // Expect
    // ------
    // - `Σ_i p_i (c_i − c̄_i) = p̃ c̃` in every period.
    // - No entry flagged.
    fn good_consumption_exhausts_composite_expenditure() {
        let alpha = array![[0.3, 0.3], [0.7, 0.7]];
        let p_c = array![[1.0, 1.5], [2.0, 0.5]];
        let c_bar = array![[0.1, 0.1], [0.0, 0.0]];
        let p_tilde = composite_price(alpha.view(), p_c.view()).unwrap();
        let c_tilde = array![2.0, 3.0];

        let (c, cstr) = good_consumption(
            alpha.view(),
            c_bar.view(),
            c_tilde.view(),
            p_c.view(),
            p_tilde.view(),
        )
        .unwrap();

        for s in 0..2 {
            let spent: f64 = (0..2).map(|i| p_c[[i, s]] * (c[[i, s]] - c_bar[[i, s]])).sum();
            assert_relative_eq!(spent, p_tilde[s] * c_tilde[s], max_relative = 1e-12);
        }
        assert!(cstr.iter().all(|&flag| !flag));
    }

    #[test]
    // Purpose
    // -------
    // Ensure negative composite consumption propagates to a flagged good
    // without clipping.
    //
    // Given
    // -----
    // - One good, `alpha = 1`, `p = p_tilde = 1`, `c_bar = 0`, `c_tilde = −0.5`.
    //
    // Expect
    // ------
    // - `c = −0.5` and the mask is `true`.
    fn good_consumption_flags_without_clipping() {
        let (c, cstr) = good_consumption(
            array![[1.0]].view(),
            array![[0.0]].view(),
            array![-0.5].view(),
            array![[1.0]].view(),
            array![1.0].view(),
        )
        .unwrap();

        assert_eq!(c, array![[-0.5]]);
        assert_eq!(cstr, array![[true]]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-conformable good-level inputs are rejected by name.
    //
    // Given
    // -----
    // - Two periods of composite consumption with a one-period `alpha`; then
    //   conformable `alpha` with a `c_bar` and a `p_c` carrying an extra good.
    //
    // Expect
    // ------
    // - `DimMismatch` naming `alpha`, `c_bar`, and `p_c` in turn.
    fn good_consumption_rejects_mismatched_shapes() {
        let c_tilde = array![1.0, 1.0];
        let p_tilde = array![1.0, 1.0];
        let alpha = array![[0.5, 0.5], [0.5, 0.5]];
        let extra_good = Array2::<f64>::ones((3, 2));

        let err = good_consumption(
            array![[0.5], [0.5]].view(),
            alpha.view(),
            c_tilde.view(),
            alpha.view(),
            p_tilde.view(),
        )
        .unwrap_err();
        assert_eq!(err, OGError::DimMismatch { name: "alpha", expected: (2, 2), actual: (2, 1) });

        let err = good_consumption(
            alpha.view(),
            extra_good.view(),
            c_tilde.view(),
            alpha.view(),
            p_tilde.view(),
        )
        .unwrap_err();
        assert_eq!(err, OGError::DimMismatch { name: "c_bar", expected: (2, 2), actual: (3, 2) });

        let err = good_consumption(
            alpha.view(),
            alpha.view(),
            c_tilde.view(),
            extra_good.view(),
            p_tilde.view(),
        )
        .unwrap_err();
        assert_eq!(err, OGError::DimMismatch { name: "p_c", expected: (2, 2), actual: (3, 2) });
    }

    #[test]
    // Purpose
    // -------
    // Reference case for aggregation over ages.
    //
    // Given
    // -----
    // - 2 ages × 1 good × 1 period with `c = [[2.0]], [[3.0]]`.
    //
    // Expect
    // ------
    // - `C = [[5.0]]`.
    fn aggregate_consumption_sums_over_ages() {
        let c = Array3::from_shape_vec((2, 1, 1), vec![2.0, 3.0]).unwrap();

        let agg = aggregate_consumption(c.view());

        assert_eq!(agg, array![[5.0]]);
    }

    #[test]
    // Purpose
    // -------
    // Verify `C[[i, t]] = Σ_s c[[s, i, t]]` on a larger distribution.
    //
    // Given
    // -----
    // - 3 ages × 2 goods × 4 periods with `c[[s, i, t]] = s + 10 i + 100 t`.
    //
    // Expect
    // ------
    // - Output shape `(2, 4)` and entries equal to the manual sum.
    fn aggregate_consumption_matches_manual_sum() {
        let c = Array3::from_shape_fn((3, 2, 4), |(s, i, t)| {
            s as f64 + 10.0 * i as f64 + 100.0 * t as f64
        });

        let agg = aggregate_consumption(c.view());

        assert_eq!(agg.dim(), (2, 4));
        for ((i, t), &total) in agg.indexed_iter() {
            let manual: f64 = (0..3).map(|s| c[[s, i, t]]).sum();
            assert_eq!(total, manual);
        }
    }
}
