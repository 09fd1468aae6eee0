//! OG validation helpers — reusable shape and share checks.
//!
//! Purpose
//! -------
//! Centralize the small validation routines every formula runs before touching
//! numbers: conformability of paths and matrices, non-emptiness of inputs, and
//! (optionally, on the caller's side) well-formed expenditure shares.
//!
//! Key behaviors
//! -------------
//! - Compare the length of 1-D paths and the `(rows, cols)` shape of 2-D
//!   matrices against the shape implied by a reference input.
//! - Validate Cobb-Douglas expenditure shares: strictly positive, finite, and
//!   summing to one per period within [`SHARE_SUM_TOL`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Shape checks never inspect values; NaN/±inf entries pass through and are
//!   left to propagate in the formulas.
//! - Share validation is never invoked by the formulas themselves; the
//!   composite price index assumes well-formed shares but does not enforce
//!   them.
//!
//! Conventions
//! -----------
//! - Rows index industries / goods, columns index time (or remaining age).
//! - Helpers return [`OGResult`] / [`ParamResult`] and never panic on invalid
//!   inputs.
use crate::og::errors::{OGError, OGResult, ParamError, ParamResult};
use ndarray::ArrayView2;

/// Absolute tolerance on `Σ_i alpha_{i,t} = 1` used by
/// [`validate_expenditure_shares`].
pub const SHARE_SUM_TOL: f64 = 1e-8;

/// Check that a 1-D input has the expected length.
///
/// Errors
/// ------
/// - `OGError::LengthMismatch` naming the input when `actual != expected`.
pub fn check_len(name: &'static str, expected: usize, actual: usize) -> OGResult<()> {
    if expected != actual {
        return Err(OGError::LengthMismatch { name, expected, actual });
    }
    Ok(())
}

/// Check that a 2-D input has the expected `(rows, cols)` shape.
///
/// Errors
/// ------
/// - `OGError::DimMismatch` naming the input when the shapes differ.
pub fn check_dim(
    name: &'static str, expected: (usize, usize), actual: (usize, usize),
) -> OGResult<()> {
    if expected != actual {
        return Err(OGError::DimMismatch { name, expected, actual });
    }
    Ok(())
}

/// Check that an input carries at least one element.
pub fn check_non_empty(name: &'static str, len: usize) -> OGResult<()> {
    if len == 0 {
        return Err(OGError::EmptyInput { name });
    }
    Ok(())
}

/// Validate Cobb-Douglas expenditure shares.
///
/// Parameters
/// ----------
/// - `alpha`: `ArrayView2<f64>`
///   Shares with goods on rows and periods on columns.
///
/// Returns
/// -------
/// `ParamResult<()>`
///   - `Ok(())` if every share is finite and strictly positive and every
///     column sums to one within [`SHARE_SUM_TOL`].
///
/// Errors
/// ------
/// - `ParamError::EmptyParams` if `alpha` has no rows or no columns.
/// - `ParamError::InvalidExpenditureShare` for the first non-finite or
///   non-positive share (scanning period by period).
/// - `ParamError::SharesNotNormalized` for the first period whose shares do
///   not sum to one.
///
/// Notes
/// -----
/// - A zero share makes `(p/alpha)^alpha` evaluate to `inf^0 = 1` in IEEE
///   arithmetic, which silently drops the good from the price index; this
///   check exists so callers can rule that out up front.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_ogmodel::og::core::validation::validate_expenditure_shares;
/// let alpha = array![[0.25, 0.5], [0.75, 0.5]];
/// assert!(validate_expenditure_shares(alpha.view()).is_ok());
/// ```
pub fn validate_expenditure_shares(alpha: ArrayView2<f64>) -> ParamResult<()> {
    let (goods, periods) = alpha.dim();
    if goods == 0 || periods == 0 {
        return Err(ParamError::EmptyParams { name: "alpha" });
    }
    for (t, column) in alpha.columns().into_iter().enumerate() {
        for (good, &value) in column.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParamError::InvalidExpenditureShare { good, t, value });
            }
        }
        let sum = column.sum();
        if (sum - 1.0).abs() > SHARE_SUM_TOL {
            return Err(ParamError::SharesNotNormalized { t, sum });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Length / shape helpers on matching and mismatching inputs.
    // - Expenditure-share validation on valid shares, zero shares, and
    //   columns that do not sum to one.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the shape helpers accept conformable inputs and report the
    // offending input otherwise.
    //
    // Given
    // -----
    // - Matching and mismatching lengths / shapes.
    //
    // Expect
    // ------
    // - `Ok(())` on match; `LengthMismatch` / `DimMismatch` / `EmptyInput`
    //   with the given name on mismatch.
    fn shape_helpers_report_named_mismatches() {
        assert!(check_len("r", 3, 3).is_ok());
        assert_eq!(
            check_len("r", 3, 2).unwrap_err(),
            OGError::LengthMismatch { name: "r", expected: 3, actual: 2 }
        );
        assert!(check_dim("p_c", (2, 3), (2, 3)).is_ok());
        assert_eq!(
            check_dim("p_c", (2, 3), (3, 2)).unwrap_err(),
            OGError::DimMismatch { name: "p_c", expected: (2, 3), actual: (3, 2) }
        );
        assert_eq!(check_non_empty("c_tilde", 0).unwrap_err(), OGError::EmptyInput {
            name: "c_tilde"
        });
    }

    #[test]
    // Purpose
    // -------
    // Ensure proper simplex shares are accepted.
    //
    // Given
    // -----
    // - Two goods, two periods, columns (0.3, 0.7) and (0.5, 0.5).
    //
    // Expect
    // ------
    // - `validate_expenditure_shares` returns `Ok(())`.
    fn validate_expenditure_shares_accepts_simplex_columns() {
        let alpha = array![[0.3, 0.5], [0.7, 0.5]];

        assert!(validate_expenditure_shares(alpha.view()).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure a zero share is rejected with its (good, period) location.
    //
    // Given
    // -----
    // - Share of good 1 in period 0 equal to 0.0.
    //
    // Expect
    // ------
    // - `ParamError::InvalidExpenditureShare { good: 1, t: 0, value: 0.0 }`.
    fn validate_expenditure_shares_rejects_zero_share() {
        let alpha = array![[1.0], [0.0]];

        let err = validate_expenditure_shares(alpha.view()).unwrap_err();

        assert_eq!(err, ParamError::InvalidExpenditureShare { good: 1, t: 0, value: 0.0 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure columns that do not sum to one are rejected.
    //
    // Given
    // -----
    // - Period 1 shares (0.5, 0.6) summing to 1.1.
    //
    // Expect
    // ------
    // - `ParamError::SharesNotNormalized` for `t = 1`.
    fn validate_expenditure_shares_rejects_unnormalized_column() {
        let alpha = array![[0.5, 0.5], [0.5, 0.6]];

        let err = validate_expenditure_shares(alpha.view()).unwrap_err();

        match err {
            ParamError::SharesNotNormalized { t, .. } => assert_eq!(t, 1),
            other => panic!("expected SharesNotNormalized, got {other:?}"),
        }
    }
}
