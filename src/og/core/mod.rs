//! core — shared OG parameters, options, savings inputs, and validation.
//!
//! Purpose
//! -------
//! Collect the building blocks every firm and household formula relies on:
//! validated parameter containers, Euler-error configuration, the savings
//! input of the budget constraint, infeasibility penalties, and shape checks.
//!
//! Key behaviors
//! -------------
//! - Define parameter containers ([`FirmParams`], [`HouseholdParams`],
//!   [`Preferences`]) that validate shapes and ranges once at construction.
//! - Define [`EulerErrorMode`] / [`EulerOptions`] for the residual form and
//!   diagnostics, and [`Savings`] for the terminal vs. path budget branch.
//! - Fix the sentinel magnitudes and the tagged [`EulerResidual`] in
//!   [`penalty`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Matrices put industries / goods on rows and time (or remaining age) on
//!   columns; 1-D paths run along the column axis.
//! - Technology values are not range-checked; degenerate values propagate as
//!   NaN/±inf through the formulas.
//!
//! Conventions
//! -----------
//! - This module avoids I/O and logging; it only inspects numeric values and
//!   shapes. Errors are reported via `OGResult` / `ParamResult`.

pub mod options;
pub mod params;
pub mod penalty;
pub mod savings;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::options::{EulerErrorMode, EulerOptions};
pub use self::params::{FirmParams, HouseholdParams, Preferences};
pub use self::penalty::{CONSUMPTION_SENTINEL, DIFF_PENALTY, EulerResidual, PCT_PENALTY};
pub use self::savings::Savings;
pub use self::validation::{
    SHARE_SUM_TOL, check_dim, check_len, check_non_empty, validate_expenditure_shares,
};
