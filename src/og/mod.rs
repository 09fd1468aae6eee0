//! og — firm and household building blocks of a multi-industry OG model.
//!
//! Purpose
//! -------
//! Provide the closed-form pieces an overlapping-generations solver evaluates
//! inside its root-finding loops: industry prices and factor demands under CES
//! technology, composite prices and consumption demand under Cobb-Douglas
//! preferences with subsistence minima, and Euler-equation residuals for
//! lifetime savings. The solver itself (steady state, transition path) lives
//! outside this crate.
//!
//! Key behaviors
//! -------------
//! - [`firms`]: unit costs `p`, capital / labor demand `K`, `L`, and output `X`.
//! - [`households`]: composite price `p̃`, composite consumption `c̃`, per-good
//!   consumption `c`, and aggregation across cohorts `C`.
//! - [`euler`]: Euler residuals with fixed infeasibility penalties, both as a
//!   numeric array and as tagged [`EulerResidual`] values.
//! - [`core`]: validated parameter containers, options, and shape checks;
//!   [`errors`]: the `OGError` / `ParamError` surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Matrices are `(I, T)` / `(M, T)`: goods or industries on rows, time or
//!   remaining age on columns. Distributions over cohorts are `(S, I, T)`.
//! - All functions take `ArrayView`s and return owned arrays; no input is
//!   modified.
//! - Shapes are validated; numeric preconditions (`ε ≠ 1`, positive prices)
//!   are documented, not guarded.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based. Age / time index `s` or `t` runs along columns.
//! - Constraint masks are `true` exactly where the quantity is `<= 0`.
//! - Apart from the optional `obs_slog` diagnostics in [`euler`], the stack
//!   performs no I/O.
//!
//! Downstream usage
//! ----------------
//! - A typical household evaluation for one cohort:
//!   1. `industry_prices` → map to consumption-good prices `p_c`.
//!   2. `composite_price(alpha, p_c)`.
//!   3. `composite_consumption(...)` with a savings path.
//!   4. `euler_errors(...)` on the resulting `c̃` and mask.
//!   5. `good_consumption(...)`, then `aggregate_consumption` across cohorts.
//! - Python bindings import from this module and rely on the `From<_> for
//!   PyErr` conversions in [`errors`].

pub mod core;
pub mod errors;
pub mod euler;
pub mod firms;
pub mod households;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    EulerErrorMode, EulerOptions, EulerResidual, FirmParams, HouseholdParams, Preferences,
    Savings,
};
pub use self::errors::{OGError, OGResult, ParamError, ParamResult};
pub use self::euler::{
    euler_errors, euler_errors_path, euler_residuals, euler_residuals_path, marginal_utility,
};
pub use self::firms::{capital_demand, industry_output, industry_prices, labor_demand};
pub use self::households::{
    aggregate_consumption, composite_consumption, composite_price, good_consumption,
};

/// Convenience imports for callers evaluating model blocks.
pub mod prelude {
    pub use super::core::{
        EulerErrorMode, EulerOptions, EulerResidual, FirmParams, HouseholdParams, Preferences,
        Savings,
    };
    pub use super::errors::{OGError, OGResult, ParamError, ParamResult};
    pub use super::euler::{euler_errors, euler_errors_path, euler_residuals};
    pub use super::firms::{capital_demand, industry_output, industry_prices, labor_demand};
    pub use super::households::{
        aggregate_consumption, composite_consumption, composite_price, good_consumption,
    };
}
