//! rust_ogmodel — firm and household equations for multi-industry OG models.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the OG price and quantity formulas to Python via the `_rust_ogmodel`
//! extension module. When the `python-bindings` feature is enabled, this
//! module defines the Python-facing functions and submodules used by the
//! `rust_ogmodel` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`og`) as the public crate surface.
//! - Define `#[pyfunction]` wrappers (`get_p`, `get_p_tilde`, `get_c_tilde`,
//!   `get_c`, `get_C`, `get_K`, `get_L`, `get_X`, `get_b_errors`) and the
//!   `#[pymodule]` initializer for the `_rust_ogmodel` Python extension.
//! - Create and register the `firms` submodule under `rust_ogmodel` so that
//!   dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in [`og`]; this file performs only FFI
//!   glue, input conversion, and error mapping.
//! - Python callers use the `(I, T)` / `(S, I, T)` axis layout documented in
//!   [`og`]; no transposition happens at the boundary.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as `OGError` / `ParamError`
//!   internally and converted to `ValueError` at the PyO3 boundary.
//! - Arrays are returned as freshly allocated numpy arrays; inputs are only
//!   borrowed.
//! - Python signatures follow the established OG call shapes:
//!   `get_p((A, gamma, epsilon, delta), r, w)`,
//!   `get_c_tilde(c_bar, r, w, p_c, p_tilde, n, b)`,
//!   `get_K(r, w, X, A, gamma, epsilon, delta)`,
//!   `get_L(r, w, K, gamma, epsilon, delta)`,
//!   `get_b_errors((beta, sigma), r, c_tilde, c_tilde_cstr, diff=True)`.
//!   The Rust functions order arguments differently (parameters by reference,
//!   paths first); the wrappers do the reordering.
//! - Floats and 1-D arrays are broadcast as described in [`utils`], so
//!   terminal-period calls may pass scalar paths and per-good vectors.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`og`] (or [`og::prelude`]) directly
//!   and can ignore the items guarded by `python-bindings`.
//! - The Python packaging layer imports `_rust_ogmodel.firms` and hands the
//!   functions to its equilibrium solver.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in [`og`] and by the
//!   integration test under `tests/`; the bindings are exercised from Python.

pub mod og;
#[cfg(feature = "obs_slog")]
pub mod observe;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray3};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use crate::{
    og::{
        core::{
            options::{EulerErrorMode, EulerOptions},
            params::FirmParams,
        },
        euler::euler_errors,
        firms::{capital_demand, industry_output, industry_prices, labor_demand},
        households::{
            aggregate_consumption, composite_consumption, composite_price, good_consumption,
        },
    },
    utils::{
        extract_array_arg, extract_bool_array, extract_f64_array, extract_firm_params,
        extract_household_params, infer_periods,
    },
};

/// Technology tuple `(A, gamma, epsilon, delta)` as passed from Python.
#[cfg(feature = "python-bindings")]
type TechnologyArgs<'py> =
    (Bound<'py, PyAny>, Bound<'py, PyAny>, Bound<'py, PyAny>, Bound<'py, PyAny>);

/// get_p — industry prices `(M, T)` from interest-rate and wage paths.
///
/// `params` is the tuple `(A, gamma, epsilon, delta)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (params, r, w))]
pub fn get_p<'py>(
    py: Python<'py>, params: TechnologyArgs<'py>, r: &Bound<'py, PyAny>, w: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let (a, gamma, epsilon, delta) = params;
    let (a, gamma) = (extract_array_arg(py, &a)?, extract_array_arg(py, &gamma)?);
    let (epsilon, delta) = (extract_array_arg(py, &epsilon)?, extract_array_arg(py, &delta)?);
    let (r, w) = (extract_array_arg(py, r)?, extract_array_arg(py, w)?);
    let u = infer_periods(&[&r, &w], &[&a, &gamma, &epsilon, &delta]);

    let params = extract_firm_params(a, gamma, epsilon, delta, u)?;
    let p = industry_prices(&params, r.into_path("r", u)?.view(), w.into_path("w", u)?.view())?;
    Ok(p.into_pyarray(py))
}

/// get_p_tilde — composite consumption price path of length `T`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (alpha, p_c))]
pub fn get_p_tilde<'py>(
    py: Python<'py>, alpha: &Bound<'py, PyAny>, p_c: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let (alpha, p_c) = (extract_array_arg(py, alpha)?, extract_array_arg(py, p_c)?);
    let u = infer_periods(&[], &[&alpha, &p_c]);
    let p_tilde = composite_price(alpha.into_matrix(u).view(), p_c.into_matrix(u).view())?;
    Ok(p_tilde.into_pyarray(py))
}

/// get_c_tilde — composite consumption and its `<= 0` mask.
///
/// A float `b` selects the terminal-period branch; an array selects the
/// savings-path branch. Paths may be floats and `p_c`/`c_bar` may be 1-D
/// per-good vectors; see [`utils`] for the broadcasting rules.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (c_bar, r, w, p_c, p_tilde, n, b))]
pub fn get_c_tilde<'py>(
    py: Python<'py>, c_bar: &Bound<'py, PyAny>, r: &Bound<'py, PyAny>, w: &Bound<'py, PyAny>,
    p_c: &Bound<'py, PyAny>, p_tilde: &Bound<'py, PyAny>, n: &Bound<'py, PyAny>,
    b: &Bound<'py, PyAny>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<bool>>)> {
    let (c_bar, p_c) = (extract_array_arg(py, c_bar)?, extract_array_arg(py, p_c)?);
    let (r, w) = (extract_array_arg(py, r)?, extract_array_arg(py, w)?);
    let (p_tilde, n) = (extract_array_arg(py, p_tilde)?, extract_array_arg(py, n)?);
    let b = extract_array_arg(py, b)?;
    let u = infer_periods(&[&r, &w, &p_tilde, &n, &b], &[&c_bar, &p_c]);

    let (c_tilde, c_tilde_cstr) = composite_consumption(
        c_bar.into_matrix(u).view(),
        r.into_path("r", u)?.view(),
        w.into_path("w", u)?.view(),
        p_c.into_matrix(u).view(),
        p_tilde.into_path("p_tilde", u)?.view(),
        n.into_path("n", u)?.view(),
        b.as_savings("b")?,
    )?;
    Ok((c_tilde.into_pyarray(py), c_tilde_cstr.into_pyarray(py)))
}

/// get_c — consumption of each good `(I, S)` and its `<= 0` mask.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (alpha, c_bar, c_tilde, p_c, p_tilde))]
pub fn get_c<'py>(
    py: Python<'py>, alpha: &Bound<'py, PyAny>, c_bar: &Bound<'py, PyAny>,
    c_tilde: &Bound<'py, PyAny>, p_c: &Bound<'py, PyAny>, p_tilde: &Bound<'py, PyAny>,
) -> PyResult<(Bound<'py, PyArray2<f64>>, Bound<'py, PyArray2<bool>>)> {
    let (alpha, c_bar) = (extract_array_arg(py, alpha)?, extract_array_arg(py, c_bar)?);
    let (c_tilde, p_c) = (extract_array_arg(py, c_tilde)?, extract_array_arg(py, p_c)?);
    let p_tilde = extract_array_arg(py, p_tilde)?;
    let u = infer_periods(&[&c_tilde, &p_tilde], &[&alpha, &c_bar, &p_c]);

    let (c, c_cstr) = good_consumption(
        alpha.into_matrix(u).view(),
        c_bar.into_matrix(u).view(),
        c_tilde.into_path("c_tilde", u)?.view(),
        p_c.into_matrix(u).view(),
        p_tilde.into_path("p_tilde", u)?.view(),
    )?;
    Ok((c.into_pyarray(py), c_cstr.into_pyarray(py)))
}

/// get_C — aggregate consumption `(I, T)` from an `(S, I, T)` distribution.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "get_C", signature = (c))]
pub fn get_aggregate_c<'py>(
    py: Python<'py>, c: PyReadonlyArray3<'py, f64>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    Ok(aggregate_consumption(c.as_array()).into_pyarray(py))
}

/// get_K — capital demand `(M, T)` for output `X`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "get_K", signature = (r, w, x, a, gamma, epsilon, delta))]
pub fn get_k<'py>(
    py: Python<'py>, r: &Bound<'py, PyAny>, w: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>,
    a: &Bound<'py, PyAny>, gamma: &Bound<'py, PyAny>, epsilon: &Bound<'py, PyAny>,
    delta: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let (r, w) = (extract_array_arg(py, r)?, extract_array_arg(py, w)?);
    let x = extract_array_arg(py, x)?;
    let (a, gamma) = (extract_array_arg(py, a)?, extract_array_arg(py, gamma)?);
    let (epsilon, delta) = (extract_array_arg(py, epsilon)?, extract_array_arg(py, delta)?);
    let u = infer_periods(&[&r, &w], &[&x, &a, &gamma, &epsilon, &delta]);

    let params = extract_firm_params(a, gamma, epsilon, delta, u)?;
    let k = capital_demand(
        r.into_path("r", u)?.view(),
        w.into_path("w", u)?.view(),
        x.into_matrix(u).view(),
        &params,
    )?;
    Ok(k.into_pyarray(py))
}

/// get_L — labor demand `(M, T)` given capital `K`.
///
/// Productivity does not enter labor demand, so no `A` is taken.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "get_L", signature = (r, w, k, gamma, epsilon, delta))]
pub fn get_l<'py>(
    py: Python<'py>, r: &Bound<'py, PyAny>, w: &Bound<'py, PyAny>, k: &Bound<'py, PyAny>,
    gamma: &Bound<'py, PyAny>, epsilon: &Bound<'py, PyAny>, delta: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let (r, w) = (extract_array_arg(py, r)?, extract_array_arg(py, w)?);
    let k = extract_array_arg(py, k)?;
    let gamma = extract_array_arg(py, gamma)?;
    let (epsilon, delta) = (extract_array_arg(py, epsilon)?, extract_array_arg(py, delta)?);
    let u = infer_periods(&[&r, &w], &[&k, &gamma, &epsilon, &delta]);

    let gamma = gamma.into_matrix(u);
    let a = Array2::ones(gamma.dim());
    let params = FirmParams::new(a, gamma, epsilon.into_matrix(u), delta.into_matrix(u))?;
    let l = labor_demand(
        r.into_path("r", u)?.view(),
        w.into_path("w", u)?.view(),
        k.into_matrix(u).view(),
        &params,
    )?;
    Ok(l.into_pyarray(py))
}

/// get_X — CES output `(M, T)` from capital and labor.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "get_X", signature = (k, l, a, gamma, epsilon, delta))]
pub fn get_x<'py>(
    py: Python<'py>, k: &Bound<'py, PyAny>, l: &Bound<'py, PyAny>, a: &Bound<'py, PyAny>,
    gamma: &Bound<'py, PyAny>, epsilon: &Bound<'py, PyAny>, delta: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let (k, l) = (extract_array_arg(py, k)?, extract_array_arg(py, l)?);
    let (a, gamma) = (extract_array_arg(py, a)?, extract_array_arg(py, gamma)?);
    let (epsilon, delta) = (extract_array_arg(py, epsilon)?, extract_array_arg(py, delta)?);
    let u = infer_periods(&[], &[&k, &l, &a, &gamma, &epsilon, &delta]);

    let params = extract_firm_params(a, gamma, epsilon, delta, u)?;
    let x = industry_output(k.into_matrix(u).view(), l.into_matrix(u).view(), &params)?;
    Ok(x.into_pyarray(py))
}

/// get_b_errors — Euler errors of length `S - 1` with 9999 / 99.99 penalties.
///
/// `params` is the tuple `(beta, sigma)`. `verbose` is an extra keyword that
/// logs a summary when built with `obs_slog`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (params, r, c_tilde, c_tilde_cstr, diff = true, verbose = false),
    text_signature = "(params, r, c_tilde, c_tilde_cstr, diff=True, verbose=False)"
)]
pub fn get_b_errors<'py>(
    py: Python<'py>, params: (f64, f64), r: f64, c_tilde: &Bound<'py, PyAny>,
    c_tilde_cstr: &Bound<'py, PyAny>, diff: bool, verbose: bool,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let (beta, sigma) = params;
    let params = extract_household_params(beta, sigma)?;
    let c_tilde = extract_f64_array(py, c_tilde)?;
    let c_tilde_cstr = extract_bool_array(c_tilde_cstr)?;
    let opts = EulerOptions::new(EulerErrorMode::from_diff(diff), verbose);
    let errors = euler_errors(&params, r, c_tilde.as_array(), c_tilde_cstr.view(), &opts)?;
    Ok(errors.into_pyarray(py))
}

/// _rust_ogmodel — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_ogmodel` Python module and register the `firms`
/// submodule used by the public `rust_ogmodel` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating the submodule or manipulating `sys.modules` fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_ogmodel<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let firms_mod = PyModule::new(_py, "firms")?;
    firms(_py, m, &firms_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_ogmodel.firms", firms_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn firms<'py>(
    _py: Python, rust_ogmodel: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_p, m)?)?;
    m.add_function(wrap_pyfunction!(get_p_tilde, m)?)?;
    m.add_function(wrap_pyfunction!(get_c_tilde, m)?)?;
    m.add_function(wrap_pyfunction!(get_c, m)?)?;
    m.add_function(wrap_pyfunction!(get_aggregate_c, m)?)?;
    m.add_function(wrap_pyfunction!(get_k, m)?)?;
    m.add_function(wrap_pyfunction!(get_l, m)?)?;
    m.add_function(wrap_pyfunction!(get_x, m)?)?;
    m.add_function(wrap_pyfunction!(get_b_errors, m)?)?;
    rust_ogmodel.add_submodule(m)?;
    Ok(())
}
