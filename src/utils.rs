//! utils — conversion helpers for the Python bridge.
//!
//! Turn loosely typed Python inputs (floats, numpy arrays, pandas Series,
//! lists) into the owned arrays, views, and validated containers the `og`
//! functions take.
//!
//! Broadcasting rules
//! ------------------
//! Python callers pass scalars and 1-D arrays where numpy would broadcast
//! them. [`ArrayArg`] applies a fixed subset of that behavior:
//! - paths (`r`, `w`, `n`, `p_tilde`, ...): a scalar fills a path of the
//!   inferred length `u`; a 1-D array is taken as is.
//! - matrices (`p_c`, `c_bar`, technology): a scalar fills `(1, u)`; a 1-D
//!   array of length `I` is one column per good, repeated over the `u`
//!   periods; a 2-D array is taken as is.
//! - `u` is the length of the first 1-D path argument, otherwise the column
//!   count of the first 2-D matrix argument, otherwise `1`.
use crate::og::{
    core::savings::Savings,
    errors::{OGError, OGResult},
};
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1, PyReadonlyArray2, PyUntypedArray, PyUntypedArrayMethods,
};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::og::core::params::{FirmParams, HouseholdParams};

/// A numeric argument as received from Python, before broadcasting.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayArg {
    Scalar(f64),
    Vector(Array1<f64>),
    Matrix(Array2<f64>),
}

impl ArrayArg {
    /// Coerce to a path of length `len` (scalars are repeated).
    ///
    /// Errors
    /// ------
    /// - `OGError::DimMismatch` if the argument is 2-D.
    pub fn into_path(self, name: &'static str, len: usize) -> OGResult<Array1<f64>> {
        match self {
            ArrayArg::Scalar(v) => Ok(Array1::from_elem(len, v)),
            ArrayArg::Vector(v) => Ok(v),
            ArrayArg::Matrix(m) => {
                Err(OGError::DimMismatch { name, expected: (1, len), actual: m.dim() })
            }
        }
    }

    /// Coerce to a matrix with `cols` columns unless already 2-D.
    pub fn into_matrix(self, cols: usize) -> Array2<f64> {
        match self {
            ArrayArg::Scalar(v) => Array2::from_elem((1, cols), v),
            ArrayArg::Vector(v) => Array2::from_shape_fn((v.len(), cols), |(i, _)| v[i]),
            ArrayArg::Matrix(m) => m,
        }
    }

    /// Budget-constraint branch: a scalar is terminal, a 1-D array a path.
    ///
    /// Errors
    /// ------
    /// - `OGError::DimMismatch` if the argument is 2-D.
    pub fn as_savings(&self, name: &'static str) -> OGResult<Savings<'_>> {
        match self {
            ArrayArg::Scalar(v) => Ok(Savings::from(*v)),
            ArrayArg::Vector(v) => Ok(Savings::from(v.view())),
            ArrayArg::Matrix(m) => {
                Err(OGError::DimMismatch { name, expected: (1, m.ncols()), actual: m.dim() })
            }
        }
    }
}

/// Number of periods implied by a call's path and matrix arguments.
pub fn infer_periods(paths: &[&ArrayArg], matrices: &[&ArrayArg]) -> usize {
    paths
        .iter()
        .find_map(|arg| match arg {
            ArrayArg::Vector(v) => Some(v.len()),
            _ => None,
        })
        .or_else(|| {
            matrices.iter().find_map(|arg| match arg {
                ArrayArg::Matrix(m) => Some(m.ncols()),
                _ => None,
            })
        })
        .unwrap_or(1)
}

/// Borrow a 1-D contiguous `float64` view of a numpy array, pandas Series, or
/// sequence, copying only when the input is not already a contiguous array.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Classify a float, 1-D array-like, or 2-D numpy array as an [`ArrayArg`].
///
/// numpy arrays are classified by `ndim`, so a one-element 1-D array stays a
/// vector.
#[cfg(feature = "python-bindings")]
pub fn extract_array_arg<'py>(py: Python<'py>, raw: &Bound<'py, PyAny>) -> PyResult<ArrayArg> {
    if let Ok(arr) = raw.downcast::<PyUntypedArray>() {
        match arr.ndim() {
            0 => return Ok(ArrayArg::Scalar(raw.extract::<f64>()?)),
            2 => {
                let m = raw.extract::<PyReadonlyArray2<f64>>()?;
                return Ok(ArrayArg::Matrix(m.as_array().to_owned()));
            }
            _ => {}
        }
    } else if let Ok(v) = raw.extract::<f64>() {
        return Ok(ArrayArg::Scalar(v));
    }
    let v = extract_f64_array(py, raw)?;
    Ok(ArrayArg::Vector(v.as_array().to_owned()))
}

/// Boolean mask from a numpy `bool` array or a sequence of bools.
#[cfg(feature = "python-bindings")]
pub fn extract_bool_array(raw: &Bound<'_, PyAny>) -> PyResult<Array1<bool>> {
    if let Ok(arr) = raw.extract::<PyReadonlyArray1<bool>>() {
        return Ok(arr.as_array().to_owned());
    }
    let vec: Vec<bool> = raw.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err("expected a 1-D boolean numpy.ndarray or sequence")
    })?;
    Ok(Array1::from(vec))
}

/// Build validated [`FirmParams`] from `(A, gamma, epsilon, delta)` arguments
/// broadcast to `periods` columns.
#[cfg(feature = "python-bindings")]
pub fn extract_firm_params(
    a: ArrayArg, gamma: ArrayArg, epsilon: ArrayArg, delta: ArrayArg, periods: usize,
) -> PyResult<FirmParams> {
    let params = FirmParams::new(
        a.into_matrix(periods),
        gamma.into_matrix(periods),
        epsilon.into_matrix(periods),
        delta.into_matrix(periods),
    )?;
    Ok(params)
}

#[cfg(feature = "python-bindings")]
pub fn extract_household_params(beta: f64, sigma: f64) -> PyResult<HouseholdParams> {
    Ok(HouseholdParams::new(beta, sigma)?)
}
