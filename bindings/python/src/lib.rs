//! Python bindings for fastRollstats.

#![allow(non_snake_case)]

use ndarray::ArrayViewD;
use num_traits::Float;
use numpy::{IntoPyArray, PyArrayDyn, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::fmt::Display;

use ::fastRollstats::prelude::{
    Batch, Max, Mean, Min, Propagate, Quantile, Rank, RelativeRank, Rolling, Skewness, Skip,
    StdDev, Sum, Variance, ZScore,
};
use ::fastRollstats::internals::api::Statistic;

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a RollError to a PyErr
fn to_py_error(e: impl Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Parse a statistic from its name, attaching the quantile level if needed
fn parse_statistic<T: Float>(name: &str, quantile: Option<f64>) -> PyResult<Statistic<T>> {
    match name.to_lowercase().as_str() {
        "mean" => Ok(Mean),
        "sum" => Ok(Sum),
        "variance" | "var" => Ok(Variance),
        "stddev" | "std" => Ok(StdDev),
        "skewness" | "skew" => Ok(Skewness),
        "zscore" => Ok(ZScore),
        "min" => Ok(Min),
        "max" => Ok(Max),
        "rank" => Ok(Rank),
        "relative_rank" | "relrank" => Ok(RelativeRank),
        "quantile" => {
            let level = quantile.ok_or_else(|| {
                PyValueError::new_err("statistic 'quantile' requires the quantile= argument")
            })?;
            Ok(Quantile(T::from(level).ok_or_else(|| {
                PyValueError::new_err(format!("quantile level {level} not representable"))
            })?))
        }
        _ => Err(PyValueError::new_err(format!(
            "Unknown statistic: {}. Valid options: mean, sum, variance, stddev, skewness, zscore, min, max, rank, relative_rank, quantile",
            name
        ))),
    }
}

/// Shared implementation over any float width
fn roll_impl<T>(
    data: ArrayViewD<'_, T>,
    statistic: &str,
    window: usize,
    min_periods: Option<usize>,
    axis: usize,
    skip_nan: bool,
    quantile: Option<f64>,
    parallel: bool,
) -> PyResult<ndarray::ArrayD<T>>
where
    T: Float + Send + Sync,
{
    let stat = parse_statistic::<T>(statistic, quantile)?;
    let policy = if skip_nan { Skip } else { Propagate };

    let mut builder = Rolling::<T>::new()
        .window(window)
        .statistic(stat)
        .nan_policy(policy);
    if let Some(mp) = min_periods {
        builder = builder.min_periods(mp);
    }

    let model = builder
        .adapter(Batch)
        .axis(axis)
        .parallel(parallel)
        .build()
        .map_err(to_py_error)?;

    model.apply(&data).map_err(to_py_error)
}

// ============================================================================
// Python Functions
// ============================================================================

/// Rolling statistic over one axis of a float64 array.
///
/// Parameters
/// ----------
/// data : ndarray of float64
///     Input array of any dimensionality. NaN encodes missing observations.
/// statistic : str
///     One of "mean", "sum", "variance", "stddev", "skewness", "zscore",
///     "min", "max", "rank", "relative_rank", "quantile".
/// window : int
///     Window length (>= 1).
/// min_periods : int, optional
///     Valid observations required for a defined output (default: window).
/// axis : int, optional
///     Axis to roll along (default: 0).
/// skip_nan : bool, optional
///     Ignore NaN observations (default: True); otherwise any NaN in the
///     window makes the output NaN.
/// quantile : float, optional
///     Level in [0, 1]; required when statistic is "quantile".
/// parallel : bool, optional
///     Process lanes on multiple threads (default: True).
#[pyfunction]
#[pyo3(signature = (
    data,
    statistic,
    window,
    min_periods=None,
    axis=0,
    skip_nan=true,
    quantile=None,
    parallel=true
))]
#[allow(clippy::too_many_arguments)]
fn roll_float64<'py>(
    py: Python<'py>,
    data: PyReadonlyArrayDyn<'py, f64>,
    statistic: &str,
    window: usize,
    min_periods: Option<usize>,
    axis: usize,
    skip_nan: bool,
    quantile: Option<f64>,
    parallel: bool,
) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    let result = roll_impl(
        data.as_array(),
        statistic,
        window,
        min_periods,
        axis,
        skip_nan,
        quantile,
        parallel,
    )?;
    Ok(result.into_pyarray(py))
}

/// Rolling statistic over one axis of a float32 array.
///
/// See `roll_float64` for parameter documentation.
#[pyfunction]
#[pyo3(signature = (
    data,
    statistic,
    window,
    min_periods=None,
    axis=0,
    skip_nan=true,
    quantile=None,
    parallel=true
))]
#[allow(clippy::too_many_arguments)]
fn roll_float32<'py>(
    py: Python<'py>,
    data: PyReadonlyArrayDyn<'py, f32>,
    statistic: &str,
    window: usize,
    min_periods: Option<usize>,
    axis: usize,
    skip_nan: bool,
    quantile: Option<f64>,
    parallel: bool,
) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
    let result = roll_impl(
        data.as_array(),
        statistic,
        window,
        min_periods,
        axis,
        skip_nan,
        quantile,
        parallel,
    )?;
    Ok(result.into_pyarray(py))
}

// ============================================================================
// Module Registration
// ============================================================================

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(roll_float64, m)?)?;
    m.add_function(wrap_pyfunction!(roll_float32, m)?)?;
    Ok(())
}
