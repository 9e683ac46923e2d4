use std::collections::HashMap;

use ndarray::Array1;
use numpy::{PyArray1, PyReadonlyArray1, ToPyArray};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

use crate::config::ScalerConfig;
use crate::error::Error;
use crate::models::base_model::{Classifier, Clusterer, Estimator, Regressor, Transformer};
use crate::models::kmeans::KMeans;
use crate::models::linear::{LinearRegression, LogisticRegression};
use crate::optim::{Optimizer, VanillaSGD};
use crate::preprocessing::{MinMaxScaler, Normalizer, StandardScaler};
use crate::stats::{Max, Mean, Min, Univariate, Variance};
use crate::types::{FeatureKey, Label, Observation, Target, Weights};

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Read a 1D float64 numpy array as an observation keyed by position.
fn get_observation(x: &PyAny) -> PyResult<Observation> {
    let arr = x
        .extract::<PyReadonlyArray1<f64>>()
        .map_err(|_| PyTypeError::new_err("Expected numpy array of float64 values"))?;
    Ok(arr
        .as_array()
        .iter()
        .enumerate()
        .map(|(i, v)| (FeatureKey::Index(i), *v))
        .collect())
}

/// Lay an observation keyed by position back out as a numpy array.
fn observation_to_pyarray<'py>(py: Python<'py>, x: &Observation) -> &'py PyArray1<f64> {
    let n = x
        .keys()
        .filter_map(|k| match k {
            FeatureKey::Index(i) => Some(i + 1),
            FeatureKey::Name(_) => None,
        })
        .max()
        .unwrap_or(0);
    let mut out = Array1::<f64>::zeros(n);
    for (k, v) in x {
        if let FeatureKey::Index(i) = k {
            out[*i] = *v;
        }
    }
    out.to_pyarray(py)
}

fn scaler_config(eps: Option<f64>) -> ScalerConfig {
    let mut config = ScalerConfig::default();
    if let Some(eps) = eps {
        config.eps = eps;
    }
    config
}

fn sgd(lr: Option<f64>) -> PyResult<VanillaSGD> {
    Ok(VanillaSGD::new(lr.unwrap_or(0.01))?)
}

#[pyclass(name = "StandardScaler")]
pub struct PyStandardScaler {
    inner: StandardScaler,
}

#[pymethods]
impl PyStandardScaler {
    #[new]
    fn new(eps: Option<f64>) -> Self {
        PyStandardScaler {
            inner: StandardScaler::with_config(&scaler_config(eps)),
        }
    }

    fn fit_one(&mut self, x: &PyAny) -> PyResult<()> {
        self.inner.fit_one(&get_observation(x)?, &Target::None);
        Ok(())
    }

    fn transform_one<'py>(&self, py: Python<'py>, x: &PyAny) -> PyResult<&'py PyArray1<f64>> {
        let xt = self.inner.transform_one(&get_observation(x)?);
        Ok(observation_to_pyarray(py, &xt))
    }
}

#[pyclass(name = "MinMaxScaler")]
pub struct PyMinMaxScaler {
    inner: MinMaxScaler,
}

#[pymethods]
impl PyMinMaxScaler {
    #[new]
    fn new(eps: Option<f64>) -> Self {
        PyMinMaxScaler {
            inner: MinMaxScaler::with_config(&scaler_config(eps)),
        }
    }

    fn fit_one(&mut self, x: &PyAny) -> PyResult<()> {
        self.inner.fit_one(&get_observation(x)?, &Target::None);
        Ok(())
    }

    fn transform_one<'py>(&self, py: Python<'py>, x: &PyAny) -> PyResult<&'py PyArray1<f64>> {
        let xt = self.inner.transform_one(&get_observation(x)?);
        Ok(observation_to_pyarray(py, &xt))
    }
}

#[pyclass(name = "Normalizer")]
pub struct PyNormalizer {
    inner: Normalizer,
}

#[pymethods]
impl PyNormalizer {
    #[new]
    fn new(order: Option<f64>) -> PyResult<Self> {
        Ok(PyNormalizer {
            inner: Normalizer::new(order.unwrap_or(2.0))?,
        })
    }

    fn transform_one<'py>(&self, py: Python<'py>, x: &PyAny) -> PyResult<&'py PyArray1<f64>> {
        let xt = self.inner.transform_one(&get_observation(x)?);
        Ok(observation_to_pyarray(py, &xt))
    }
}

/// Python-exposed wrapper around `LinearRegression` trained with plain SGD.
#[pyclass(name = "LinearRegression")]
pub struct PyLinearRegression {
    inner: LinearRegression,
}

#[pymethods]
impl PyLinearRegression {
    #[new]
    fn new(lr: Option<f64>, intercept_lr: Option<f64>) -> PyResult<Self> {
        Ok(PyLinearRegression {
            inner: LinearRegression::with_optimizer(sgd(lr)?, intercept_lr.unwrap_or(0.01)),
        })
    }

    fn fit_one(&mut self, x: &PyAny, y: f64) -> PyResult<()> {
        self.inner.fit_one(&get_observation(x)?, &Target::Real(y));
        Ok(())
    }

    fn predict_one(&self, x: &PyAny) -> PyResult<f64> {
        Ok(Regressor::predict_one(&self.inner, &get_observation(x)?))
    }

    #[getter]
    fn intercept(&self) -> f64 {
        self.inner.intercept()
    }
}

/// Python-exposed wrapper around `LogisticRegression` trained with plain SGD.
#[pyclass(name = "LogisticRegression")]
pub struct PyLogisticRegression {
    inner: LogisticRegression,
}

#[pymethods]
impl PyLogisticRegression {
    #[new]
    fn new(lr: Option<f64>, intercept_lr: Option<f64>) -> PyResult<Self> {
        Ok(PyLogisticRegression {
            inner: LogisticRegression::with_optimizer(sgd(lr)?, intercept_lr.unwrap_or(0.01)),
        })
    }

    fn fit_one(&mut self, x: &PyAny, y: bool) -> PyResult<()> {
        self.inner.fit_one(&get_observation(x)?, &Target::from(y));
        Ok(())
    }

    /// Probability of the positive class.
    fn predict_proba_one(&self, x: &PyAny) -> PyResult<f64> {
        let probas = self.inner.predict_proba_one(&get_observation(x)?);
        Ok(probas.get(&Label::Bool(true)).copied().unwrap_or(0.5))
    }

    fn predict_one(&self, x: &PyAny) -> PyResult<bool> {
        Ok(self.predict_proba_one(x)? > 0.5)
    }
}

#[pyclass(name = "KMeans")]
pub struct PyKMeans {
    inner: KMeans,
}

#[pymethods]
impl PyKMeans {
    #[new]
    fn new(n_clusters: Option<usize>, halflife: Option<f64>, random_state: Option<u64>) -> PyResult<Self> {
        Ok(PyKMeans {
            inner: KMeans::new(n_clusters.unwrap_or(5), halflife.unwrap_or(0.5), random_state)?,
        })
    }

    fn fit_one(&mut self, x: &PyAny) -> PyResult<()> {
        self.inner.fit_one(&get_observation(x)?, &Target::None);
        Ok(())
    }

    fn predict_one(&self, x: &PyAny) -> PyResult<usize> {
        Ok(Clusterer::predict_one(&self.inner, &get_observation(x)?))
    }
}

#[pyclass(name = "VanillaSGD")]
pub struct PyVanillaSGD {
    inner: VanillaSGD,
}

#[pymethods]
impl PyVanillaSGD {
    #[new]
    fn new(lr: Option<f64>) -> PyResult<Self> {
        Ok(PyVanillaSGD {
            inner: VanillaSGD::new(lr.unwrap_or(0.1))?,
        })
    }

    #[getter]
    fn learning_rate(&self) -> f64 {
        self.inner.learning_rate()
    }

    /// Apply one update and return the new weights, keyed by feature position.
    fn step(
        &mut self,
        weights: HashMap<usize, f64>,
        gradient: HashMap<usize, f64>,
    ) -> HashMap<usize, f64> {
        let mut w: Weights = weights
            .into_iter()
            .map(|(i, v)| (FeatureKey::Index(i), v))
            .collect();
        let g: Weights = gradient
            .into_iter()
            .map(|(i, v)| (FeatureKey::Index(i), v))
            .collect();
        self.inner.step(&mut w, &g);
        w.into_iter()
            .filter_map(|(k, v)| match k {
                FeatureKey::Index(i) => Some((i, v)),
                FeatureKey::Name(_) => None,
            })
            .collect()
    }
}

// Running statistics:

#[pyclass(name = "Mean")]
pub struct PyMean {
    inner: Mean,
}

#[pymethods]
impl PyMean {
    #[new]
    fn new() -> Self {
        PyMean { inner: Mean::new() }
    }

    fn update(&mut self, x: f64) {
        self.inner.update(x);
    }

    fn get(&self) -> f64 {
        self.inner.get()
    }
}

#[pyclass(name = "Variance")]
pub struct PyVariance {
    inner: Variance,
}

#[pymethods]
impl PyVariance {
    #[new]
    fn new(ddof: Option<u64>) -> Self {
        PyVariance {
            inner: Variance::new(ddof.unwrap_or(1)),
        }
    }

    fn update(&mut self, x: f64) {
        self.inner.update(x);
    }

    fn get(&self) -> f64 {
        self.inner.get()
    }
}

#[pyclass(name = "Min")]
pub struct PyMin {
    inner: Min,
}

#[pymethods]
impl PyMin {
    #[new]
    fn new() -> Self {
        PyMin { inner: Min::new() }
    }

    fn update(&mut self, x: f64) {
        self.inner.update(x);
    }

    fn get(&self) -> f64 {
        self.inner.get()
    }
}

#[pyclass(name = "Max")]
pub struct PyMax {
    inner: Max,
}

#[pymethods]
impl PyMax {
    #[new]
    fn new() -> Self {
        PyMax { inner: Max::new() }
    }

    fn update(&mut self, x: f64) {
        self.inner.update(x);
    }

    fn get(&self) -> f64 {
        self.inner.get()
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn creme_rust(_py: Python, m: &PyModule) -> PyResult<()> {
    // Preprocessing:
    m.add_class::<PyStandardScaler>()?;
    m.add_class::<PyMinMaxScaler>()?;
    m.add_class::<PyNormalizer>()?;

    // Linear models:
    m.add_class::<PyLinearRegression>()?;
    m.add_class::<PyLogisticRegression>()?;

    // Clustering:
    m.add_class::<PyKMeans>()?;

    // Optimizers:
    m.add_class::<PyVanillaSGD>()?;

    // Running statistics:
    m.add_class::<PyMean>()?;
    m.add_class::<PyVariance>()?;
    m.add_class::<PyMin>()?;
    m.add_class::<PyMax>()?;
    Ok(())
}
