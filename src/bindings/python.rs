use crate::rescaling;
use crate::scale::{Duration, MonthDay, ScaleFunction, TimeScale};
use crate::validation::{self, ScaleValidator, ValidationOptions};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

fn duration(seconds: i64, nanos: i64) -> PyResult<Duration> {
    Duration::checked_new(seconds, nanos).ok_or_else(|| PyValueError::new_err("Duration out of range"))
}

fn value_error(e: impl ToString) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[pyclass(name = "TimeScale", frozen)]
#[derive(Debug, Clone, Copy)]
pub struct PyTimeScale {
    inner: TimeScale,
}

#[pymethods]
impl PyTimeScale {
    #[new]
    #[pyo3(signature = (period_seconds, function = "UNKNOWN", period_nanos = 0))]
    pub fn new(period_seconds: i64, function: &str, period_nanos: i64) -> PyResult<Self> {
        let function: ScaleFunction = function.parse().map_err(value_error)?;
        let period = duration(period_seconds, period_nanos)?;
        let inner = TimeScale::of(period, function).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// A seasonal scale between two `--MM-DD` month-days, inclusive.
    #[staticmethod]
    pub fn window(start: &str, end: &str, function: &str) -> PyResult<Self> {
        let start: MonthDay = start.parse().map_err(value_error)?;
        let end: MonthDay = end.parse().map_err(value_error)?;
        let function: ScaleFunction = function.parse().map_err(value_error)?;
        Ok(Self { inner: TimeScale::window(start, end, function) })
    }

    #[staticmethod]
    pub fn instantaneous() -> Self {
        Self { inner: TimeScale::instantaneous() }
    }

    #[staticmethod]
    pub fn from_json(json: &str) -> PyResult<Self> {
        let inner: TimeScale = serde_json::from_str(json).map_err(value_error)?;
        Ok(Self { inner })
    }

    pub fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(value_error)
    }

    #[getter]
    pub fn function(&self) -> &'static str {
        self.inner.function().as_str()
    }

    /// The period in ISO-8601 form, inferred for seasonal scales.
    #[getter]
    pub fn period(&self) -> String {
        self.inner.effective_period().to_string()
    }

    pub fn is_instantaneous(&self) -> bool {
        self.inner.is_instantaneous()
    }

    fn __eq__(&self, other: PyRef<'_, Self>) -> bool {
        self.inner == other.inner
    }

    fn __lt__(&self, other: PyRef<'_, Self>) -> bool {
        self.inner < other.inner
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("TimeScale({})", self.inner.detailed())
    }
}

/// Returns the events as `(severity, message)` pairs.
#[pyfunction]
#[pyo3(signature = (
    existing,
    desired,
    time_step_seconds,
    source,
    declared_existing = None,
    time_step_nanos = 0,
    report_passes = false,
))]
fn validate(
    existing: PyRef<'_, PyTimeScale>,
    desired: PyRef<'_, PyTimeScale>,
    time_step_seconds: i64,
    source: &str,
    declared_existing: Option<PyRef<'_, PyTimeScale>>,
    time_step_nanos: i64,
    report_passes: bool,
) -> PyResult<Vec<(String, String)>> {
    let validator = ScaleValidator::new(ValidationOptions { report_passes });
    let events = validator
        .validate(
            declared_existing.map(|d| d.inner),
            existing.inner,
            desired.inner,
            duration(time_step_seconds, time_step_nanos)?,
            source,
        )
        .map_err(value_error)?;

    Ok(events.into_iter().map(|e| (e.severity().to_string(), e.message().to_string())).collect())
}

#[pyfunction]
fn is_change_of_scale_required(
    existing: PyRef<'_, PyTimeScale>,
    desired: PyRef<'_, PyTimeScale>,
) -> bool {
    validation::is_change_of_scale_required(&existing.inner, &desired.inner)
}

#[pyfunction]
fn least_common_time_scale(scales: Vec<PyRef<'_, PyTimeScale>>) -> PyResult<PyTimeScale> {
    let scales: BTreeSet<TimeScale> = scales.iter().map(|s| s.inner).collect();
    rescaling::least_common_time_scale(&scales)
        .map(|inner| PyTimeScale { inner })
        .map_err(value_error)
}

/// Defines the `_core` Python module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTimeScale>()?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(is_change_of_scale_required, m)?)?;
    m.add_function(wrap_pyfunction!(least_common_time_scale, m)?)?;
    Ok(())
}
