//! Wrapper module to export to Python using pyo3 bindings.

use chrono::NaiveDate;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::calendar::{EngineOptions, HolidayEngine, MemoryRepository};
use crate::json::JSON;

/// A holiday engine over an in-memory rule set.
#[pyclass(name = "HolidayEngine", module = "holidays.rs")]
pub(crate) struct PyHolidayEngine {
    inner: HolidayEngine<MemoryRepository>,
}

#[pymethods]
impl PyHolidayEngine {
    /// Create a new *HolidayEngine* object.
    ///
    /// Parameters
    /// ----------
    /// rules: str
    ///     JSON rule set with lists ``fixed``, ``nth_weekday``, ``nth_weekday_after`` and
    ///     ``year_overrides``.
    /// options: str, optional
    ///     JSON engine options, e.g. ``{"fast_path": "Legacy"}``.
    #[new]
    #[pyo3(signature = (rules, options=None))]
    fn new_py(rules: &str, options: Option<&str>) -> PyResult<Self> {
        let repository = MemoryRepository::from_json(rules).map_err(|e| {
            PyValueError::new_err(format!("Could not load rule set from given JSON.\n{}", e))
        })?;
        let options = match options {
            Some(json) => EngineOptions::from_json(json).map_err(|e| {
                PyValueError::new_err(format!("Could not load options from given JSON.\n{}", e))
            })?,
            None => EngineOptions::default(),
        };
        Ok(PyHolidayEngine {
            inner: HolidayEngine::with_options(repository, options),
        })
    }

    /// Return the date of a holiday in a year.
    ///
    /// Parameters
    /// ----------
    /// name: str
    ///     The holiday name.
    /// year: int
    ///     The year; there is no default.
    ///
    /// Returns
    /// -------
    /// date
    #[pyo3(name = "resolve")]
    fn resolve_py(&self, name: &str, year: i32) -> PyResult<NaiveDate> {
        Ok(self.inner.resolve(name, year)?)
    }

    /// Return the name of the holiday on ``date``, or *None*.
    #[pyo3(name = "is_holiday")]
    fn is_holiday_py(&self, date: NaiveDate) -> Option<String> {
        self.inner.is_holiday(&date).map(|r| r.name().to_string())
    }

    /// Return the distinct holiday names.
    #[pyo3(name = "list_names")]
    fn list_names_py(&self) -> Vec<String> {
        self.inner
            .list_names()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    /// Return a list of (name, date) for every holiday resolving in ``year``.
    #[pyo3(name = "holidays_for_year")]
    fn holidays_for_year_py(&self, year: i32) -> Vec<(String, NaiveDate)> {
        self.inner
            .holidays_for_year(year)
            .into_iter()
            .map(|(rule, date)| (rule.name().to_string(), date))
            .collect()
    }

    /// Return descriptions of the rules stored for ``name`` in precedence order.
    #[pyo3(name = "rules_for")]
    fn rules_for_py(&self, name: &str, year: i32) -> Vec<String> {
        self.inner
            .rules_for(name, year)
            .iter()
            .map(|r| r.to_string())
            .collect()
    }

    /// Return the rule set as a JSON string.
    ///
    /// Parameters
    /// ----------
    /// pretty: bool, optional
    ///     Indent the output over several lines.
    #[pyo3(name = "to_json", signature = (pretty = false))]
    fn to_json_py(&self, pretty: bool) -> PyResult<String> {
        let repository = self.inner.repository();
        let js = if pretty {
            repository.to_json_pretty()
        } else {
            repository.to_json()
        };
        js.map_err(|e| PyValueError::new_err(e.to_string()))
    }
}
