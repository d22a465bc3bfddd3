//! PyO3 bindings for fontcat-core (made by FontLab https://www.fontlab.com/)

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use fontcat_core::caps;
use fontcat_core::catalog::Catalog;
use fontcat_core::category::Category;
use fontcat_core::font::Font;
use fontcat_core::query::normalize;
use fontcat_core::search::search;
use fontcat_core::similar::similar_to;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Font record as passed from Python; `family` stands in for a missing `name`.
#[derive(Clone, Debug, FromPyObject)]
#[pyo3(from_item_all)]
struct FontInput {
    #[pyo3(default)]
    name: Option<String>,
    #[pyo3(default)]
    family: Option<String>,
    #[pyo3(default)]
    category: String,
    #[pyo3(default)]
    variants: Vec<String>,
    #[pyo3(default)]
    subsets: Vec<String>,
}

#[pyfunction]
#[pyo3(name = "search", signature = (fonts, category=None, query=None))]
fn search_py(
    py: Python<'_>,
    fonts: Vec<FontInput>,
    category: Option<String>,
    query: Option<String>,
) -> PyResult<Vec<Py<PyAny>>> {
    let catalog = Catalog::new(convert_fonts(fonts).map_err(to_py_err)?);
    let category = Category::parse(category.as_deref().unwrap_or(""));
    let found = search(catalog.fonts(), &category, query.as_deref().unwrap_or(""));
    to_py_fonts(py, &found)
}

#[pyfunction]
#[pyo3(name = "search_paths", signature = (paths, category=None, query=None, follow_symlinks=false))]
fn search_paths_py(
    py: Python<'_>,
    paths: Vec<PathBuf>,
    category: Option<String>,
    query: Option<String>,
    follow_symlinks: bool,
) -> PyResult<Vec<Py<PyAny>>> {
    if paths.is_empty() {
        return Err(PyValueError::new_err(
            "at least one catalog path is required",
        ));
    }

    let catalog = Catalog::load_paths(&paths, follow_symlinks).map_err(to_py_err)?;
    let category = Category::parse(category.as_deref().unwrap_or(""));
    let found = search(catalog.fonts(), &category, query.as_deref().unwrap_or(""));
    to_py_fonts(py, &found)
}

#[pyfunction]
#[pyo3(name = "is_caps")]
fn is_caps_py(name: &str) -> bool {
    caps::is_caps(name)
}

#[pyfunction]
#[pyo3(name = "normalize_query")]
fn normalize_query_py(raw: &str) -> String {
    normalize(raw)
}

#[pyfunction]
#[pyo3(name = "similar_fonts")]
fn similar_fonts_py(name: &str) -> Option<Vec<String>> {
    similar_to(name).map(|found| found.iter().map(|s| s.to_string()).collect())
}

fn convert_fonts(inputs: Vec<FontInput>) -> Result<Vec<Font>> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(idx, input)| {
            let name = input
                .name
                .or(input.family)
                .ok_or_else(|| anyhow!("font at index {idx} has no name or family"))?;

            Ok(Font::new(name, input.category)
                .with_variants(input.variants)
                .with_subsets(input.subsets))
        })
        .collect()
}

fn to_py_fonts(py: Python<'_>, fonts: &[&Font]) -> PyResult<Vec<Py<PyAny>>> {
    fonts
        .iter()
        .map(|font| {
            let dict = PyDict::new(py);
            dict.set_item("name", &font.name)?;
            dict.set_item("category", &font.category)?;
            dict.set_item("variants", font.variants.clone())?;
            dict.set_item("subsets", font.subsets.clone())?;
            Ok(dict.into_any().unbind())
        })
        .collect()
}

fn to_py_err(err: anyhow::Error) -> PyErr {
    PyValueError::new_err(format!("{err:#}"))
}

#[pymodule]
#[pyo3(name = "_fontcat_python")]
fn fontcat_python(_py: Python<'_>, m: &Bound<PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(search_py, m)?)?;
    m.add_function(wrap_pyfunction!(search_paths_py, m)?)?;
    m.add_function(wrap_pyfunction!(is_caps_py, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_query_py, m)?)?;
    m.add_function(wrap_pyfunction!(similar_fonts_py, m)?)?;
    Ok(())
}
