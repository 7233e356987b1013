//! Python bindings for resistor-bands.
//!
//! The caller runs the detector itself and hands the output to these
//! functions as a 2D float32 numpy array of shape `(rows, fields)`.

use numpy::{PyReadonlyArray2, PyUntypedArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use resistor_bands::{
    iou as rust_iou, BBox, BandConfig as RustBandConfig, BandError, BandReader as RustBandReader,
    BandReading, Detection as RustDetection, LabelTable, RawOutput,
};

/// Convert a BandError to a Python exception.
fn to_py_err(err: BandError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn label_table(labels: Option<Vec<String>>) -> PyResult<LabelTable> {
    match labels {
        Some(names) => LabelTable::new(names).map_err(to_py_err),
        None => Ok(LabelTable::resistor_colors()),
    }
}

fn with_view<T>(
    rows: &PyReadonlyArray2<'_, f32>,
    f: impl FnOnce(RawOutput<'_>) -> Result<T, BandError>,
) -> PyResult<T> {
    let shape = rows.shape();
    let num_rows = shape[0];
    let row_len = shape[1];
    let data = rows.as_slice()?;
    let view = RawOutput::from_slice(data, num_rows, row_len).map_err(to_py_err)?;
    f(view).map_err(to_py_err)
}

/// A detection that survived suppression.
#[pyclass]
#[derive(Clone)]
pub struct Detection {
    #[pyo3(get)]
    pub x1: f32,
    #[pyo3(get)]
    pub y1: f32,
    #[pyo3(get)]
    pub x2: f32,
    #[pyo3(get)]
    pub y2: f32,
    #[pyo3(get)]
    pub confidence: f32,
    #[pyo3(get)]
    pub class_id: usize,
    /// Class name from the reader's label table.
    #[pyo3(get)]
    pub class_name: Option<String>,
}

#[pymethods]
impl Detection {
    fn __repr__(&self) -> String {
        format!(
            "Detection(x1={:.1}, y1={:.1}, x2={:.1}, y2={:.1}, confidence={:.3}, class_name={:?})",
            self.x1, self.y1, self.x2, self.y2, self.confidence, self.class_name
        )
    }
}

impl Detection {
    fn from_rust(det: &RustDetection, labels: &LabelTable) -> Self {
        Self {
            x1: det.bbox.x1,
            y1: det.bbox.y1,
            x2: det.bbox.x2,
            y2: det.bbox.y2,
            confidence: det.confidence,
            class_id: det.class_id,
            class_name: det.class_name(labels).map(str::to_owned),
        }
    }
}

/// Full result of a reading: ordered detections plus collapsed bands.
#[pyclass]
pub struct Reading {
    #[pyo3(get)]
    pub detections: Vec<Detection>,
    #[pyo3(get)]
    pub bands: Vec<String>,
    summary: String,
}

#[pymethods]
impl Reading {
    /// Comma separated bands, or "No colors detected.".
    fn summary(&self) -> String {
        self.summary.clone()
    }

    fn __len__(&self) -> usize {
        self.bands.len()
    }

    fn __repr__(&self) -> String {
        format!("Reading(bands={:?})", self.bands)
    }
}

impl Reading {
    fn from_rust(reading: BandReading, labels: &LabelTable) -> Self {
        let summary = reading.summary();
        let detections = reading
            .detections
            .iter()
            .map(|det| Detection::from_rust(det, labels))
            .collect();
        Self {
            detections,
            bands: reading.bands,
            summary,
        }
    }
}

/// Thresholds for a band reading.
#[pyclass]
#[derive(Clone)]
pub struct BandConfig {
    inner: RustBandConfig,
}

#[pymethods]
impl BandConfig {
    /// Create a new BandConfig.
    ///
    /// Args:
    ///     confidence_threshold: Minimum row confidence, inclusive (default: 0.25)
    ///     iou_threshold: Same-class IoU that triggers suppression (default: 0.45)
    ///     parallel: Suppress class groups in parallel (default: False)
    #[new]
    #[pyo3(signature = (confidence_threshold=0.25, iou_threshold=0.45, parallel=false))]
    fn new(confidence_threshold: f32, iou_threshold: f32, parallel: bool) -> PyResult<Self> {
        let inner = RustBandConfig {
            confidence_threshold,
            iou_threshold,
            parallel,
        };
        inner.validate().map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn __repr__(&self) -> String {
        format!(
            "BandConfig(confidence_threshold={}, iou_threshold={}, parallel={})",
            self.inner.confidence_threshold, self.inner.iou_threshold, self.inner.parallel
        )
    }
}

/// Reusable band reader bound to a label table and configuration.
#[pyclass]
pub struct BandReader {
    inner: RustBandReader,
}

#[pymethods]
impl BandReader {
    /// Create a reader.
    ///
    /// Args:
    ///     labels: Class names in model order (default: the 12 resistor colors)
    ///     config: BandConfig (default: BandConfig())
    #[new]
    #[pyo3(signature = (labels=None, config=None))]
    fn new(labels: Option<Vec<String>>, config: Option<BandConfig>) -> PyResult<Self> {
        let cfg = config.map(|c| c.inner).unwrap_or_default();
        let inner = RustBandReader::new(label_table(labels)?).with_config(cfg);
        Ok(Self { inner })
    }

    /// Read band colors from a (rows, fields) float32 array.
    fn read(&self, rows: PyReadonlyArray2<'_, f32>) -> PyResult<Vec<String>> {
        with_view(&rows, |view| self.inner.read(view.rows()))
    }

    /// Like read(), also returning the ordered detections.
    fn read_detailed(&self, rows: PyReadonlyArray2<'_, f32>) -> PyResult<Reading> {
        let reading = with_view(&rows, |view| self.inner.read_detailed(view.rows()))?;
        Ok(Reading::from_rust(reading, self.inner.labels()))
    }

    fn __repr__(&self) -> String {
        format!("BandReader(labels={})", self.inner.labels().len())
    }
}

/// One-shot band reading.
///
/// Args:
///     rows: 2D float32 numpy array (rows x fields), fields start with
///         x1, y1, x2, y2, confidence, class
///     labels: Class names in model order (default: the 12 resistor colors)
///     confidence_threshold: default 0.25
///     iou_threshold: default 0.45
///
/// Returns:
///     List of band colors, left to right
#[pyfunction]
#[pyo3(signature = (rows, labels = None, confidence_threshold = 0.25, iou_threshold = 0.45))]
fn read_bands(
    rows: PyReadonlyArray2<'_, f32>,
    labels: Option<Vec<String>>,
    confidence_threshold: f32,
    iou_threshold: f32,
) -> PyResult<Vec<String>> {
    let reader = RustBandReader::new(label_table(labels)?).with_config(RustBandConfig {
        confidence_threshold,
        iou_threshold,
        ..RustBandConfig::default()
    });
    with_view(&rows, |view| reader.read(view.rows()))
}

/// Intersection-over-union of two (x1, y1, x2, y2) boxes.
#[pyfunction]
fn iou(a: [f32; 4], b: [f32; 4]) -> f32 {
    let a = BBox::new(a[0], a[1], a[2], a[3]);
    let b = BBox::new(b[0], b[1], b[2], b[3]);
    rust_iou(&a, &b)
}

/// Python module for resistor band reading.
#[pymodule]
fn _resistor_bands(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Detection>()?;
    m.add_class::<Reading>()?;
    m.add_class::<BandConfig>()?;
    m.add_class::<BandReader>()?;
    m.add_function(wrap_pyfunction!(read_bands, m)?)?;
    m.add_function(wrap_pyfunction!(iou, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
