//! End-to-end band reading: decode, suppress, order, deduplicate.
//!
//! A [`BandReader`] holds only immutable configuration and a label table;
//! every call runs an independent pipeline over one model output.

use crate::decode::decode;
use crate::dedup::dedup;
use crate::detection::Detection;
use crate::label::LabelTable;
use crate::nms::suppress;
use crate::sequence::{class_names, sort_by_position};
use crate::trace::trace_span;
use crate::util::{BandError, BandResult};
use std::fmt;

/// Thresholds and execution options for a band reading.
#[derive(Clone, Debug, PartialEq)]
pub struct BandConfig {
    /// Minimum confidence for a row to become a detection (inclusive).
    pub confidence_threshold: f32,
    /// IoU at or above which a same-class box is suppressed.
    pub iou_threshold: f32,
    /// Suppress class groups in parallel when the `rayon` feature is enabled.
    pub parallel: bool,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.25,
            iou_threshold: 0.45,
            parallel: false,
        }
    }
}

impl BandConfig {
    /// Checks that both thresholds are finite and within `[0, 1]`.
    pub fn validate(&self) -> BandResult<()> {
        check_unit("confidence_threshold", self.confidence_threshold)?;
        check_unit("iou_threshold", self.iou_threshold)?;
        Ok(())
    }
}

fn check_unit(field: &'static str, value: f32) -> BandResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(BandError::InvalidConfig { field, value })
    }
}

/// Result of one band reading.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BandReading {
    /// Detections that survived NMS, ordered left to right.
    pub detections: Vec<Detection>,
    /// Band colors left to right with adjacent repeats collapsed.
    pub bands: Vec<String>,
}

impl BandReading {
    /// True when no band was detected.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Human-readable one-line summary of the bands.
    pub fn summary(&self) -> String {
        if self.bands.is_empty() {
            "No colors detected.".to_string()
        } else {
            self.bands.join(", ")
        }
    }
}

impl fmt::Display for BandReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Reads resistor band colors from raw detector output.
#[derive(Clone, Debug)]
pub struct BandReader {
    labels: LabelTable,
    cfg: BandConfig,
}

impl Default for BandReader {
    fn default() -> Self {
        Self::new(LabelTable::resistor_colors())
    }
}

impl BandReader {
    /// Creates a reader with the default configuration.
    pub fn new(labels: LabelTable) -> Self {
        Self {
            labels,
            cfg: BandConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: BandConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the label table used to name detections.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &BandConfig {
        &self.cfg
    }

    /// Returns the band colors for one model output.
    ///
    /// An empty vector means nothing was detected; errors are reserved for
    /// malformed input or configuration.
    pub fn read<I, R>(&self, rows: I) -> BandResult<Vec<String>>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f32]>,
    {
        Ok(self.read_detailed(rows)?.bands)
    }

    /// Like [`BandReader::read`], also returning the ordered kept detections.
    pub fn read_detailed<I, R>(&self, rows: I) -> BandResult<BandReading>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f32]>,
    {
        self.cfg.validate()?;
        let _span = trace_span!("read_bands", labels = self.labels.len()).entered();

        let candidates = decode(rows, &self.labels, self.cfg.confidence_threshold)?;
        if candidates.is_empty() {
            return Ok(BandReading::default());
        }

        let mut detections = self.suppress(candidates);
        sort_by_position(&mut detections);

        let bands = dedup(class_names(&detections, &self.labels));

        Ok(BandReading { detections, bands })
    }

    #[cfg(feature = "rayon")]
    fn suppress(&self, candidates: Vec<Detection>) -> Vec<Detection> {
        if self.cfg.parallel {
            crate::nms::rayon::suppress_par(candidates, self.cfg.iou_threshold)
        } else {
            suppress(candidates, self.cfg.iou_threshold)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn suppress(&self, candidates: Vec<Detection>) -> Vec<Detection> {
        suppress(candidates, self.cfg.iou_threshold)
    }
}

/// One-shot band reading with an explicit label table and configuration.
pub fn read_bands<I, R>(rows: I, labels: &LabelTable, cfg: &BandConfig) -> BandResult<Vec<String>>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[f32]>,
{
    BandReader::new(labels.clone())
        .with_config(cfg.clone())
        .read(rows)
}

#[cfg(test)]
mod tests {
    use super::{BandConfig, BandReader, BandReading};
    use crate::util::BandError;

    #[test]
    fn default_thresholds() {
        let cfg = BandConfig::default();
        assert_eq!(cfg.confidence_threshold, 0.25);
        assert_eq!(cfg.iou_threshold, 0.45);
        assert!(!cfg.parallel);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn reader_exposes_labels_and_config() {
        let cfg = BandConfig {
            confidence_threshold: 0.5,
            ..BandConfig::default()
        };
        let reader = BandReader::default().with_config(cfg.clone());
        assert_eq!(reader.config(), &cfg);
        assert_eq!(reader.labels().len(), 12);
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let cfg = BandConfig {
            iou_threshold: f32::NAN,
            ..BandConfig::default()
        };
        match cfg.validate() {
            Err(BandError::InvalidConfig { field, .. }) => assert_eq!(field, "iou_threshold"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn summary_joins_bands() {
        let reading = BandReading {
            detections: Vec::new(),
            bands: vec!["brown".into(), "black".into(), "red".into()],
        };
        assert_eq!(reading.to_string(), "brown, black, red");
        assert_eq!(BandReading::default().summary(), "No colors detected.");
    }
}
