//! Label table mapping model class indices to band color names.
//!
//! The table order must match the class order the detector was trained
//! with. A mismatch cannot be detected here and silently yields wrong names.

use crate::util::{BandError, BandResult};
use std::sync::Arc;

/// Colors emitted by the bundled resistor band detector, in class order.
pub const RESISTOR_COLORS: [&str; 12] = [
    "black", "blue", "brown", "gold", "green", "grey", "orange", "red", "silver", "violet", "white",
    "yellow",
];

/// Immutable ordered sequence of class names.
///
/// Cloning is cheap; clones share the same backing storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelTable {
    names: Arc<[String]>,
}

impl LabelTable {
    /// Builds a table from names given in class-index order.
    pub fn new<I, S>(names: I) -> BandResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(BandError::EmptyLabelTable);
        }
        Ok(Self {
            names: names.into(),
        })
    }

    /// The 12-color table used by the resistor band model.
    pub fn resistor_colors() -> Self {
        Self {
            names: RESISTOR_COLORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the name for `class_id`, if it is a valid index.
    pub fn name(&self, class_id: usize) -> Option<&str> {
        self.names.get(class_id).map(String::as_str)
    }

    /// Returns all names in class order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::resistor_colors()
    }
}
