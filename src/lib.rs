//! Resistor band reading from object-detector output.
//!
//! The crate turns the raw rows of a band detector (`[x1, y1, x2, y2,
//! confidence, class, ...]` in the resized input frame) into the ordered
//! list of band colors: confidence filtering, per-class greedy NMS,
//! left-to-right ordering and collapsing of adjacent repeats. Image capture
//! and model inference are left to the caller. Optional features add
//! parallel NMS across classes (`rayon`) and structured spans (`tracing`).

pub mod decode;
pub mod dedup;
pub mod detection;
pub mod geometry;
pub mod label;
pub mod nms;
pub mod pipeline;
pub mod sequence;
mod trace;
pub mod util;

pub use decode::decode;
pub use dedup::dedup;
pub use detection::{BBox, Detection, RawOutput, ROW_FIELDS};
pub use geometry::iou;
pub use label::{LabelTable, RESISTOR_COLORS};
pub use nms::suppress;
#[cfg(feature = "rayon")]
pub use nms::rayon::suppress_par;
pub use pipeline::{read_bands, BandConfig, BandReader, BandReading};
pub use sequence::sequence;
pub use util::{BandError, BandResult};
