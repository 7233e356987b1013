//! Raw model output views and decoded detection types.
//!
//! `RawOutput` is a borrowed view over the detector's flat output buffer,
//! laid out as `num_rows` rows of `row_len` floats with an explicit stride.
//! Each row starts with `[x1, y1, x2, y2, confidence, class_index]`; trailing
//! fields are ignored.

use crate::label::LabelTable;
use crate::util::{BandError, BandResult};

/// Number of leading fields every raw row must carry.
pub const ROW_FIELDS: usize = 6;

/// Axis-aligned box in the resized input frame.
///
/// `x1 <= x2` and `y1 <= y2` are expected but not enforced; see
/// [`BBox::area`] for how inverted boxes behave.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BBox {
    /// Creates a box from its corner coordinates.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// A candidate box that passed confidence and class validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    /// Box corners.
    pub bbox: BBox,
    /// Model confidence, at or above the decode threshold.
    pub confidence: f32,
    /// Index into the label table.
    pub class_id: usize,
    /// Index of the raw row this detection came from; used for tie-breaks.
    pub row: usize,
}

impl Detection {
    /// Looks up the class name in `labels`.
    pub fn class_name<'l>(&self, labels: &'l LabelTable) -> Option<&'l str> {
        labels.name(self.class_id)
    }
}

/// Borrowed row-major view of a detector output tensor.
#[derive(Copy, Clone, Debug)]
pub struct RawOutput<'a> {
    data: &'a [f32],
    num_rows: usize,
    row_len: usize,
    stride: usize,
}

impl<'a> RawOutput<'a> {
    /// Creates a contiguous view with `stride == row_len`.
    pub fn from_slice(data: &'a [f32], num_rows: usize, row_len: usize) -> BandResult<Self> {
        Self::new(data, num_rows, row_len, row_len)
    }

    /// Creates a view with an explicit stride between row starts.
    pub fn new(
        data: &'a [f32],
        num_rows: usize,
        row_len: usize,
        stride: usize,
    ) -> BandResult<Self> {
        if stride < row_len {
            return Err(BandError::InvalidStride { row_len, stride });
        }
        let needed = required_len(num_rows, row_len, stride).unwrap_or(usize::MAX);
        if data.len() < needed {
            return Err(BandError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            num_rows,
            row_len,
            stride,
        })
    }

    /// Number of rows in the view.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of fields per row.
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// Elements between consecutive row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns row `idx` with length `row_len`.
    pub fn row(&self, idx: usize) -> Option<&'a [f32]> {
        if idx >= self.num_rows {
            return None;
        }
        let start = idx.checked_mul(self.stride)?;
        let end = start.checked_add(self.row_len)?;
        self.data.get(start..end)
    }

    /// Iterates rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &'a [f32]> + 'a {
        let view = *self;
        (0..view.num_rows).filter_map(move |idx| view.row(idx))
    }
}

fn required_len(num_rows: usize, row_len: usize, stride: usize) -> Option<usize> {
    if num_rows == 0 {
        return Some(0);
    }
    (num_rows - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(row_len))
}
