use serde::{Deserialize, Serialize};

/// Value type of one measurement column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Int32,
    Int64,
    Float32,
    Float64,
    Bool,
}

/// On-disk encoding requested when a series is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    Plain,
    Rle,
    Delta,
    Gorilla,
}

/// One measurement column of a batch insert: a typed vector running parallel
/// to the plan's timestamp vector. All columns of a plan share one length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Text(Vec<String>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Bool(Vec<bool>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Text(v) => v.len(),
            ColumnData::Int32(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float32(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            ColumnData::Text(_) => FieldType::Text,
            ColumnData::Int32(_) => FieldType::Int32,
            ColumnData::Int64(_) => FieldType::Int64,
            ColumnData::Float32(_) => FieldType::Float32,
            ColumnData::Float64(_) => FieldType::Float64,
            ColumnData::Bool(_) => FieldType::Bool,
        }
    }

    /// Copy the given index ranges, in range order, into a fresh column of
    /// the same type. Element order within and across ranges is preserved.
    pub fn take_ranges(&self, ranges: &[(usize, usize)]) -> ColumnData {
        match self {
            ColumnData::Text(v) => ColumnData::Text(copy_ranges(v, ranges)),
            ColumnData::Int32(v) => ColumnData::Int32(copy_ranges(v, ranges)),
            ColumnData::Int64(v) => ColumnData::Int64(copy_ranges(v, ranges)),
            ColumnData::Float32(v) => ColumnData::Float32(copy_ranges(v, ranges)),
            ColumnData::Float64(v) => ColumnData::Float64(copy_ranges(v, ranges)),
            ColumnData::Bool(v) => ColumnData::Bool(copy_ranges(v, ranges)),
        }
    }
}

/// Copy the `(start, end)` ranges (end exclusive) of `src` into one fresh
/// vector sized up front, advancing a write cursor range by range.
pub fn copy_ranges<T: Clone>(src: &[T], ranges: &[(usize, usize)]) -> Vec<T> {
    let total: usize = ranges.iter().map(|(start, end)| end - start).sum();
    let mut out = Vec::with_capacity(total);
    for &(start, end) in ranges {
        out.extend_from_slice(&src[start..end]);
    }
    out
}
