use std::fmt::Display;
use std::fmt::Formatter;

/// The position of a variable in the engine's column ordering.
///
/// A [`ColumnIndex`] is only meaningful with respect to the engine instance it was resolved
/// against; it is obtained through
/// [`EngineModel::column_index`][crate::engine::EngineModel::column_index].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnIndex {
    pub index: u32,
}

impl ColumnIndex {
    pub fn new(index: u32) -> Self {
        ColumnIndex { index }
    }
}

impl Display for ColumnIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "column{}", self.index)
    }
}
