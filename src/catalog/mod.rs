//! The immutable table of hole variables a session operates on.

mod error;
mod parser;

use std::path::Path;

use fnv::FnvHashMap;
use log::warn;

pub use error::HoleFileError;
pub use parser::parse_hole_file;
pub use parser::read_hole_file;
pub use parser::serialize_hole_variables;

use crate::basic_types::ColumnIndex;
use crate::basic_types::Hole;
use crate::basic_types::HoleVariable;
use crate::engine::EngineModel;

/// The variables with holes of one problem, resolved against the engine's columns.
///
/// Built once when a session is set up and read-only afterwards; the hooks hold shared
/// references into it. A declared variable whose name matches no engine column stays in the
/// catalog but is inert: it has no [`ColumnIndex`], so no incumbent value or bound change can
/// ever be attributed to it.
#[derive(Debug, Default)]
pub struct HoleCatalog {
    /// All declared hole variables, in declaration order.
    variables: Vec<HoleVariable>,
    /// Resolved name to column lookup, built once at resolution time.
    name_to_column: FnvHashMap<String, ColumnIndex>,
    /// Position in `variables` of the variable resolved to each column.
    column_to_variable: FnvHashMap<ColumnIndex, usize>,
    /// `has_hole[c]` is true iff column `c` resolved to a hole variable.
    has_hole: Vec<bool>,
}

impl HoleCatalog {
    /// Resolves the declared variables against the engine's column names and builds the catalog.
    ///
    /// Names which do not match any column are left unresolved with a warning; the read itself
    /// is not failed.
    pub fn resolve(mut variables: Vec<HoleVariable>, engine: &dyn EngineModel) -> Self {
        let mut name_to_column = FnvHashMap::default();
        let mut column_to_variable = FnvHashMap::default();
        let mut has_hole = vec![false; engine.num_columns()];

        for (position, variable) in variables.iter_mut().enumerate() {
            match engine.column_index(&variable.name) {
                Some(column) => {
                    variable.column = Some(column);
                    let _ = name_to_column.insert(variable.name.clone(), column);
                    let _ = column_to_variable.insert(column, position);
                    has_hole[column.index as usize] = true;
                }
                None => warn!(
                    "hole variable '{}' does not match any engine column and will be ignored",
                    variable.name
                ),
            }
        }

        HoleCatalog {
            variables,
            name_to_column,
            column_to_variable,
            has_hole,
        }
    }

    /// Reads a hole file and resolves it against the engine in one step.
    pub fn from_file(
        path: impl AsRef<Path>,
        engine: &dyn EngineModel,
    ) -> Result<Self, HoleFileError> {
        Ok(Self::resolve(read_hole_file(path)?, engine))
    }

    /// Returns true iff the column belongs to a (resolved) hole variable.
    pub fn is_hole_variable(&self, column: ColumnIndex) -> bool {
        self.has_hole
            .get(column.index as usize)
            .copied()
            .unwrap_or(false)
    }

    /// The holes of the variable at the given column, if any.
    pub fn holes_for(&self, column: ColumnIndex) -> Option<&[Hole]> {
        self.variable_for(column)
            .map(|variable| variable.holes.as_slice())
    }

    /// The column a declared variable name resolved to, if any.
    pub fn column_of(&self, name: &str) -> Option<ColumnIndex> {
        self.name_to_column.get(name).copied()
    }

    /// The hole variable resolved to the given column, if any.
    pub fn variable_for(&self, column: ColumnIndex) -> Option<&HoleVariable> {
        self.column_to_variable
            .get(&column)
            .map(|&position| &self.variables[position])
    }

    /// All declared hole variables, in declaration order (including unresolved ones).
    pub fn variables(&self) -> &[HoleVariable] {
        &self.variables
    }

    /// The number of declared variables whose name resolved to an engine column.
    pub fn num_resolved(&self) -> usize {
        self.column_to_variable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
