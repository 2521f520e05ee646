//! A minimal reader for the one piece of the MPS format this tool needs: the names of the
//! columns, in the order they first appear in the COLUMNS section.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use fnv::FnvHashSet;

/// Reads the column names of an MPS file.
pub(crate) fn read_column_names(path: &Path) -> std::io::Result<Vec<String>> {
    parse_column_names(BufReader::new(File::open(path)?))
}

pub(crate) fn parse_column_names(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut in_columns = false;
    let mut seen = FnvHashSet::default();
    let mut names = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('*') || line.trim().is_empty() {
            continue;
        }

        // Section headers start in the first column; data lines are indented.
        if !line.starts_with(' ') && !line.starts_with('\t') {
            in_columns = line.trim_end().eq_ignore_ascii_case("COLUMNS");
            continue;
        }
        if !in_columns {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some(&name) = fields.first() else {
            continue;
        };
        // Integrality marker lines declare no column.
        if fields.contains(&"'MARKER'") {
            continue;
        }
        if seen.insert(name.to_owned()) {
            names.push(name.to_owned());
        }
    }

    Ok(names)
}
