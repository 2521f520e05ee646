//! Reader and writer for the hole specification format.
//!
//! The format is a flat sequence of whitespace-separated tokens:
//!
//! ```text
//! V
//! name1 domLo1 domHi1 H1  lo1_1 hi1_1 ... lo1_H1 hi1_H1
//! ...
//! ```
//!
//! `V` is the number of declared hole variables; each variable contributes its name, its integer
//! domain bounds, its hole count `H`, and `H` integer `(lower, upper)` pairs. Line breaks carry
//! no meaning. A missing or malformed token fails the whole read.

use std::path::Path;

use crate::basic_types::Hole;
use crate::basic_types::HoleVariable;
use crate::catalog::HoleFileError;

/// The number of entries pre-allocated ahead of reading, at most.
const PREALLOCATION_CAP: usize = 1024;

/// Reads and parses a hole specification file.
pub fn read_hole_file(path: impl AsRef<Path>) -> Result<Vec<HoleVariable>, HoleFileError> {
    let source = std::fs::read_to_string(path)?;
    parse_hole_file(&source)
}

/// Parses a hole specification from an in-memory string.
///
/// The returned variables are in declaration order and unresolved (`column == None`); they are
/// resolved against an engine by [`HoleCatalog::resolve`][crate::catalog::HoleCatalog::resolve].
pub fn parse_hole_file(source: &str) -> Result<Vec<HoleVariable>, HoleFileError> {
    let mut tokens = source.split_whitespace();

    let num_variables = next_count(&mut tokens, "variable count")?;
    // Counts come straight from the file; cap the pre-allocation so an absurd declared count
    // runs into the token check instead of the allocator.
    let mut variables = Vec::with_capacity(num_variables.min(PREALLOCATION_CAP));

    for _ in 0..num_variables {
        let name = next_token(&mut tokens, "variable name")?;
        let domain_lower = next_integer(&mut tokens, "domain lower bound")?;
        let domain_upper = next_integer(&mut tokens, "domain upper bound")?;
        let num_holes = next_count(&mut tokens, "hole count")?;

        let mut holes = Vec::with_capacity(num_holes.min(PREALLOCATION_CAP));
        for _ in 0..num_holes {
            let lower = next_integer(&mut tokens, "hole lower bound")?;
            let upper = next_integer(&mut tokens, "hole upper bound")?;
            holes.push(Hole::new(lower, upper));
        }

        variables.push(HoleVariable::new(
            name.to_owned(),
            domain_lower,
            domain_upper,
            holes,
        ));
    }

    Ok(variables)
}

/// Serialises hole variables back into the token format accepted by [`parse_hole_file`].
pub fn serialize_hole_variables(variables: &[HoleVariable]) -> String {
    let mut output = format!("{}\n", variables.len());

    for variable in variables {
        output.push_str(&format!(
            "{} {} {} {}",
            variable.name,
            variable.domain_lower,
            variable.domain_upper,
            variable.holes.len()
        ));
        for hole in &variable.holes {
            output.push_str(&format!(" {} {}", hole.lower, hole.upper));
        }
        output.push('\n');
    }

    output
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<&'a str, HoleFileError> {
    tokens
        .next()
        .ok_or(HoleFileError::UnexpectedEnd { expected })
}

fn next_integer<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<i64, HoleFileError> {
    let token = next_token(tokens, expected)?;
    token.parse().map_err(|_| HoleFileError::InvalidToken {
        expected,
        token: token.into(),
    })
}

fn next_count<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    expected: &'static str,
) -> Result<usize, HoleFileError> {
    let token = next_token(tokens, expected)?;
    token.parse().map_err(|_| HoleFileError::InvalidToken {
        expected,
        token: token.into(),
    })
}
