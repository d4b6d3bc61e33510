//! Reading tabulated potentials.
//!
//! A table is plain text whose first line is a header (always discarded),
//! followed by one sample per line as whitespace-separated columns:
//! ```text
//! position  potential_energy
//! -3.14     9.87
//! -3.00     9.00
//! ...
//! ```
//! Columns after the second are ignored and whitespace-only lines are
//! skipped. Values must be finite; `nan` and `inf` are rejected.

use std::{ fs, path::Path };
use ndarray as nd;
use tracing::debug;
use crate::{ error::InputError, solve::SampleSet };

pub type InputResult<T> = Result<T, InputError>;

fn parse_token(token: &str, line: usize) -> InputResult<f64> {
    let value = token.parse::<f64>()
        .map_err(|source| {
            InputError::BadFloat { line, token: token.to_string(), source }
        })?;
    value.is_finite().then_some(value)
        .ok_or_else(|| InputError::NonFinite { line, token: token.to_string() })
}

/// Parse the contents of a potential table.
///
/// ```
/// use kspace::table::parse_table;
///
/// let samples = parse_table("x V\n0.0 1.0\n0.5 2.0\n").unwrap();
/// assert_eq!(samples.len(), 2);
/// assert_eq!(samples.get_V()[1], 2.0);
/// ```
pub fn parse_table(content: &str) -> InputResult<SampleSet> {
    let (x, V): (Vec<f64>, Vec<f64>)
        = content.lines().enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(k, line)| {
            let line_no = k + 1;
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some(xk), Some(Vk)) => Ok((
                    parse_token(xk, line_no)?,
                    parse_token(Vk, line_no)?,
                )),
                _ => Err(InputError::MissingColumn { line: line_no }),
            }
        })
        .collect::<InputResult<Vec<(f64, f64)>>>()?
        .into_iter()
        .unzip();
    let samples = SampleSet::new_arrays(
        nd::Array1::from(x), nd::Array1::from(V))?;
    Ok(samples)
}

/// Read and parse a potential table from a file.
pub fn read_table<P>(path: P) -> InputResult<SampleSet>
where P: AsRef<Path>
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|source| InputError::Io { path: path.to_path_buf(), source })?;
    let samples = parse_table(&content)?;
    debug!(path = %path.display(), samples = samples.len(), "read potential table");
    Ok(samples)
}
