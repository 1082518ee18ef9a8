use crate::error::{BumpError, Result};
use crate::ui;
use log::{debug, warn};
use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    NotANumber(String),
    OutOfRange(usize),
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::NotANumber(token) => write!(f, "'{}' is not a valid index, skipping", token),
            Rejected::OutOfRange(index) => write!(f, "index {} is out of range, skipping", index),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub indices: Vec<usize>,
    pub rejected: Vec<Rejected>,
}

/// Parses a comma separated list of 0-based indices into `0..count`.
///
/// Whitespace around tokens and blank tokens are ignored, duplicates keep their
/// first position, and every bad token is recorded without failing the rest.
pub fn parse_selection(input: &str, count: usize) -> Selection {
    let mut selection = Selection::default();
    for token in input.split(',').map(str::trim).filter(|token| !token.is_empty()) {
        match token.parse::<usize>() {
            Ok(index) if index >= count => selection.rejected.push(Rejected::OutOfRange(index)),
            Ok(index) if selection.indices.contains(&index) => {
                debug!("Ignoring duplicate index {}", index)
            }
            Ok(index) => selection.indices.push(index),
            Err(_) => selection.rejected.push(Rejected::NotANumber(token.to_string())),
        }
    }
    selection
}

/// Lists `paths` on `output` and reads the operator's choice from `input`.
pub fn prompt_selection<R: BufRead, W: Write>(
    paths: &[PathBuf],
    mut input: R,
    output: &mut W,
) -> Result<Vec<PathBuf>> {
    writeln!(output, "Multiple Info.plist files found:")?;
    for (index, path) in paths.iter().enumerate() {
        writeln!(output, "[{}] {}", index, path.display())?;
    }
    writeln!(
        output,
        "Enter the indices of the Info.plist files you want to update (comma separated):"
    )?;
    output.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => return Err(BumpError::InputUnavailable),
        Ok(_) => {}
        Err(e) => {
            debug!("Failed to read selection: {}", e);
            return Err(BumpError::InputUnavailable);
        }
    }

    let selection = parse_selection(&line, paths.len());
    for rejected in &selection.rejected {
        warn!("{}", rejected);
        writeln!(output, "{}", ui::warning_line(&rejected.to_string()))?;
    }
    if selection.indices.is_empty() {
        writeln!(output, "{}", ui::warning_line("No Info.plist selected"))?;
    }

    Ok(selection.indices.iter().map(|&index| paths[index].clone()).collect())
}
