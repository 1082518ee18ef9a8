use crate::arguments::Arguments;
use crate::bump::{BumpOutcome, update_plist};
use crate::error::BumpError;
use crate::parsers::{Parser, xcodeproj_parser::XcodeProjectParser};
use crate::selection::prompt_selection;
use crate::ui;
use anyhow::Result;
use log::{debug, error, warn};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct RunOutcome {
    pub updated: Vec<(PathBuf, BumpOutcome)>,
    pub failed: Vec<(PathBuf, BumpError)>,
}

/// Works out which plist files to touch. Any failure here aborts the run.
pub fn resolve_targets<R: BufRead, W: Write>(
    args: &Arguments,
    input: R,
    output: &mut W,
) -> Result<Vec<PathBuf>> {
    if let Some(path) = &args.path {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return Err(BumpError::PathNotFound(path).into());
        }
        return Ok(vec![path]);
    }

    let candidates = XcodeProjectParser::get_plist_paths(Path::new(&args.project_dir))?;
    if candidates.len() == 1 {
        debug!("Single Info.plist found, skipping selection");
        return Ok(candidates);
    }
    Ok(prompt_selection(&candidates, input, output)?)
}

/// Bumps every resolved plist. Per-file failures are reported and collected
/// without stopping the remaining files.
pub fn run<R: BufRead, W: Write>(args: &Arguments, input: R, output: &mut W) -> Result<RunOutcome> {
    if args.build {
        debug!("--build requested; the build number is bumped on every run");
    }
    let level = args.bump_level();
    debug!("Bump level: {:?}", level);

    let targets = resolve_targets(args, input, output)?;
    let mut outcome = RunOutcome::default();
    for target in targets {
        match update_plist(&target, level) {
            Ok(result) => {
                if let Some(summary) = result.summary() {
                    if let Err(e) = writeln!(output, "{}", ui::update_line(&summary)) {
                        warn!("Failed to report update of '{}': {}", target.display(), e);
                    }
                }
                outcome.updated.push((target, result));
            }
            Err(e) => {
                error!("{}", e);
                outcome.failed.push((target, e));
            }
        }
    }
    Ok(outcome)
}
