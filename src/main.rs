use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::io;
use xcode_bump::{arguments::Arguments, runner};

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let outcome = runner::run(&args, io::stdin().lock(), &mut io::stdout())?;
    if !outcome.failed.is_empty() {
        log::warn!("{} Info.plist file(s) could not be updated", outcome.failed.len());
    }

    Ok(())
}
