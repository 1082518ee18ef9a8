use crate::version::BumpLevel;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Bump the version and build number in an Xcode project's Info.plist",
    bin_name = "xcbump"
)]
pub struct Arguments {
    /// Update the major version.
    #[arg(long)]
    pub major: bool,
    /// Update the minor version.
    #[arg(long)]
    pub minor: bool,
    /// Update the hotfix version.
    #[arg(long)]
    pub hotfix: bool,
    /// Update the build version. The build number is incremented on every run.
    #[arg(long)]
    pub build: bool,
    /// Path to the Info.plist; skips project discovery.
    #[arg(long, short)]
    pub path: Option<String>,
    /// Directory containing the .xcodeproj to scan.
    #[arg(long = "project-dir", short = 'C', default_value = "./")]
    pub project_dir: String,
    #[arg(long, short)]
    pub verbose: bool,
}

impl Arguments {
    pub fn bump_level(&self) -> BumpLevel {
        BumpLevel::from_flags(self.major, self.minor, self.hotfix)
    }
}
