use crate::error::Result;
use crate::plist_file::PlistSnapshot;
use crate::version::{BumpLevel, BundleVersion, next_build_number};
use log::{debug, info, warn};
use std::fmt;
use std::path::Path;

pub const BUNDLE_SHORT_VERSION: &str = "CFBundleShortVersionString";
pub const BUNDLE_VERSION: &str = "CFBundleVersion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub previous: String,
    pub current: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BumpOutcome {
    pub version: Option<FieldChange>,
    pub build: Option<FieldChange>,
}

impl BumpOutcome {
    pub fn is_changed(&self) -> bool {
        self.version.is_some() || self.build.is_some()
    }

    /// The `previous(build) -> new(build)` line, only available when the
    /// marketing version was present.
    pub fn summary(&self) -> Option<Summary<'_>> {
        self.version.as_ref().map(|version| Summary {
            version,
            build: self.build.as_ref(),
        })
    }
}

pub struct Summary<'a> {
    pub version: &'a FieldChange,
    pub build: Option<&'a FieldChange>,
}

impl Summary<'_> {
    pub fn previous(&self) -> String {
        match self.build {
            Some(build) => format!("{}({})", self.version.previous, build.previous),
            None => self.version.previous.clone(),
        }
    }

    pub fn current(&self) -> String {
        match self.build {
            Some(build) => format!("{}({})", self.version.current, build.current),
            None => self.version.current.clone(),
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.previous(), self.current())
    }
}

/// Applies `level` to the marketing version and increments the build number.
/// Each field is updated independently; a missing or malformed field is left alone.
pub fn bump(snapshot: &mut PlistSnapshot, level: BumpLevel) -> BumpOutcome {
    let mut outcome = BumpOutcome::default();

    if let Some(previous) = snapshot.get_string(BUNDLE_SHORT_VERSION).map(str::to_string) {
        match BundleVersion::parse(&previous).bumped(level) {
            Some(current) => {
                let current = current.to_string();
                debug!("Bumping {} from {} -> {}", BUNDLE_SHORT_VERSION, previous, current);
                snapshot.set_string(BUNDLE_SHORT_VERSION, current.as_str());
                outcome.version = Some(FieldChange { previous, current });
            }
            None => warn!("{} '{}' cannot be bumped without overflowing, skipping", BUNDLE_SHORT_VERSION, previous),
        }
    } else {
        debug!("No string {} present, skipping", BUNDLE_SHORT_VERSION);
    }

    if let Some(previous) = snapshot.get_string(BUNDLE_VERSION).map(str::to_string) {
        match next_build_number(&previous) {
            Some(current) => {
                debug!("Bumping {} from {} -> {}", BUNDLE_VERSION, previous, current);
                snapshot.set_string(BUNDLE_VERSION, current.as_str());
                outcome.build = Some(FieldChange { previous, current });
            }
            None => debug!("{} '{}' is not an integer, skipping", BUNDLE_VERSION, previous),
        }
    } else {
        debug!("No string {} present, skipping", BUNDLE_VERSION);
    }

    outcome
}

/// Reads the plist at `path`, bumps it and writes it back in its original format.
/// The file is left untouched when neither field could be updated.
pub fn update_plist(path: impl AsRef<Path>, level: BumpLevel) -> Result<BumpOutcome> {
    let path = path.as_ref();
    info!("Updating '{}'", path.display());
    let mut snapshot = PlistSnapshot::read(path)?;
    let outcome = bump(&mut snapshot, level);
    if outcome.is_changed() {
        snapshot.write(path)?;
    } else {
        debug!("Nothing to update in '{}'", path.display());
    }
    Ok(outcome)
}
