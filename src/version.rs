use semver::Version;
use std::fmt;

/// Which component of the marketing version to increment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BumpLevel {
    Major,
    Minor,
    Hotfix,
    #[default]
    None,
}

impl BumpLevel {
    /// Precedence used when several flags are set; the first set flag wins.
    pub const PRIORITY: [BumpLevel; 3] = [BumpLevel::Major, BumpLevel::Minor, BumpLevel::Hotfix];

    pub fn from_flags(major: bool, minor: bool, hotfix: bool) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|level| match level {
                BumpLevel::Major => major,
                BumpLevel::Minor => minor,
                BumpLevel::Hotfix => hotfix,
                BumpLevel::None => false,
            })
            .unwrap_or_default()
    }
}

/// A `CFBundleShortVersionString` value, always three numeric components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleVersion(Version);

impl BundleVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    /// Lenient parse: non-numeric components read as 0, missing ones are padded
    /// with 0 and anything past the third component is dropped.
    pub fn parse(value: &str) -> Self {
        let mut components = value.split('.').map(|part| part.parse::<u64>().unwrap_or(0));
        let major = components.next().unwrap_or(0);
        let minor = components.next().unwrap_or(0);
        let patch = components.next().unwrap_or(0);
        Self::new(major, minor, patch)
    }

    /// Returns `None` when the incremented component would overflow.
    pub fn bumped(&self, level: BumpLevel) -> Option<Self> {
        let mut version = self.0.clone();
        match level {
            BumpLevel::Major => {
                version.major = version.major.checked_add(1)?;
                version.minor = 0;
                version.patch = 0;
            }
            BumpLevel::Minor => {
                version.minor = version.minor.checked_add(1)?;
                version.patch = 0;
            }
            BumpLevel::Hotfix => version.patch = version.patch.checked_add(1)?,
            BumpLevel::None => {}
        }
        Some(Self(version))
    }
}

impl fmt::Display for BundleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0.major, self.0.minor, self.0.patch)
    }
}

/// Returns the next `CFBundleVersion`, or `None` when the value is not a plain
/// non-negative integer.
pub fn next_build_number(value: &str) -> Option<String> {
    value
        .parse::<u64>()
        .ok()
        .and_then(|build| build.checked_add(1))
        .map(|build| build.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_major_wins() {
        assert_eq!(BumpLevel::from_flags(true, true, true), BumpLevel::Major);
        assert_eq!(BumpLevel::from_flags(true, false, true), BumpLevel::Major);
    }

    #[test]
    fn test_priority_minor_over_hotfix() {
        assert_eq!(BumpLevel::from_flags(false, true, true), BumpLevel::Minor);
    }

    #[test]
    fn test_priority_single_flags() {
        assert_eq!(BumpLevel::from_flags(false, false, true), BumpLevel::Hotfix);
        assert_eq!(BumpLevel::from_flags(false, false, false), BumpLevel::None);
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!(BundleVersion::parse("1.2.3"), BundleVersion::new(1, 2, 3));
    }

    #[test]
    fn test_parse_pads_missing_components() {
        assert_eq!(BundleVersion::parse("2"), BundleVersion::new(2, 0, 0));
        assert_eq!(BundleVersion::parse("2.5"), BundleVersion::new(2, 5, 0));
        assert_eq!(BundleVersion::parse(""), BundleVersion::new(0, 0, 0));
    }

    #[test]
    fn test_parse_non_numeric_components_are_zero() {
        assert_eq!(BundleVersion::parse("1.x.3"), BundleVersion::new(1, 0, 3));
        assert_eq!(BundleVersion::parse("1.2.3-beta"), BundleVersion::new(1, 2, 0));
        assert_eq!(BundleVersion::parse("-1.2.3"), BundleVersion::new(0, 2, 3));
    }

    #[test]
    fn test_parse_drops_extra_components() {
        assert_eq!(BundleVersion::parse("1.2.3.4"), BundleVersion::new(1, 2, 3));
    }

    #[test]
    fn test_bump_major() {
        let version = BundleVersion::parse("1.2.3").bumped(BumpLevel::Major).unwrap();
        assert_eq!(version.to_string(), "2.0.0");
    }

    #[test]
    fn test_bump_minor() {
        let version = BundleVersion::parse("1.2.3").bumped(BumpLevel::Minor).unwrap();
        assert_eq!(version.to_string(), "1.3.0");
    }

    #[test]
    fn test_bump_hotfix() {
        let version = BundleVersion::parse("1.2.3").bumped(BumpLevel::Hotfix).unwrap();
        assert_eq!(version.to_string(), "1.2.4");
    }

    #[test]
    fn test_bump_none_is_identity() {
        for input in ["0.0.0", "1.2.3", "10.20.30"] {
            assert_eq!(BundleVersion::parse(input).bumped(BumpLevel::None).unwrap().to_string(), input);
        }
    }

    #[test]
    fn test_bump_overflow_is_rejected() {
        let max = u64::MAX.to_string();
        assert_eq!(BundleVersion::parse(&format!("{max}.0.0")).bumped(BumpLevel::Major), None);
        assert_eq!(BundleVersion::parse(&format!("1.{max}.0")).bumped(BumpLevel::Minor), None);
        assert_eq!(BundleVersion::parse(&format!("1.2.{max}")).bumped(BumpLevel::Hotfix), None);
        assert_eq!(
            BundleVersion::parse(&format!("{max}.0.0")).bumped(BumpLevel::None),
            Some(BundleVersion::new(u64::MAX, 0, 0))
        );
    }

    #[test]
    fn test_bump_major_resets_overflowing_minor() {
        let max = u64::MAX.to_string();
        let version = BundleVersion::parse(&format!("1.{max}.{max}")).bumped(BumpLevel::Major);
        assert_eq!(version, Some(BundleVersion::new(2, 0, 0)));
    }

    #[test]
    fn test_next_build_number() {
        assert_eq!(next_build_number("40"), Some("41".to_string()));
        assert_eq!(next_build_number("0"), Some("1".to_string()));
        assert_eq!(next_build_number("99"), Some("100".to_string()));
    }

    #[test]
    fn test_next_build_number_rejects_non_integers() {
        assert_eq!(next_build_number("1.0"), None);
        assert_eq!(next_build_number("abc"), None);
        assert_eq!(next_build_number(""), None);
        assert_eq!(next_build_number(" 40"), None);
        assert_eq!(next_build_number(&u64::MAX.to_string()), None);
    }
}
