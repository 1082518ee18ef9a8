use crate::error::Result;
use crate::parsers::Parser;
use regex::Regex;
use std::path::{Path, PathBuf};

const SOURCE_ROOT_PREFIXES: [&str; 4] = ["$(SRCROOT)/", "${SRCROOT}/", "$(PROJECT_DIR)/", "${PROJECT_DIR}/"];

pub struct XcodeProjectParser;

impl Parser for XcodeProjectParser {
    fn filename_match_regex() -> Result<Regex> {
        Ok(Regex::new(r#"(?i)\.xcodeproj$"#)?)
    }

    fn plist_setting_regex() -> Result<Regex> {
        Ok(Regex::new(
            r#"\bINFOPLIST_FILE\s*=\s*(?:"((?:[^"\\]|\\.)*)"|([^;\s"]+))\s*;"#,
        )?)
    }

    fn descriptor_path(project: &Path) -> PathBuf {
        project.join("project.pbxproj")
    }

    fn normalize_setting(raw: &str) -> String {
        let mut value = String::with_capacity(raw.len());
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    value.push(escaped);
                }
            } else {
                value.push(c);
            }
        }

        for prefix in SOURCE_ROOT_PREFIXES {
            if let Some(stripped) = value.strip_prefix(prefix) {
                return stripped.to_string();
            }
        }
        value
    }
}
