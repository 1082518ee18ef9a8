//! Shared fixtures for the integration tests
#![allow(dead_code)]

use plist::{Dictionary, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes `App.xcodeproj/project.pbxproj` declaring one build configuration
/// per entry of `plist_settings`.
pub fn write_project(root: &Path, plist_settings: &[&str]) {
    let project = root.join("App.xcodeproj");
    fs::create_dir_all(&project).unwrap();

    let mut configurations = String::new();
    for (index, setting) in plist_settings.iter().enumerate() {
        configurations.push_str(&format!(
            "\t\t0000000{index} /* Debug */ = {{\n\t\t\tisa = XCBuildConfiguration;\n\t\t\tbuildSettings = {{\n\t\t\t\tINFOPLIST_FILE = {setting};\n\t\t\t}};\n\t\t\tname = Debug;\n\t\t}};\n"
        ));
    }

    fs::write(
        project.join("project.pbxproj"),
        format!(
            "// !$*UTF8*$!\n{{\n\tobjects = {{\n/* Begin XCBuildConfiguration section */\n{configurations}/* End XCBuildConfiguration section */\n\t}};\n}}\n"
        ),
    )
    .unwrap();
}

pub fn write_info_plist(root: &Path, relative: &str, version: &str, build: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut dictionary = Dictionary::new();
    dictionary.insert(
        "CFBundleShortVersionString".to_string(),
        Value::String(version.to_string()),
    );
    dictionary.insert("CFBundleVersion".to_string(), Value::String(build.to_string()));
    Value::Dictionary(dictionary).to_file_xml(&path).unwrap();
    path
}

pub fn read_versions(path: &Path) -> (String, String) {
    let dictionary = Value::from_file(path).unwrap().into_dictionary().unwrap();
    let get = |key: &str| {
        dictionary
            .get(key)
            .and_then(Value::as_string)
            .unwrap()
            .to_string()
    };
    (get("CFBundleShortVersionString"), get("CFBundleVersion"))
}

pub fn project_with_plists(relatives: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let settings: Vec<String> = relatives.iter().map(|relative| format!("\"{relative}\"")).collect();
    let settings: Vec<&str> = settings.iter().map(String::as_str).collect();
    write_project(temp_dir.path(), &settings);
    for relative in relatives {
        write_info_plist(temp_dir.path(), relative, "1.2.3", "40");
    }
    temp_dir
}
