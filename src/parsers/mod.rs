use crate::error::{BumpError, Result};
use log::{debug, info};
use regex::Regex;
use std::path::{Path, PathBuf};

pub mod xcodeproj_parser;

pub trait Parser {
    /// Resolves every Info.plist declared by the first project found directly
    /// under `path`, deduplicated in discovery order.
    fn get_plist_paths(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let path = path.as_ref();
        let project = Self::get_matching_files(path)?
            .into_iter()
            .next()
            .ok_or_else(|| BumpError::ProjectNotFound(path.to_path_buf()))?;
        info!("{} found", project.display());

        let descriptor = Self::descriptor_path(&project);
        let contents = std::fs::read_to_string(&descriptor).map_err(|source| BumpError::Descriptor {
            path: descriptor.clone(),
            source,
        })?;

        let mut plist_paths: Vec<PathBuf> = vec![];
        for value in Self::plist_setting_values(&contents)? {
            let plist_path: PathBuf = path.join(value).components().collect();
            if plist_paths.contains(&plist_path) {
                debug!("Skipping duplicate entry: '{}'", plist_path.display());
                continue;
            }
            info!("{} found", plist_path.display());
            plist_paths.push(plist_path);
        }

        if plist_paths.is_empty() {
            return Err(BumpError::NoPlistFound(descriptor));
        }
        Ok(plist_paths)
    }

    /// Extracts the raw plist setting values from a project descriptor, in order.
    fn plist_setting_values(contents: &str) -> Result<Vec<String>> {
        let regex = Self::plist_setting_regex()?;
        let values = regex
            .captures_iter(contents)
            .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
            .map(|value| Self::normalize_setting(value.as_str()))
            .filter(|value| !value.is_empty())
            .collect();
        Ok(values)
    }

    fn get_matching_files(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        debug!("Checking matching files");
        let mut files: Vec<PathBuf> = vec![];
        let path = path.as_ref();
        let walkdir_iter = walkdir::WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        let filename_regex = Self::filename_match_regex()?;

        for item in walkdir_iter {
            let item = item?;
            if filename_regex.is_match(item.file_name().to_string_lossy().as_ref()) {
                files.push(item.path().to_path_buf());
            }
        }

        debug!("Found files: {:?}", files);
        Ok(files)
    }

    fn filename_match_regex() -> Result<Regex>;
    fn plist_setting_regex() -> Result<Regex>;
    fn descriptor_path(project: &Path) -> PathBuf;
    fn normalize_setting(raw: &str) -> String;
}
