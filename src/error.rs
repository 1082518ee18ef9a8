use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BumpError>;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("No Info.plist file found at specified path: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("Failed to locate an Xcode project in {}", .0.display())]
    ProjectNotFound(PathBuf),
    #[error("Failed to read project descriptor {}: {source}", path.display())]
    Descriptor {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("No INFOPLIST_FILE build setting found in {}", .0.display())]
    NoPlistFound(PathBuf),
    #[error("No selection could be read from standard input")]
    InputUnavailable,
    #[error("Failed to read the plist file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read the plist data in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: plist::Error,
    },
    #[error("{} does not contain a dictionary at its root", .0.display())]
    NotADictionary(PathBuf),
    #[error("Failed to encode the plist data for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: plist::Error,
    },
    #[error("Failed to write the plist file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Regex(#[from] regex::Error),
}
