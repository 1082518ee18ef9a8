pub mod arguments;
pub mod bump;
pub mod error;
pub mod parsers;
pub mod plist_file;
pub mod runner;
pub mod selection;
pub mod ui;
pub mod version;
