//! Google Keep import module
//!
//! Handles converting notes exported by Google Takeout (one JSON file per
//! note, plus loose attachment files in the same directory) into Bear
//! textbundles. Supports:
//! - Plain text and checklist notes
//! - Web-link annotations
//! - Attachments (copied into the bundle's asset directory)
//! - Pin/archive/trash state and edit timestamps
//! - Keep colors mapped to Bear tags

mod import;
mod models;

pub use import::*;
pub use models::*;
