//! Bear textbundle output module
//!
//! A textbundle is a directory bundle: `text.txt` with the note body,
//! `info.json` with Bear-specific metadata, and an optional `assets/`
//! subdirectory holding attachment copies.

mod metadata;
mod writer;

pub use metadata::*;
pub use writer::*;

/// Bundle directory extension recognized by Bear.
pub const TB_EXT: &str = "textbundle";
/// Note body filename inside the bundle.
pub const TB_CONTENT_FILE: &str = "text.txt";
/// Metadata filename inside the bundle.
pub const TB_METADATA_FILE: &str = "info.json";
/// Attachment subdirectory name inside the bundle.
pub const TB_ASSET_DIR: &str = "assets";
