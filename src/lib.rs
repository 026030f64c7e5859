//! keep2bear: convert exported Google Keep notes to Bear textbundles.
//!
//! The library converts one parsed note at a time ([`convert_note`]); the
//! binary wraps it with Takeout directory discovery and a batch loop.

mod error;
pub mod keep;
pub mod textbundle;

pub use error::ConversionError;
pub use keep::convert_note;
