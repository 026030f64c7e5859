use std::fmt;
use std::path::PathBuf;

/// Errors raised while converting a single Keep note.
///
/// Every variant aborts the current note's conversion; there is no retry or
/// partial-success path. The batch driver decides whether to continue.
///
/// `Display`/`Error`/`From` are written by hand because `thiserror` insists
/// on treating the `UnknownAnnotation::source` field (a plain `String`) as
/// the error source.
#[derive(Debug)]
pub enum ConversionError {
    Io(std::io::Error),

    Json(serde_json::Error),

    UnknownAnnotation { source: String, note: String },

    MissingAttachment { path: PathBuf, note: String },

    MissingContent { note: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Json(err) => write!(f, "JSON error: {}", err),
            Self::UnknownAnnotation { source, note } => {
                write!(f, "unknown annotation type '{}' in note '{}'", source, note)
            }
            Self::MissingAttachment { path, note } => write!(
                f,
                "could not find file '{}' referenced by note '{}'",
                path.display(),
                note
            ),
            Self::MissingContent { note } => {
                write!(f, "note '{}' has neither text nor list content", note)
            }
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
