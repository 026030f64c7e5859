//! Deserialized shape of a Google Takeout Keep note JSON file.

use serde::{Deserialize, Deserializer};

/// One exported Keep note.
///
/// A note carries its body as either `text_content` or `list_content`,
/// never both. Notes without either are rejected during conversion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeepNote {
    #[serde(default)]
    pub title: String,

    pub text_content: Option<String>,
    pub list_content: Option<Vec<ListItem>>,

    pub annotations: Option<Vec<Annotation>>,
    pub attachments: Option<Vec<Attachment>>,

    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_trashed: bool,

    /// Keep color label; `DEFAULT` means no color.
    #[serde(default = "default_color")]
    pub color: String,

    /// Last edit time, microseconds since the Unix epoch.
    #[serde(default)]
    pub user_edited_timestamp_usec: i64,
}

fn default_color() -> String {
    "DEFAULT".to_string()
}

/// One checklist entry of a list note.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub text: String,
    #[serde(default)]
    pub is_checked: bool,
}

/// Reference to an attachment file exported next to the note JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Path relative to the Takeout `Keep/` directory.
    pub file_path: String,
    pub mimetype: Option<String>,
}

/// A note annotation, keyed by Keep's `source` discriminator.
///
/// Only `WEBLINK` is a known kind. Anything else parses into `Unknown`,
/// which the converter turns into a hard error rather than dropping the
/// annotation silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    WebLink {
        title: String,
        url: String,
        description: String,
    },
    Unknown {
        source: String,
    },
}

/// Raw annotation record as it appears in the export. The typed enum is
/// built from this so an unrecognized `source` keeps its name for the
/// error message.
#[derive(Deserialize)]
struct RawAnnotation {
    source: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: String,
}

impl<'de> Deserialize<'de> for Annotation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAnnotation::deserialize(deserializer)?;
        Ok(match raw.source.as_str() {
            "WEBLINK" => Annotation::WebLink {
                title: raw.title,
                url: raw.url,
                description: raw.description,
            },
            _ => Annotation::Unknown { source: raw.source },
        })
    }
}
