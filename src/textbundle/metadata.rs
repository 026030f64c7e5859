//! The `info.json` metadata record of a Bear textbundle.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level `info.json` record.
///
/// Bear keeps its own fields under the `net.shinyfrog.bear` key next to
/// the generic textbundle fields (type/version/creator).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleInfo {
    #[serde(rename = "net.shinyfrog.bear")]
    pub bear: BearInfo,
    pub transient: bool,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(rename = "creatorIdentifier")]
    pub creator_identifier: String,
    pub version: u32,
}

/// Bear-specific metadata block.
///
/// The pin/archive/trash flags are serialized as 0/1 integers; each
/// `*_date` field mirrors the modification timestamp when its flag is
/// set and is an explicit JSON `null` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BearInfo {
    pub pinned: u8,
    pub trashed_date: Option<String>,
    pub archived: u8,
    pub modification_date: String,
    pub creation_date: String,
    pub pinned_date: Option<String>,
    pub trashed: u8,
    pub unique_identifier: String,
    pub archived_date: Option<String>,
    pub last_editing_device: String,
}

impl BundleInfo {
    /// Build the metadata record for one converted note. Mints a fresh
    /// unique identifier on every call.
    pub fn new(
        created_ts: &str,
        mod_ts: &str,
        pinned: bool,
        archived: bool,
        trashed: bool,
    ) -> Self {
        let dated = |flag: bool| flag.then(|| mod_ts.to_string());

        BundleInfo {
            bear: BearInfo {
                pinned: pinned as u8,
                trashed_date: dated(trashed),
                archived: archived as u8,
                modification_date: mod_ts.to_string(),
                creation_date: created_ts.to_string(),
                pinned_date: dated(pinned),
                trashed: trashed as u8,
                unique_identifier: Uuid::new_v4().to_string(),
                archived_date: dated(archived),
                last_editing_device: "keep2bear".to_string(),
            },
            transient: true,
            content_type: "public.plain-text".to_string(),
            creator_identifier: "net.shinyfrog.bear".to_string(),
            version: 2,
        }
    }
}
