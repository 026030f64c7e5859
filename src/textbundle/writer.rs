//! Writes one converted note to disk as a textbundle directory.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::ConversionError;
use crate::textbundle::{BundleInfo, TB_ASSET_DIR, TB_CONTENT_FILE, TB_EXT, TB_METADATA_FILE};

type Result<T> = std::result::Result<T, ConversionError>;

/// Reduce a note title to a filesystem-safe bundle stem: alphanumerics
/// plus `._- ` and space, capped at 50 characters.
fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || "._- ".contains(*c))
        .take(50)
        .collect()
}

/// Write a complete textbundle beneath `outdir` and return its path.
///
/// If a bundle of the same sanitized name already exists, the name gets
/// 8 characters of a fresh uuid appended. The collision check runs once;
/// a second collision surfaces as the create_dir error.
pub fn write_textbundle(
    title: &str,
    text: &[String],
    meta: &BundleInfo,
    assets: &[PathBuf],
    outdir: &Path,
) -> Result<PathBuf> {
    let mut tb_title = format!("{}.{}", sanitize_title(title), TB_EXT);
    let mut tb_dir = outdir.join(&tb_title);
    if tb_dir.exists() {
        let suffix: String = Uuid::new_v4().to_string().chars().take(8).collect();
        tb_title.push_str(&suffix);
        tb_dir = outdir.join(&tb_title);
        log::debug!("bundle name collision, disambiguated to '{}'", tb_title);
    }
    fs::create_dir(&tb_dir)?;

    if !assets.is_empty() {
        let asset_dir = tb_dir.join(TB_ASSET_DIR);
        fs::create_dir(&asset_dir)?;
        for src_file in assets {
            let name = src_file
                .file_name()
                .ok_or_else(|| ConversionError::MissingAttachment {
                    path: src_file.clone(),
                    note: title.to_string(),
                })?;
            fs::copy(src_file, asset_dir.join(name))?;
        }
    }

    fs::write(tb_dir.join(TB_METADATA_FILE), serde_json::to_string(meta)?)?;
    fs::write(tb_dir.join(TB_CONTENT_FILE), text.join("\n"))?;

    Ok(tb_dir)
}
