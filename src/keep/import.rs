//! Google Keep → Bear textbundle conversion pipeline.
//!
//! One call to [`convert_note`] turns a parsed Keep note plus its source
//! asset directory into a complete textbundle on disk. Attachment
//! resolution runs before any output directory is created, so a note with
//! a dangling file reference fails without leaving anything behind.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

use crate::error::ConversionError;
use crate::keep::{Annotation, KeepNote, ListItem};
use crate::textbundle::{write_textbundle, BundleInfo, TB_ASSET_DIR};

type Result<T> = std::result::Result<T, ConversionError>;

/// Decode a Keep edit timestamp (microseconds since the Unix epoch) into
/// local time. Out-of-range values fall back to the epoch.
pub fn from_edited_usec(usec: i64) -> DateTime<Local> {
    Utc.timestamp_micros(usec)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(&Local)
}

/// Render a timestamp the way Bear stores them in `info.json`:
/// local-offset ISO 8601, whole seconds.
pub fn format_timestamp(ts: DateTime<Local>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Build the bundle metadata record for a note. `created_ts` comes from
/// the driver (Keep exports carry no creation time, so the note file's
/// mtime stands in for it).
pub fn convert_metadata(note: &KeepNote, created_ts: DateTime<Local>) -> BundleInfo {
    let mod_ts = format_timestamp(from_edited_usec(note.user_edited_timestamp_usec));
    BundleInfo::new(
        &format_timestamp(created_ts),
        &mod_ts,
        note.is_pinned,
        note.is_archived,
        note.is_trashed,
    )
}

/// Render a checklist as Bear todo markers: `+` checked, `-` unchecked.
fn convert_list(items: &[ListItem]) -> String {
    items
        .iter()
        .map(|item| {
            let marker = if item.is_checked { "+" } else { "-" };
            format!("{} {}", marker, item.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_annotation(ann: &Annotation, note_title: &str) -> Result<String> {
    match ann {
        Annotation::WebLink {
            title,
            url,
            description,
        } => Ok(format!("[{}]({})\n> {}", title, url, description)),
        Annotation::Unknown { source } => Err(ConversionError::UnknownAnnotation {
            source: source.clone(),
            note: note_title.to_string(),
        }),
    }
}

/// Render a note's annotations as one newline-joined string.
///
/// Empty when the note has none. Otherwise the first element is an empty
/// string, which turns into the blank line separating the body from the
/// annotation blocks after joining.
pub fn convert_annotations(note: &KeepNote) -> Result<String> {
    let mut blocks = Vec::new();
    if let Some(annotations) = &note.annotations {
        blocks.push(String::new());
        for ann in annotations {
            blocks.push(render_annotation(ann, &note.title)?);
        }
    }
    Ok(blocks.join("\n"))
}

/// Assemble the note body and derive the title.
///
/// Returns the title (used for the bundle directory name) and the ordered
/// body blocks, to be newline-joined by the writer.
pub fn compose_text(note: &KeepNote, ignore_colors: bool) -> Result<(String, Vec<String>)> {
    let content = if let Some(text) = &note.text_content {
        text.clone()
    } else if let Some(items) = &note.list_content {
        convert_list(items)
    } else {
        return Err(ConversionError::MissingContent {
            note: note.title.clone(),
        });
    };

    let mut text = Vec::new();

    let title = if note.title.is_empty() {
        // Untitled note: the content's first line doubles as the title,
        // so no separate heading block is added.
        content.lines().next().unwrap_or_default().to_string()
    } else {
        text.push(format!("# {}", note.title));
        note.title.clone()
    };

    text.push(content);

    // Appended even when empty; the trailing blank line it produces is
    // part of the expected output.
    text.push(convert_annotations(note)?);

    if note.color != "DEFAULT" && !ignore_colors {
        text.push(format!("#{}", note.color));
    }

    Ok((title, text))
}

/// Check every referenced attachment exists under `src_dir` and produce
/// the files to copy plus their in-body embed markers, in note order.
pub fn resolve_attachments(
    note: &KeepNote,
    src_dir: &Path,
) -> Result<(Vec<PathBuf>, Vec<String>)> {
    let mut assets = Vec::new();
    let mut embeds = Vec::new();
    if let Some(attachments) = &note.attachments {
        for att in attachments {
            let src_file = src_dir.join(&att.file_path);
            if !src_file.is_file() {
                return Err(ConversionError::MissingAttachment {
                    path: src_file,
                    note: note.title.clone(),
                });
            }
            embeds.push(format!("[{}/{}]", TB_ASSET_DIR, att.file_path));
            assets.push(src_file);
        }
    }
    Ok((assets, embeds))
}

/// Convert one note end to end and write its textbundle beneath `outdir`.
/// Returns the created bundle path.
pub fn convert_note(
    note: &KeepNote,
    created_ts: DateTime<Local>,
    src_dir: &Path,
    outdir: &Path,
    ignore_colors: bool,
) -> Result<PathBuf> {
    let meta = convert_metadata(note, created_ts);
    let (title, mut text) = compose_text(note, ignore_colors)?;
    let (assets, embeds) = resolve_attachments(note, src_dir)?;

    // Embedded attachments go at the end of the note body.
    text.extend(embeds);

    log::debug!("writing textbundle for note '{}'", title);
    write_textbundle(&title, &text, &meta, &assets, outdir)
}
