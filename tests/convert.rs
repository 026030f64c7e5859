//! End-to-end conversion tests: Keep note JSON in, textbundle on disk out.

use std::fs;

use chrono::Local;
use tempfile::tempdir;

use keep2bear::keep::KeepNote;
use keep2bear::textbundle::BundleInfo;
use keep2bear::{convert_note, ConversionError};

fn parse(json: &str) -> KeepNote {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_full_note_with_attachment_and_annotation() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(src.path().join("photo.jpg"), b"jpeg bytes").unwrap();

    let note = parse(
        r#"{
            "title": "Trip",
            "textContent": "Photos from the trip",
            "color": "DEFAULT",
            "isPinned": false,
            "isArchived": false,
            "isTrashed": false,
            "userEditedTimestampUsec": 1700000000000000,
            "annotations": [
                {
                    "source": "WEBLINK",
                    "title": "Example",
                    "url": "https://example.com",
                    "description": "A page"
                }
            ],
            "attachments": [
                {"filePath": "photo.jpg", "mimetype": "image/jpeg"}
            ]
        }"#,
    );

    let bundle = convert_note(&note, Local::now(), src.path(), out.path(), false).unwrap();

    assert_eq!(bundle, out.path().join("Trip.textbundle"));
    assert_eq!(
        fs::read_to_string(bundle.join("text.txt")).unwrap(),
        "# Trip\nPhotos from the trip\n\n[Example](https://example.com)\n> A page\n[assets/photo.jpg]"
    );
    assert_eq!(
        fs::read(bundle.join("assets").join("photo.jpg")).unwrap(),
        b"jpeg bytes"
    );
    // Source attachment is copied, not moved.
    assert!(src.path().join("photo.jpg").is_file());

    let info: BundleInfo =
        serde_json::from_str(&fs::read_to_string(bundle.join("info.json")).unwrap()).unwrap();
    assert_eq!(info.version, 2);
    assert_eq!(info.creator_identifier, "net.shinyfrog.bear");
    assert_eq!(info.bear.pinned, 0);
    assert!(info.bear.pinned_date.is_none());
}

#[test]
fn test_missing_attachment_creates_nothing() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();

    let note = parse(
        r#"{
            "title": "Broken",
            "textContent": "body",
            "color": "DEFAULT",
            "attachments": [{"filePath": "gone.jpg"}]
        }"#,
    );

    let err = convert_note(&note, Local::now(), src.path(), out.path(), false).unwrap_err();
    assert!(matches!(err, ConversionError::MissingAttachment { .. }));

    // The error fires before the bundle directory is created.
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_unknown_annotation_aborts_note() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();

    let note = parse(
        r#"{
            "title": "Shared",
            "textContent": "body",
            "color": "DEFAULT",
            "annotations": [{"source": "SHARED_NOTE"}]
        }"#,
    );

    let err = convert_note(&note, Local::now(), src.path(), out.path(), false).unwrap_err();
    match err {
        ConversionError::UnknownAnnotation { source, note } => {
            assert_eq!(source, "SHARED_NOTE");
            assert_eq!(note, "Shared");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_same_title_notes_get_distinct_bundles() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();

    let json = r#"{"title": "Same", "textContent": "one", "color": "DEFAULT"}"#;
    let first = convert_note(&parse(json), Local::now(), src.path(), out.path(), false).unwrap();
    let second = convert_note(&parse(json), Local::now(), src.path(), out.path(), false).unwrap();

    assert_ne!(first, second);
    assert!(second
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("Same.textbundle"));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 2);
}

#[test]
fn test_trashed_note_metadata() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();

    let note = parse(
        r#"{
            "title": "Old",
            "textContent": "body",
            "color": "DEFAULT",
            "isTrashed": true,
            "userEditedTimestampUsec": 1600000000000000
        }"#,
    );

    let bundle = convert_note(&note, Local::now(), src.path(), out.path(), false).unwrap();
    let info: BundleInfo =
        serde_json::from_str(&fs::read_to_string(bundle.join("info.json")).unwrap()).unwrap();

    assert_eq!(info.bear.trashed, 1);
    assert_eq!(
        info.bear.trashed_date.as_deref(),
        Some(info.bear.modification_date.as_str())
    );
    assert!(info.bear.archived_date.is_none());
}
