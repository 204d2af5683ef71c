use pdf_creator::{
    assemble, create_document, Block, ConflictPolicy, ContentElement, DocumentSettings,
    ErrorKind, FileProperties, HeaderFooter, HeaderFooterStyle, ImageAlignment, ImageSize,
    Options, Output, TextFormat,
};
use pdf_creator::{LocalFileSystem, Pt};
use std::path::{Path, PathBuf};

const LEDGER: &str = r#"{
    "HasHeaderRow": true,
    "TableType": "Table",
    "StyleSettings": { "FontFamily": "Arial", "FontSize": 9, "BorderWidthInPt": 0.5, "BorderStyle": "All" },
    "Columns": [
        { "Name": "Item", "WidthInCm": 8, "Type": "Text" },
        { "Name": "Qty", "WidthInCm": 3, "Type": "Text" }
    ],
    "RowData": [
        { "a": "Widgets", "b": "4" },
        { "a": "Gadgets", "b": "12" }
    ]
}"#;

fn save_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]))
        .save(&path)
        .unwrap();
    path
}

fn file(dir: &Path, policy: ConflictPolicy) -> FileProperties {
    FileProperties {
        directory: dir.to_owned(),
        file_name: "report.pdf".to_string(),
        conflict_policy: policy,
        use_wide_character_encoding: true,
    }
}

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

fn content(dir: &Path) -> Vec<ContentElement> {
    let logo = save_png(dir, "logo.png", 96, 48);
    vec![
        ContentElement::paragraph("Hello\n\tWorld", TextFormat::default()),
        ContentElement::image(logo, ImageAlignment::Center),
        ContentElement::PageBreak,
        ContentElement::table(LEDGER),
    ]
}

#[test]
fn writes_a_two_page_document() {
    let dir = tempfile::tempdir().unwrap();
    let settings = DocumentSettings {
        title: Some("Quarterly".to_string()),
        ..Default::default()
    };

    let output = create_document(
        &file(dir.path(), ConflictPolicy::Error),
        &settings,
        &content(dir.path()),
        &Options::default(),
    )
    .unwrap();

    let path = dir.path().join("report.pdf");
    assert_eq!(
        output,
        Output {
            success: true,
            file_name: Some(path.clone())
        }
    );
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(contains(&bytes, "/Count 2"));
    assert!(contains(&bytes, "Quarterly"));
    assert!(contains(&bytes, "/I0 Do"));
}

#[test]
fn assembled_sections_follow_page_breaks() {
    let dir = tempfile::tempdir().unwrap();
    let settings = DocumentSettings::default();
    let doc = assemble(
        &LocalFileSystem,
        settings.info(),
        settings.geometry(),
        &content(dir.path()),
    )
    .unwrap();

    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[0].blocks.len(), 2);
    match &doc.sections[1].blocks[..] {
        [Block::Table(table)] => {
            // header row plus two data rows
            assert_eq!(table.rows.len(), 3);
            assert_eq!(table.columns.len(), 2);
        }
        other => panic!("expected a single table, got {other:?}"),
    }
}

#[test]
fn wide_images_shrink_to_the_content_width() {
    let dir = tempfile::tempdir().unwrap();
    let wide = save_png(dir.path(), "wide.png", 3000, 300);
    let narrow = save_png(dir.path(), "narrow.png", 96, 96);
    let settings = DocumentSettings::default();
    let content = [
        ContentElement::image(wide, ImageAlignment::Left),
        ContentElement::image(narrow, ImageAlignment::Right),
    ];

    let doc = assemble(
        &LocalFileSystem,
        settings.info(),
        settings.geometry(),
        &content,
    )
    .unwrap();

    let widths: Vec<Pt> = doc.sections[0]
        .blocks
        .iter()
        .map(|block| match block {
            Block::Image(image) => match image.size {
                ImageSize::Width(w) => w,
                ImageSize::Height(_) => panic!("body images are placed by width"),
            },
            other => panic!("expected an image, got {other:?}"),
        })
        .collect();
    let available = settings.geometry().content_width();
    assert!((widths[0].0 - available.0).abs() < 1e-3);
    assert!((widths[1].0 - 72.0).abs() < 1e-3);
}

#[test]
fn too_wide_tables_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let schema = r#"{
        "Columns": [ { "Name": "Wide", "WidthInCm": 21, "Type": "Text" } ],
        "RowData": [ { "a": "x" } ]
    }"#;

    let err = create_document(
        &file(dir.path(), ConflictPolicy::Error),
        &DocumentSettings::default(),
        &[ContentElement::table(schema)],
        &Options::default(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TableTooWide);
    assert!(!dir.path().join("report.pdf").exists());
}

#[test]
fn rename_counts_up_from_one() {
    let dir = tempfile::tempdir().unwrap();
    let content = [ContentElement::paragraph("x", TextFormat::default())];
    let names: Vec<PathBuf> = (0..3)
        .map(|_| {
            create_document(
                &file(dir.path(), ConflictPolicy::Rename),
                &DocumentSettings::default(),
                &content,
                &Options::default(),
            )
            .unwrap()
            .file_name
            .unwrap()
        })
        .collect();

    assert_eq!(
        names,
        vec![
            dir.path().join("report.pdf"),
            dir.path().join("report_(1).pdf"),
            dir.path().join("report_(2).pdf"),
        ]
    );
}

#[test]
fn error_policy_leaves_the_existing_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("report.pdf");
    std::fs::write(&existing, b"keep me").unwrap();

    let err = create_document(
        &file(dir.path(), ConflictPolicy::Error),
        &DocumentSettings::default(),
        &[ContentElement::paragraph("x", TextFormat::default())],
        &Options::default(),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(std::fs::read(&existing).unwrap(), b"keep me");
}

#[test]
fn overwrite_replaces_the_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("report.pdf");
    std::fs::write(&existing, b"old").unwrap();

    create_document(
        &file(dir.path(), ConflictPolicy::Overwrite),
        &DocumentSettings::default(),
        &[ContentElement::paragraph("x", TextFormat::default())],
        &Options::default(),
    )
    .unwrap();

    assert!(std::fs::read(&existing).unwrap().starts_with(b"%PDF"));
}

#[test]
fn missing_logo_is_reported_or_swallowed() {
    let dir = tempfile::tempdir().unwrap();
    let header = HeaderFooter {
        text: "ACME".to_string(),
        format: TextFormat::default(),
        style: HeaderFooterStyle::LogoAndText,
        image_path: Some(dir.path().join("absent.png")),
        image_height: Pt(20.0),
        border_width: Pt(0.0),
    };
    let content = [ContentElement::Header(header)];

    let err = create_document(
        &file(dir.path(), ConflictPolicy::Error),
        &DocumentSettings::default(),
        &content,
        &Options::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let quiet = Options {
        raise_on_failure: false,
        ..Default::default()
    };
    let output = create_document(
        &file(dir.path(), ConflictPolicy::Error),
        &DocumentSettings::default(),
        &content,
        &quiet,
    )
    .unwrap();
    assert!(!output.success);
    assert!(!dir.path().join("report.pdf").exists());
}

#[test]
fn headers_and_footers_show_page_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let footer = HeaderFooter {
        text: "Confidential".to_string(),
        format: TextFormat::default(),
        style: HeaderFooterStyle::TextAndPageNumber,
        image_path: None,
        image_height: Pt(0.0),
        border_width: Pt(0.5),
    };
    let content = [
        ContentElement::Footer(footer),
        ContentElement::paragraph("first", TextFormat::default()),
        ContentElement::PageBreak,
        ContentElement::paragraph("second", TextFormat::default()),
    ];

    create_document(
        &file(dir.path(), ConflictPolicy::Error),
        &DocumentSettings::default(),
        &content,
        &Options::default(),
    )
    .unwrap();

    let bytes = std::fs::read(dir.path().join("report.pdf")).unwrap();
    assert!(contains(&bytes, "/Count 2"));
}
