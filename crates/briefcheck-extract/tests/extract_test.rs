use std::path::Path;

use briefcheck_core::errors::ExtractionError;
use briefcheck_core::traits::ITextExtractor;
use briefcheck_extract::{DocumentExtractor, PdfExtractor};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Write a PDF with one page per entry in `pages`.
fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

#[test]
fn pdf_pages_are_extracted_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("briefing.pdf");
    write_pdf(&path, &["Deliver a REST API", "Write unit tests"]);

    let text = DocumentExtractor::new().extract(&path).unwrap();
    let first = text.find("REST").expect("page one text");
    let second = text.find("unit").expect("page two text");
    assert!(first < second);
    assert!(text.contains("\n\n"));
}

#[test]
fn corrupt_pdf_is_a_pdf_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"%PDF-1.5\nthis is not a pdf body").unwrap();

    let err = PdfExtractor.extract(&path).unwrap_err();
    assert!(matches!(err, ExtractionError::Pdf { .. }));
}

#[test]
fn uppercase_extension_is_treated_as_pdf() {
    assert!(PdfExtractor.supports(Path::new("BRIEF.PDF")));
    assert!(!PdfExtractor.supports(Path::new("brief.txt")));
}

#[test]
fn text_files_are_read_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("briefing.md");
    std::fs::write(&path, "# Briefing\nBuild a CLI.\n").unwrap();
    assert_eq!(
        DocumentExtractor::new().extract(&path).unwrap(),
        "# Briefing\nBuild a CLI.\n"
    );
}

#[test]
fn missing_file_is_not_found() {
    let err = DocumentExtractor::new()
        .extract(Path::new("/definitely/not/here.txt"))
        .unwrap_err();
    assert!(matches!(err, ExtractionError::NotFound { .. }));
}

#[test]
fn invalid_utf8_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();
    let err = DocumentExtractor::new().extract(&path).unwrap_err();
    assert!(matches!(err, ExtractionError::InvalidEncoding { .. }));
}
