//! Shared fixtures: synthetic proposal page texts and lopdf-built PDFs.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Page texts of the 20-page reference proposal.
///
/// Page 0 summary, pages 1-15 description, 16 references, 17 mentoring
/// plan, 18-19 synergistic activities.
pub fn proposal_texts() -> Vec<String> {
    let mut texts = vec!["Project Summary\nOverview of the proposed research".to_string()];
    texts.extend((1..16).map(|i| format!("Intellectual merit narrative\nSection text page {}", i)));
    texts.push("References Cited\nSmith, J. (2020). Results.".to_string());
    texts.push("Mentoring Plan\nThe postdoctoral scholar will meet weekly.".to_string());
    texts.push("Synergistic Activities\nOutreach to local schools.".to_string());
    texts.push("Community workshops held every summer\nContinued from previous page".to_string());
    texts
}

/// Build a PDF with one page per entry; lines become separate text blocks.
pub fn build_pdf<S: AsRef<str>>(pages: &[S]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let mut operations = Vec::new();
        for (i, line) in text.as_ref().lines().enumerate() {
            let y = 720 - (i as i64) * 16;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![72.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
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
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Write a built PDF into `dir` and return its path.
pub fn write_pdf<S: AsRef<str>>(dir: &std::path::Path, name: &str, pages: &[S]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, build_pdf(pages)).unwrap();
    path
}

/// Page count of a PDF on disk.
pub fn page_count(path: &std::path::Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}
