//! End-to-end tests: real PDFs in, per-component PDFs out.

mod common;

use splitpdf::{split_file, Catalog, Error, SplitOptions, Splitter};
use tempfile::TempDir;

#[test]
fn test_split_reference_proposal() {
    let dir = TempDir::new().unwrap();
    let input = common::write_pdf(dir.path(), "proposal.pdf", &common::proposal_texts());
    let out = dir.path().join("out");

    let report = split_file(&input, &out).unwrap();

    let spans: Vec<_> = report
        .outputs
        .iter()
        .map(|o| (o.component_name.as_str(), o.start_page, o.end_page))
        .collect();
    assert_eq!(
        spans,
        [
            ("Project Summary", 0, 1),
            ("Project Description", 1, 16),
            ("References Cited", 16, 17),
            ("Mentoring Plan", 17, 18),
            ("Synergistic Activities", 18, 20),
        ]
    );
    assert!(report.is_complete());
    assert_eq!(report.page_count, 20);
    assert_eq!(
        report.missing,
        [
            "Data Management and Sharing Plan",
            "Project Personnel and Partner Organizations",
            "Facilities, Equipment and Other Resources",
        ]
    );

    for output in &report.outputs {
        assert!(output.path.exists(), "{} missing", output.path.display());
        assert_eq!(
            common::page_count(&output.path),
            output.end_page - output.start_page
        );
    }
    assert!(out.join("project_description.pdf").exists());
    assert!(out.join("synergistic_activities.pdf").exists());
}

#[test]
fn test_extracted_section_keeps_its_text() {
    let dir = TempDir::new().unwrap();
    let input = common::write_pdf(dir.path(), "proposal.pdf", &common::proposal_texts());
    let out = dir.path().join("out");

    split_file(&input, &out).unwrap();

    let pages = splitpdf::extract_pages(out.join("mentoring_plan.pdf")).unwrap();
    assert_eq!(pages.len(), 1);
    assert!(pages[0].text.contains("Mentoring Plan"));
}

#[test]
fn test_plan_reads_page_text_from_pdf() {
    let dir = TempDir::new().unwrap();
    let input = common::write_pdf(dir.path(), "proposal.pdf", &common::proposal_texts());

    let splitter = Splitter::open(&input).unwrap();
    assert_eq!(splitter.source().page_count(), 20);

    let pages = splitter.pages().unwrap();
    assert!(pages[17].text.contains("Mentoring Plan"));

    let plan = splitter.plan().unwrap();
    assert_eq!(plan.range("Mentoring Plan").map(|r| r.pages()), Some(17..18));
}

#[test]
fn test_short_document_is_structural_error_without_output() {
    let dir = TempDir::new().unwrap();
    let input = common::write_pdf(
        dir.path(),
        "short.pdf",
        &["Project Summary", "Project Description", "Mentoring Plan"],
    );
    let out = dir.path().join("out");

    let result = split_file(&input, &out);
    assert!(matches!(
        result,
        Err(Error::Structure {
            required: 16,
            actual: 3
        })
    ));
    assert!(!out.exists());
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let result = split_file(dir.path().join("nope.pdf"), &out);
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!out.exists());
}

#[test]
fn test_non_pdf_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.pdf");
    std::fs::write(&input, "meeting notes, not a pdf").unwrap();

    let result = split_file(&input, dir.path().join("out"));
    assert!(matches!(result, Err(Error::UnknownFormat)));
}

#[test]
fn test_sixteen_page_document_has_no_references() {
    let dir = TempDir::new().unwrap();
    let texts: Vec<String> = common::proposal_texts().into_iter().take(16).collect();
    let input = common::write_pdf(dir.path(), "sixteen.pdf", &texts);

    let report = split_file(&input, dir.path().join("out")).unwrap();
    let names: Vec<_> = report.files().map(|(name, _)| name).collect();
    assert_eq!(names, ["Project Summary", "Project Description"]);
    assert_eq!(report.outputs[1].end_page, 16);
}

#[test]
fn test_split_with_custom_catalog() {
    use splitpdf::{CatalogEntry, FixedRule};

    let dir = TempDir::new().unwrap();
    let input = common::write_pdf(
        dir.path(),
        "report.pdf",
        &["Cover page", "Budget Justification", "more budget", "Biographical Sketch"],
    );
    let catalog = Catalog::new(vec![
        CatalogEntry::fixed("Cover", FixedRule::span(0, 1)),
        CatalogEntry::variable("Budget Justification"),
        CatalogEntry::variable("Biographical Sketch"),
    ])
    .unwrap();

    let report = splitpdf::split_file_with_options(
        &input,
        dir.path().join("out"),
        catalog,
        SplitOptions::new().strict(),
    )
    .unwrap();

    let spans: Vec<_> = report
        .outputs
        .iter()
        .map(|o| (o.component_name.as_str(), o.start_page, o.end_page))
        .collect();
    assert_eq!(
        spans,
        [
            ("Cover", 0, 1),
            ("Budget Justification", 1, 3),
            ("Biographical Sketch", 3, 4)
        ]
    );
    assert!(dir.path().join("out/budget_justification.pdf").exists());
}
