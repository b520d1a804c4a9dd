//! End-to-end tests through the PDF layout extractor.
//!
//! Builds a small but well-formed PDF in memory (correct xref offsets)
//! and runs the whole pipeline over it.

use pdftoc::{outline_bytes, outline_file, Error, HeadingLevel, PdfParser};

/// Build a one-page PDF containing the given content stream, with
/// Helvetica as F1 and Helvetica-Bold as F2.
fn build_pdf(content_stream: &str) -> Vec<u8> {
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 /MediaBox [0 0 612 792] >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold >>".to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content_stream.len(),
            content_stream
        ),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::new();

    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    pdf.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        pdf.push_str(&format!("{:010} 00000 n \n", offset));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));

    pdf.into_bytes()
}

#[test]
fn extracts_outline_from_synthetic_pdf() {
    let content = "\
BT /F1 24 Tf 100 700 Td (Acme Annual Report) Tj ET\n\
BT /F2 12 Tf 100 650 Td (1. Introduction) Tj ET\n\
BT /F1 12 Tf 100 630 Td (This is body text.) Tj ET";
    let pdf = build_pdf(content);

    let outline = outline_bytes(&pdf).unwrap();

    assert_eq!(outline.title, "Acme Annual Report");
    assert_eq!(outline.outline.len(), 1);
    assert_eq!(outline.outline[0].level, HeadingLevel(1));
    assert_eq!(outline.outline[0].text, "1. Introduction ");
    assert_eq!(outline.outline[0].page, 1);
}

#[test]
fn parser_reports_pages_and_lines() {
    let content = "\
BT /F1 12 Tf 100 700 Td (first line) Tj ET\n\
BT /F1 12 Tf 100 650 Td (second line) Tj ET";
    let pdf = build_pdf(content);

    let parser = PdfParser::from_bytes(&pdf).unwrap();
    assert_eq!(parser.page_count(), 1);

    let lines = parser.extract_lines().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, "first line");
    assert_eq!(lines[0].page, 1);
    // Top-down coordinate: the higher line on the page sorts first
    assert!(lines[0].y < lines[1].y);

    let page = parser.extract_page(1).unwrap();
    assert_eq!(page.len(), 2);
    assert!(matches!(
        parser.extract_page(2),
        Err(Error::PageOutOfRange(2, 1))
    ));
}

#[test]
fn bold_font_name_carries_through() {
    let content = "BT /F2 14 Tf 100 700 Td (Heavy weight text) Tj ET";
    let pdf = build_pdf(content);

    let parser = PdfParser::from_bytes(&pdf).unwrap();
    let lines = parser.extract_lines().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].runs[0].font_name.contains("Bold"));
}

#[test]
fn outline_file_round_trip_via_tempdir() {
    let content = "\
BT /F1 24 Tf 100 700 Td (Report Title Here) Tj ET\n\
BT /F2 12 Tf 100 650 Td (2.1 Related Work) Tj ET";
    let pdf = build_pdf(content);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    std::fs::write(&path, &pdf).unwrap();

    let outline = outline_file(&path).unwrap();
    assert_eq!(outline.title, "Report Title Here");
    assert_eq!(outline.outline[0].level, HeadingLevel(2));
}

#[test]
fn batch_continues_past_failed_documents() {
    let good = build_pdf(
        "\
BT /F1 24 Tf 100 700 Td (Good Document Title) Tj ET\n\
BT /F1 12 Tf 100 650 Td (ordinary body text) Tj ET\n\
BT /F1 12 Tf 100 630 Td (more body text) Tj ET",
    );

    let dir = tempfile::tempdir().unwrap();
    let good_path = dir.path().join("good.pdf");
    let bad_path = dir.path().join("bad.pdf");
    std::fs::write(&good_path, &good).unwrap();
    std::fs::write(&bad_path, b"not a pdf").unwrap();

    let paths = [good_path, bad_path];
    let results = pdftoc::outline_files(
        &paths,
        &pdftoc::ParseOptions::default(),
        &pdftoc::OutlineOptions::default(),
    );

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap().title, "Good Document Title");
    assert!(matches!(results[1], Err(Error::UnknownFormat)));
}

#[test]
fn non_pdf_input_is_rejected() {
    assert!(matches!(
        outline_bytes(b"plain text, not a document"),
        Err(Error::UnknownFormat)
    ));
}
