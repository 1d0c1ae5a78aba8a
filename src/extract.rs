//! Text extraction from `.docx` documents.
//!
//! A `.docx` file is a zip archive whose main body lives in
//! `word/document.xml`. Extraction streams that XML and collects the text of
//! each `<w:p>` paragraph (the `<w:t>` runs inside it), keeps paragraphs
//! whose trimmed text is non-empty, and joins them with newlines in document
//! order.
//!
//! A document that opens fine but contains no text extracts to an empty
//! string; only unreadable or unparsable documents are errors.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, warn};
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{RecuentoError, Result};

/// Archive member holding the document body.
const DOCUMENT_XML: &str = "word/document.xml";

/// Extract the plain text of a `.docx` document.
///
/// Returns the newline-joined concatenation of non-empty paragraph texts in
/// original order. The result is empty if and only if every paragraph is
/// empty or whitespace-only.
///
/// # Errors
///
/// Returns [`RecuentoError::Extraction`] when the file cannot be opened, is
/// not a zip archive, has no `word/document.xml` member, or that member is
/// malformed XML. A non-`.docx` extension only logs a warning.
pub fn extract_text(path: &Path) -> Result<String> {
    if path.extension().and_then(|e| e.to_str()) != Some("docx") {
        warn!("'{}' does not have a .docx extension", path.display());
    }

    let file = File::open(path).map_err(|e| {
        RecuentoError::extraction(format!("cannot open '{}': {e}", path.display()))
    })?;

    let mut archive = zip::ZipArchive::new(BufReader::new(file)).map_err(|e| {
        RecuentoError::extraction(format!("'{}' is not a valid document: {e}", path.display()))
    })?;

    let document = archive.by_name(DOCUMENT_XML).map_err(|e| {
        RecuentoError::extraction(format!(
            "'{}' has no {DOCUMENT_XML}: {e}",
            path.display()
        ))
    })?;

    let paragraphs = read_paragraphs(BufReader::new(document))?;
    debug!("extracted {} non-empty paragraphs", paragraphs.len());

    Ok(paragraphs.join("\n"))
}

/// Stream the document XML and collect non-empty paragraph texts.
fn read_paragraphs<R: std::io::BufRead>(reader: R) -> Result<Vec<String>> {
    let mut xml = Reader::from_reader(reader);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                // Tabs and line breaks are self-closing elements; keep the
                // words around them separated.
                if in_paragraph && matches!(e.name().as_ref(), b"w:tab" | b"w:br" | b"w:cr") {
                    current.push(' ');
                }
            }
            Ok(Event::Text(t)) => {
                if in_text {
                    let text = t.unescape().map_err(|e| {
                        RecuentoError::extraction(format!("malformed document XML: {e}"))
                    })?;
                    current.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = false;
                    if !current.trim().is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(RecuentoError::extraction(format!(
                    "malformed document XML: {e}"
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    use super::*;

    fn write_docx(dir: &TempDir, name: &str, document_xml: Option<&str>) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let file = File::create(&path).unwrap();
        let mut writer = ZipWriter::new(file);
        if let Some(xml) = document_xml {
            writer
                .start_file(DOCUMENT_XML, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(xml.as_bytes()).unwrap();
        } else {
            writer
                .start_file("word/other.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"<x/>").unwrap();
        }
        writer.finish().unwrap();
        path
    }

    const TWO_PARAGRAPHS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>El gato</w:t></w:r><w:r><w:t> corre.</w:t></w:r></w:p>
    <w:p><w:r><w:t>   </w:t></w:r></w:p>
    <w:p><w:r><w:t>El perro duerme.</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_extract_paragraphs_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_docx(&dir, "doc.docx", Some(TWO_PARAGRAPHS));

        let text = extract_text(&path).unwrap();
        assert_eq!(text, "El gato corre.\nEl perro duerme.");
    }

    #[test]
    fn test_extract_empty_document_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body><w:p><w:r><w:t>  </w:t></w:r></w:p><w:p/></w:body>
</w:document>"#;
        let path = write_docx(&dir, "empty.docx", Some(xml));

        let text = extract_text(&path).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_extract_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = extract_text(&dir.path().join("nope.docx")).unwrap_err();
        assert!(matches!(err, RecuentoError::Extraction(_)));
    }

    #[test]
    fn test_extract_not_a_zip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, RecuentoError::Extraction(_)));
    }

    #[test]
    fn test_extract_missing_document_xml() {
        let dir = TempDir::new().unwrap();
        let path = write_docx(&dir, "hollow.docx", None);

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, RecuentoError::Extraction(_)));
    }

    #[test]
    fn test_tab_separates_runs() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body><w:p><w:r><w:t>uno</w:t><w:tab/><w:t>dos</w:t></w:r></w:p></w:body>
</w:document>"#;
        let path = write_docx(&dir, "tabs.docx", Some(xml));

        let text = extract_text(&path).unwrap();
        assert_eq!(text, "uno dos");
    }

    #[test]
    fn test_escaped_entities() {
        let dir = TempDir::new().unwrap();
        let xml = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body><w:p><w:r><w:t>uno &amp; dos</w:t></w:r></w:p></w:body>
</w:document>"#;
        let path = write_docx(&dir, "amp.docx", Some(xml));

        let text = extract_text(&path).unwrap();
        assert_eq!(text, "uno & dos");
    }
}
