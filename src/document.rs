//! Local document reading (PDF, DOCX, TXT).
//!
//! Each format delegates to an existing extraction library; the rest of the
//! crate treats the result as an opaque string.

use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use zip::ZipArchive;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not extract text from PDF: {0}")]
    Pdf(String),
    #[error("could not extract text from DOCX: {0}")]
    Docx(String),
    #[error("unsupported file type: {0} (expected pdf, docx, or txt)")]
    Unsupported(String),
}

/// Read the text content of a PDF, DOCX, or TXT file.
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = match extension.as_str() {
        "pdf" => extract_pdf_text(path)?,
        "docx" => extract_docx_text(path)?,
        "txt" => read_plain_text(path)?,
        other => return Err(DocumentError::Unsupported(other.to_string())),
    };

    log::debug!(
        "extracted {} characters from {}",
        text.chars().count(),
        path.display()
    );

    Ok(text.trim().to_string())
}

fn extract_pdf_text(path: &Path) -> Result<String, DocumentError> {
    pdf_extract::extract_text(path).map_err(|e| DocumentError::Pdf(e.to_string()))
}

/// Read a text file as UTF-8, falling back to a legacy single-byte encoding.
fn read_plain_text(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            log::debug!("{} is not valid UTF-8, decoding as Latin-1", path.display());
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(err.as_bytes());
            Ok(decoded.into_owned())
        }
    }
}

/// Pull the text runs out of the DOCX main document part.
fn extract_docx_text(path: &Path) -> Result<String, DocumentError> {
    let file = fs::File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| DocumentError::Docx(e.to_string()))?;

    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| DocumentError::Docx(format!("missing word/document.xml: {}", e)))?;
    let mut xml = String::new();
    document
        .read_to_string(&mut xml)
        .map_err(|e| DocumentError::Docx(e.to_string()))?;

    let mut reader = XmlReader::from_str(&xml);
    let mut output = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:p" => {
                    if !output.is_empty() {
                        output.push('\n');
                    }
                }
                b"w:br" => output.push('\n'),
                b"w:tab" => output.push('\t'),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:p" => {
                    if !output.is_empty() {
                        output.push('\n');
                    }
                }
                b"w:br" => output.push('\n'),
                b"w:tab" => output.push('\t'),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text_run {
                    let value = e
                        .unescape()
                        .map_err(|err| DocumentError::Docx(err.to_string()))?;
                    output.push_str(&value);
                }
            }
            Ok(Event::End(ref e)) => {
                if e.name().as_ref() == b"w:t" {
                    in_text_run = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(DocumentError::Docx(err.to_string())),
            _ => {}
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;

    #[test]
    fn reads_utf8_text_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("note.txt");
        fs::write(&path, "Hej världen").expect("write file");

        let text = read_document(&path).expect("read txt");
        assert_eq!(text, "Hej världen");
    }

    #[test]
    fn falls_back_to_latin1_for_non_utf8() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("legacy.txt");
        // "café" with a Latin-1 encoded é (0xE9), invalid as UTF-8
        fs::write(&path, [b'c', b'a', b'f', 0xE9]).expect("write file");

        let text = read_document(&path).expect("read txt");
        assert_eq!(text, "café");
    }

    #[test]
    fn extracts_docx_paragraphs() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("sample.docx");
        let file = fs::File::create(&path).expect("create docx");
        let mut writer = zip::ZipWriter::new(file);

        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>First paragraph.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Second &amp; final.</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .expect("start file");
        writer.write_all(xml.as_bytes()).expect("write xml");
        writer.finish().expect("finish zip");

        let text = read_document(&path).expect("read docx");
        assert_eq!(text, "First paragraph.\nSecond & final.");
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("slides.pptx");
        fs::write(&path, b"not really").expect("write file");

        let err = read_document(&path).expect_err("should reject pptx");
        assert!(matches!(err, DocumentError::Unsupported(ref ext) if ext == "pptx"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_document(Path::new("does-not-exist.txt")).expect_err("missing file");
        assert!(matches!(err, DocumentError::Io(_)));
    }
}
