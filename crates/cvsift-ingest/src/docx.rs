//! DOCX text extraction.
//!
//! A `.docx` file is a ZIP archive; the body lives in `word/document.xml`.
//! Text is pulled SAX-style from `<w:t>` runs, with paragraph ends (`<w:p>`)
//! and explicit breaks (`<w:br/>`) mapped to newlines so the downstream
//! line-oriented heuristics see the same shape a plain-text resume would
//! have.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocxError {
    #[error("failed to open DOCX file: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a valid DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Extract the text of a DOCX file on disk.
pub fn extract_text(path: &Path) -> Result<String, DocxError> {
    let file = File::open(path)?;
    extract_text_from_reader(BufReader::new(file))
}

/// Extract text from any seekable DOCX source (file, in-memory buffer).
pub fn extract_text_from_reader<R: Read + Seek>(reader: R) -> Result<String, DocxError> {
    let mut archive = zip::ZipArchive::new(reader)?;
    let mut document = archive.by_name("word/document.xml")?;
    let mut xml_bytes = Vec::new();
    document.read_to_end(&mut xml_bytes)?;

    let mut xml = Reader::from_reader(xml_bytes.as_slice());
    let mut buf = Vec::with_capacity(4096);

    let mut text = String::new();
    let mut in_run = false;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run = true,
                b"w:br" => text.push('\n'),
                b"w:tab" => text.push('\t'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:br" => text.push('\n'),
                b"w:tab" => text.push('\t'),
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_run {
                    if let Ok(run) = e.unescape() {
                        text.push_str(&run);
                    }
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocxError::Xml(e)),
            Ok(_) => {}
        }
        buf.clear();
    }

    tracing::debug!(chars = text.len(), "extracted DOCX text");
    Ok(text)
}
