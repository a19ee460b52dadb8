//! Document-to-text boundary — given file bytes and a declared extension,
//! return UTF-8 text or fail. The analysis core never sees file bytes.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use zip::ZipArchive;

/// Extensions the boundary accepts, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx"];

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type '{0}'. Use PDF or DOCX.")]
    Unsupported(String),

    /// Detail is logged server-side; clients only see a generic message.
    #[error("Failed to parse document: {0}")]
    Parse(String),
}

/// Extracts plain text from uploaded bytes. `ext` must already be lowercase.
pub fn extract_text(bytes: &[u8], ext: &str) -> Result<String, ExtractError> {
    match ext {
        "pdf" => pdf_text(bytes),
        "docx" => docx_text(bytes),
        other => Err(ExtractError::Unsupported(other.to_string())),
    }
}

fn pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Parse(e.to_string()))
}

/// A .docx is a ZIP archive; the document body lives in `word/document.xml`.
/// Stream its text events, emitting a newline at each paragraph end so the
/// normalizer sees the original line structure.
fn docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Parse(e.to_string()))?;
    let mut file = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut reader = Reader::from_str(&xml);
    let mut out = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|e| ExtractError::Parse(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => out.push('\n'),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractError::Parse(e.to_string())),
        }
    }
    Ok(out)
}
