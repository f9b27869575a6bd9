//! Document encoding and decoding
//!
//! The on-disk container format is owned by an external library; this module
//! wraps it behind a narrow decode/encode boundary so the store never touches
//! the container directly.

use std::io::Cursor;

use docx_rs::{read_docx, DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild};

use crate::error::StoreError;

/// Translates between a document's binary container and plain text.
pub trait DocumentCodec: Send + Sync {
    /// Decode a stored document into its plain text content.
    fn decode(&self, bytes: &[u8]) -> Result<String, StoreError>;

    /// Encode plain text into a brand-new document container.
    fn encode(&self, text: &str) -> Result<Vec<u8>, StoreError>;
}

/// `.docx` codec backed by the `docx-rs` crate.
///
/// Each line of text becomes one paragraph; decoding joins paragraph text
/// with a line break, so plain text survives a round trip. Any structural
/// formatting beyond paragraphs is dropped on decode.
#[derive(Debug, Default)]
pub struct DocxCodec;

impl DocumentCodec for DocxCodec {
    fn decode(&self, bytes: &[u8]) -> Result<String, StoreError> {
        let docx = read_docx(bytes).map_err(|e| StoreError::Codec(e.to_string()))?;

        let mut lines = Vec::new();
        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                lines.push(paragraph_text(paragraph));
            }
        }
        Ok(lines.join("\n"))
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, StoreError> {
        let mut docx = Docx::new();
        for line in text.split('\n') {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|e| StoreError::Codec(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_single_line() {
        let codec = DocxCodec;
        let bytes = codec.encode("hello").unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), "hello");
    }

    #[test]
    fn test_round_trip_multi_line() {
        let codec = DocxCodec;
        let bytes = codec.encode("hello\nworld\nthird line").unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), "hello\nworld\nthird line");
    }

    #[test]
    fn test_round_trip_empty() {
        let codec = DocxCodec;
        let bytes = codec.encode("").unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), "");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let codec = DocxCodec;
        let result = codec.decode(b"this is not a document container");
        assert!(matches!(result, Err(StoreError::Codec(_))));
    }
}
