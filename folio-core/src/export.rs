use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::Document;

/// JSON export shape for a loaded document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub filepath: Option<String>,
    pub filename: Option<String>,
    pub title: String,
    pub content: String,
    pub strategy: String,
    pub line_count: usize,
    pub word_count: usize,
    pub char_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl From<&Document> for ExportDocument {
    fn from(doc: &Document) -> Self {
        Self {
            filepath: doc.filepath.clone(),
            filename: doc.filename.clone(),
            title: doc.title.clone(),
            content: doc.content.clone(),
            strategy: doc.strategy.as_str().to_string(),
            line_count: doc.line_count(),
            word_count: doc.word_count(),
            char_count: doc.char_count(),
            loaded_at: doc.loaded_at,
        }
    }
}

/// Serialize a document to pretty-printed JSON
pub fn to_json(doc: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ExportDocument::from(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadStrategy;

    #[test]
    fn test_export_document_format() {
        let doc = Document::with_file_info(
            "file".to_string(),
            "Hello world\n".to_string(),
            LoadStrategy::NormalizedLines,
            "/path/to/file.txt".to_string(),
            "file.txt".to_string(),
        );

        let json = serde_json::to_string(&ExportDocument::from(&doc)).unwrap();

        // Verify camelCase field names
        assert!(json.contains("\"wordCount\":2"));
        assert!(json.contains("\"lineCount\":1"));
        assert!(json.contains("\"strategy\":\"normalized-lines\""));
        assert!(json.contains("\"filepath\":\"/path/to/file.txt\""));
    }

    #[test]
    fn test_to_json_is_pretty() {
        let doc = Document::new("t".to_string(), "x".to_string(), LoadStrategy::Raw);
        let json = to_json(&doc).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"content\": \"x\""));
    }
}
