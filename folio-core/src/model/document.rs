use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::loader::LoadStrategy;

/// Text loaded from a file, ready for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    pub strategy: LoadStrategy,
    pub loaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(title: String, content: String, strategy: LoadStrategy) -> Self {
        Self {
            title,
            content,
            filename: None,
            filepath: None,
            strategy,
            loaded_at: Utc::now(),
        }
    }

    /// Create a document with filename metadata (used by CLI when loading from file)
    pub fn with_file_info(
        title: String,
        content: String,
        strategy: LoadStrategy,
        filepath: String,
        filename: String,
    ) -> Self {
        let mut doc = Self::new(title, content, strategy);
        doc.filepath = Some(filepath);
        doc.filename = Some(filename);
        doc
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
