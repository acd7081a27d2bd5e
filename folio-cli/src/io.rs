//! File I/O for native CLI

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use folio_core::{Document, LoadStrategy};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Wrap loaded text in a Document carrying the file's metadata
pub fn document_from(path: &Path, content: String, strategy: LoadStrategy) -> Document {
    // The loader already opened this path; fall back to it as given if it
    // vanished since.
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

    let filepath = resolved.to_string_lossy().to_string();
    let filename = resolved
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let title = resolved
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string());

    Document::with_file_info(title, content, strategy, filepath, filename)
}

/// Get the ~/.folio directory path, creating it if needed
pub fn folio_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let folio_dir = home.join(".folio");

    if !folio_dir.exists() {
        fs::create_dir_all(&folio_dir)
            .with_context(|| format!("Failed to create {}", folio_dir.display()))?;
    }

    Ok(folio_dir)
}

/// Export document to ~/.folio/document.json
pub fn export_document(doc: &Document) -> Result<PathBuf> {
    let export_path = folio_dir()?.join("document.json");

    let json = folio_core::to_json(doc).context("Failed to serialize document")?;

    fs::write(&export_path, json)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    tracing::info!(path = %export_path.display(), "exported document");
    Ok(export_path)
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn open_log_file() -> Result<fs::File> {
    let path = folio_dir()?.join("folio.log");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))
}

/// Install the global tracing subscriber.
///
/// Logs go to ~/.folio/folio.log so they never draw over the terminal UI.
/// Without a usable log file they go to stderr instead.
pub fn init_logging() {
    match open_log_file() {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(log_filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(log_filter())
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!(error = %e, "logging to stderr");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_document_from_sets_file_info() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poem.txt");
        fs::write(&path, "roses\n").unwrap();

        let doc = document_from(&path, "roses\n".to_string(), LoadStrategy::NormalizedLines);

        assert_eq!(doc.title, "poem");
        assert_eq!(doc.filename.as_deref(), Some("poem.txt"));
        assert!(doc.filepath.unwrap().ends_with("poem.txt"));
        assert_eq!(doc.content, "roses\n");
    }

    #[test]
    fn test_document_from_missing_path_keeps_given_path() {
        let doc = document_from(Path::new("gone/away.txt"), "x".to_string(), LoadStrategy::Raw);
        assert_eq!(doc.filepath.as_deref(), Some("gone/away.txt"));
        assert_eq!(doc.title, "away");
    }
}
