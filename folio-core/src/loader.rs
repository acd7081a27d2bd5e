//! Text file loading
//!
//! Two strategies: [`load_raw`] returns the file exactly as stored and refuses
//! empty files, [`load_normalized_lines`] rebuilds the content line by line so
//! every line ends with a single `\n`. Note that the normalized strategy does
//! not reject empty files; a zero-line file loads as `""`.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, Result};

/// Which loading strategy to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadStrategy {
    Raw,
    #[default]
    NormalizedLines,
}

impl LoadStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStrategy::Raw => "raw",
            LoadStrategy::NormalizedLines => "normalized-lines",
        }
    }
}

/// Open `path` and lend a buffered reader to `read`.
///
/// The handle is closed before this returns, whatever `read` yields.
fn with_reader<T>(path: &Path, read: impl FnOnce(&mut BufReader<File>) -> Result<T>) -> Result<T> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = BufReader::new(file);
    let result = read(&mut reader);
    drop(reader);
    result
}

/// Read the whole file verbatim. Empty files are an error.
pub fn load_raw(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    let content = with_reader(path, |reader| {
        let mut buffer = String::new();
        reader
            .read_to_string(&mut buffer)
            .map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        if buffer.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(buffer)
    });

    log_outcome(path, LoadStrategy::Raw, &content);
    content
}

/// Read the file line by line, ending every line (the last one included)
/// with exactly one `\n`. Both `\n` and `\r\n` terminators are stripped.
pub fn load_normalized_lines(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();

    let content = with_reader(path, |reader| {
        let mut content = String::new();
        for line in reader.lines() {
            let line = line.map_err(|source| LoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            content.push_str(&line);
            content.push('\n');
        }
        Ok(content)
    });

    log_outcome(path, LoadStrategy::NormalizedLines, &content);
    content
}

/// Load `path` with the given strategy
pub fn load(path: impl AsRef<Path>, strategy: LoadStrategy) -> Result<String> {
    match strategy {
        LoadStrategy::Raw => load_raw(path),
        LoadStrategy::NormalizedLines => load_normalized_lines(path),
    }
}

/// Load `path`, or print the diagnostic to stderr and exit with status 1.
///
/// Meant for application entry points that cannot run without the text.
pub fn load_or_exit(path: impl AsRef<Path>, strategy: LoadStrategy) -> String {
    match load(path, strategy) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn log_outcome(path: &Path, strategy: LoadStrategy, outcome: &Result<String>) {
    match outcome {
        Ok(content) => tracing::debug!(
            path = %path.display(),
            strategy = strategy.as_str(),
            bytes = content.len(),
            "loaded text file"
        ),
        Err(e) => tracing::warn!(
            path = %path.display(),
            strategy = strategy.as_str(),
            error = %e,
            "text file load failed"
        ),
    }
}
