use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DOWNLOAD_FILE_NAME: &str = "valentine.html";
pub const HTML_MIME: &str = "text/html; charset=utf-8";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdout => "stdout".to_string(),
        }
    }
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self::File(PathBuf::from(DOWNLOAD_FILE_NAME))
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output file '{}': {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {source}")]
    Stdout {
        #[source]
        source: std::io::Error,
    },
}

/// If `path` names an existing directory, write `valentine.html` inside it.
pub fn resolve_output_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DOWNLOAD_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Deliver the generated document. Returns the number of bytes written.
pub fn write_artifact(html: &str, target: &OutputTarget) -> Result<usize, OutputError> {
    match target {
        OutputTarget::File(path) => {
            let path = resolve_output_path(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            std::fs::write(&path, html.as_bytes())
                .map_err(|source| OutputError::WriteFile { path, source })?;
        }
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(html.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|source| OutputError::Stdout { source })?;
        }
    }
    Ok(html.len())
}
