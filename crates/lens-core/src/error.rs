use std::path::PathBuf;

/// Errors raised while reading lens inputs from disk.
///
/// Locating, flattening, and summarizing never fail; these only surface at
/// the edges where files are read and decoded.
#[derive(Debug, thiserror::Error)]
pub enum LensError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LensError>;

/// Read a file to a string, attaching the path to any I/O error.
pub fn read_text(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| LensError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode a JSON file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    let content = read_text(path)?;
    serde_json::from_str(&content).map_err(|source| LensError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
