use std::fs;
use std::path::{Path, PathBuf};

/// File extensions treated as report text when scanning a directory.
pub const REPORT_EXTENSIONS: [&str; 2] = ["md", "txt"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid report directory: {0}")]
    InvalidReportDir(PathBuf),
}

/// Read a report file and return its content
pub fn read_report(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for report files under a directory, sorted by path
pub fn scan_reports(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::InvalidReportDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(dir, &mut files)?;
    files.sort();
    log::debug!("found {} reports under {}", files.len(), dir.display());
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_report(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_report(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| REPORT_EXTENSIONS.contains(&ext))
}
