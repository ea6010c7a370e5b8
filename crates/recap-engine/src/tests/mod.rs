use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary reports directory
pub fn create_test_reports_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a report file with content, creating parent folders as needed
pub fn create_test_file(reports_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = reports_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
