use std::path::Path;

/// Whether `path` exists and is a regular file.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Whether any of `candidates` exists as a regular file under `dir`.
pub fn any_file_exists(dir: &Path, candidates: &[&str]) -> bool {
    candidates.iter().any(|name| dir.join(name).is_file())
}
