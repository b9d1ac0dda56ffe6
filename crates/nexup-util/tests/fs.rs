use nexup_util::fs::{any_file_exists, file_exists};
use tempfile::TempDir;

#[test]
fn test_file_exists_regular_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("mta.yaml");
    std::fs::write(&path, "").unwrap();
    assert!(file_exists(&path));
}

#[test]
fn test_file_exists_missing() {
    let tmp = TempDir::new().unwrap();
    assert!(!file_exists(&tmp.path().join("absent.txt")));
}

#[test]
fn test_file_exists_directory_is_not_a_file() {
    let tmp = TempDir::new().unwrap();
    assert!(!file_exists(tmp.path()));
}

#[test]
fn test_any_file_exists_first_candidate() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("mta.yaml"), "").unwrap();
    assert!(any_file_exists(tmp.path(), &["mta.yaml", "mta.yml"]));
}

#[test]
fn test_any_file_exists_later_candidate() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("mta.yml"), "").unwrap();
    assert!(any_file_exists(tmp.path(), &["mta.yaml", "mta.yml"]));
}

#[test]
fn test_any_file_exists_none() {
    let tmp = TempDir::new().unwrap();
    assert!(!any_file_exists(tmp.path(), &["mta.yaml", "mta.yml"]));
}
