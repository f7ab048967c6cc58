// ABOUTME: Whole-file snapshot load and save for the student collection.
// ABOUTME: Writes go to a sibling .tmp file that is fsynced and renamed over the target.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use uniapp_core::Student;

use crate::error::StoreError;

/// Load every student from `path`.
///
/// A missing or zero-length file is an empty collection. Content that does not
/// decode as a student list is `StoreError::Corrupt`; no partial records are kept.
pub fn load_students(path: &Path) -> Result<Vec<Student>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("no record file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite `path` with the full collection using atomic write
/// (write to .tmp, fsync, rename). Creates the parent directory if needed.
pub fn save_students(path: &Path, students: &[Student]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_vec_pretty(students)?;
    let tmp_path = tmp_path_for(path);

    if let Err(e) = write_then_rename(&tmp_path, path, &json) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    // Best-effort: the rename already succeeded, a failed directory fsync
    // only weakens durability of the new directory entry.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    tracing::debug!("saved {} students to {}", students.len(), path.display());
    Ok(())
}

fn write_then_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(tmp_path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);

    fs::rename(tmp_path, path)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use uniapp_core::Subject;

    fn make_students() -> Vec<Student> {
        let mut enrolled = Student::new("ann.lee@university.com", "Annlee123", "Ann Lee", "000001");
        enrolled.subjects.push(Subject::with_mark("101", 88));
        vec![
            enrolled,
            Student::new("bo.kim@university.com", "Bokimmm456", "Bo Kim", "000002"),
        ]
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.data");

        let students = make_students();
        save_students(&path, &students).unwrap();

        let loaded = load_students(&path).unwrap();
        assert_eq!(loaded, students);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = load_students(&dir.path().join("nope.data")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn load_zero_length_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.data");
        File::create(&path).unwrap();

        assert!(load_students(&path).unwrap().is_empty());
    }

    #[test]
    fn load_garbage_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.data");
        fs::write(&path, b"\x80\x04\x95\xff\x00\x13").unwrap();

        let err = load_students(&path).unwrap_err();
        assert!(err.is_corrupt(), "expected corrupt, got {err}");
    }

    #[test]
    fn load_truncated_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.data");
        save_students(&path, &make_students()).unwrap();

        let bytes = fs::read(&path).unwrap();
        fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        assert!(load_students(&path).unwrap_err().is_corrupt());
    }

    #[test]
    fn load_wrong_shape_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.data");
        fs::write(&path, r#"[{"email": 42}]"#).unwrap();

        assert!(load_students(&path).unwrap_err().is_corrupt());
    }

    #[test]
    fn save_creates_directory_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deep").join("nested").join("students.data");

        save_students(&path, &make_students()).unwrap();

        assert!(path.exists());
        assert!(!tmp_path_for(&path).exists());
        assert_eq!(load_students(&path).unwrap().len(), 2);
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.data");

        save_students(&path, &make_students()).unwrap();
        save_students(&path, &[]).unwrap();

        assert!(load_students(&path).unwrap().is_empty());
    }

    #[test]
    fn failed_rename_removes_tmp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("occupied");
        fs::create_dir_all(path.join("child")).unwrap();

        let err = save_students(&path, &make_students()).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let path = Path::new("/data/students.data");
        assert_eq!(tmp_path_for(path), PathBuf::from("/data/students.data.tmp"));
    }
}
