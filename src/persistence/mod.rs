//! Roster persistence
//!
//! The data file is a JSON array of student objects. Saves always rewrite
//! the whole file: the roster is written to a sibling `.tmp` file and then
//! renamed over the target, so an interrupted save leaves the previous
//! roster intact.

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::record::Student;

/// Read every student from `path`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_students(path: &Path) -> Result<Option<Vec<Student>>, StoreError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let students = serde_json::from_str(&json).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(students))
}

/// Overwrite `path` with `students`
pub fn write_students<'a, I>(path: &Path, students: I) -> Result<(), StoreError>
where
    I: IntoIterator<Item = &'a Student>,
{
    let students: Vec<&Student> = students.into_iter().collect();
    let json = serde_json::to_string_pretty(&students)?;

    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, json).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(write_err)?;

    log::info!("Saved {} students to {}", students.len(), path.display());
    Ok(())
}

/// `students.json` -> `students.json.tmp`
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("students"));
    name.push(".tmp");
    path.with_file_name(name)
}
