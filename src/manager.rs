//! Student roster manager
//!
//! Owns every record, hands out sequential ids and rewrites the data file
//! after each change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::error::{ManagerError, StoreError};
use crate::persistence;
use crate::record::{Student, StudentDraft, StudentId, StudentUpdate};

/// Result of loading a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; this many records were merged in
    Loaded(usize),
    /// No file at that path, roster untouched
    Missing,
}

/// The student roster and the file backing it
#[derive(Debug)]
pub struct StudentManager {
    students: BTreeMap<StudentId, Student>,
    /// Always greater than every id in `students`
    next_id: StudentId,
    path: PathBuf,
}

impl StudentManager {
    /// Empty roster persisted to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: 1,
            path: path.into(),
        }
    }

    /// File written by `save`
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Id the next added student will receive
    pub fn next_id(&self) -> StudentId {
        self.next_id
    }

    /// Store a new student under the next id, in memory only.
    ///
    /// Fails only once every id up to `StudentId::MAX` has been handed out.
    pub fn add(&mut self, draft: StudentDraft) -> Result<StudentId, ManagerError> {
        let id = self.next_id;
        let next = id.checked_add(1).ok_or(ManagerError::IdsExhausted)?;
        self.students.insert(id, Student::from_draft(id, draft));
        self.next_id = next;
        log::debug!("Added student {id}");
        Ok(id)
    }

    /// Add a student and persist the roster
    pub fn create(&mut self, draft: StudentDraft) -> Result<StudentId, ManagerError> {
        let id = self.add(draft)?;
        self.save()?;
        Ok(id)
    }

    /// Replace the fields present in `update` and persist the roster
    pub fn update(
        &mut self,
        id: StudentId,
        update: StudentUpdate,
    ) -> Result<&Student, ManagerError> {
        let student = self
            .students
            .get_mut(&id)
            .ok_or(ManagerError::NotFound(id))?;
        student.apply(update);
        log::debug!("Updated student {id}");

        self.save()?;
        Ok(&self.students[&id])
    }

    /// Remove a student and persist the roster
    pub fn delete(&mut self, id: StudentId) -> Result<Student, ManagerError> {
        let removed = self
            .students
            .remove(&id)
            .ok_or(ManagerError::NotFound(id))?;
        log::debug!("Deleted student {id}");

        self.save()?;
        Ok(removed)
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// All students in ascending id order
    pub fn list(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Student> {
        self.list().filter(move |s| s.category() == category)
    }

    /// Students in the named band. Unknown names match nobody.
    pub fn filter_by_category(&self, name: &str) -> Vec<&Student> {
        match Category::from_name(name) {
            Some(category) => self.in_category(category).collect(),
            None => {
                log::debug!("Unknown category {name:?}");
                Vec::new()
            }
        }
    }

    /// Overwrite the data file with the current roster
    pub fn save(&self) -> Result<(), StoreError> {
        persistence::write_students(&self.path, self.students.values())
    }

    /// Merge the records stored at `path` into the roster.
    ///
    /// Incoming records replace existing ones with the same id; within the
    /// file the last record for an id wins. `next_id` moves past the highest
    /// id seen and never goes backwards. Ids must lie in
    /// `1..StudentId::MAX`; a file holding any other id is rejected whole
    /// and the roster is left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, StoreError> {
        let path = path.as_ref();
        let Some(incoming) = persistence::read_students(path)? else {
            log::warn!("No student file at {}", path.display());
            return Ok(LoadOutcome::Missing);
        };

        let mut by_id = BTreeMap::new();
        for student in incoming {
            if student.id == 0 || student.id == StudentId::MAX {
                return Err(StoreError::InvalidId {
                    path: path.to_path_buf(),
                    id: student.id,
                });
            }
            by_id.insert(student.id, student);
        }

        let count = by_id.len();
        if let Some(&max_id) = by_id.keys().next_back() {
            self.next_id = self.next_id.max(max_id + 1);
        }
        self.students.append(&mut by_id);

        log::info!("Loaded {count} students from {}", path.display());
        Ok(LoadOutcome::Loaded(count))
    }
}
