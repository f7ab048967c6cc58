// ABOUTME: RecordStore owns the in-memory student collection mirrored to a single file.
// ABOUTME: Every successful mutation rewrites the whole file before returning.

use std::path::{Path, PathBuf};

use uniapp_core::Student;

use crate::error::StoreError;
use crate::snapshot::{load_students, save_students};

/// Durable CRUD over the student collection.
///
/// One instance is built by the application's composition root and lent to
/// collaborators by reference. Lookups are linear scans with case-sensitive
/// exact matching. Duplicate and not-found outcomes are logged and reported as
/// `Ok(false)`; `Err` is reserved for failures while reading or writing the file,
/// in which case the in-memory collection is left as it was.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    students: Vec<Student>,
}

impl RecordStore {
    /// Open the store backed by `path`, loading whatever is on disk.
    /// A missing file yields an empty store; undecodable content is `StoreError::Corrupt`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let students = load_students(&path)?;
        tracing::info!("loaded {} students from {}", students.len(), path.display());
        Ok(Self { path, students })
    }

    /// An empty store bound to `path`, without touching the disk.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            students: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The live collection, in insertion order.
    pub fn list_all(&self) -> &[Student] {
        &self.students
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.email == email)
    }

    pub fn find_by_id(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    /// Append `student` unless its email or id is already on file.
    pub fn add(&mut self, student: Student) -> Result<bool, StoreError> {
        if self.find_by_email(&student.email).is_some() {
            tracing::info!("student {} already exists (email)", student.email);
            return Ok(false);
        }
        if self.find_by_id(&student.student_id).is_some() {
            tracing::info!("student {} already exists (id)", student.student_id);
            return Ok(false);
        }

        tracing::info!("adding student {} ({})", student.email, student.student_id);
        let mut next = self.students.clone();
        next.push(student);
        self.commit(next)?;
        Ok(true)
    }

    /// Replace the record with the same student id.
    ///
    /// Refused when no record has that id, or when the new email already
    /// belongs to a different student.
    pub fn update(&mut self, student: Student) -> Result<bool, StoreError> {
        let Some(idx) = self
            .students
            .iter()
            .position(|s| s.student_id == student.student_id)
        else {
            tracing::info!("student {} not found, nothing updated", student.student_id);
            return Ok(false);
        };

        let email_clash = self
            .students
            .iter()
            .any(|s| s.email == student.email && s.student_id != student.student_id);
        if email_clash {
            tracing::info!(
                "email {} belongs to another student, {} not updated",
                student.email,
                student.student_id
            );
            return Ok(false);
        }

        let mut next = self.students.clone();
        next[idx] = student;
        self.commit(next)?;
        Ok(true)
    }

    /// Remove every record with this id. Returns whether anything was removed.
    pub fn remove_by_id(&mut self, student_id: &str) -> Result<bool, StoreError> {
        self.remove_where(|s| s.student_id == student_id, student_id)
    }

    /// Remove every record with this email. Returns whether anything was removed.
    pub fn remove_by_email(&mut self, email: &str) -> Result<bool, StoreError> {
        self.remove_where(|s| s.email == email, email)
    }

    /// Drop every record and persist the empty collection.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        tracing::info!("clearing {} students", self.students.len());
        self.commit(Vec::new())
    }

    fn remove_where<F>(&mut self, matches: F, key: &str) -> Result<bool, StoreError>
    where
        F: Fn(&Student) -> bool,
    {
        let next: Vec<Student> = self
            .students
            .iter()
            .filter(|s| !matches(s))
            .cloned()
            .collect();

        if next.len() == self.students.len() {
            tracing::info!("student {} not found, nothing removed", key);
            return Ok(false);
        }

        tracing::info!("removed {} record(s) for {}", self.students.len() - next.len(), key);
        self.commit(next)?;
        Ok(true)
    }

    /// Persist `next` and only then make it the live collection.
    fn commit(&mut self, next: Vec<Student>) -> Result<(), StoreError> {
        save_students(&self.path, &next)?;
        self.students = next;
        Ok(())
    }
}
