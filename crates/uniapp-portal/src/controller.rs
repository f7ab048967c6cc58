// ABOUTME: Student-facing controller: registration, login session, and subject enrolment.
// ABOUTME: Every change is persisted through the borrowed RecordStore, never by direct file I/O.

use rand::SeedableRng;
use rand::rngs::StdRng;
use uniapp_core::validator::{is_valid_email, is_valid_password};
use uniapp_core::{Student, Subject, generate_student_id};
use uniapp_store::RecordStore;

use crate::error::PortalError;

/// Maximum number of subjects one student may hold.
pub const MAX_SUBJECTS: usize = 4;

/// Holds the login session for one front-end over a store owned elsewhere.
pub struct Controller<'s> {
    store: &'s mut RecordStore,
    /// Student id of the logged-in student.
    session: Option<String>,
    rng: StdRng,
}

impl<'s> Controller<'s> {
    pub fn new(store: &'s mut RecordStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Build a controller with a caller-supplied RNG for subject ids, marks and student ids.
    pub fn with_rng(store: &'s mut RecordStore, rng: StdRng) -> Self {
        Self {
            store,
            session: None,
            rng,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &*self.store
    }

    /// Register a new student with a freshly generated id.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Student, PortalError> {
        if !is_valid_email(email) {
            return Err(PortalError::InvalidEmail(email.to_string()));
        }
        if !is_valid_password(password) {
            return Err(PortalError::InvalidPassword);
        }
        if self.store.find_by_email(email).is_some() {
            return Err(PortalError::AlreadyRegistered(email.to_string()));
        }

        let store = &*self.store;
        let student_id = generate_student_id(&mut self.rng, |id| store.find_by_id(id).is_some());
        let student = Student::new(email, password, name, student_id);

        if !self.store.add(student.clone())? {
            return Err(PortalError::AlreadyRegistered(email.to_string()));
        }
        tracing::info!("registered {} as {}", student.email, student.student_id);
        Ok(student)
    }

    /// Check credentials and start a session on success.
    pub fn authenticate(&mut self, email: &str, password: &str) -> Option<Student> {
        let student = self
            .store
            .find_by_email(email)
            .filter(|s| s.verify_password(password))
            .cloned();

        match &student {
            Some(s) => {
                tracing::info!("{} logged in", s.email);
                self.session = Some(s.student_id.clone());
            }
            None => tracing::info!("login failed for {}", email),
        }
        student
    }

    pub fn logout(&mut self) {
        if let Some(id) = self.session.take() {
            tracing::info!("student {} logged out", id);
        }
    }

    pub fn logged_in(&self) -> Option<&Student> {
        self.session
            .as_deref()
            .and_then(|id| self.store.find_by_id(id))
    }

    /// Enrol the logged-in student in a new randomly assigned subject.
    pub fn enrol_subject(&mut self) -> Result<Subject, PortalError> {
        let mut student = self.current_student()?;
        if student.subjects.len() >= MAX_SUBJECTS {
            return Err(PortalError::EnrolmentFull(MAX_SUBJECTS));
        }

        let subject = Subject::random(&mut self.rng, &student.subjects);
        student.subjects.push(subject.clone());
        self.persist(student)?;

        tracing::info!("enrolled in subject {}", subject.id);
        Ok(subject)
    }

    /// Drop one subject from the logged-in student.
    pub fn remove_subject(&mut self, subject_id: &str) -> Result<Subject, PortalError> {
        let mut student = self.current_student()?;
        let Some(idx) = student.subjects.iter().position(|s| s.id == subject_id) else {
            return Err(PortalError::SubjectNotFound(subject_id.to_string()));
        };

        let removed = student.subjects.remove(idx);
        self.persist(student)?;

        tracing::info!("removed subject {}", removed.id);
        Ok(removed)
    }

    pub fn list_enrolled_subjects(&self) -> Result<Vec<Subject>, PortalError> {
        self.logged_in()
            .map(|s| s.subjects.clone())
            .ok_or(PortalError::NotLoggedIn)
    }

    pub fn change_password(&mut self, new_password: &str, confirm: &str) -> Result<(), PortalError> {
        let mut student = self.current_student()?;
        if new_password != confirm {
            return Err(PortalError::PasswordMismatch);
        }
        if !is_valid_password(new_password) {
            return Err(PortalError::InvalidPassword);
        }

        student.password = new_password.to_string();
        self.persist(student)?;

        tracing::info!("password changed");
        Ok(())
    }

    fn current_student(&self) -> Result<Student, PortalError> {
        let id = self.session.as_deref().ok_or(PortalError::NotLoggedIn)?;
        self.store
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| PortalError::StudentMissing(id.to_string()))
    }

    fn persist(&mut self, student: Student) -> Result<(), PortalError> {
        let id = student.student_id.clone();
        if self.store.update(student)? {
            Ok(())
        } else {
            Err(PortalError::StudentMissing(id))
        }
    }
}
