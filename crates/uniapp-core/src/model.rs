// ABOUTME: Defines the Student record, uniquely keyed by email and by student id.
// ABOUTME: Also provides derived queries over a student's enrolled subjects.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::subject::{Grade, Subject};

/// A registered student. Both `email` and `student_id` are unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub email: String,
    pub password: String,
    pub name: String,
    pub student_id: String,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Student {
    /// Create a new Student with no enrolled subjects.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            student_id: student_id.into(),
            subjects: Vec::new(),
        }
    }

    /// Plaintext equality check against the stored password.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn subject(&self, subject_id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == subject_id)
    }

    /// Mean mark across enrolled subjects, or None with no subjects.
    pub fn average_mark(&self) -> Option<f64> {
        if self.subjects.is_empty() {
            return None;
        }
        let total: u32 = self.subjects.iter().map(|s| u32::from(s.mark)).sum();
        Some(f64::from(total) / self.subjects.len() as f64)
    }

    pub fn overall_grade(&self) -> Option<Grade> {
        self.average_mark().map(Grade::from_mark)
    }

    /// A student with no subjects is not counted as passing.
    pub fn is_passing(&self) -> bool {
        self.average_mark().is_some_and(|avg| avg >= 50.0)
    }
}

/// Generate a 6-digit zero-padded student id for which `is_taken` returns false.
pub fn generate_student_id<R, F>(rng: &mut R, is_taken: F) -> String
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    loop {
        let candidate = format!("{:06}", rng.gen_range(1..=999_999));
        if !is_taken(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn make_student() -> Student {
        Student::new(
            "jane.doe@university.com",
            "Helloworld123",
            "Jane Doe",
            "000123",
        )
    }

    #[test]
    fn student_new_starts_without_subjects() {
        let student = make_student();
        assert_eq!(student.email, "jane.doe@university.com");
        assert_eq!(student.student_id, "000123");
        assert!(student.subjects.is_empty());
        assert!(student.average_mark().is_none());
        assert!(student.overall_grade().is_none());
        assert!(!student.is_passing());
    }

    #[test]
    fn verify_password_is_exact_match() {
        let student = make_student();
        assert!(student.verify_password("Helloworld123"));
        assert!(!student.verify_password("helloworld123"));
        assert!(!student.verify_password("Helloworld123 "));
    }

    #[test]
    fn average_and_grade_follow_subjects() {
        let mut student = make_student();
        student.subjects.push(Subject::with_mark("001", 90));
        student.subjects.push(Subject::with_mark("002", 60));

        assert_eq!(student.average_mark(), Some(75.0));
        assert_eq!(student.overall_grade(), Some(Grade::D));
        assert!(student.is_passing());
        assert_eq!(student.subject("002").map(|s| s.mark), Some(60));
        assert!(student.subject("003").is_none());
    }

    #[test]
    fn failing_average_is_not_passing() {
        let mut student = make_student();
        student.subjects.push(Subject::with_mark("001", 30));
        student.subjects.push(Subject::with_mark("002", 40));
        assert_eq!(student.overall_grade(), Some(Grade::Z));
        assert!(!student.is_passing());
    }

    #[test]
    fn missing_subjects_field_deserializes_as_empty() {
        let json = r#"{"email":"a@x.com","password":"p","name":"A","student_id":"S1"}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert!(student.subjects.is_empty());
    }

    #[test]
    fn generated_ids_are_six_digits_and_skip_taken() {
        let mut rng = StdRng::seed_from_u64(5);
        let first = generate_student_id(&mut rng, |_| false);
        assert_eq!(first.len(), 6);
        assert!(first.chars().all(|c| c.is_ascii_digit()));

        let mut rng = StdRng::seed_from_u64(5);
        let second = generate_student_id(&mut rng, |id| id == first);
        assert_ne!(second, first);
    }
}
