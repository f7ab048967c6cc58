// ABOUTME: Defines the Subject a student is enrolled in and the Grade band derived from its mark.
// ABOUTME: Subjects get a random 3-digit id and a random mark at enrolment time.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest mark a freshly enrolled subject can be assigned.
pub const MIN_MARK: u8 = 25;
/// Highest mark a freshly enrolled subject can be assigned.
pub const MAX_MARK: u8 = 100;

/// Grade band for a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Z,
    P,
    C,
    D,
    HD,
}

impl Grade {
    /// Map a mark (or an average mark) to its grade band.
    pub fn from_mark(mark: f64) -> Self {
        if mark >= 85.0 {
            Grade::HD
        } else if mark >= 75.0 {
            Grade::D
        } else if mark >= 65.0 {
            Grade::C
        } else if mark >= 50.0 {
            Grade::P
        } else {
            Grade::Z
        }
    }

    pub fn is_pass(self) -> bool {
        self != Grade::Z
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::Z => "Z",
            Grade::P => "P",
            Grade::C => "C",
            Grade::D => "D",
            Grade::HD => "HD",
        };
        f.write_str(s)
    }
}

/// A subject held by one student. The id is unique within that student only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub mark: u8,
    pub grade: Grade,
    pub enrolled_at: DateTime<Utc>,
}

impl Subject {
    /// Build a subject with a known id and mark. The grade is derived from the mark.
    pub fn with_mark(id: impl Into<String>, mark: u8) -> Self {
        Self {
            id: id.into(),
            mark,
            grade: Grade::from_mark(f64::from(mark)),
            enrolled_at: Utc::now(),
        }
    }

    /// Generate a subject whose id does not collide with any of `taken`.
    /// Ids are zero-padded to three digits ("001" to "999").
    pub fn random<R: Rng + ?Sized>(rng: &mut R, taken: &[Subject]) -> Self {
        let id = loop {
            let candidate = format!("{:03}", rng.gen_range(1..=999));
            if !taken.iter().any(|s| s.id == candidate) {
                break candidate;
            }
        };
        let mark = rng.gen_range(MIN_MARK..=MAX_MARK);
        Self::with_mark(id, mark)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subject::{} -- mark = {} -- grade = {}",
            self.id, self.mark, self.grade
        )
    }
}
