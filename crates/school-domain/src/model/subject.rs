//! Subject - A course taught by exactly one teacher

use super::teacher::TeacherId;

/// Subject record
///
/// Holds the key of its teacher rather than the teacher itself.
/// The key is not checked on construction, so a subject can point at
/// a teacher that was never added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: String,
    subject_code: String,
    teacher: TeacherId,
}

impl Subject {
    /// Create a new Subject
    pub fn new(
        name: impl Into<String>,
        subject_code: impl Into<String>,
        teacher: TeacherId,
    ) -> Self {
        Self {
            name: name.into(),
            subject_code: subject_code.into(),
            teacher,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject_code(&self) -> &str {
        &self.subject_code
    }

    pub fn teacher(&self) -> TeacherId {
        self.teacher
    }

    pub fn is_taught_by(&self, teacher: TeacherId) -> bool {
        self.teacher == teacher
    }
}
