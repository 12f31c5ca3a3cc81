//! Teacher - Staff member who teaches subjects
//!
//! Teachers are referenced by subjects through a `TeacherId` handed out by
//! the repository. The id, not the name, decides which subjects belong to
//! which teacher, so namesakes never share subjects.

/// Key of a teacher within a repository
///
/// Ids are assigned by `SchoolRepository::add_teacher` and are only
/// meaningful for the repository that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeacherId(usize);

impl TeacherId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Teacher record
///
/// `class_section` is recorded but no query reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    name: String,
    class_section: String,
}

impl Teacher {
    /// Create a new Teacher
    pub fn new(name: impl Into<String>, class_section: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_section: class_section.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_section(&self) -> &str {
        &self.class_section
    }

    /// Check if this teacher goes by `name` (case-insensitive)
    pub fn is_named(&self, name: &str) -> bool {
        super::names_match(&self.name, name)
    }
}
