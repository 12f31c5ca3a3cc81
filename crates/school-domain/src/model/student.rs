//! Student - A learner enrolled in a class section

/// Student record
///
/// Students carry no identity of their own. Two students with the same
/// name and class are still two separate entries in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    class_section: String,
}

impl Student {
    /// Create a new Student
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

    /// Check if this student belongs to a class section (case-insensitive)
    pub fn is_in_class(&self, class_section: &str) -> bool {
        super::names_match(&self.class_section, class_section)
    }
}
