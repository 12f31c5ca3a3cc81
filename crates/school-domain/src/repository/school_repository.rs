//! School Repository - Abstract storage for students, teachers and subjects
//!
//! Three ordered collections. Insertion order is the only ordering:
//! nothing is sorted, deduplicated or removed.

use crate::model::student::Student;
use crate::model::subject::Subject;
use crate::model::teacher::{Teacher, TeacherId};

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be read or written
    Persistence { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::Persistence { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// School Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Every listing returns records in the order they were added.
pub trait SchoolRepository {
    /// Append a student
    fn add_student(&mut self, student: Student) -> Result<(), RepositoryError>;

    /// Append a teacher and return the key subjects should use to refer to it
    fn add_teacher(&mut self, teacher: Teacher) -> Result<TeacherId, RepositoryError>;

    /// Append a subject
    ///
    /// The subject's teacher key is stored as given, even if no teacher
    /// with that key exists.
    fn add_subject(&mut self, subject: Subject) -> Result<(), RepositoryError>;

    /// All students in insertion order
    fn students(&self) -> Result<Vec<Student>, RepositoryError>;

    /// All teachers with their keys, in insertion order
    fn teachers(&self) -> Result<Vec<(TeacherId, Teacher)>, RepositoryError>;

    /// All subjects in insertion order
    fn subjects(&self) -> Result<Vec<Subject>, RepositoryError>;

    /// Resolve a teacher key
    fn teacher(&self, id: TeacherId) -> Result<Option<Teacher>, RepositoryError> {
        Ok(self
            .teachers()?
            .into_iter()
            .find(|(key, _)| *key == id)
            .map(|(_, teacher)| teacher))
    }

    fn count_students(&self) -> Result<usize, RepositoryError> {
        Ok(self.students()?.len())
    }

    fn count_teachers(&self) -> Result<usize, RepositoryError> {
        Ok(self.teachers()?.len())
    }

    fn count_subjects(&self) -> Result<usize, RepositoryError> {
        Ok(self.subjects()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::VecSchoolRepo;

    #[test]
    fn test_default_teacher_lookup() {
        let mut repo = VecSchoolRepo::default();

        let lal = repo.add_teacher(Teacher::new("Shreya Lal", "10A")).unwrap();
        let dash = repo.add_teacher(Teacher::new("Smitha Dash", "11B")).unwrap();

        assert_eq!(repo.teacher(lal).unwrap().unwrap().name(), "Shreya Lal");
        assert_eq!(repo.teacher(dash).unwrap().unwrap().name(), "Smitha Dash");
        assert!(repo.teacher(TeacherId::new(7)).unwrap().is_none());
    }

    #[test]
    fn test_default_counts() {
        let mut repo = VecSchoolRepo::default();

        repo.add_student(Student::new("Nupur Verma", "10A")).unwrap();
        repo.add_student(Student::new("Nupur Verma", "10A")).unwrap();
        let t = repo.add_teacher(Teacher::new("Shreya Lal", "10A")).unwrap();
        repo.add_subject(Subject::new("Math", "MATH101", t)).unwrap();

        // Duplicates are kept
        assert_eq!(repo.count_students().unwrap(), 2);
        assert_eq!(repo.count_teachers().unwrap(), 1);
        assert_eq!(repo.count_subjects().unwrap(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = RepositoryError::Persistence {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(err.to_string(), "Persistence error: lock poisoned");
    }
}
