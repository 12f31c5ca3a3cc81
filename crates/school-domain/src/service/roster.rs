//! Roster - Read-only queries over a school repository
//!
//! 1. Students in a class: filter students by class section
//! 2. Subjects by teacher: find the teacher, then filter subjects by key
//!
//! Both are linear scans that keep repository insertion order.
//! This is pure domain logic - no I/O, no printing.

use crate::model::student::Student;
use crate::model::subject::Subject;
use crate::model::teacher::{Teacher, TeacherId};
use crate::repository::school_repository::{RepositoryError, SchoolRepository};

/// The result of looking up a teacher's subjects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeacherSubjects {
    /// A teacher matched; `subjects` may still be empty
    Found {
        teacher: TeacherId,
        subjects: Vec<Subject>,
    },
    /// No teacher carries the requested name
    NotFound,
}

impl TeacherSubjects {
    /// Matched subjects, empty when the teacher was not found
    pub fn subjects(&self) -> &[Subject] {
        match self {
            TeacherSubjects::Found { subjects, .. } => subjects,
            TeacherSubjects::NotFound => &[],
        }
    }
}

/// Roster - The query service
///
/// Stateless. Every call reads the repository it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct Roster;

impl Roster {
    pub fn new() -> Self {
        Self
    }

    /// Students whose class section matches `class_section` case-insensitively
    pub fn students_in_class<R: SchoolRepository + ?Sized>(
        &self,
        repo: &R,
        class_section: &str,
    ) -> Result<Vec<Student>, RepositoryError> {
        Ok(repo
            .students()?
            .into_iter()
            .filter(|s| s.is_in_class(class_section))
            .collect())
    }

    /// First teacher, in insertion order, whose name matches `name`
    ///
    /// Namesakes after the first are never returned.
    pub fn find_teacher<R: SchoolRepository + ?Sized>(
        &self,
        repo: &R,
        name: &str,
    ) -> Result<Option<(TeacherId, Teacher)>, RepositoryError> {
        Ok(repo.teachers()?.into_iter().find(|(_, t)| t.is_named(name)))
    }

    /// Subjects taught by the first teacher named `teacher_name`
    pub fn subjects_taught_by<R: SchoolRepository + ?Sized>(
        &self,
        repo: &R,
        teacher_name: &str,
    ) -> Result<TeacherSubjects, RepositoryError> {
        let Some((teacher, _)) = self.find_teacher(repo, teacher_name)? else {
            return Ok(TeacherSubjects::NotFound);
        };

        let subjects = repo
            .subjects()?
            .into_iter()
            .filter(|s| s.is_taught_by(teacher))
            .collect();

        Ok(TeacherSubjects::Found { teacher, subjects })
    }
}
