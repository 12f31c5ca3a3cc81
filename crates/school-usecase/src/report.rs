//! Report rendering - The two plain-text roster reports
//!
//! Output is UTF-8 with `\n` line endings:
//!
//! ```text
//! Students in Class 10A:
//!
//! Name: Nupur Verma
//! Name: Sushma Mahato
//!
//! Subjects taught by Smitha Dash:
//!
//! Subject: Science, Subject Code: SCI202
//! ```

use std::io::Write;

use tracing::debug;

use school_domain::{Roster, SchoolRepository, TeacherSubjects};

use crate::error::Result;

/// Message written when no teacher matches the requested name
pub const TEACHER_NOT_FOUND: &str = "Teacher not found.";

/// Writes reports to any `Write` sink (stdout, a buffer, a file)
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: W,
    roster: Roster,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            roster: Roster::new(),
        }
    }

    /// Give back the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print every student of `class_section`, returning how many matched
    ///
    /// The header and trailing blank line are printed even with no matches.
    pub fn students_in_class<R: SchoolRepository + ?Sized>(
        &mut self,
        repo: &R,
        class_section: &str,
    ) -> Result<usize> {
        let students = self.roster.students_in_class(repo, class_section)?;

        writeln!(self.out, "Students in Class {}:\n", class_section)?;
        for student in &students {
            writeln!(self.out, "Name: {}", student.name())?;
        }
        writeln!(self.out)?;
        self.out.flush()?;

        debug!(class_section, matched = students.len(), "students report written");
        Ok(students.len())
    }

    /// Print the subjects of the first teacher named `teacher_name`
    ///
    /// Returns `None` when no teacher matched, otherwise the subject count.
    pub fn subjects_taught_by<R: SchoolRepository + ?Sized>(
        &mut self,
        repo: &R,
        teacher_name: &str,
    ) -> Result<Option<usize>> {
        let lookup = self.roster.subjects_taught_by(repo, teacher_name)?;

        writeln!(self.out, "Subjects taught by {}:\n", teacher_name)?;
        let matched = match &lookup {
            TeacherSubjects::Found { subjects, .. } => {
                for subject in subjects {
                    writeln!(
                        self.out,
                        "Subject: {}, Subject Code: {}",
                        subject.name(),
                        subject.subject_code()
                    )?;
                }
                Some(subjects.len())
            }
            TeacherSubjects::NotFound => {
                writeln!(self.out, "{}", TEACHER_NOT_FOUND)?;
                None
            }
        };
        self.out.flush()?;

        debug!(teacher_name, ?matched, "subjects report written");
        Ok(matched)
    }
}
