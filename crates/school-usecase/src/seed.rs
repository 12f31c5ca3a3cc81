//! Seed data - Populate a repository with a fixed dataset
//!
//! The built-in sample mirrors the demo school: three students across
//! two classes, two teachers and one subject per teacher. A dataset can
//! also be read from a JSON or YAML file with the same shape:
//!
//! ```yaml
//! students:
//!   - { name: Nupur Verma, classSection: 10A }
//! teachers:
//!   - { name: Shreya Lal, classSection: 10A }
//! subjects:
//!   - { name: Math, subjectCode: MATH101, teacher: 0 }
//! ```
//!
//! `teacher` is the 0-based position of the subject's teacher in
//! `teachers`.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use school_domain::{SchoolRepository, Student, Subject, Teacher};

use crate::error::{Result, UsecaseError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedStudent {
    pub name: String,
    pub class_section: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedTeacher {
    pub name: String,
    pub class_section: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSubject {
    pub name: String,
    pub subject_code: String,
    /// Position of the teacher in `SeedData::teachers`
    pub teacher: usize,
}

/// A complete dataset to append to a repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub students: Vec<SeedStudent>,
    #[serde(default)]
    pub teachers: Vec<SeedTeacher>,
    #[serde(default)]
    pub subjects: Vec<SeedSubject>,
}

/// How many records `SeedData::apply` appended
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub students: usize,
    pub teachers: usize,
    pub subjects: usize,
}

impl SeedData {
    /// The built-in demo dataset
    pub fn sample() -> Self {
        let student = |name: &str, class_section: &str| SeedStudent {
            name: name.to_string(),
            class_section: class_section.to_string(),
        };
        let teacher = |name: &str, class_section: &str| SeedTeacher {
            name: name.to_string(),
            class_section: class_section.to_string(),
        };
        let subject = |name: &str, subject_code: &str, teacher: usize| SeedSubject {
            name: name.to_string(),
            subject_code: subject_code.to_string(),
            teacher,
        };

        Self {
            students: vec![
                student("Nupur Verma", "10A"),
                student("Sushma Mahato", "10A"),
                student("Nutan Verma", "11B"),
            ],
            teachers: vec![teacher("Shreya Lal", "10A"), teacher("Smitha Dash", "11B")],
            subjects: vec![
                subject("Math", "MATH101", 0),
                subject("Science", "SCI202", 1),
            ],
        }
    }

    /// Load a dataset from a `.json`, `.yaml` or `.yml` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let data = match extension.as_deref() {
            Some("json") => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(UsecaseError::UnsupportedSeedFormat {
                    path: path.display().to_string(),
                })
            }
        };

        debug!(path = %path.display(), "loaded seed file");
        Ok(data)
    }

    /// Check that every subject points at a seeded teacher
    pub fn validate(&self) -> Result<()> {
        let available = self.teachers.len();
        match self.subjects.iter().find(|s| s.teacher >= available) {
            Some(subject) => Err(UsecaseError::UnknownTeacher {
                subject: subject.name.clone(),
                position: subject.teacher,
                available,
            }),
            None => Ok(()),
        }
    }

    /// Append students, then teachers, then subjects to `repo`
    ///
    /// Nothing is deduplicated: applying the same data twice stores
    /// every record twice. Validation runs first, so an invalid dataset
    /// leaves the repository untouched.
    pub fn apply<R: SchoolRepository + ?Sized>(&self, repo: &mut R) -> Result<SeedSummary> {
        self.validate()?;

        for s in &self.students {
            repo.add_student(Student::new(&s.name, &s.class_section))?;
        }

        let mut teacher_ids = Vec::with_capacity(self.teachers.len());
        for t in &self.teachers {
            teacher_ids.push(repo.add_teacher(Teacher::new(&t.name, &t.class_section))?);
        }

        // validate() guarantees every position is below teacher_ids.len()
        for s in &self.subjects {
            let teacher = teacher_ids[s.teacher];
            repo.add_subject(Subject::new(&s.name, &s.subject_code, teacher))?;
        }

        let summary = SeedSummary {
            students: self.students.len(),
            teachers: self.teachers.len(),
            subjects: self.subjects.len(),
        };
        info!(
            students = summary.students,
            teachers = summary.teachers,
            subjects = summary.subjects,
            "seeded repository"
        );
        Ok(summary)
    }
}

/// Append the built-in demo dataset to `repo`
pub fn populate_sample_data<R: SchoolRepository + ?Sized>(repo: &mut R) -> Result<SeedSummary> {
    SeedData::sample().apply(repo)
}
