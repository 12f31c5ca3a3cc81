//! In-Memory Repository Implementation
//!
//! Keeps the three collections in `Vec`s behind a shared lock.
//! Cloning the repository clones the handle, not the data: every clone
//! reads and writes the same store for as long as any clone is alive.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use school_domain::model::student::Student;
use school_domain::model::subject::Subject;
use school_domain::model::teacher::{Teacher, TeacherId};
use school_domain::repository::school_repository::{RepositoryError, SchoolRepository};

#[derive(Debug, Default)]
struct Tables {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    subjects: Vec<Subject>,
}

/// In-memory School Repository
///
/// `TeacherId`s are positions in the teacher list.
#[derive(Debug, Clone, Default)]
pub struct InMemorySchoolRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemorySchoolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables.read().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables.write().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire write lock".to_string(),
        })
    }
}

impl SchoolRepository for InMemorySchoolRepository {
    fn add_student(&mut self, student: Student) -> Result<(), RepositoryError> {
        self.write()?.students.push(student);
        Ok(())
    }

    fn add_teacher(&mut self, teacher: Teacher) -> Result<TeacherId, RepositoryError> {
        let mut tables = self.write()?;
        let id = TeacherId::new(tables.teachers.len());
        tables.teachers.push(teacher);
        Ok(id)
    }

    fn add_subject(&mut self, subject: Subject) -> Result<(), RepositoryError> {
        self.write()?.subjects.push(subject);
        Ok(())
    }

    fn students(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.read()?.students.clone())
    }

    fn teachers(&self) -> Result<Vec<(TeacherId, Teacher)>, RepositoryError> {
        Ok(self
            .read()?
            .teachers
            .iter()
            .enumerate()
            .map(|(i, t)| (TeacherId::new(i), t.clone()))
            .collect())
    }

    fn subjects(&self) -> Result<Vec<Subject>, RepositoryError> {
        Ok(self.read()?.subjects.clone())
    }

    fn teacher(&self, id: TeacherId) -> Result<Option<Teacher>, RepositoryError> {
        Ok(self.read()?.teachers.get(id.index()).cloned())
    }

    fn count_students(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.students.len())
    }

    fn count_teachers(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.teachers.len())
    }

    fn count_subjects(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.subjects.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut repo = InMemorySchoolRepository::new();

        repo.add_student(Student::new("Nutan Verma", "11B")).unwrap();
        repo.add_student(Student::new("Nupur Verma", "10A")).unwrap();
        repo.add_student(Student::new("Sushma Mahato", "10A")).unwrap();

        let names: Vec<String> = repo
            .students()
            .unwrap()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Nutan Verma", "Nupur Verma", "Sushma Mahato"]);
    }

    #[test]
    fn test_teacher_ids_are_positions() {
        let mut repo = InMemorySchoolRepository::new();

        let lal = repo.add_teacher(Teacher::new("Shreya Lal", "10A")).unwrap();
        let dash = repo.add_teacher(Teacher::new("Smitha Dash", "11B")).unwrap();

        assert_eq!(lal.index(), 0);
        assert_eq!(dash.index(), 1);
        assert_eq!(repo.teacher(dash).unwrap().unwrap().name(), "Smitha Dash");
        assert!(repo.teacher(TeacherId::new(2)).unwrap().is_none());
    }

    #[test]
    fn test_clones_share_store() {
        let repo = InMemorySchoolRepository::new();
        let mut writer = repo.clone();

        writer.add_student(Student::new("Nupur Verma", "10A")).unwrap();

        assert!(Arc::ptr_eq(&repo.tables, &writer.tables));
        assert_eq!(repo.count_students().unwrap(), 1);
        assert_eq!(InMemorySchoolRepository::new().count_students().unwrap(), 0);
    }

    #[test]
    fn test_dangling_teacher_key_accepted() {
        let mut repo = InMemorySchoolRepository::new();

        repo.add_subject(Subject::new("Music", "MUS100", TeacherId::new(9)))
            .unwrap();

        assert_eq!(repo.count_subjects().unwrap(), 1);
        assert_eq!(repo.count_teachers().unwrap(), 0);
    }

    #[test]
    fn test_poisoned_lock_maps_to_persistence_error() {
        let mut repo = InMemorySchoolRepository::new();
        let tables = Arc::clone(&repo.tables);

        let result = std::thread::spawn(move || {
            let _guard = tables.write().unwrap();
            panic!("writer died while holding the lock");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(
            repo.students(),
            Err(RepositoryError::Persistence {
                message: "Failed to acquire read lock".to_string(),
            })
        );
        assert_eq!(
            repo.add_teacher(Teacher::new("Shreya Lal", "10A")),
            Err(RepositoryError::Persistence {
                message: "Failed to acquire write lock".to_string(),
            })
        );
    }
}
