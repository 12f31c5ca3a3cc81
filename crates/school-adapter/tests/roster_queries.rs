use school_adapter::InMemorySchoolRepository;
use school_domain::{Roster, SchoolRepository, Student, Subject, Teacher, TeacherSubjects};

fn sample_repo() -> InMemorySchoolRepository {
    let mut repo = InMemorySchoolRepository::new();
    repo.add_student(Student::new("Nupur Verma", "10A")).unwrap();
    repo.add_student(Student::new("Sushma Mahato", "10A")).unwrap();
    repo.add_student(Student::new("Nutan Verma", "11B")).unwrap();

    let lal = repo.add_teacher(Teacher::new("Shreya Lal", "10A")).unwrap();
    let dash = repo.add_teacher(Teacher::new("Smitha Dash", "11B")).unwrap();
    repo.add_subject(Subject::new("Math", "MATH101", lal)).unwrap();
    repo.add_subject(Subject::new("Science", "SCI202", dash)).unwrap();
    repo
}

#[test]
fn students_in_class_matches_any_case() {
    let repo = sample_repo();
    let roster = Roster::new();

    for class in ["10A", "10a"] {
        let names: Vec<String> = roster
            .students_in_class(&repo, class)
            .unwrap()
            .into_iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["Nupur Verma", "Sushma Mahato"]);
    }
}

#[test]
fn subjects_taught_by_resolves_through_keys() {
    let repo = sample_repo();

    let result = Roster::new().subjects_taught_by(&repo, "SHREYA LAL").unwrap();
    let TeacherSubjects::Found { teacher, subjects } = result else {
        panic!("Shreya Lal should be found");
    };

    assert_eq!(repo.teacher(teacher).unwrap().unwrap().name(), "Shreya Lal");
    let codes: Vec<&str> = subjects.iter().map(|s| s.subject_code()).collect();
    assert_eq!(codes, vec!["MATH101"]);
}

#[test]
fn queries_see_writes_made_through_another_handle() {
    let repo = sample_repo();
    let mut other = repo.clone();
    other
        .add_student(Student::new("Kiran Das", "10a"))
        .unwrap();

    let students = Roster::new().students_in_class(&repo, "10A").unwrap();
    assert_eq!(students.len(), 3);
    assert_eq!(students[2].name(), "Kiran Das");
}

#[test]
fn unknown_teacher_is_not_found() {
    let repo = sample_repo();

    let result = Roster::new().subjects_taught_by(&repo, "Unknown Name").unwrap();
    assert_eq!(result, TeacherSubjects::NotFound);
}
