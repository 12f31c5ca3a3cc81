//! Domain Models - Students, teachers and the subjects they teach
//!
//! All three are plain records. None of them validates its input:
//! empty names and class sections are accepted as given.

pub mod student;
pub mod subject;
pub mod teacher;

/// Case-insensitive, locale-independent name comparison.
///
/// Each char is folded to its single-char uppercase form; chars whose
/// uppercase expands to several chars (`'ß'`) are kept as they are.
/// `"10a"` matches `"10A"`, `"ς"` matches `"σ"`, `"ß"` does not match `"SS"`.
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
