//! # School Records Domain Layer
//!
//! Pure record-keeping logic with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Student, Teacher, Subject                     ││
//! │  │  repository/- SchoolRepository trait (not implementations)  ││
//! │  │  service/   - Roster queries                                ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here knows where records live or how reports are printed.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    names_match,
    student::Student,
    subject::Subject,
    teacher::{Teacher, TeacherId},
};

pub use repository::school_repository::{RepositoryError, SchoolRepository};

pub use service::roster::{Roster, TeacherSubjects};
