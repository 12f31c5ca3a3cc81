//! # School Records Use Case Layer
//!
//! Application-specific flows on top of the domain:
//! seeding a repository and rendering the two text reports.

pub mod error;
pub mod report;
pub mod seed;

pub use school_domain;

pub use error::{Result, UsecaseError};
pub use report::ReportWriter;
pub use seed::{populate_sample_data, SeedData, SeedStudent, SeedSubject, SeedSummary, SeedTeacher};
