//! # School Records Adapter Layer
//!
//! Storage implementations of the domain's repository traits.
//!
//! ## Structure
//!
//! - `repository/` - Persistence implementations

pub mod repository;

pub use repository::in_memory::InMemorySchoolRepository;
