//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! The domain says what it needs from storage; adapters decide how.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait SchoolRepo      │  InMemorySchoolRepository
//!   fn add_teacher()    │
//!   fn subjects()       │
//! ```

pub mod school_repository;
