//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from school-domain.

pub mod in_memory;
