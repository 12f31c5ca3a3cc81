//! Domain Services - Queries that span more than one collection

pub mod roster;
