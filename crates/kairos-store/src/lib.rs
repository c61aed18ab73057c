//! Event model and the storage collaborator for Kairos.

pub mod error;
pub mod model;
pub mod store;
