//! Assembly domain layer: records, the forest built from them, and the
//! pure services that build, search and filter it
pub mod domain;
pub mod policies;
pub mod services;
