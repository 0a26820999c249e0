//! Validation rules and the per-field validators built on them

pub mod constants;
pub mod field_validation;
pub mod predicates;
