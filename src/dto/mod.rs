//! DTO modules that bridge services with templates.

pub mod categories;
pub mod main;
pub mod upload;
