//! quizreport-core — Quiz log model, configuration, and loading.
//!
//! This crate defines the completed-session data model and the configuration
//! that the report renderer consumes.

pub mod config;
pub mod model;
pub mod parser;
