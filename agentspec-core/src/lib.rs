// Agent Spec Core Library
//
// Structural validation of agent specification documents.
// Main interface for checking a directory of specs against the template.

pub mod config;
pub mod error;
pub mod loader;
pub mod processor;
pub mod report;
pub mod rules;
pub mod types;

// Re-export main types and functions for easy use
pub use config::{LoaderConfig, StructureConfig};
pub use error::ValidatorError;
pub use loader::{DirectoryLoader, DocumentSource, InMemorySource};
pub use processor::SpecValidator;
pub use report::ValidationReport;
pub use rules::{extract_sections, DebugConfig, RuleEngine};
pub use types::*;
