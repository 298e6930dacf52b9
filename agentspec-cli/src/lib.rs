// All validation logic is in agentspec-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod paths;

// Re-export core types for convenience
pub use agentspec_core::*;

// Re-export CLI utilities
pub use paths::{repo_root, resolve_agents_dir};
