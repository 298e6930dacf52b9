// Locating the agent specs relative to the tool itself

use std::path::{Path, PathBuf};

/// Repository root: one level up from this crate's directory
pub fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Explicit directory if given, else `<repo root>/<docs_subpath>`
pub fn resolve_agents_dir(explicit: Option<&str>, docs_subpath: &str) -> PathBuf {
    match explicit {
        Some(dir) => PathBuf::from(dir),
        None => repo_root().join(docs_subpath),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_root_is_parent_of_crate() {
        let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(Some(repo_root().as_path()), crate_dir.parent());
    }

    #[test]
    fn test_default_dir_under_repo_root() {
        let dir = resolve_agents_dir(None, "docs/agents");
        assert!(dir.ends_with("docs/agents"));
        assert!(dir.starts_with(repo_root()));
    }

    #[test]
    fn test_explicit_dir_wins() {
        assert_eq!(
            resolve_agents_dir(Some("/tmp/specs"), "docs/agents"),
            PathBuf::from("/tmp/specs")
        );
    }
}
