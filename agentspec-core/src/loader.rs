// Document loading for validation runs
//
// This module is the boundary between the file system and the rule engine.
// A DocumentSource yields every candidate document with its decoded text (or
// the reason it couldn't be read). Everything after this point works with
// SourceDocuments and never touches the disk.

use crate::config::LoaderConfig;
use crate::error::ValidatorError;
use crate::types::SourceDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of candidate documents, sorted by identity
pub trait DocumentSource {
    fn load_documents(&self) -> Result<Vec<SourceDocument>, ValidatorError>;

    /// Human-readable description for progress output
    fn describe(&self) -> String;
}

/// Loads `*.md` agent specs from one directory (not recursive)
pub struct DirectoryLoader {
    dir: PathBuf,
    config: LoaderConfig,
}

impl DirectoryLoader {
    pub fn new(dir: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    fn is_candidate(&self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.config.extension);
        let excluded = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.config.excluded_files.iter().any(|e| e == name));
        has_extension && !excluded
    }
}

impl DocumentSource for DirectoryLoader {
    fn load_documents(&self) -> Result<Vec<SourceDocument>, ValidatorError> {
        if !self.dir.exists() {
            return Err(ValidatorError::DirectoryMissing(self.dir.clone()));
        }

        let entries = fs::read_dir(&self.dir).map_err(|source| {
            ValidatorError::DirectoryUnreadable {
                path: self.dir.clone(),
                source,
            }
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ValidatorError::DirectoryUnreadable {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();
            if self.is_candidate(&path) {
                paths.push(path);
            }
        }

        let mut documents: Vec<_> = paths.iter().map(|path| read_document(path)).collect();
        sort_by_identity(&mut documents);
        Ok(documents)
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Read one file; I/O and UTF-8 failures are kept as data
fn read_document(path: &Path) -> SourceDocument {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let contents = fs::read(path)
        .map_err(|e| e.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()));

    let mut document = match contents {
        Ok(text) => SourceDocument::from_text(&file_name, text),
        Err(reason) => SourceDocument::unreadable(&file_name, reason),
    };
    document.path = path.to_path_buf();
    document
}

/// Identity order; `front-end.md` comes after `front.md`
fn sort_by_identity(documents: &mut [SourceDocument]) {
    documents.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.file_name.cmp(&b.file_name)));
}

/// Documents held in memory, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: Vec<SourceDocument>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, file_name: &str, text: impl Into<String>) -> Self {
        self.documents.push(SourceDocument::from_text(file_name, text));
        self
    }

    pub fn with_unreadable(mut self, file_name: &str, reason: impl Into<String>) -> Self {
        self.documents
            .push(SourceDocument::unreadable(file_name, reason));
        self
    }
}

impl DocumentSource for InMemorySource {
    fn load_documents(&self) -> Result<Vec<SourceDocument>, ValidatorError> {
        let mut documents = self.documents.clone();
        sort_by_identity(&mut documents);
        Ok(documents)
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "agentspec_loader_{}_{}",
            name,
            std::process::id()
        ));
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let loader = DirectoryLoader::new("/nonexistent/agentspec/docs", LoaderConfig::default());
        let err = loader.load_documents().unwrap_err();
        assert!(matches!(err, ValidatorError::DirectoryMissing(_)));
    }

    #[test]
    fn test_filters_and_sorts_candidates() {
        let dir = scratch_dir("filters");
        fs::write(dir.join("zeta.md"), "z").unwrap();
        fs::write(dir.join("alpha.md"), "a").unwrap();
        fs::write(dir.join("TEMPLATE.md"), "t").unwrap();
        fs::write(dir.join("README.md"), "r").unwrap();
        fs::write(dir.join("notes.txt"), "n").unwrap();
        fs::create_dir_all(dir.join("nested.md")).unwrap();

        let loader = DirectoryLoader::new(&dir, LoaderConfig::default());
        let documents = loader.load_documents().unwrap();
        let ids: Vec<_> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
        assert_eq!(documents[0].contents.as_deref(), Ok("a"));
        assert_eq!(documents[0].path, dir.join("alpha.md"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_stem_prefix_sorts_first() {
        let dir = scratch_dir("identity");
        fs::write(dir.join("front-end.md"), "").unwrap();
        fs::write(dir.join("front.md"), "").unwrap();

        let loader = DirectoryLoader::new(&dir, LoaderConfig::default());
        let documents = loader.load_documents().unwrap();
        let ids: Vec<_> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["front", "front-end"]);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_utf8_is_captured() {
        let dir = scratch_dir("utf8");
        fs::write(dir.join("binary.md"), [0xff, 0xfe, 0x00]).unwrap();

        let loader = DirectoryLoader::new(&dir, LoaderConfig::default());
        let documents = loader.load_documents().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, "binary");
        assert!(documents[0].contents.is_err());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_in_memory_source_sorts_by_identity() {
        let source = InMemorySource::new()
            .with_document("b.md", "")
            .with_unreadable("a.md", "boom")
            .with_document("a-b.md", "");
        let documents = source.load_documents().unwrap();
        let ids: Vec<_> = documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a-b", "b"]);
    }
}
