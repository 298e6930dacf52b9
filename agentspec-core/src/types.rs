use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Stable short name of a document: the file name without its extension.
pub type DocumentId = String;

// ===== FINDINGS =====

/// The fixed set of things a validation pass can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingKind {
    /// The document could not be read or decoded as UTF-8
    ReadError,
    MissingSection,
    MissingSubsection,
    MissingField,
    /// Telemetry events in the document don't use its own identity
    TelemetryNaming,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::ReadError => "READ_ERROR",
            FindingKind::MissingSection => "MISSING_SECTION",
            FindingKind::MissingSubsection => "MISSING_SUBSECTION",
            FindingKind::MissingField => "MISSING_FIELD",
            FindingKind::TelemetryNaming => "TELEMETRY_NAMING",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structural deviation found in one document. Pure data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub document_id: DocumentId,
    pub kind: FindingKind,
    pub detail: String,
}

impl Finding {
    pub fn new(document_id: &str, kind: FindingKind, detail: impl Into<String>) -> Self {
        Self {
            document_id: document_id.to_string(),
            kind,
            detail: detail.into(),
        }
    }

    pub fn read_error(document_id: &str, reason: &str) -> Self {
        Self::new(
            document_id,
            FindingKind::ReadError,
            format!("Failed to read file: {reason}"),
        )
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.document_id, self.kind, self.detail)
    }
}

// ===== SECTION MAP =====

/// Ordered mapping from `##` heading name to the raw body under it.
///
/// Inserting a name that already exists replaces its body but keeps the
/// original position, so a repeated heading resolves last-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, String)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, body: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = body,
            None => self.entries.push((name, body)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, body)| body.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, body)| (name.as_str(), body.as_str()))
    }
}

// ===== SOURCE DOCUMENTS =====

/// A candidate document handed over by a loader.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub id: DocumentId,
    pub file_name: String,
    pub path: PathBuf,
    /// Decoded text, or the reason it could not be read
    pub contents: Result<String, String>,
}

impl SourceDocument {
    /// Build a readable document; identity is derived from the file name.
    pub fn from_text(file_name: &str, text: impl Into<String>) -> Self {
        Self {
            id: document_id_for(file_name),
            file_name: file_name.to_string(),
            path: PathBuf::from(file_name),
            contents: Ok(text.into()),
        }
    }

    pub fn unreadable(file_name: &str, reason: impl Into<String>) -> Self {
        Self {
            id: document_id_for(file_name),
            file_name: file_name.to_string(),
            path: PathBuf::from(file_name),
            contents: Err(reason.into()),
        }
    }
}

/// `frontend-assistant.md` -> `frontend-assistant`
pub fn document_id_for(file_name: &str) -> DocumentId {
    std::path::Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_string()
}
