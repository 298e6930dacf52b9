use crate::config::StructureConfig;
use crate::error::ValidatorError;
use crate::types::*;
use regex::Regex;

use super::ownership::OwnershipFieldsRule;
use super::required_sections::RequiredSectionsRule;
use super::role_field::RoleFieldRule;
use super::section_detection::extract_sections;
use super::subsections::RequiredSubsectionsRule;
use super::telemetry::TelemetryNamingRule;

// Debug configuration for tracing extracted sections
#[derive(Debug, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    filters: Vec<DebugFilter>,
}

// Patterns are compiled once; ones that aren't valid regex match as substrings
#[derive(Debug, Clone)]
enum DebugFilter {
    Pattern(Regex),
    Substring(String),
}

impl DebugFilter {
    fn parse(pattern: String) -> Self {
        match Regex::new(&pattern) {
            Ok(regex) => DebugFilter::Pattern(regex),
            Err(_) => DebugFilter::Substring(pattern),
        }
    }

    fn is_match(&self, document_id: &str) -> bool {
        match self {
            DebugFilter::Pattern(regex) => regex.is_match(document_id),
            DebugFilter::Substring(text) => document_id.contains(text.as_str()),
        }
    }
}

impl DebugConfig {
    pub fn new(enabled: bool, filter_patterns: Vec<String>) -> Self {
        Self {
            enabled,
            filters: filter_patterns.into_iter().map(DebugFilter::parse).collect(),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            filters: Vec::new(),
        }
    }

    /// Whether the section map of `document_id` should be traced
    pub fn matches(&self, document_id: &str) -> bool {
        self.enabled && self.filters.iter().any(|filter| filter.is_match(document_id))
    }
}

/// Debug utility to print the sections extracted from one document
pub fn debug_section_map(document_id: &str, sections: &SectionMap, debug_config: &DebugConfig) {
    if !debug_config.matches(document_id) {
        return;
    }

    println!("🔍 [{}] {} sections extracted:", document_id, sections.len());
    for (index, (name, body)) in sections.iter().enumerate() {
        println!(
            "  Section {}: \"{}\" ({} body lines)",
            index,
            name,
            body.lines().count()
        );
    }
    println!();
}

/// Everything a rule may look at for one document
pub struct DocumentContext<'a> {
    pub document_id: &'a str,
    pub text: &'a str,
    pub sections: &'a SectionMap,
}

// Independent structural checks; each appends to the shared accumulator
pub trait SpecRule {
    fn check(&self, document: &DocumentContext<'_>, findings: &mut Vec<Finding>);
    fn name(&self) -> &str;
}

pub struct RuleEngine {
    rules: Vec<Box<dyn SpecRule>>,
    debug_config: DebugConfig,
}

impl RuleEngine {
    /// Build the five checks for a structure table. Patterns derived from
    /// configured names are compiled here, once per run.
    pub fn new(structure: &StructureConfig) -> Result<Self, ValidatorError> {
        let rules: Vec<Box<dyn SpecRule>> = vec![
            Box::new(RequiredSectionsRule::new(&structure.required_sections)),
            Box::new(RequiredSubsectionsRule::new(&structure.required_subsections)),
            Box::new(OwnershipFieldsRule::new(&structure.ownership)?),
            Box::new(RoleFieldRule::new(&structure.role)?),
            Box::new(TelemetryNamingRule::new(&structure.telemetry)?),
        ];

        Ok(Self {
            rules,
            debug_config: DebugConfig::disabled(),
        })
    }

    /// Engine over the compiled-in table
    pub fn builtin() -> Result<Self, ValidatorError> {
        Self::new(StructureConfig::builtin())
    }

    pub fn set_debug_config(&mut self, debug_config: DebugConfig) {
        self.debug_config = debug_config;
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every check against one document's text
    pub fn validate(&self, document_id: &str, text: &str) -> Vec<Finding> {
        let sections = extract_sections(text);
        debug_section_map(document_id, &sections, &self.debug_config);

        let document = DocumentContext {
            document_id,
            text,
            sections: &sections,
        };

        let mut findings = Vec::new();
        for rule in &self.rules {
            rule.check(&document, &mut findings);
        }
        findings
    }

    /// Validate a loaded document; unreadable ones yield a single READ_ERROR
    pub fn validate_source(&self, document: &SourceDocument) -> Vec<Finding> {
        match &document.contents {
            Ok(text) => self.validate(&document.id, text),
            Err(reason) => vec![Finding::read_error(&document.id, reason)],
        }
    }
}

// Pattern helpers shared by the rules

/// `**Field**:` as a regex
pub(crate) fn bold_label_pattern(field: &str) -> String {
    format!(r"\*\*{}\*\*:", regex::escape(field))
}

/// Leading `max_chars` characters of `text` (not bytes)
pub(crate) fn leading_window(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_run_in_fixed_order() {
        let engine = RuleEngine::builtin().unwrap();
        assert_eq!(
            engine.rule_names(),
            vec![
                "RequiredSections",
                "RequiredSubsections",
                "OwnershipFields",
                "RoleField",
                "TelemetryNaming"
            ]
        );
    }

    #[test]
    fn test_unreadable_document_only_reports_read_error() {
        let engine = RuleEngine::builtin().unwrap();
        let document = SourceDocument::unreadable("broken.md", "invalid UTF-8");

        let findings = engine.validate_source(&document);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::ReadError);
        assert_eq!(findings[0].document_id, "broken");
        assert_eq!(findings[0].detail, "Failed to read file: invalid UTF-8");
    }

    #[test]
    fn test_empty_document_reports_everything_missing() {
        let engine = RuleEngine::builtin().unwrap();
        let findings = engine.validate("empty", "");

        let sections = findings
            .iter()
            .filter(|f| f.kind == FindingKind::MissingSection)
            .count();
        assert_eq!(sections, 12);
        // Only the role check fires besides the sections; the rest are suppressed
        assert_eq!(findings.len(), 13);
        assert_eq!(findings[12].kind, FindingKind::MissingField);
    }

    #[test]
    fn test_leading_window_counts_characters() {
        assert_eq!(leading_window("héllo", 2), "hé");
        assert_eq!(leading_window("abc", 10), "abc");
        assert_eq!(leading_window("", 3), "");
    }

    #[test]
    fn test_debug_config_filters() {
        let debug = DebugConfig::new(true, vec!["^front".to_string()]);
        assert!(debug.matches("frontend-assistant"));
        assert!(!debug.matches("backend"));
        assert!(!DebugConfig::disabled().matches("frontend-assistant"));
        // Invalid regex falls back to substring match
        let debug = DebugConfig::new(true, vec!["(end".to_string()]);
        assert!(debug.matches("back(end"));
        assert!(!debug.matches("backend"));
    }

    #[test]
    fn test_debug_filters_compile_once() {
        let debug = DebugConfig::new(true, vec!["^front".to_string(), "(end".to_string()]);
        assert!(matches!(debug.filters[0], DebugFilter::Pattern(_)));
        assert!(matches!(debug.filters[1], DebugFilter::Substring(ref s) if s == "(end"));
        assert!(!DebugConfig::new(true, Vec::new()).matches("frontend"));
    }
}
