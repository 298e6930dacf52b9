use super::engine::{bold_label_pattern, DocumentContext, SpecRule};
use crate::config::OwnershipConfig;
use crate::error::ValidatorError;
use crate::types::{Finding, FindingKind};
use regex::Regex;

// OwnershipFieldsRule - bold-labelled owner fields inside the ownership section.
// The section is located by searching the raw text rather than the section
// map, from its heading to the next `##` heading (not `###`) or end of text.
pub struct OwnershipFieldsRule {
    section: String,
    section_pattern: Regex,
    field_patterns: Vec<(String, Regex)>,
}

impl OwnershipFieldsRule {
    pub fn new(config: &OwnershipConfig) -> Result<Self, ValidatorError> {
        let section_pattern = Regex::new(&format!(
            r"(?s)## {}\s+(.+?)(?:\n##(?:[^#]|\z)|\z)",
            regex::escape(&config.section)
        ))?;

        let field_patterns = config
            .fields
            .iter()
            .map(|field| -> Result<(String, Regex), ValidatorError> {
                Ok((field.clone(), Regex::new(&bold_label_pattern(field))?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            section: config.section.clone(),
            section_pattern,
            field_patterns,
        })
    }

    /// Body of the ownership section, if the heading can be located at all
    pub fn section_body<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.section_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl SpecRule for OwnershipFieldsRule {
    fn check(&self, document: &DocumentContext<'_>, findings: &mut Vec<Finding>) {
        // Missing heading is already reported as a missing section
        let Some(ownership_content) = self.section_body(document.text) else {
            return;
        };

        for (field, pattern) in &self.field_patterns {
            if !pattern.is_match(ownership_content) {
                findings.push(Finding::new(
                    document.document_id,
                    FindingKind::MissingField,
                    format!("Required field '**{field}:**' not found in {}", self.section),
                ));
            }
        }
    }

    fn name(&self) -> &str {
        "OwnershipFields"
    }
}
