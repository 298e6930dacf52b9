use super::engine::{bold_label_pattern, leading_window, DocumentContext, SpecRule};
use crate::config::RoleConfig;
use crate::error::ValidatorError;
use crate::types::{Finding, FindingKind};
use regex::Regex;

// RoleFieldRule - `**Role**:` must be declared near the top of the file.
// Only a leading window of characters is searched, so a Role label deep in
// the document does not count.
pub struct RoleFieldRule {
    field: String,
    window_chars: usize,
    pattern: Regex,
}

impl RoleFieldRule {
    pub fn new(config: &RoleConfig) -> Result<Self, ValidatorError> {
        Ok(Self {
            field: config.field.clone(),
            window_chars: config.window_chars,
            pattern: Regex::new(&bold_label_pattern(&config.field))?,
        })
    }
}

impl SpecRule for RoleFieldRule {
    fn check(&self, document: &DocumentContext<'_>, findings: &mut Vec<Finding>) {
        let head = leading_window(document.text, self.window_chars);
        if !self.pattern.is_match(head) {
            findings.push(Finding::new(
                document.document_id,
                FindingKind::MissingField,
                format!(
                    "Required field '**{}:**' not found near the top of the file",
                    self.field
                ),
            ));
        }
    }

    fn name(&self) -> &str {
        "RoleField"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionMap;

    fn run(text: &str) -> Vec<Finding> {
        let rule = RoleFieldRule::new(&RoleConfig::default()).unwrap();
        let sections = SectionMap::new();
        let document = DocumentContext {
            document_id: "myagent",
            text,
            sections: &sections,
        };
        let mut findings = Vec::new();
        rule.check(&document, &mut findings);
        findings
    }

    #[test]
    fn test_role_near_top() {
        assert!(run("# My Agent\n\n**Role**: Reviews pull requests\n").is_empty());
    }

    #[test]
    fn test_role_missing() {
        let findings = run("# My Agent\n\nNo role here\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].kind, FindingKind::MissingField);
        assert_eq!(
            findings[0].detail,
            "Required field '**Role:**' not found near the top of the file"
        );
    }

    #[test]
    fn test_role_past_window_does_not_count() {
        let text = format!("{}\n**Role**: late\n", "x".repeat(600));
        assert_eq!(run(&text).len(), 1);
    }

    #[test]
    fn test_label_straddling_window_edge_does_not_count() {
        // Window ends in the middle of the label
        let text = format!("{}**Role**: edge", "x".repeat(495));
        assert_eq!(run(&text).len(), 1);

        let text = format!("{}**Role**:", "x".repeat(491));
        assert!(run(&text).is_empty());
    }

    #[test]
    fn test_window_is_measured_in_characters() {
        // 490 two-byte characters still leave room for the label
        let text = format!("{}**Role**:", "é".repeat(490));
        assert!(run(&text).is_empty());
    }
}
