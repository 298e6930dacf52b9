use super::engine::{DocumentContext, SpecRule};
use crate::types::{Finding, FindingKind};

// RequiredSectionsRule - every top-level section of the template must be present
pub struct RequiredSectionsRule {
    required_sections: Vec<String>,
}

impl RequiredSectionsRule {
    pub fn new(required_sections: &[String]) -> Self {
        Self {
            required_sections: required_sections.to_vec(),
        }
    }
}

impl SpecRule for RequiredSectionsRule {
    fn check(&self, document: &DocumentContext<'_>, findings: &mut Vec<Finding>) {
        for required_section in &self.required_sections {
            if !document.sections.contains(required_section) {
                findings.push(Finding::new(
                    document.document_id,
                    FindingKind::MissingSection,
                    format!("Required section '## {required_section}' not found"),
                ));
            }
        }
    }

    fn name(&self) -> &str {
        "RequiredSections"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::section_detection::extract_sections;

    fn run(text: &str) -> Vec<Finding> {
        let rule = RequiredSectionsRule::new(&["Overview".to_string(), "Change Log".to_string()]);
        let sections = extract_sections(text);
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
    fn test_reports_each_missing_section_in_table_order() {
        let findings = run("## Something Else\n");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].detail, "Required section '## Overview' not found");
        assert_eq!(findings[1].detail, "Required section '## Change Log' not found");
        assert!(findings.iter().all(|f| f.kind == FindingKind::MissingSection));
    }

    #[test]
    fn test_deeper_heading_does_not_count() {
        let findings = run("## Overview\n### Change Log\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].detail.contains("Change Log"));
    }

    #[test]
    fn test_all_present() {
        assert!(run("## Overview\n\n## Change Log\n").is_empty());
    }
}
