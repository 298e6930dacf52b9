use super::engine::{DocumentContext, SpecRule};
use crate::config::SubsectionRequirement;
use crate::types::{Finding, FindingKind};

// RequiredSubsectionsRule - `### Name` must appear inside the parent section's body.
// A literal substring search: no awareness of code fences or nesting.
pub struct RequiredSubsectionsRule {
    requirements: Vec<SubsectionRequirement>,
}

impl RequiredSubsectionsRule {
    pub fn new(requirements: &[SubsectionRequirement]) -> Self {
        Self {
            requirements: requirements.to_vec(),
        }
    }
}

impl SpecRule for RequiredSubsectionsRule {
    fn check(&self, document: &DocumentContext<'_>, findings: &mut Vec<Finding>) {
        for requirement in &self.requirements {
            // Missing parent is already reported by RequiredSectionsRule
            let Some(section_content) = document.sections.get(&requirement.section) else {
                continue;
            };

            for subsection in &requirement.subsections {
                if !section_content.contains(&format!("### {subsection}")) {
                    findings.push(Finding::new(
                        document.document_id,
                        FindingKind::MissingSubsection,
                        format!(
                            "Required subsection '### {}' not found in '## {}'",
                            subsection, requirement.section
                        ),
                    ));
                }
            }
        }
    }

    fn name(&self) -> &str {
        "RequiredSubsections"
    }
}
