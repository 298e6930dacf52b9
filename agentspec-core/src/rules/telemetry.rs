use super::engine::{DocumentContext, SpecRule};
use crate::config::TelemetryConfig;
use crate::error::ValidatorError;
use crate::types::{Finding, FindingKind};
use regex::Regex;

// TelemetryNamingRule - events listed under the telemetry subsection must be
// namespaced with the document's own identity, e.g. `agent.myagent.started`.
// Silent when the subsection is absent or mentions no events at all.
pub struct TelemetryNamingRule {
    event_prefix: String,
    subsection_pattern: Regex,
    event_pattern: Regex,
}

impl TelemetryNamingRule {
    pub fn new(config: &TelemetryConfig) -> Result<Self, ValidatorError> {
        // Body ends at the next heading of any level
        let subsection_pattern = Regex::new(&format!(
            r"(?s)### {}\s+(.+?)(?:\n##|\z)",
            regex::escape(&config.subsection)
        ))?;
        let event_pattern = Regex::new(&format!(
            r"`{}\.([a-z-]+)\.",
            regex::escape(&config.event_prefix)
        ))?;

        Ok(Self {
            event_prefix: config.event_prefix.clone(),
            subsection_pattern,
            event_pattern,
        })
    }

    pub fn events_body<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.subsection_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Middle segment of every event mentioned in `body`, duplicates included
    pub fn event_owners<'t>(&self, body: &'t str) -> Vec<&'t str> {
        self.event_pattern
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

impl SpecRule for TelemetryNamingRule {
    fn check(&self, document: &DocumentContext<'_>, findings: &mut Vec<Finding>) {
        // Subsection presence is reported by RequiredSubsectionsRule
        let Some(events_content) = self.events_body(document.text) else {
            return;
        };

        let owners = self.event_owners(events_content);
        if owners.is_empty() {
            return;
        }

        if !owners.iter().any(|owner| *owner == document.document_id) {
            findings.push(Finding::new(
                document.document_id,
                FindingKind::TelemetryNaming,
                format!(
                    "Telemetry events should follow pattern `{}.{}.*`",
                    self.event_prefix, document.document_id
                ),
            ));
        }
    }

    fn name(&self) -> &str {
        "TelemetryNaming"
    }
}
