use crate::config::StructureConfig;
use crate::error::ValidatorError;
use crate::loader::DocumentSource;
use crate::report::ValidationReport;
use crate::rules::{DebugConfig, RuleEngine};

/// Runs the rule engine over every document of a source, one at a time,
/// in identity order.
pub struct SpecValidator {
    rule_engine: RuleEngine,
    show_progress: bool,
}

impl SpecValidator {
    pub fn new(structure: &StructureConfig) -> Result<Self, ValidatorError> {
        Ok(Self {
            rule_engine: RuleEngine::new(structure)?,
            show_progress: true,
        })
    }

    pub fn builtin() -> Result<Self, ValidatorError> {
        Self::new(StructureConfig::builtin())
    }

    pub fn set_debug_config(&mut self, debug_config: DebugConfig) {
        self.rule_engine.set_debug_config(debug_config);
    }

    /// Progress lines go to stdout; turn off for machine-readable output
    pub fn set_show_progress(&mut self, show_progress: bool) {
        self.show_progress = show_progress;
    }

    /// Validate every document the source yields.
    ///
    /// Fails only when the source itself can't be listed (e.g. the directory
    /// is missing). An empty source is a passing run.
    pub fn validate_all(
        &self,
        source: &dyn DocumentSource,
    ) -> Result<ValidationReport, ValidatorError> {
        let documents = source.load_documents()?;

        if documents.is_empty() {
            let warning = format!(
                "⚠️  Warning: No agent specification files found in {}",
                source.describe()
            );
            if self.show_progress {
                println!("{warning}");
            } else {
                eprintln!("{warning}");
            }
            return Ok(ValidationReport::default());
        }

        if self.show_progress {
            println!(
                "🔍 Validating {} agent specification(s)...\n",
                documents.len()
            );
        }

        let mut findings = Vec::new();
        for document in &documents {
            if self.show_progress {
                println!("📄 Validating {}...", document.file_name);
            }
            findings.extend(self.rule_engine.validate_source(document));
        }

        Ok(ValidationReport::new(documents.len(), findings))
    }
}
