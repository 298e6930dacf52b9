use crate::types::Finding;
use serde::Serialize;

const RULE: &str = "======================================================================";

/// Outcome of one validation run over a set of documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub documents_checked: usize,
    /// Findings of every document, in processing order
    pub findings: Vec<Finding>,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    documents_checked: usize,
    passed: bool,
    findings: &'a [Finding],
}

impl ValidationReport {
    pub fn new(documents_checked: usize, findings: Vec<Finding>) -> Self {
        Self {
            documents_checked,
            findings,
        }
    }

    /// A run passes only when nothing at all was found
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.findings.len()
    }

    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }

    /// Failure list with a count, or the pass banner
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(RULE);
        out.push('\n');
        if self.passed() {
            out.push_str("✅ All agent specifications passed validation!\n");
            out.push_str(RULE);
            out.push('\n');
            return out;
        }

        out.push_str("VALIDATION FAILURES\n");
        out.push_str(RULE);
        out.push('\n');
        for finding in &self.findings {
            out.push_str(&format!("❌ {finding}\n"));
        }
        out.push('\n');
        out.push_str(&format!(
            "❌ Validation failed with {} error(s)\n",
            self.error_count()
        ));
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ReportJson {
            documents_checked: self.documents_checked,
            passed: self.passed(),
            findings: &self.findings,
        })
    }

    /// Print the summary block to stdout
    pub fn print_summary(&self) {
        println!();
        print!("{}", self.render_text());
    }
}
