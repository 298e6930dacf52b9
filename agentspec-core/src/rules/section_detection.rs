use crate::types::SectionMap;
use regex::Regex;
use std::sync::LazyLock;

// Exactly two markers; `### Foo` fails because `#` is not whitespace
static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^##\s+(.+)$").expect("section header regex is valid"));

/// Section name if `line` is a `## Title` heading
pub fn section_heading(line: &str) -> Option<&str> {
    let name = SECTION_HEADER.captures(line)?.get(1)?.as_str().trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Split a document into its `##` sections.
///
/// Lines before the first heading belong to no section. Deeper headings stay
/// in the body, which is what lets subsection checks search inside it. A
/// repeated heading replaces the earlier body.
pub fn extract_sections(content: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current_section: Option<String> = None;
    let mut current_content: Vec<&str> = Vec::new();

    for line in content.lines() {
        if let Some(name) = section_heading(line) {
            if let Some(previous) = current_section.take() {
                sections.insert(previous, current_content.join("\n"));
            }
            current_section = Some(name.to_string());
            current_content.clear();
        } else if current_section.is_some() {
            current_content.push(line);
        }
    }

    if let Some(last) = current_section {
        sections.insert(last, current_content.join("\n"));
    }

    sections
}
