// Rules module - structural checks for agent specification documents
// - engine.rs: RuleEngine, the SpecRule trait and shared pattern helpers
// - section_detection.rs: `##` section extraction into a SectionMap
// - required_sections.rs: top-level sections from the template
// - subsections.rs: `###` subsections inside specific sections
// - ownership.rs: bold-labelled fields in the ownership section
// - role_field.rs: `**Role**:` near the top of the file
// - telemetry.rs: telemetry event naming convention

pub mod engine;
pub mod ownership;
pub mod required_sections;
pub mod role_field;
pub mod section_detection;
pub mod subsections;
pub mod telemetry;

pub use engine::*;
pub use section_detection::extract_sections;
