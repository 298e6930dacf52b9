// Compiled-in tables. There is no runtime override: every run checks
// documents against the same structure.

use std::sync::LazyLock;

/// Top-level sections every agent spec must contain, in template order
pub const REQUIRED_SECTIONS: &[&str] = &[
    "Agent Name",
    "Overview",
    "Responsibilities",
    "Capabilities",
    "Triggers & Activation",
    "Operational Guidelines",
    "Telemetry & Monitoring",
    "Safety & Security",
    "Integration Points",
    "Runbooks & Documentation",
    "Ownership & Maintenance",
    "Change Log",
];

/// `###` subsections required inside specific sections
pub const REQUIRED_SUBSECTIONS: &[(&str, &[&str])] = &[
    (
        "Responsibilities",
        &["Primary Responsibilities", "Secondary Responsibilities"],
    ),
    ("Capabilities", &["Core Capabilities", "Technical Skills"]),
    (
        "Operational Guidelines",
        &["Decision Framework", "Quality Standards", "Constraints"],
    ),
    (
        "Telemetry & Monitoring",
        &["Events to Track", "Metrics to Monitor", "Monitoring Dashboard"],
    ),
    (
        "Safety & Security",
        &[
            "Safety Considerations",
            "Security Requirements",
            "Failure Handling",
        ],
    ),
    (
        "Integration Points",
        &["Dependencies", "Interactions with Other Agents"],
    ),
    (
        "Runbooks & Documentation",
        &["Runbook Links", "Related Documentation"],
    ),
    ("Ownership & Maintenance", &[]),
];

pub const OWNERSHIP_SECTION: &str = "Ownership & Maintenance";

/// Bold-labelled fields required inside the ownership section
pub const REQUIRED_OWNERSHIP_FIELDS: &[&str] =
    &["Owner", "Backup Owner", "Last Updated", "Review Frequency"];

pub const ROLE_FIELD: &str = "Role";
pub const ROLE_WINDOW_CHARS: usize = 500;

pub const TELEMETRY_SUBSECTION: &str = "Events to Track";
pub const TELEMETRY_EVENT_PREFIX: &str = "agent";

/// Files next to the specs that aren't specs themselves
pub const EXCLUDED_FILES: &[&str] = &["TEMPLATE.md", "README.md"];
pub const DOCS_SUBPATH: &str = "docs/agents";

static BUILTIN_STRUCTURE: LazyLock<StructureConfig> = LazyLock::new(StructureConfig::default);

/// Required-structure table documents are checked against
#[derive(Debug, Clone)]
pub struct StructureConfig {
    /// Ordered list of required `##` section names
    pub required_sections: Vec<String>,
    /// Sections that must contain specific `###` subsections
    pub required_subsections: Vec<SubsectionRequirement>,
    pub ownership: OwnershipConfig,
    pub role: RoleConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsectionRequirement {
    pub section: String,
    pub subsections: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct OwnershipConfig {
    /// Section searched for ownership fields
    pub section: String,
    /// Field labels that must appear as `**Field**:`
    pub fields: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RoleConfig {
    pub field: String,
    /// Leading window (in characters) the field must appear in
    pub window_chars: usize,
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Subsection whose body lists the tracked events
    pub subsection: String,
    /// First segment of every event name, e.g. `agent` in `agent.name.started`
    pub event_prefix: String,
}

/// Which files in the target directory are candidate documents
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Extension (without dot) of candidate documents
    pub extension: String,
    /// File names that live next to the specs but aren't specs themselves
    pub excluded_files: Vec<String>,
    /// Documents directory relative to the repository root
    pub docs_subpath: String,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            required_sections: REQUIRED_SECTIONS.iter().map(|s| s.to_string()).collect(),
            required_subsections: REQUIRED_SUBSECTIONS
                .iter()
                .map(|(section, subsections)| SubsectionRequirement {
                    section: section.to_string(),
                    subsections: subsections.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
            ownership: OwnershipConfig::default(),
            role: RoleConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl Default for OwnershipConfig {
    fn default() -> Self {
        Self {
            section: OWNERSHIP_SECTION.to_string(),
            fields: REQUIRED_OWNERSHIP_FIELDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for RoleConfig {
    fn default() -> Self {
        Self {
            field: ROLE_FIELD.to_string(),
            window_chars: ROLE_WINDOW_CHARS,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            subsection: TELEMETRY_SUBSECTION.to_string(),
            event_prefix: TELEMETRY_EVENT_PREFIX.to_string(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            excluded_files: EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
            docs_subpath: DOCS_SUBPATH.to_string(),
        }
    }
}

impl StructureConfig {
    /// The compiled-in table, built once per process
    pub fn builtin() -> &'static StructureConfig {
        &BUILTIN_STRUCTURE
    }
}
