use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use agentspec_lint::{
    repo_root, resolve_agents_dir, DebugConfig, DirectoryLoader, LoaderConfig, SpecValidator,
    StructureConfig, ValidatorError,
};

#[derive(Parser)]
#[command(name = "agentspec-lint")]
#[command(about = "Validate agent specification documents against the required template")]
struct Args {
    /// Directory containing the agent specs (default: <repo root>/docs/agents)
    #[arg(short, long)]
    agents_dir: Option<String>,

    /// Output format: text or json
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the sections extracted from documents whose name matches PATTERN
    /// (regex, or plain substring if it doesn't compile). Repeatable.
    #[arg(long = "debug", value_name = "PATTERN")]
    debug_patterns: Vec<String>,

    /// Show the required structure and exit
    #[arg(long)]
    show_structure: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let structure = StructureConfig::builtin();
    let loader_config = LoaderConfig::default();

    if args.show_structure {
        show_structure(structure);
        return Ok(());
    }

    let agents_dir = resolve_agents_dir(args.agents_dir.as_deref(), &loader_config.docs_subpath);
    let text_output = args.format == OutputFormat::Text;

    if text_output {
        println!("Agent Specification Validator");
        println!("{}", "=".repeat(70));
        println!("Repository root: {}", repo_root().display());
        println!("Agents directory: {}", agents_dir.display());
        println!();
    }

    let mut validator =
        SpecValidator::new(structure).context("Failed to build validation rules")?;
    validator.set_show_progress(text_output);
    if !args.debug_patterns.is_empty() {
        validator.set_debug_config(DebugConfig::new(true, args.debug_patterns.clone()));
    }

    let loader = DirectoryLoader::new(&agents_dir, loader_config);
    match validator.validate_all(&loader) {
        Ok(report) => {
            match args.format {
                OutputFormat::Text => report.print_summary(),
                OutputFormat::Json => println!(
                    "{}",
                    report.to_json().context("Failed to serialize report")?
                ),
            }
            std::process::exit(report.exit_code());
        }
        Err(ValidatorError::DirectoryMissing(path)) => {
            eprintln!("❌ Error: Directory {} does not exist", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("❌ Validation aborted: {e}");
            std::process::exit(1);
        }
    }
}

fn show_structure(structure: &StructureConfig) {
    println!("\n📋 Required Sections:");
    for section in &structure.required_sections {
        println!("  ## {section}");
        if let Some(requirement) = structure
            .required_subsections
            .iter()
            .find(|r| &r.section == section)
        {
            for subsection in &requirement.subsections {
                println!("      ### {subsection}");
            }
        }
    }

    println!("\n📄 Required Fields:");
    println!(
        "  **{}**:  within the first {} characters",
        structure.role.field, structure.role.window_chars
    );
    for field in &structure.ownership.fields {
        println!("  **{field}**:  in '## {}'", structure.ownership.section);
    }

    println!("\n📡 Telemetry:");
    println!(
        "  Events under '### {}' must include `{}.<file name>.*`",
        structure.telemetry.subsection, structure.telemetry.event_prefix
    );
}
