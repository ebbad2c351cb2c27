//! draftlaw - draft corporate resolutions from company documents.
//!
//! Usage:
//!   draftlaw parse aoa.txt moa.txt          Extract company facts and print a card
//!   draftlaw analyze --extraction e.json    Classify instructions against a record
//!   draftlaw draft aoa.txt --instructions minutes.txt --date 2025-07-18

mod display;
mod ingest;
mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use draftlaw_core::{
    AuthorityThreshold, ExtractionResult, MeetingDetails, Override, PipelineConfig, ResolutionType,
};
use draftlaw_draft::{write_json, write_txt};
use draftlaw_reason::Overrides;

use crate::session::{FieldEdit, Session};

#[derive(Parser)]
#[command(name = "draftlaw", version, about = "Draft corporate resolutions from company documents")]
struct Cli {
    /// Pipeline config file (JSON); every key is optional.
    #[arg(long, global = true, env = "DRAFTLAW_CONFIG")]
    config: Option<PathBuf>,

    /// Statute cited in the compliance section.
    #[arg(long, global = true, env = "DRAFTLAW_LEGAL_FRAMEWORK")]
    legal_framework: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Chunk and extract company documents
    Parse {
        #[command(flatten)]
        input: InputArgs,
        /// Write the extraction record as JSON
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print JSON instead of a card
        #[arg(long)]
        json: bool,
    },
    /// Analyze instructions against a saved (possibly hand-edited) extraction
    Analyze {
        /// Extraction JSON written by `parse --out`
        #[arg(long)]
        extraction: PathBuf,
        #[command(flatten)]
        instructions: InstructionArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
        #[command(flatten)]
        edits: EditArgs,
    },
    /// Run the full pipeline and render the resolution
    Draft {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        instructions: InstructionArgs,
        #[command(flatten)]
        overrides: OverrideArgs,
        #[command(flatten)]
        edits: EditArgs,
        #[command(flatten)]
        meeting: MeetingArgs,
        /// Write resolution.txt, extraction.json and reasoning.json here
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Text documents (.txt, .md, .eml)
    files: Vec<PathBuf>,
    /// Document text pasted inline
    #[arg(long)]
    text: Option<String>,
}

#[derive(Args)]
struct InstructionArgs {
    /// File holding the instructions or meeting minutes
    #[arg(long, conflicts_with = "instruction_text")]
    instructions: Option<PathBuf>,
    /// Instructions given inline
    #[arg(long)]
    instruction_text: Option<String>,
}

#[derive(Args)]
struct OverrideArgs {
    /// auto, "Board Resolution", "Shareholder Resolution", or "Special Shareholder Resolution"
    #[arg(long, default_value = "auto")]
    resolution_type: Override<ResolutionType>,
    /// auto, "Standard Majority", "Supermajority", or "Unanimous"
    #[arg(long, default_value = "auto")]
    authority: Override<AuthorityThreshold>,
}

#[derive(Args)]
struct EditArgs {
    /// Correct an extracted field before analysis, e.g. --set commercialLicense=CN-123
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    edits: Vec<FieldEdit>,
}

#[derive(Args)]
struct MeetingArgs {
    /// Meeting date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    chairperson: Option<String>,
}

impl InputArgs {
    fn read(&self) -> Result<Vec<draftlaw_core::SourceDocument>> {
        let documents = ingest::read_documents(&self.files, self.text.as_deref())?;
        anyhow::ensure!(
            !documents.is_empty(),
            "no input documents: pass files or --text"
        );
        Ok(documents)
    }
}

impl InstructionArgs {
    fn read(&self) -> Result<String> {
        match (&self.instructions, &self.instruction_text) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("reading instructions from {}", path.display())),
            (None, Some(text)) => Ok(text.clone()),
            (None, None) => Ok(String::new()),
        }
    }
}

impl EditArgs {
    fn apply(&self, session: &mut Session) -> Result<()> {
        if self.edits.is_empty() {
            return Ok(());
        }
        session.edit_extraction(|e| {
            for edit in &self.edits {
                edit.apply(e);
            }
        })?;
        info!(count = self.edits.len(), "applied field edits");
        Ok(())
    }
}

impl From<&OverrideArgs> for Overrides {
    fn from(args: &OverrideArgs) -> Self {
        Self {
            resolution_type: args.resolution_type,
            authority: args.authority,
        }
    }
}

impl From<&MeetingArgs> for MeetingDetails {
    fn from(args: &MeetingArgs) -> Self {
        Self {
            date: args.date.clone(),
            location: args.location.clone(),
            chairperson: args.chairperson.clone(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("draftlaw v{}", env!("CARGO_PKG_VERSION"));
    let config = load_config(cli.config.as_deref(), cli.legal_framework.as_deref())?;

    match &cli.command {
        Command::Parse { input, out, json } => cmd_parse(config, input, out.as_deref(), *json),
        Command::Analyze {
            extraction,
            instructions,
            overrides,
            edits,
        } => cmd_analyze(config, extraction, instructions, overrides, edits),
        Command::Draft {
            input,
            instructions,
            overrides,
            edits,
            meeting,
            out_dir,
        } => cmd_draft(
            config,
            input,
            instructions,
            overrides,
            edits,
            meeting,
            out_dir.as_deref(),
        ),
    }
}

fn load_config(path: Option<&Path>, legal_framework: Option<&str>) -> Result<PipelineConfig> {
    let mut config = match path {
        Some(path) => PipelineConfig::load(path).context("loading pipeline config")?,
        None => PipelineConfig::default(),
    };
    if let Some(framework) = legal_framework.map(str::trim).filter(|f| !f.is_empty()) {
        config.legal_framework = framework.to_string();
    }
    Ok(config)
}

// ── Commands ──

fn cmd_parse(config: PipelineConfig, input: &InputArgs, out: Option<&Path>, json: bool) -> Result<()> {
    let documents = input.read()?;
    let mut session = Session::new(config);
    let extraction = session.parse(&documents);

    if json {
        println!("{}", serde_json::to_string_pretty(extraction)?);
    } else {
        display::print_extraction_card(extraction);
    }
    if let Some(path) = out {
        write_json(extraction, path).context("writing extraction JSON")?;
        eprintln!("  Wrote {}", path.display());
    }
    Ok(())
}

fn cmd_analyze(
    config: PipelineConfig,
    extraction_path: &Path,
    instructions: &InstructionArgs,
    overrides: &OverrideArgs,
    edits: &EditArgs,
) -> Result<()> {
    let json = std::fs::read_to_string(extraction_path)
        .with_context(|| format!("reading {}", extraction_path.display()))?;
    let extraction: ExtractionResult = serde_json::from_str(&json)
        .with_context(|| format!("parsing extraction JSON {}", extraction_path.display()))?;
    let instructions = instructions.read()?;

    let mut session = Session::new(config);
    session.load_extraction(extraction);
    edits.apply(&mut session)?;
    let reasoning = session.analyze(&instructions, overrides.into())?;
    println!("{}", serde_json::to_string_pretty(reasoning)?);
    Ok(())
}

fn cmd_draft(
    config: PipelineConfig,
    input: &InputArgs,
    instructions: &InstructionArgs,
    overrides: &OverrideArgs,
    edits: &EditArgs,
    meeting: &MeetingArgs,
    out_dir: Option<&Path>,
) -> Result<()> {
    let documents = input.read()?;
    let instructions = instructions.read()?;

    let mut session = Session::new(config);
    session.parse(&documents);
    edits.apply(&mut session)?;
    let reasoning = session.analyze(&instructions, overrides.into())?;
    for line in display::warning_lines(&reasoning.warnings) {
        eprintln!("{line}");
    }
    let draft = session.draft(&meeting.into())?;

    match out_dir {
        Some(dir) => {
            let extraction = session.extraction().context("extraction missing after parse")?;
            let reasoning = session.reasoning().context("reasoning missing after analyze")?;
            write_txt(&draft, &dir.join("resolution.txt"))?;
            write_json(extraction, &dir.join("extraction.json"))?;
            write_json(reasoning, &dir.join("reasoning.json"))?;
            eprintln!("  Wrote resolution.txt, extraction.json, reasoning.json to {}", dir.display());
        }
        None => {
            if let Some(reasoning) = session.reasoning() {
                display::print_reasoning_card(reasoning);
                println!();
            }
            println!("{draft}");
        }
    }
    Ok(())
}
