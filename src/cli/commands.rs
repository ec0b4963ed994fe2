use crate::core::consolidator::{build_consolidated_output, render_output};
use crate::core::selection::{CommandOutcome, SelectionCommand, SelectionState};
use crate::domain::models::ConsolidateConfig;
use crate::infra::file_system::{default_output_filename, list_candidate_files, read_file_text};
use crate::infra::logger::setup_logger;
use crate::infra::output::write_output;
use crate::infra::profiles::IgnoreCatalog;
use anyhow::bail;
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "codebase-consolidator")]
#[command(about = "Consolidate selected text files into one labeled blob", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory and list the candidate text files
    Scan {
        #[arg(long)]
        path: String,

        #[arg(long, default_value = "None")]
        profile: String,
    },
    /// Consolidate selected files into a single annotated text blob
    Consolidate {
        #[arg(long)]
        path: String,

        #[arg(long, default_value = "None")]
        profile: String,

        /// Keep only files with this extension selected (e.g. ".py")
        #[arg(long)]
        ext: Option<String>,

        /// Relative path to select exclusively; repeatable
        #[arg(long)]
        only: Vec<String>,

        /// Relative path to drop from the selection; repeatable
        #[arg(long)]
        skip: Vec<String>,

        /// Output file; pass the flag without a value for <root>_consolidated.txt
        #[arg(long, num_args = 0..=1, default_missing_value = "")]
        output: Option<String>,

        #[arg(long)]
        clipboard: bool,
    },
    /// List the built-in ignore profiles and their patterns
    Profiles,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    let catalog = IgnoreCatalog::builtin();

    match cli.command {
        Commands::Scan { path, profile } => scan_directory(&catalog, &path, &profile),
        Commands::Consolidate {
            path,
            profile,
            ext,
            only,
            skip,
            output,
            clipboard,
        } => {
            info!("Starting consolidate command");
            debug!(
                "Command parameters: path={}, profile={}, ext={:?}, only={:?}, skip={:?}, output={:?}, clipboard={}",
                path, profile, ext, only, skip, output, clipboard
            );

            let config = ConsolidateConfig {
                root_path: path,
                profile,
                extension_filter: ext,
                only,
                skip,
                output_path: output,
                clipboard,
            };

            consolidate(&catalog, &config)
        }
        Commands::Profiles => {
            list_profiles(&catalog);
            Ok(())
        }
    }
}

fn check_root(path: &str) -> anyhow::Result<&Path> {
    let root = Path::new(path);
    if !root.is_dir() {
        bail!("root directory {} does not exist or is not a directory", path);
    }
    Ok(root)
}

fn scan_directory(catalog: &IgnoreCatalog, path: &str, profile: &str) -> anyhow::Result<()> {
    let root = check_root(path)?;
    let patterns = catalog.resolve(profile);

    info!("Scanning {} with profile {}", path, profile);
    let entries = list_candidate_files(root, &patterns)?;
    let state = SelectionState::new(entries);

    for entry in state.entries() {
        println!("{}", entry.rel_path.display());
    }

    let extensions = state.extensions();
    if !extensions.is_empty() {
        info!("Extensions present: {}", extensions.join(", "));
    }
    info!("{} candidate files", state.entries().len());
    Ok(())
}

fn consolidate(catalog: &IgnoreCatalog, config: &ConsolidateConfig) -> anyhow::Result<()> {
    let root = check_root(&config.root_path)?;
    let patterns = catalog.resolve(&config.profile);

    info!("Scanning for files in {}", config.root_path);
    let entries = list_candidate_files(root, &patterns)?;

    if entries.is_empty() {
        info!("No candidate files found");
        return Ok(());
    }

    let mut selection = SelectionState::new(entries);
    report(selection.apply(SelectionCommand::SelectAll));

    if !config.only.is_empty() {
        report(selection.apply(SelectionCommand::DeselectAll));
        for rel in &config.only {
            report(selection.apply(SelectionCommand::SetInclusion {
                path: PathBuf::from(rel),
                included: true,
            }));
        }
    }

    if let Some(extension) = &config.extension_filter {
        report(selection.apply(SelectionCommand::SelectByExtension {
            extension: extension.clone(),
        }));
    }

    for rel in &config.skip {
        report(selection.apply(SelectionCommand::SetInclusion {
            path: PathBuf::from(rel),
            included: false,
        }));
    }

    let selected = selection.selected();
    info!("Consolidating {} selected files", selected.len());

    let output = build_consolidated_output(&selected, &patterns, |p: &Path| read_file_text(p));
    let rendered = render_output(&output);

    let output_path = match &config.output_path {
        Some(path) if path.is_empty() => Some(default_output_filename(root)),
        other => other.clone(),
    };

    info!("Writing output");
    write_output(&rendered, output_path, config.clipboard)
}

fn list_profiles(catalog: &IgnoreCatalog) {
    for name in catalog.names() {
        let patterns = catalog.patterns_of(name);
        if patterns.is_empty() {
            println!("{}: (no patterns)", name);
        } else {
            println!("{}: {}", name, patterns.join(", "));
        }
    }
}

fn report(outcome: CommandOutcome) {
    match outcome {
        CommandOutcome::Applied { changed } => {
            debug!("Selection updated, {} entries changed", changed)
        }
        CommandOutcome::Skipped { reason } => info!("Selection command skipped: {}", reason),
    }
}
