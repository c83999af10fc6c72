// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{CLOUDBUILD_CONFIG, ENV_FILE, GCP_PROJECT, PLACEHOLDER_HTML};
use crate::config::options::{DeployOptions, ParseOptions, ReportMode};
use crate::core::shell::{CommandSpec, SystemShell};
use crate::data::MovementPage;
use crate::error::Result;
use crate::{deploy, file, log, report, specs};

/// Extract movement categories and movements from a saved Rebrand Fitness page.
#[derive(Debug, Parser)]
#[command(name = "parse-rebrand", version)]
pub struct ParseArgs {
    /// Saved HTML page; omit to parse the built-in placeholder
    pub html_file: Option<PathBuf>,

    /// Print only the JSON document
    #[arg(long)]
    pub json_only: bool,

    /// Also write the JSON document to FILE
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<ParseArgs> for ParseOptions {
    fn from(a: ParseArgs) -> Self {
        Self {
            input: a.html_file,
            mode: if a.json_only { ReportMode::JsonOnly } else { ReportMode::Full },
            json_out: a.out,
        }
    }
}

/// Submit a production Cloud Build with substitutions from the env file.
#[derive(Debug, Parser)]
#[command(name = "deploy", version)]
pub struct DeployArgs {
    /// Env file holding the required keys
    #[arg(long, value_name = "PATH", default_value = ENV_FILE)]
    pub env_file: PathBuf,

    /// GCP project to build in
    #[arg(long, default_value = GCP_PROJECT)]
    pub project: String,

    /// Cloud Build config file
    #[arg(long, value_name = "FILE", default_value = CLOUDBUILD_CONFIG)]
    pub config: String,

    /// gcloud binary (default: bundled SDK if present, else PATH)
    #[arg(long, value_name = "PATH")]
    pub gcloud: Option<String>,

    /// Print the command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<DeployArgs> for DeployOptions {
    fn from(a: DeployArgs) -> Self {
        Self {
            env_file: a.env_file,
            project: a.project,
            build_config: a.config,
            gcloud: a.gcloud,
            dry_run: a.dry_run,
            ..Default::default()
        }
    }
}

pub fn parse_main() -> color_eyre::Result<()> {
    let args = ParseArgs::parse();
    log::init(args.verbose);

    let opts = ParseOptions::from(args);
    let stdout = io::stdout();
    run_parse(&opts, &mut stdout.lock())?;
    Ok(())
}

/// Read (or fall back to the placeholder), extract, report, optionally save JSON.
pub fn run_parse(opts: &ParseOptions, out: &mut dyn Write) -> Result<MovementPage> {
    let doc = match &opts.input {
        Some(path) => file::read_text(path)?,
        None => {
            logd!("no input file; parsing placeholder markup");
            s!(PLACEHOLDER_HTML)
        }
    };

    let page = specs::movements::extract(&doc);
    report::write_report(out, &page, &opts.mode)?;

    if let Some(path) = &opts.json_out {
        let written = file::write_text(path, &report::to_json(&page)?)?;
        logf!(path = %written.display(), "wrote JSON");
    }
    Ok(page)
}

pub fn deploy_main() -> color_eyre::Result<()> {
    let args = DeployArgs::parse();
    log::init(args.verbose);

    let opts = DeployOptions::from(args);
    run_deploy(&opts, &mut io::stdout())?;
    Ok(())
}

pub fn run_deploy(opts: &DeployOptions, out: &mut dyn Write) -> Result<CommandSpec> {
    deploy::deploy(opts, &mut SystemShell, out)
}
