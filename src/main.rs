use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use next_version::cli::{run_resolve_workflow, ResolveWorkflowArgs};
use next_version::config;
use next_version::output::{self, OutputFormat};
use next_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "next-version",
    about = "Compute the next semantic version tag for a release pipeline"
)]
struct Args {
    #[arg(
        short,
        long,
        env = "BUMP_TYPE",
        help = "Bump type: alpha, beta, rc, promote_to_final, patch, minor or major"
    )]
    bump: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Repository to read tags from")]
    repo: PathBuf,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Comma-separated tags to use instead of reading the repository"
    )]
    tags: Option<Vec<String>>,

    #[arg(long, value_enum, help = "Output format (overrides configuration)")]
    format: Option<OutputFormat>,

    #[arg(long, help = "Also report tags that were ignored")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    if args.version {
        println!("next-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = ResolveWorkflowArgs {
        bump: args.bump,
        repo_path: args.repo,
        // `--tags ""` means an explicitly empty tag set
        tags: args
            .tags
            .map(|tags| tags.into_iter().filter(|t| !t.is_empty()).collect()),
    };

    if workflow_args.tags.is_none() {
        ui::display_status(&format!(
            "Reading tags from {}",
            workflow_args.repo_path.display()
        ));
    }

    let resolution = match run_resolve_workflow(&workflow_args, &config) {
        Ok(resolution) => resolution,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_warnings(&resolution.warnings, args.verbose);

    ui::display_resolution(&resolution);

    let format = args.format.unwrap_or(config.output.format);
    let github_output = output::github_output_path();
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = output::write_outputs(&resolution, format, github_output.as_deref(), &mut stdout)
    {
        ui::display_error(&format!("Failed to write outputs: {}", e));
        std::process::exit(1);
    }

    Ok(())
}
