//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use titlepatch_core::{ProgressReporter, patch_directory};
use titlepatch_shared::{
    AppConfig, FileOutcome, PatchOptions, PatchReport, config_file_path, init_config,
    init_config_at, load_config, load_config_from,
};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// titlepatch — add title front matter to Markdown API pages.
#[derive(Parser)]
#[command(
    name = "titlepatch",
    version,
    about = "Prepend a `title:` header, taken from the first `## ` heading, to Markdown files.",
    long_about = None,
    args_conflicts_with_subcommands = true,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.titlepatch/titlepatch.toml.
    #[arg(long, env = "TITLEPATCH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub patch: PatchArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Arguments for the default patch pass.
#[derive(Args)]
pub(crate) struct PatchArgs {
    /// Directory to patch (defaults to the configured target, `pages/api`).
    pub dir: Option<PathBuf>,

    /// Report what would change without writing any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Like --dry-run, but exit with an error if any file lacks a title.
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// File extension to match, without the dot.
    #[arg(long)]
    pub ext: Option<String>,

    /// Output format: text status lines or a JSON report.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Subcommands besides the default patch pass.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Print the effective configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize the tracing subscriber. Logs go to stderr; stdout is reserved
/// for status lines and reports.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "titlepatch=warn",
        1 => "titlepatch=info",
        2 => "titlepatch=debug",
        _ => "titlepatch=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => cmd_patch(&cli.patch, cli.config.as_deref()),
        Some(Command::Config { action }) => match action {
            ConfigAction::Init => cmd_config_init(cli.config.as_deref()),
            ConfigAction::Show => cmd_config_show(cli.config.as_deref()),
        },
    }
}

fn load_app_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let config = match explicit {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

fn cmd_patch(args: &PatchArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_app_config(config_path)?;

    let dir = args
        .dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.defaults.target_dir));

    let mut opts = PatchOptions::from(&config);
    opts.dry_run = args.dry_run || args.check;
    if let Some(ext) = &args.ext {
        opts.extension = ext.clone();
    }

    info!(dir = %dir.display(), ext = %opts.extension, dry_run = opts.dry_run, "patching titles");

    let reporter = CliProgress {
        format: args.format,
    };
    let report = patch_directory(&dir, &opts, &reporter)?;

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if args.check && report.patched() > 0 {
        return Err(eyre!(
            "{} file(s) in {} are missing a title header",
            report.patched(),
            dir.display()
        ));
    }

    Ok(())
}

fn cmd_config_init(explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => {
            init_config_at(path)?;
            path.to_path_buf()
        }
        None => init_config()?,
    };
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show(explicit: Option<&Path>) -> Result<()> {
    let config = load_app_config(explicit)?;
    let source = match explicit {
        Some(path) => path.to_path_buf(),
        None => config_file_path()?,
    };
    info!(path = %source.display(), "showing config");
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// Prints one status line per processed file in text mode.
struct CliProgress {
    format: OutputFormat,
}

impl ProgressReporter for CliProgress {
    fn file_done(&self, name: &str, outcome: &FileOutcome, dry_run: bool) {
        if self.format != OutputFormat::Text {
            return;
        }
        if let Some(line) = status_line(name, outcome, dry_run) {
            println!("{line}");
        }
    }

    fn done(&self, report: &PatchReport) {
        info!(
            patched = report.patched(),
            already_patched = report.already_patched(),
            no_heading = report.no_heading(),
            "done"
        );
    }
}

/// Status line for a file, or `None` for files skipped silently.
fn status_line(name: &str, outcome: &FileOutcome, dry_run: bool) -> Option<String> {
    match outcome {
        FileOutcome::AlreadyPatched => Some(format!("{name} is already patched")),
        FileOutcome::Patched { .. } if dry_run => Some(format!("Would set title for {name}")),
        FileOutcome::Patched { .. } => Some(format!("Setting title for {name}")),
        FileOutcome::NoHeading => None,
    }
}
