//! gogh-css CLI - Convert Gogh color schemes into CSS custom properties

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gogh_css::{
    config::{self, Config},
    css,
    input::{InputAccumulator, InputSource, Prompt},
    scheme::GoghDocument,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "gogh-css")]
#[command(about = "Convert a Gogh color scheme (YAML) into CSS custom properties")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scheme files to read in order ("-" or nothing reads stdin)
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not print the paste prompt
    #[arg(long)]
    no_prompt: bool,

    /// Verbosity level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Config file (default: ~/.config/gogh-css/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize configuration file with defaults
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = load_config(&cli, &config_path)?;

    let log_level = config.resolve_log_level(cli.log_level.as_deref())?;
    init_logging(&log_level)?;

    match cli.command {
        Some(Commands::Config(cmd)) => run_config_command(cmd, &config_path, &config),
        None => run_convert(&cli, &config),
    }
}

/// `config init` and `config path` must work even when the file is broken
fn needs_config_file(cli: &Cli) -> bool {
    !matches!(
        cli.command,
        Some(Commands::Config(ConfigCommands::Init { .. } | ConfigCommands::Path))
    )
}

fn load_config(cli: &Cli, path: &Path) -> Result<Config> {
    if !needs_config_file(cli) {
        return Ok(Config::default().with_env_overrides());
    }

    Config::load_from(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn should_prompt(cli: &Cli, config: &Config, sources: &[InputSource]) -> bool {
    config.prompt.enabled && !cli.no_prompt && sources.iter().any(InputSource::is_stdin)
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn run_convert(cli: &Cli, config: &Config) -> Result<()> {
    let sources = InputSource::from_args(&cli.inputs);

    if should_prompt(cli, config, &sources) {
        Prompt::new().show().context("Failed to print prompt")?;
    }

    let mut accumulator = InputAccumulator::new();
    let completion = accumulator
        .read_sources(&sources)
        .context("Failed to read scheme input")?;
    info!(lines = accumulator.line_count(), ?completion, "input collected");

    let text = accumulator.into_document();
    let doc = GoghDocument::parse(&text).context("Invalid color scheme")?;
    debug!(fields = doc.field_count(), "scheme parsed");

    write_output(&doc, cli.output.as_deref())
}

fn write_output(doc: &GoghDocument, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            css::write_css(doc, BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "css written");
        }
        None => {
            css::write_css(doc, io::stdout().lock()).context("Failed to write css")?;
        }
    }

    Ok(())
}

fn run_config_command(cmd: ConfigCommands, path: &Path, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Init { force } => config_init(path, force),
        ConfigCommands::Show => config_show(config),
        ConfigCommands::Path => {
            config_path(path);
            Ok(())
        }
    }
}

fn config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        println!("Configuration file already exists at: {}", path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    Config::default().save_to(path)?;

    println!("Configuration file created at: {}", path.display());
    println!();
    println!("Environment overrides:");
    println!("  export {}=0       # disable the paste prompt", config::PROMPT_ENV);
    println!("  export {}=debug   # log level on stderr", config::LOG_ENV);

    Ok(())
}

fn config_show(settings: &Config) -> Result<()> {
    println!("{}", toml::to_string_pretty(settings)?);

    println!("--- Environment Variables ---");
    for name in [config::PROMPT_ENV, config::LOG_ENV] {
        println!(
            "{}: {}",
            name,
            std::env::var(name).unwrap_or_else(|_| "not set".to_string())
        );
    }

    Ok(())
}

fn config_path(path: &Path) {
    println!("{}", path.display());

    if path.exists() {
        println!("(file exists)");
    } else {
        println!("(file does not exist - run 'config init' to create)");
    }
}
