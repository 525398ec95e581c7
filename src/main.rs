use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info};

use unwired::analysis::Pipeline;
use unwired::config::Config;
use unwired::report::{DiagnosticSink, ReportFormat, Reporter};
use unwired::routes::RouteTable;

/// unwired - Detect controller methods never wired into the route table
#[derive(Parser, Debug)]
#[command(name = "unwired")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Route manifest JSON (default: <path>/routes.json)
    #[arg(short, long)]
    routes: Option<PathBuf>,

    /// Handlers root, relative to the project path
    #[arg(long)]
    handlers: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (overrides report.format from the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable parallel parsing of handler files
    #[arg(long)]
    parallel: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    fn config_name(&self) -> &'static str {
        match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Json => "json",
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("unwired v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config(&cli)?;

    run_check(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        // Try to load from default locations
        Config::from_default_locations(&cli.path)?
    };

    // Override with CLI arguments
    if let Some(handlers) = &cli.handlers {
        config.handlers_dir = handlers.clone();
    }
    if let Some(routes) = &cli.routes {
        config.routes_file = Some(routes.clone());
    }
    if let Some(format) = &cli.format {
        config.report.format = format.config_name().to_string();
    }

    Ok(config)
}

fn run_check(config: &Config, cli: &Cli) -> Result<ExitCode> {
    let start_time = Instant::now();

    if !cli.quiet {
        println!("{}", "Checking unused controller methods...".cyan());
    }

    // Surface a bad project path before touching the manifest
    let app_root = cli.path.join(&config.app_root);
    if !app_root.is_dir() {
        return Err(miette!("Application root not found: {}", app_root.display()));
    }

    let routes_path = match &config.routes_file {
        Some(routes) if routes.is_absolute() => routes.clone(),
        Some(routes) => cli.path.join(routes),
        None => cli.path.join("routes.json"),
    };

    info!("Loading route manifest from {}", routes_path.display());
    let table = RouteTable::from_json_file(&routes_path)
        .into_diagnostic()
        .wrap_err("Failed to load route manifest")?;
    info!("Route manifest holds {} routes", table.len());

    if cli.parallel && !cli.quiet {
        println!("{}", "Parallel mode: parsing handler files...".cyan());
    }

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    let progress = |parsed: usize, total: usize| {
        pb.set_length(total as u64);
        pb.set_position(parsed as u64);
    };

    let mut pipeline = Pipeline::new(config).with_parallel(cli.parallel);
    if !cli.parallel {
        pipeline = pipeline.with_progress(&progress);
    }
    let outcome = pipeline.run(&cli.path, &table)?;
    pb.finish_and_clear();

    info!("Scanned {} handler files", outcome.files_scanned);
    if outcome.files_scanned == 0 && !cli.quiet {
        println!("{}", "No PHP handler files found.".yellow());
    }
    if outcome.unlocated > 0 {
        debug!(
            "{} orphans dropped without a locatable line",
            outcome.unlocated
        );
    }

    let mut sink = DiagnosticSink::new();
    for orphan in &outcome.orphans {
        sink.record(
            &orphan.record.source_file,
            orphan.line,
            "controller",
            format!("Unused method {}", orphan.record.method),
        );
    }

    let reporter = Reporter::new(
        ReportFormat::from_name(&config.report.format),
        cli.output.clone(),
    );
    reporter.report(sink.findings(), &outcome.stats)?;

    let elapsed = start_time.elapsed();
    info!("Check completed in {:.2}s", elapsed.as_secs_f64());

    Ok(if sink.has_errors() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
