//! ResumeAI - Main entry point
//!
//! Interactive resume review wizard, plus a headless `review` command that
//! drives the same wizard controller from the command line.

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use resume_review::app::App;
use resume_review::cli::{Cli, Commands, ConfigCommands};
use resume_review::config::AppConfig;
use resume_review::error::ResumeReviewError;
use resume_review::job::ExperienceLevel;
use resume_review::notify::TracingNotifier;
use resume_review::processor::SimulatedProcessor;
use resume_review::report;
use resume_review::wizard::{WizardController, WizardStep};

/// Extra time allowed beyond the configured delays in headless mode
const HEADLESS_GRACE: Duration = Duration::from_secs(30);

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default level. The TUI owns the terminal, so its
/// logs go to `log_file` or nowhere.
fn init_logging(
    verbose: bool,
    interactive: bool,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = match (verbose, interactive) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,resume_review={}", default_level)));

    let (writer, ansi) = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    ResumeReviewError::config(format!(
                        "Failed to open log file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None if interactive => (BoxMakeWriter::new(std::io::sink), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .init();
    Ok(())
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();

    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    init_logging(cli.verbose, interactive, cli.log_file.as_deref())?;
    info!("ResumeAI starting up");
    debug!("CLI arguments parsed");

    match cli.command {
        None => {
            info!("No command specified, launching the wizard");
            run_tui(None)?;
        }
        Some(Commands::Tui { config }) => run_tui(config.as_deref())?,
        Some(Commands::Review {
            resume,
            role,
            level,
            description,
            output,
            config,
        }) => {
            if let Err(e) = run_review(
                &resume,
                &role,
                level,
                description.as_deref(),
                output.as_deref(),
                config.as_deref(),
            ) {
                error!("Review failed: {}", e);
                eprintln!("✗ Review failed: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Config { action }) => run_config_command(&action)?,
    }

    Ok(())
}

/// Run the interactive wizard
fn run_tui(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_or_default(config_path)?;
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode()
        .map_err(|e| ResumeReviewError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste).map_err(|e| {
        ResumeReviewError::terminal(format!("Failed to enter alternate screen: {}", e))
    })?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| ResumeReviewError::terminal(format!("Failed to create terminal: {}", e)))?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

/// Run the wizard headlessly: upload, job details, analysis, report
fn run_review(
    resume: &Path,
    role: &str,
    level: Option<ExperienceLevel>,
    description: Option<&str>,
    output: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_or_default(config_path)?;
    let delays = config.delays();
    let mut wizard = WizardController::new(SimulatedProcessor::sample(delays), TracingNotifier);

    info!(resume = %resume.display(), role, "Starting headless review");
    wizard.start()?;

    println!("📄 Reading {}...", resume.display());
    wizard.submit_file(resume, config.max_upload_bytes)?;
    if !wizard.wait_idle(delays.upload + HEADLESS_GRACE) || wizard.step() != WizardStep::JobDetails {
        return Err(ResumeReviewError::analysis("Resume processing did not complete").into());
    }

    let job = wizard.job_mut();
    job.set_role(role);
    job.set_experience_level(level);
    if let Some(description) = description {
        job.set_description(description);
    }

    println!("🔍 Analyzing resume for {}...", role.trim());
    wizard.submit_job_details()?;
    if !wizard.wait_idle(delays.analysis + HEADLESS_GRACE) {
        return Err(ResumeReviewError::analysis("Timed out waiting for analysis").into());
    }

    let feedback = wizard
        .feedback()
        .ok_or_else(|| ResumeReviewError::analysis("Analysis did not produce a report"))?;
    println!();
    print!("{}", report::render_text(feedback, wizard.job()));

    if let Some(path) = output {
        report::export_json(feedback, path)?;
        info!(path = %path.display(), "Report exported");
        println!("\n✓ Report written to {}", path.display());
    }
    Ok(())
}

/// Run a `config` subcommand
fn run_config_command(action: &ConfigCommands) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigCommands::Init { path } => {
            if path.exists() {
                eprintln!("✗ Refusing to overwrite existing file: {}", path.display());
                std::process::exit(1);
            }
            AppConfig::default().save_to_file(path)?;
            info!(path = %path.display(), "Default configuration written");
            println!("✓ Configuration written to {}", path.display());
        }
        ConfigCommands::Validate { path } => {
            info!("Validating configuration file: {:?}", path);
            match AppConfig::load_from_file(path) {
                Ok(config) => match config.validate() {
                    Ok(()) => {
                        info!("Configuration validation successful");
                        println!("✓ Configuration file is valid: {:?}", config);
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {}", e);
                        eprintln!("✗ Configuration validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {:#}", e);
                    eprintln!("✗ Failed to load configuration file: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
