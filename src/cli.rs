use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::job::ExperienceLevel;

/// ResumeAI - get feedback on your resume for a target role
#[derive(Parser)]
#[command(name = "resume-review")]
#[command(about = "Resume review wizard with an interactive TUI and a headless mode")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file. The TUI discards logs unless this is set.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive wizard
    Tui {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Review a resume file without the TUI and print the report
    Review {
        /// Resume file (PDF or text)
        #[arg(short, long)]
        resume: PathBuf,

        /// Target job role
        #[arg(long)]
        role: String,

        /// Experience level
        #[arg(short, long)]
        level: Option<ExperienceLevel>,

        /// Job description
        #[arg(short, long)]
        description: Option<String>,

        /// Also write the report as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a configuration file with default values
    Init {
        /// Destination path
        path: PathBuf,
    },
    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        path: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
