//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use taskflow::output::OutputMode;

/// taskflow - Lay out kanban tasks as a flow graph
#[derive(Parser, Debug)]
#[command(
    name = "taskflow",
    version,
    about = "Lay out kanban tasks as a flow graph",
    long_about = "Turn a task list into positioned nodes and synthesized edges.\n\n\
                  Tasks are stacked in one column per status and connected by\n\
                  continuation, progression and collaboration edges."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Inputs shared by every command that lays out tasks
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Task files (JSON) or glob patterns
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Team member file (JSON)
    #[arg(short, long)]
    pub members: Option<PathBuf>,

    /// Settings file, replacing the global and project config
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default .taskflow.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Compute and print the layout
    Layout {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Write the flow export file
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Workflow name (also names the file)
        #[arg(short, long)]
        workflow: String,

        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Count tasks per status and edges per kind
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Layout { input }) => commands::layout(&input, output_mode),
        Some(Command::Export {
            input,
            workflow,
            out,
        }) => commands::export(&input, &workflow, &out, output_mode),
        Some(Command::Summary { input }) => commands::summary(&input, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": taskflow::VERSION
                    })
                );
            } else {
                println!("taskflow v{}", taskflow::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": taskflow::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("taskflow v{}", taskflow::VERSION);
                println!("\nRun 'taskflow --help' for usage");
                println!("Run 'taskflow layout <tasks.json>' to get started");
            }
            Ok(())
        },
    }
}
