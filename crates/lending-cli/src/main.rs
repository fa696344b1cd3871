use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lending_cli::cli::{execute, format_output, CliCommand, SimulateOptions};
use lending_core::config::CoreConfig;
use lending_core::tracing_setup::init_stderr_tracing;

#[derive(Parser)]
#[command(name = "lending-cli")]
#[command(about = "Headless interface to the commercial lending email agent")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, short)]
    pretty: bool,

    /// Path to JSON config file (timings, inbox capacity, operator name)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the starting inbox and the requests queued to arrive
    Inbox,

    /// Show documents and loan terms for a request
    Documents {
        /// Request id
        id: u32,
    },

    /// Show the reply the agent drafts for a request
    Draft {
        /// Request id
        id: u32,
    },

    /// Ask the loan assistant a question about a request
    Ask {
        /// Request id
        id: u32,
        /// Free-text question
        question: String,
    },

    /// Run the dashboard timers headlessly and dump the resulting state
    Simulate {
        /// Number of arrival periods to run
        #[arg(long, default_value_t = 0)]
        arrivals: usize,
        /// Request id to run the agent on
        #[arg(long)]
        process: Option<u32>,
        /// Question to ask after processing
        #[arg(long)]
        ask: Option<String>,
    },

    /// List processing stage names
    Stages,
}

fn main() {
    let cli = Cli::parse();
    init_stderr_tracing("warn");

    let config = match CoreConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let command = match cli.command {
        Some(Commands::Inbox) => CliCommand::Inbox,
        Some(Commands::Documents { id }) => CliCommand::Documents { item_id: id },
        Some(Commands::Draft { id }) => CliCommand::Draft { item_id: id },
        Some(Commands::Ask { id, question }) => CliCommand::Ask { item_id: id, question },
        Some(Commands::Simulate { arrivals, process, ask }) => {
            CliCommand::Simulate(SimulateOptions { arrivals, process, ask })
        }
        Some(Commands::Stages) => CliCommand::Stages,
        None => {
            eprintln!("No command specified. Use --help for usage.");
            std::process::exit(1);
        }
    };

    match execute(&command, &config).and_then(|value| format_output(&value, cli.pretty)) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
