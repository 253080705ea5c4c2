use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "studyrank", version, about = "Rank your activities by deadline-aware priority")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Activity management
    Activity {
        #[command(subcommand)]
        action: commands::activity::ActivityAction,
    },
    /// Scheduled minutes per day
    Chart {
        /// Print JSON instead of bars
        #[arg(long)]
        json: bool,
    },
    /// Ask the schedule advisor for a workload summary and tips
    Advise,
    /// Keep rescoring the list on a fixed interval
    Watch(commands::watch::WatchArgs),
    /// Replace all activities with generated sample data
    Demo(commands::demo::DemoArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("STUDYRANK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Activity { action } => commands::activity::run(action),
        Commands::Chart { json } => commands::chart::run(json),
        Commands::Advise => commands::advise::run(),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Demo(args) => commands::demo::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "studyrank", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
