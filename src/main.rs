use clap::{Parser, Subcommand};
use env_logger::Env;
use log::error;
use skinchess::config::{Config, CONFIG_ENV};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "skinchess", version, about = "Two-player chess on a skinnable board")]
struct Cli {
    /// YAML configuration file, overrides $SKINCHESS_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game at the terminal (default)
    Play,
    /// Count legal move tree nodes up to a given depth
    Perft {
        depth: u32,
        /// `<placement> [w|b]`, the start position when absent
        #[arg(long)]
        fen: Option<String>,
    },
    /// Print the sprite table of the configured skin
    Skin,
}

fn main() -> ExitCode {
    let env = Env::default().filter_or("SKINCHESS_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let cfg_path = cli.config.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let cfg = match Config::load(cfg_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => skinchess::cli::run(&cfg).map_err(|e| e.to_string()),
        Commands::Perft { depth, fen } => skinchess::perft(depth, fen.as_deref()).map_err(|e| e.to_string()),
        Commands::Skin => cfg.skin.resolve().map(|skin| {
            println!("skin: {}", skin.name);
            for line in skin.table() {
                println!("  {}", line);
            }
        }).map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
