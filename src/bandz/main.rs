use bandz::commands;
use bandz::config::BandzConfig;
use bandz::database::Database;
use bandz::error::{BandzError, Result};
use bandz::reader::LineReader;
use bandz::shell::{Registry, ScriptStack};
use bandz::store::fs::JsonFileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

const LOG_ENV: &str = "BANDZ_LOG";
const CONFIG_DIR_ENV: &str = "BANDZ_CONFIG_DIR";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; stdout belongs to the shell.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "bandz", "bandz").map(|dirs| dirs.config_dir().to_path_buf())
}

fn load_config() -> BandzConfig {
    let Some(dir) = config_dir() else {
        return BandzConfig::default();
    };
    BandzConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
        BandzConfig::default()
    })
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config();

    let store = JsonFileStore::new(&cli.file).with_pretty(config.pretty_json);
    let mut db = Database::open(Box::new(store))?;

    let mut registry = Registry::new(config.shell_settings());
    commands::register_all(&mut registry);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut reader = LineReader::interactive(stdin.lock(), &mut stdout);
    let mut scripts = ScriptStack::default();

    match registry.run(&mut db, &mut scripts, &mut reader) {
        Ok(exit) => {
            tracing::debug!(?exit, "shell finished");
            Ok(())
        }
        // Input ran out in the middle of a record: same as a normal end of input.
        Err(BandzError::InputExhausted) => Ok(()),
        Err(e) => Err(e),
    }
}
