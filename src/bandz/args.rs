use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bandz", bin_name = "bandz", version = env!("BANDZ_VERSION"))]
#[command(about = "Interactive shell over a collection of music bands", long_about = None)]
pub struct Cli {
    /// JSON file holding the collection (created if missing)
    pub file: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
