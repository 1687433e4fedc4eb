use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "patchlyzer")]
#[clap(about = "Patch note analysis tool", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
