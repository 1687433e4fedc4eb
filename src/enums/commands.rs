use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Init,
    Analyze {
        #[clap(short, long)]
        file: Option<String>,
        #[clap(long)]
        json: bool,
    },
    Check {
        #[clap(short, long)]
        file: Option<String>,
    },
    Validate,
}
