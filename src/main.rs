use clap::Parser;
use patchlyzer_cli::errors::ErrorHandler;
use patchlyzer_cli::structs::cli::Cli;
use patchlyzer_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
