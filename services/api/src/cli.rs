use crate::demo::{run_criteria, run_demo, CriteriaArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use shinsa::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Súmula de Graduação",
    about = "Run and demonstrate the dan examination scoring service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the active criteria table for a target grade
    Criteria(CriteriaArgs),
    /// Run an end-to-end CLI demo covering a full examination session
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Criteria(args) => run_criteria(args),
        Command::Demo(args) => run_demo(args),
    }
}
