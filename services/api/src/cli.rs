use crate::report::{run_estimate, run_formulas, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruit_cost::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruitment Cost Calculator",
    about = "Compare AI candidate screening with human recruiter screening costs",
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
    /// Compute a cost estimate and print it
    Estimate(EstimateArgs),
    /// Print the formulas behind every estimate
    Formulas,
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
        Command::Estimate(args) => run_estimate(args).await,
        Command::Formulas => {
            run_formulas();
            Ok(())
        }
    }
}
