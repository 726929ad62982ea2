use clap::{Args, Parser, Subcommand};
use jobportal::error::AppError;

use crate::demo::{run_demo, DemoArgs};
use crate::portal::{run_dashboard, run_withdraw};

#[derive(Parser, Debug)]
#[command(
    name = "Job Portal Applicant Dashboard",
    about = "Inspect and manage your job applications from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and render your application dashboard (default command)
    Dashboard(DashboardArgs),
    /// Withdraw one application and re-render the dashboard
    Withdraw(WithdrawArgs),
    /// Run a scripted dashboard walkthrough against fixture data
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Override the configured portal API base URL
    #[arg(long)]
    pub(crate) api_url: Option<String>,
    /// Override the configured API bearer token
    #[arg(long)]
    pub(crate) token: Option<String>,
    /// Emit the dashboard view as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct WithdrawArgs {
    /// Identifier of the application to withdraw
    pub(crate) application_id: String,
    /// Override the configured portal API base URL
    #[arg(long)]
    pub(crate) api_url: Option<String>,
    /// Override the configured API bearer token
    #[arg(long)]
    pub(crate) token: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Dashboard(DashboardArgs::default()));

    match command {
        Command::Dashboard(args) => run_dashboard(args).await,
        Command::Withdraw(args) => run_withdraw(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
