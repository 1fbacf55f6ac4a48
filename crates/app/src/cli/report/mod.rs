use clap::{Args, Subcommand};

mod host;

#[derive(Debug, Args)]
pub(crate) struct ReportCommand {
    #[command(subcommand)]
    command: ReportSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReportSubcommand {
    /// Print space and lease figures for one host
    Host(host::HostReportArgs),
}

pub(crate) async fn run(command: ReportCommand) -> Result<(), String> {
    match command.command {
        ReportSubcommand::Host(args) => host::run(args).await,
    }
}
