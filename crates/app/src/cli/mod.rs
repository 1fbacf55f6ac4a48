use clap::{Parser, Subcommand};

mod db;
mod logging;
mod report;
mod user;

pub(crate) use logging::LoggingConfig;

#[derive(Debug, Parser)]
#[command(name = "spacelet", about = "Spacelet CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    User(user::UserCommand),
    Report(report::ReportCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::User(command) => user::run(command).await,
            Commands::Report(command) => report::run(command).await,
        }
    }
}
