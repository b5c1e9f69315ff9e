use clap::{Parser, Subcommand};

mod coffee;
mod db;

#[derive(Debug, Parser)]
#[command(name = "barista-app", about = "Barista CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Coffee(coffee::CoffeeCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Coffee(command) => coffee::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
