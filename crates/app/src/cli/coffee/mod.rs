use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct CoffeeCommand {
    #[command(subcommand)]
    command: CoffeeSubcommand,
}

#[derive(Debug, Subcommand)]
enum CoffeeSubcommand {
    Create(create::CreateCoffeeArgs),
    List(list::ListCoffeesArgs),
}

pub(crate) async fn run(command: CoffeeCommand) -> Result<(), String> {
    match command.command {
        CoffeeSubcommand::Create(args) => create::run(args).await,
        CoffeeSubcommand::List(args) => list::run(args).await,
    }
}
