use barista_app::{
    database::{self, Db},
    domain::coffees::{CoffeesService, PgCoffeesService},
    money::{DecimalMoneyCodec, MoneyCodec},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct ListCoffeesArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListCoffeesArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let coffees = PgCoffeesService::new(Db::new(pool))
        .list_coffees()
        .await
        .map_err(|error| format!("failed to list coffees: {error}"))?;

    let codec = DecimalMoneyCodec::new();

    for coffee in coffees {
        let price = codec.encode(&coffee.price);

        #[expect(clippy::print_stdout, reason = "CLI output")]
        {
            println!(
                "{}\t{}\t{} {}",
                coffee.uuid(),
                coffee.name,
                price.amount,
                price.currency
            );
        }
    }

    Ok(())
}
