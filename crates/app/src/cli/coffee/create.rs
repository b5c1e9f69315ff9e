use barista_app::{
    database::{self, Db},
    domain::coffees::{
        CoffeesService, PgCoffeesService,
        models::{CoffeeUuid, NewCoffee},
    },
    money::{DecimalMoneyCodec, MoneyCodec, PersistedMoney},
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateCoffeeArgs {
    /// Menu name
    #[arg(long)]
    name: String,

    /// Price as an exact decimal, e.g. 3.20
    #[arg(long)]
    price: String,

    /// ISO 4217 currency code
    #[arg(long, default_value = "GBP")]
    currency: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional coffee UUID; generated when omitted
    #[arg(long)]
    coffee_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateCoffeeArgs) -> Result<(), String> {
    let codec = DecimalMoneyCodec::new();

    let price = codec
        .decode(&PersistedMoney::new(args.price, args.currency))
        .map_err(|error| format!("invalid price: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let coffee = PgCoffeesService::new(Db::new(pool))
        .create_coffee(NewCoffee {
            uuid: args
                .coffee_uuid
                .map_or_else(CoffeeUuid::now_v7, CoffeeUuid::from_uuid),
            name: args.name,
            price,
        })
        .await
        .map_err(|error| format!("failed to create coffee: {error}"))?;

    let price = codec.encode(&coffee.price);

    #[expect(clippy::print_stdout, reason = "CLI output")]
    {
        println!("coffee_uuid: {}", coffee.uuid());
        println!("coffee_name: {}", coffee.name);
        println!("coffee_price: {} {}", price.amount, price.currency);
    }

    Ok(())
}
