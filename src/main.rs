use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lightbnb::{
    application::builder::ApplicationBuilder,
    dto::PropertySearchRequest,
    entities::{NewProperty, NewUser},
    value_objects::{Cents, UserId},
    Config, ListingService,
};

/// Query and update the LightBnB listing database
#[derive(Parser)]
#[command(name = "lightbnb", version)]
struct Cli {
    /// Overrides DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply the bundled schema
    Migrate,
    /// Look a user up by email
    UserByEmail { email: String },
    /// Look a user up by id
    UserById { id: String },
    /// Insert a user
    CreateUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Stored as given; hash it before passing it here
        #[arg(long)]
        password: String,
    },
    /// List a guest's reservations
    Reservations {
        guest_id: String,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// List reviewed properties, cheapest first
    Properties(PropertiesArgs),
    /// Insert a property
    CreateProperty(CreatePropertyArgs),
}

#[derive(Args)]
struct PropertiesArgs {
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    owner_id: Option<String>,
    /// Decimal amount, e.g. 150.00
    #[arg(long)]
    minimum_price_per_night: Option<f64>,
    /// Decimal amount, e.g. 400.00
    #[arg(long)]
    maximum_price_per_night: Option<f64>,
    #[arg(long)]
    minimum_rating: Option<f64>,
    #[arg(long)]
    limit: Option<i64>,
}

#[derive(Args)]
struct CreatePropertyArgs {
    #[arg(long)]
    owner_id: i32,
    #[arg(long)]
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    thumbnail_photo_url: String,
    #[arg(long, default_value = "")]
    cover_photo_url: String,
    /// Decimal amount, e.g. 129.99
    #[arg(long)]
    cost_per_night: f64,
    #[arg(long)]
    street: String,
    #[arg(long)]
    city: String,
    #[arg(long)]
    province: String,
    #[arg(long)]
    post_code: String,
    #[arg(long)]
    country: String,
    #[arg(long, default_value_t = 0)]
    parking_spaces: i32,
    #[arg(long, default_value_t = 0)]
    number_of_bathrooms: i32,
    #[arg(long, default_value_t = 0)]
    number_of_bedrooms: i32,
}

impl CreatePropertyArgs {
    fn into_new_property(self) -> anyhow::Result<NewProperty> {
        Ok(NewProperty {
            owner_id: UserId::new(self.owner_id),
            title: self.title,
            description: self.description,
            thumbnail_photo_url: self.thumbnail_photo_url,
            cover_photo_url: self.cover_photo_url,
            cost_per_night: Cents::from_decimal(self.cost_per_night)
                .context("invalid --cost-per-night")?,
            street: self.street,
            city: self.city,
            province: self.province,
            post_code: self.post_code,
            country: self.country,
            parking_spaces: self.parking_spaces,
            number_of_bathrooms: self.number_of_bathrooms,
            number_of_bedrooms: self.number_of_bedrooms,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let mut config = Config::from_env();
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    config.validate().map_err(anyhow::Error::msg)?;
    info!("Configuration loaded and validated");

    let mut builder = ApplicationBuilder::new(config)
        .with_database()
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to open database")?;
    if matches!(cli.command, Command::Migrate) {
        builder = builder.with_migrations();
    }
    let app = builder.build().await.map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli.command, &app.service).await;
    app.store.close().await;
    result
}

async fn run(command: Command, service: &ListingService) -> anyhow::Result<()> {
    match command {
        Command::Migrate => info!("Schema is up to date"),
        Command::UserByEmail { email } => print_json(&service.lookup_user_by_email(&email).await?)?,
        Command::UserById { id } => print_json(&service.lookup_user_by_id(&id).await?)?,
        Command::CreateUser {
            name,
            email,
            password,
        } => {
            let user = service
                .create_user(NewUser {
                    name,
                    email,
                    password,
                })
                .await
                .map_err(|e| {
                    if e.is_conflict() {
                        anyhow::anyhow!("a user with this email already exists")
                    } else {
                        e.into()
                    }
                })?;
            print_json(&user)?;
        }
        Command::Reservations { guest_id, limit } => {
            let reservations = service
                .list_reservations_for_guest(&guest_id, limit)
                .await?;
            let nights: i64 = reservations.iter().map(|r| r.nights()).sum();
            info!("{} reservation(s), {} night(s)", reservations.len(), nights);
            print_json(&reservations)?;
        }
        Command::Properties(args) => {
            let request = PropertySearchRequest {
                city: args.city,
                owner_id: args.owner_id,
                minimum_price_per_night: args.minimum_price_per_night,
                maximum_price_per_night: args.maximum_price_per_night,
                minimum_rating: args.minimum_rating,
            };
            print_json(&service.list_properties(request, args.limit).await?)?;
        }
        Command::CreateProperty(args) => {
            let property = service.create_property(args.into_new_property()?).await?;
            print_json(&property)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
