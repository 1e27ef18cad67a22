use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::{path::PathBuf, str::FromStr};

use contacts_application::prelude as flows;
use contacts_core::{entities::*, gateways::geocode::GeoCodingGateway, usecases};
use contacts_db_sqlite::Connections;

use crate::{config::Config, gateways};

#[derive(Parser)]
#[command(name = "contacts", version, about = "Addresses of contacts with geocoding")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// URL to the database (overrides the configuration)
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account
    CreateAccount,
    /// Create a new place of an account
    CreatePlace(CreatePlaceArgs),
    /// Resolve and store the coordinates of a place
    FetchCoordinates {
        #[arg(long, value_parser = AccountId::from_str)]
        account_id: AccountId,
        #[arg(long, value_parser = PlaceId::from_str)]
        place_id: PlaceId,
    },
    /// List all places of an account
    ListPlaces {
        #[arg(long, value_parser = AccountId::from_str)]
        account_id: AccountId,
    },
}

#[derive(ClapArgs)]
struct CreatePlaceArgs {
    #[arg(long, value_parser = AccountId::from_str)]
    account_id: AccountId,
    #[arg(long)]
    street: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    province: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    /// Country code with at most 3 characters
    #[arg(long)]
    country: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,
    /// Resolve the coordinates if none have been given
    #[arg(long)]
    geocode: bool,
}

impl From<CreatePlaceArgs> for usecases::NewPlace {
    fn from(from: CreatePlaceArgs) -> Self {
        let CreatePlaceArgs {
            account_id,
            street,
            city,
            province,
            postal_code,
            country,
            latitude,
            longitude,
            geocode: _,
        } = from;
        Self {
            account_id,
            street,
            city,
            province,
            postal_code,
            country,
            latitude,
            longitude,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    contacts_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let geo_gw = gateways::geocoding_gateway(&cfg.geocoding);
    let geocoding = geo_gw.as_ref().map(|gw| gw as &dyn GeoCodingGateway);

    match args.command {
        Command::CreateAccount => {
            let account = flows::create_account(&connections)?;
            println!("{}", account.id);
        }
        Command::CreatePlace(args) => {
            let geocode = args.geocode;
            let place = flows::create_place(&connections, args.into())?;
            let place = if geocode && place.coordinates.is_empty() {
                flows::fetch_coordinates(&connections, geocoding, &place.account_id, &place.id)?
                    .unwrap_or(place)
            } else {
                place
            };
            print_place(&place);
        }
        Command::FetchCoordinates {
            account_id,
            place_id,
        } => match flows::fetch_coordinates(&connections, geocoding, &account_id, &place_id)? {
            Some(place) => print_place(&place),
            None => {
                log::warn!("The coordinates of place {place_id} could not be resolved");
                print_place(&flows::get_place(&connections, &account_id, &place_id)?);
            }
        },
        Command::ListPlaces { account_id } => {
            for place in flows::places_of_account(&connections, &account_id)? {
                print_place(&place);
                println!();
            }
        }
    }
    Ok(())
}

fn print_field<T: std::fmt::Display>(name: &str, value: Option<T>) {
    match value {
        Some(value) => println!("{name:<12}{value}"),
        None => println!("{name:<12}-"),
    }
}

fn print_place(place: &Place) {
    let Place {
        id,
        account_id,
        address,
        coordinates,
        created_at,
        updated_at,
    } = place;
    print_field("id", Some(id));
    print_field("account", Some(account_id));
    print_field("street", address.street.as_deref());
    print_field("city", address.city.as_deref());
    print_field("province", address.province.as_deref());
    print_field("postal code", address.postal_code.as_deref());
    print_field("country", address.country.as_deref());
    print_field("latitude", coordinates.latitude);
    print_field("longitude", coordinates.longitude);
    print_field("created", Some(created_at));
    print_field("updated", Some(updated_at));
}
