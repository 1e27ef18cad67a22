use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use contacts_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, DbConnection, DbReadOnly, DbReadWrite};

mod account;
mod place;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_account_rowid(conn: &mut SqliteConnection, id: &AccountId) -> Result<i64> {
    use schema::accounts::dsl;
    schema::accounts::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id.as_str()))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve account id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn load_account(conn: &mut SqliteConnection, id: &AccountId) -> Result<Account> {
    use schema::accounts::dsl;
    let models::Account {
        rowid: _,
        id,
        created_at,
    } = schema::accounts::table
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::Account>(conn)
        .map_err(from_diesel_err)?;
    Ok(Account {
        id: id.into(),
        created_at: Timestamp::from_millis(created_at),
    })
}

fn insert_account(conn: &mut SqliteConnection, account: &Account) -> Result<()> {
    let Account { id, created_at } = account;
    let new_account = models::NewAccount {
        id: id.as_str(),
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::accounts::table)
        .values(&new_account)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn into_place(joined: models::JoinedPlace) -> Place {
    let models::JoinedPlace {
        id,
        street,
        city,
        province,
        postal_code,
        country,
        latitude,
        longitude,
        created_at,
        updated_at,
        account_id,
    } = joined;
    Place {
        id: id.into(),
        account_id: account_id.into(),
        address: Address {
            street,
            city,
            province,
            postal_code,
            country,
        },
        coordinates: Coordinates {
            latitude,
            longitude,
        },
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
    }
}

fn insert_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    let Place {
        id,
        account_id,
        address,
        coordinates,
        created_at,
        updated_at,
    } = place;
    let account_rowid = resolve_account_rowid(conn, account_id)?;
    let new_place = models::NewPlace {
        id: id.as_str(),
        account_rowid,
        street: address.street.as_deref(),
        city: address.city.as_deref(),
        province: address.province.as_deref(),
        postal_code: address.postal_code.as_deref(),
        country: address.country.as_deref(),
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        created_at: created_at.as_millis(),
        updated_at: updated_at.as_millis(),
    };
    diesel::insert_into(schema::places::table)
        .values(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    use schema::places::dsl;
    let Place {
        id,
        account_id,
        address,
        coordinates,
        created_at: _,
        updated_at,
    } = place;
    let account_rowid = resolve_account_rowid(conn, account_id)?;
    let changeset = models::PlaceChangeset {
        street: address.street.as_deref(),
        city: address.city.as_deref(),
        province: address.province.as_deref(),
        postal_code: address.postal_code.as_deref(),
        country: address.country.as_deref(),
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        updated_at: updated_at.as_millis(),
    };
    let count = diesel::update(
        schema::places::table
            .filter(dsl::id.eq(id.as_str()))
            .filter(dsl::account_rowid.eq(account_rowid)),
    )
    .set(&changeset)
    .execute(conn)
    .map_err(from_diesel_err)?;
    match count {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        _ => Err(anyhow!("Updated {count} places with id '{id}'").into()),
    }
}

macro_rules! joined_place_columns {
    () => {
        (
            schema::places::id,
            schema::places::street,
            schema::places::city,
            schema::places::province,
            schema::places::postal_code,
            schema::places::country,
            schema::places::latitude,
            schema::places::longitude,
            schema::places::created_at,
            schema::places::updated_at,
            schema::accounts::id,
        )
    };
}

fn load_place_of_account(
    conn: &mut SqliteConnection,
    account_id: &AccountId,
    place_id: &PlaceId,
) -> Result<Place> {
    let joined = schema::places::table
        .inner_join(schema::accounts::table)
        .select(joined_place_columns!())
        .filter(schema::places::id.eq(place_id.as_str()))
        .filter(schema::accounts::id.eq(account_id.as_str()))
        .first::<models::JoinedPlace>(conn)
        .map_err(from_diesel_err)?;
    Ok(into_place(joined))
}

fn load_places_of_account(
    conn: &mut SqliteConnection,
    account_id: &AccountId,
) -> Result<Vec<Place>> {
    Ok(schema::places::table
        .inner_join(schema::accounts::table)
        .select(joined_place_columns!())
        .filter(schema::accounts::id.eq(account_id.as_str()))
        .order_by(schema::places::created_at)
        .then_order_by(schema::places::rowid)
        .load::<models::JoinedPlace>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_place)
        .collect())
}

fn count_places(conn: &mut SqliteConnection) -> Result<usize> {
    Ok(schema::places::table
        .select(diesel::dsl::count_star())
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
