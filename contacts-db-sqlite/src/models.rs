#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccount<'a> {
    pub id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Account {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = places)]
pub struct NewPlace<'a> {
    pub id: &'a str,
    pub account_rowid: i64,
    pub street: Option<&'a str>,
    pub city: Option<&'a str>,
    pub province: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub country: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = places)]
#[diesel(treat_none_as_null = true)]
pub struct PlaceChangeset<'a> {
    pub street: Option<&'a str>,
    pub city: Option<&'a str>,
    pub province: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub country: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub updated_at: i64,
}

#[derive(Queryable)]
pub struct JoinedPlace {
    pub id: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
    // Joined columns
    pub account_id: String,
}
