///////////////////////////////////////////////////////////////////////
// Accounts
///////////////////////////////////////////////////////////////////////

table! {
    accounts (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Places
///////////////////////////////////////////////////////////////////////

table! {
    places (rowid) {
        rowid -> BigInt,
        id -> Text,
        account_rowid -> BigInt,
        street -> Nullable<Text>,
        city -> Nullable<Text>,
        province -> Nullable<Text>,
        postal_code -> Nullable<Text>,
        country -> Nullable<Text>,
        latitude -> Nullable<Double>,
        longitude -> Nullable<Double>,
        created_at -> BigInt,
        updated_at -> BigInt,
    }
}

joinable!(places -> accounts (account_rowid));

allow_tables_to_appear_in_same_query!(accounts, places);
