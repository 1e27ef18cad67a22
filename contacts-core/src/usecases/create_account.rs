use super::prelude::*;

pub fn create_account<R: AccountRepo>(repo: &R) -> Result<Account> {
    let account = Account {
        id: AccountId::new(),
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new account {}", account.id);
    repo.create_account(&account)?;
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;

    #[test]
    fn create_a_new_account() {
        let db = MockDb::default();
        let account = create_account(&db).unwrap();
        assert!(account.id.is_valid());
        assert!(db.account_exists(&account.id).unwrap());
        assert!(!db.account_exists(&AccountId::new()).unwrap());
    }
}
