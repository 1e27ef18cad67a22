use super::*;

impl<'a> AccountRepo for DbReadWrite<'a> {
    fn create_account(&self, account: &Account) -> Result<()> {
        insert_account(&mut self.conn.borrow_mut(), account)
    }
    fn get_account(&self, id: &AccountId) -> Result<Account> {
        load_account(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> AccountRepo for DbConnection<'a> {
    fn create_account(&self, account: &Account) -> Result<()> {
        insert_account(&mut self.conn.borrow_mut(), account)
    }
    fn get_account(&self, id: &AccountId) -> Result<Account> {
        load_account(&mut self.conn.borrow_mut(), id)
    }
}

impl<'a> AccountRepo for DbReadOnly<'a> {
    fn create_account(&self, account: &Account) -> Result<()> {
        insert_account(&mut self.conn.borrow_mut(), account)
    }
    fn get_account(&self, id: &AccountId) -> Result<Account> {
        load_account(&mut self.conn.borrow_mut(), id)
    }
}
