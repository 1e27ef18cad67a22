use super::*;

pub fn create_account(connections: &sqlite::Connections) -> Result<Account> {
    let account = connections
        .exclusive()?
        .transaction(|conn| usecases::create_account(conn))?;
    info!("Created account {}", account.id);
    Ok(account)
}
