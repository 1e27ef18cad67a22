use super::*;

impl<'a> PlaceRepo for DbReadWrite<'a> {
    fn create_place(&self, place: &Place) -> Result<()> {
        insert_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }

    fn get_place_of_account(&self, account_id: &AccountId, place_id: &PlaceId) -> Result<Place> {
        load_place_of_account(&mut self.conn.borrow_mut(), account_id, place_id)
    }
    fn places_of_account(&self, account_id: &AccountId) -> Result<Vec<Place>> {
        load_places_of_account(&mut self.conn.borrow_mut(), account_id)
    }

    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
}

impl<'a> PlaceRepo for DbConnection<'a> {
    fn create_place(&self, place: &Place) -> Result<()> {
        insert_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }

    fn get_place_of_account(&self, account_id: &AccountId, place_id: &PlaceId) -> Result<Place> {
        load_place_of_account(&mut self.conn.borrow_mut(), account_id, place_id)
    }
    fn places_of_account(&self, account_id: &AccountId) -> Result<Vec<Place>> {
        load_places_of_account(&mut self.conn.borrow_mut(), account_id)
    }

    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
}

impl<'a> PlaceRepo for DbReadOnly<'a> {
    fn create_place(&self, place: &Place) -> Result<()> {
        insert_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }

    fn get_place_of_account(&self, account_id: &AccountId, place_id: &PlaceId) -> Result<Place> {
        load_place_of_account(&mut self.conn.borrow_mut(), account_id, place_id)
    }
    fn places_of_account(&self, account_id: &AccountId) -> Result<Vec<Place>> {
        load_places_of_account(&mut self.conn.borrow_mut(), account_id)
    }

    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
}
