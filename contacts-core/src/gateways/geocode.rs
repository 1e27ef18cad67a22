use contacts_entities::address::Address;

pub trait GeoCodingGateway {
    /// Resolve the (latitude, longitude) of an address in degrees.
    ///
    /// Returns `None` if the address could not be resolved
    /// for whatever reason.
    fn resolve_address_lat_lng(&self, addr: &Address) -> Option<(f64, f64)>;
}
