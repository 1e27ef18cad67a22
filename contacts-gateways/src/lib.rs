pub mod location_iq;
