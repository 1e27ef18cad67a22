use crate::config;
use contacts_gateways::location_iq::LocationIq;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Option<LocationIq> {
    match &cfg.gateway {
        Some(config::GeocodingGateway::LocationIq { api_key, base_url }) => {
            let gw = match base_url {
                Some(url) => LocationIq::with_api_url(api_key.clone(), url.clone()),
                None => LocationIq::new(api_key.clone()),
            };
            log::info!("Use LocationIQ geocoding gateway: {gw:?}");
            Some(gw)
        }
        None => {
            log::info!("No geocoding gateway available");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_gateway_if_geolocation_is_disabled() {
        let cfg = config::Geocoding { gateway: None };
        assert!(geocoding_gateway(&cfg).is_none());
    }

    #[test]
    fn location_iq_gateway() {
        let cfg = config::Geocoding {
            gateway: Some(config::GeocodingGateway::LocationIq {
                api_key: "secret".into(),
                base_url: None,
            }),
        };
        assert!(geocoding_gateway(&cfg).is_some());
    }
}
